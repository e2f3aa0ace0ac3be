//! Local lexicon-based sentiment heuristic.
//!
//! Polarity is the mean score of the polar words found in the text, with
//! intensifiers scaling the next polar word and negators flipping (and
//! damping) polar words shortly after them. No network access, never fails.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Polar words and their scores in [-1.0, 1.0].
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("excellent", 1.0),
    ("outstanding", 0.9),
    ("superb", 0.9),
    ("exceptional", 0.85),
    ("best", 1.0),
    ("perfect", 1.0),
    ("amazing", 0.6),
    ("great", 0.8),
    ("impressive", 0.8),
    ("brilliant", 0.9),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("good", 0.7),
    ("better", 0.5),
    ("positive", 0.23),
    ("strong", 0.43),
    ("stronger", 0.5),
    ("robust", 0.5),
    ("solid", 0.4),
    ("healthy", 0.5),
    ("stable", 0.3),
    ("profitable", 0.6),
    ("successful", 0.75),
    ("bullish", 0.5),
    ("optimistic", 0.5),
    ("promising", 0.5),
    ("favorable", 0.5),
    ("attractive", 0.6),
    ("valuable", 0.45),
    ("useful", 0.3),
    ("helpful", 0.4),
    ("clear", 0.1),
    ("insightful", 0.6),
    ("informative", 0.5),
    ("smart", 0.21),
    ("wise", 0.7),
    ("safe", 0.5),
    ("secure", 0.4),
    ("resilient", 0.5),
    ("happy", 0.8),
    ("glad", 0.5),
    ("nice", 0.6),
    ("easy", 0.43),
    ("high", 0.16),
    ("higher", 0.25),
    ("rising", 0.3),
    ("gain", 0.4),
    ("gains", 0.4),
    ("growth", 0.4),
    ("growing", 0.3),
    ("improved", 0.5),
    ("improving", 0.4),
    ("record", 0.2),
    ("win", 0.8),
    ("benefit", 0.4),
    ("opportunity", 0.4),
    ("recovery", 0.3),
    ("rally", 0.4),
    ("boost", 0.4),
    ("surge", 0.4),
    ("outperform", 0.5),
    ("upside", 0.4),
    // negative
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("disastrous", -0.9),
    ("catastrophic", -0.9),
    ("bad", -0.7),
    ("worse", -0.4),
    ("poor", -0.4),
    ("weak", -0.38),
    ("weaker", -0.5),
    ("negative", -0.3),
    ("bearish", -0.5),
    ("pessimistic", -0.5),
    ("risky", -0.4),
    ("dangerous", -0.6),
    ("volatile", -0.3),
    ("uncertain", -0.2),
    ("unstable", -0.4),
    ("unprofitable", -0.6),
    ("worthless", -0.8),
    ("useless", -0.5),
    ("wrong", -0.5),
    ("confusing", -0.3),
    ("misleading", -0.5),
    ("sad", -0.5),
    ("angry", -0.5),
    ("worried", -0.4),
    ("fear", -0.5),
    ("panic", -0.6),
    ("crisis", -0.6),
    ("crash", -0.7),
    ("collapse", -0.7),
    ("loss", -0.4),
    ("losses", -0.4),
    ("losing", -0.4),
    ("decline", -0.3),
    ("declining", -0.3),
    ("falling", -0.3),
    ("low", -0.1),
    ("lower", -0.2),
    ("debt", -0.2),
    ("default", -0.5),
    ("bankrupt", -0.8),
    ("bankruptcy", -0.8),
    ("fraud", -0.8),
    ("scam", -0.8),
    ("recession", -0.6),
    ("downturn", -0.5),
    ("slump", -0.5),
    ("plunge", -0.6),
    ("downside", -0.4),
    ("underperform", -0.5),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
];

/// Multipliers applied to the polar word that immediately follows.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("highly", 1.4),
    ("incredibly", 1.5),
    ("truly", 1.2),
    ("so", 1.2),
    ("quite", 1.1),
    ("most", 1.2),
    ("too", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("fairly", 0.8),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "hardly", "barely", "without",
    "cannot",
];

/// Polar words reached within this many tokens after a negator are flipped.
const NEGATION_WINDOW: usize = 3;

/// Multiplier applied to a negated polar word.
const NEGATION_FACTOR: f64 = -0.5;

fn lexicon() -> &'static HashMap<&'static str, f64> {
    static LEXICON_MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    LEXICON_MAP.get_or_init(|| LEXICON.iter().copied().collect())
}

fn intensifier(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, factor)| *factor)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn tokens(text: &str) -> Vec<String> {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    let re = TOKEN_RE.get_or_init(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").unwrap());
    let lower = text.to_lowercase().replace('’', "'");
    re.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Polarity of `text` in [-1.0, 1.0]; 0.0 when no polar word is found.
pub fn polarity(text: &str) -> f64 {
    let lexicon = lexicon();
    let mut scores = Vec::new();
    let mut multiplier = 1.0;
    let mut negation_left = 0usize;

    for token in tokens(text) {
        if is_negator(&token) {
            negation_left = NEGATION_WINDOW;
            multiplier = 1.0;
            continue;
        }

        if let Some(factor) = intensifier(&token) {
            multiplier *= factor;
            continue;
        }

        if let Some(&score) = lexicon.get(token.as_str()) {
            let mut value = score * multiplier;
            if negation_left > 0 {
                value *= NEGATION_FACTOR;
                negation_left = 0;
            }
            scores.push(value.clamp(-1.0, 1.0));
        } else {
            negation_left = negation_left.saturating_sub(1);
        }
        multiplier = 1.0;
    }

    if scores.is_empty() {
        return 0.0;
    }

    (scores.iter().sum::<f64>() / scores.len() as f64).clamp(-1.0, 1.0)
}

/// Maps polarity onto the 1-5 scale with left-closed bands.
pub fn score_from_polarity(polarity: f64) -> u8 {
    if polarity <= -0.6 {
        1
    } else if polarity <= -0.2 {
        2
    } else if polarity <= 0.2 {
        3
    } else if polarity <= 0.6 {
        4
    } else {
        5
    }
}

#[allow(dead_code)]
pub fn score(text: &str) -> u8 {
    score_from_polarity(polarity(text))
}
