use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    /// Hindi / French / Spanish names, in that order.
    pub translations: Vec<&'static str>,
    pub definition: &'static str,
    pub raw: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GlossaryLookup {
    pub query: String,
    pub exact: bool,
    pub matches: Vec<GlossaryEntry>,
    pub total_matches: usize,
}

impl GlossaryLookup {
    pub fn truncated(&self) -> bool {
        self.total_matches > self.matches.len()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlossaryQuery {
    pub q: Option<String>,
}
