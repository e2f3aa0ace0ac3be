use crate::models::{GlossaryEntry, GlossaryLookup};

/// Partial-match lookups return at most this many entries.
pub const MAX_PARTIAL_MATCHES: usize = 5;

const FINANCE_TERMS: &[(&str, &str)] = &[
    ("Balance Sheet", "बैलेंस शीट / Bilan / Balance general - A financial statement showing assets, liabilities, and equity"),
    ("Net Profit", "शुद्ध लाभ / Bénéfice net / Utilidad neta - Revenue minus all expenses and taxes"),
    ("Assets", "परिसंपत्तियाँ / Actifs / Activos - Resources owned by a business with economic value"),
    ("Liabilities", "देनदारियाँ / Passifs / Pasivos - Financial obligations or debts owed"),
    ("Revenue", "राजस्व / Chiffre d'affaires / Ingresos - Total income generated from business operations"),
    ("Depreciation", "मूल्यह्रास / Amortissement / Depreciación - Decrease in asset value over time"),
    ("Dividend", "लाभांश / Dividende / Dividendo - Payment made to shareholders from profits"),
    ("Cash Flow", "नकदी प्रवाह / Flux de trésorerie / Flujo de efectivo - Movement of money in and out of business"),
    ("ROI", "निवेश प्रतिफल / Retour sur investissement / Retorno de inversión - Return on Investment percentage"),
    ("IPO", "प्रारंभिक सार्वजनिक निर्गम / Offre publique initiale / Oferta pública inicial - Initial Public Offering"),
    ("Capital Gains", "पूंजी लाभ / Gains en capital / Ganancias de capital - Profit from selling an asset"),
    ("Equity", "स्वामित्व पूंजी / Capital-actions / Capital accionario - Ownership value in a company"),
    ("Debt", "ऋण / Dette / Deuda - Money owed to creditors"),
    ("Portfolio", "निवेश पोर्टफोलियो / Portefeuille / Portafolio - Collection of investments"),
    ("Mutual Fund", "म्यूचुअल फंड / Fonds commun / Fondo mutuo - Pooled investment vehicle"),
    ("Bond", "बांड / Obligation / Bono - Fixed-income debt security"),
    ("Stock", "शेयर / Action / Acción - Share of ownership in a company"),
    ("Interest Rate", "ब्याज दर / Taux d'intérêt / Tasa de interés - Cost of borrowing money"),
    ("Inflation", "मुद्रास्फीति / Inflation / Inflación - Rate of price increase over time"),
    ("GDP", "सकल घरेलू उत्पाद / PIB / PIB - Gross Domestic Product"),
    ("Market Cap", "बाजार पूंजीकरण / Capitalisation boursière / Capitalización bursátil - Total market value of shares"),
    ("Bull Market", "तेजी बाजार / Marché haussier / Mercado alcista - Rising market trend"),
    ("Bear Market", "मंदी बाजार / Marché baissier / Mercado bajista - Falling market trend"),
    ("Hedge Fund", "हेज फंड / Fonds spéculatif / Fondo de cobertura - Alternative investment fund"),
    ("Credit Rating", "ऋण रेटिंग / Notation de crédit / Calificación crediticia - Assessment of creditworthiness"),
];

const POPULAR_TERMS: &[&str] = &[
    "Balance Sheet",
    "Cash Flow",
    "ROI",
    "IPO",
    "Dividend",
    "Capital Gains",
    "Market Cap",
    "Interest Rate",
];

fn entry(term: &'static str, raw: &'static str) -> GlossaryEntry {
    // "names / ... - definition"; the first " - " separates them
    let (names, definition) = raw.split_once(" - ").unwrap_or(("", raw));
    GlossaryEntry {
        term,
        translations: names
            .split(" / ")
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect(),
        definition: definition.trim(),
        raw,
    }
}

pub fn term_count() -> usize {
    FINANCE_TERMS.len()
}

/// Every glossary entry in table order
pub fn all_terms() -> Vec<GlossaryEntry> {
    FINANCE_TERMS
        .iter()
        .map(|&(term, raw)| entry(term, raw))
        .collect()
}

/// Exact, case-sensitive lookup of a single term
pub fn find(term: &str) -> Option<GlossaryEntry> {
    FINANCE_TERMS
        .iter()
        .find(|(t, _)| *t == term)
        .map(|&(t, raw)| entry(t, raw))
}

/// Exact match first, then a case-insensitive substring match over term names.
pub fn lookup(query: &str) -> GlossaryLookup {
    let query = query.trim();

    if let Some(found) = find(query) {
        return GlossaryLookup {
            query: query.to_string(),
            exact: true,
            matches: vec![found],
            total_matches: 1,
        };
    }

    let needle = query.to_lowercase();
    let matches: Vec<GlossaryEntry> = FINANCE_TERMS
        .iter()
        .filter(|(term, _)| term.to_lowercase().contains(&needle))
        .map(|&(term, raw)| entry(term, raw))
        .collect();
    let total_matches = matches.len();

    GlossaryLookup {
        query: query.to_string(),
        exact: false,
        matches: matches.into_iter().take(MAX_PARTIAL_MATCHES).collect(),
        total_matches,
    }
}

pub fn popular_terms() -> Vec<GlossaryEntry> {
    POPULAR_TERMS.iter().filter_map(|term| find(term)).collect()
}
