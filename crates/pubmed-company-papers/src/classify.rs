//! Affiliation classification heuristics.
//!
//! Decides whether a free-text affiliation belongs to a pharmaceutical or
//! biotech company (as opposed to an academic institution), and extracts a
//! company name and any embedded email. Keyword matching is plain substring
//! containment on the lowercased text; academic markers take precedence and
//! short-circuit.

use std::sync::LazyLock;

use regex::Regex;

/// Substrings indicating an academic institution.
const ACADEMIC_MARKERS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "academy",
    "facultad",
    "universität",
    "université",
    "università",
    "universitat",
    "academia",
    "medical center",
    "hospital",
    "clinic",
    "medical school",
    "faculty",
    "department",
];

/// Substrings indicating a pharmaceutical or biotech company.
const COMPANY_MARKERS: &[&str] = &[
    "pharma",
    "therapeutics",
    "biotech",
    "bioscience",
    "biopharma",
    "laboratories",
    "labs",
    "inc",
    "llc",
    "ltd",
    "limited",
    "corp",
    "plc",
    "gmbh",
    "co",
    "ag",
    "biomed",
    "genomics",
    "pharmaceuticals",
];

// "<name> <corporate-suffix>" with an optional trailing period
static COMPANY_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9\s\-]+)(?:\s+(?:Inc|LLC|Ltd|Limited|Corp|Corporation|GmbH|AG|Co|SA|BV|Pty)\.?)")
        .expect("valid company-name regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});

/// Determine whether an affiliation looks like a pharma/biotech company.
///
/// Academic markers win over any co-occurring company marker. Empty text is
/// never a company.
#[must_use]
pub fn is_company_affiliation(affiliation: &str) -> bool {
    if affiliation.is_empty() {
        return false;
    }

    let lower = affiliation.to_lowercase();

    if ACADEMIC_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return false;
    }

    COMPANY_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Extract a company name from an affiliation string.
///
/// Best effort: tries a "<name> <corporate-suffix>" pattern first, then falls
/// back to the text before the first comma; with no comma the input is
/// returned unchanged. The result is a heuristic, not a guaranteed correct
/// extraction.
#[must_use]
pub fn extract_company_name(affiliation: &str) -> String {
    if let Some(captures) = COMPANY_NAME_RE.captures(affiliation) {
        return captures[1].trim().to_string();
    }

    match affiliation.split_once(',') {
        Some((head, _)) => head.trim().to_string(),
        None => affiliation.to_string(),
    }
}

/// Extract the first email address embedded in free text, if any.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}
