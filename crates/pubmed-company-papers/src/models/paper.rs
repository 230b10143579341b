//! Qualifying paper model.

use serde::Serialize;

/// A paper retained because at least one author's affiliation classified as
/// a pharmaceutical or biotech company.
///
/// Invariant: `non_academic_authors` is non-empty — that is the inclusion
/// condition applied by the parser. Instances are immutable after parsing.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyPaper {
    /// PubMed ID.
    pub pubmed_id: String,

    /// Article title (empty string if absent upstream).
    pub title: String,

    /// Publication date as `YYYY-MM-DD`, or empty if the record had no year.
    pub publication_date: String,

    /// Display names of company-affiliated authors, in author order.
    pub non_academic_authors: Vec<String>,

    /// Extracted company names, de-duplicated in insertion order.
    pub company_affiliations: Vec<String>,

    /// Corresponding-author email, if one was found in the record.
    pub corresponding_email: Option<String>,
}

impl CompanyPaper {
    /// Non-academic author names joined with `"; "`.
    #[must_use]
    pub fn authors_joined(&self) -> String {
        self.non_academic_authors.join("; ")
    }

    /// Company names joined with `"; "` in insertion order.
    #[must_use]
    pub fn companies_joined(&self) -> String {
        self.company_affiliations.join("; ")
    }

    /// Corresponding email, defaulting to the empty string.
    #[must_use]
    pub fn email_or_empty(&self) -> &str {
        self.corresponding_email.as_deref().unwrap_or("")
    }
}
