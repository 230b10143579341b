//! Transient record shapes extracted from efetch XML.
//!
//! These hold one batch's worth of raw bibliographic data between the XML
//! walk and the affiliation filter; they are not retained afterwards.

/// One `<PubmedArticle>` as extracted from an efetch payload.
#[derive(Debug, Clone, Default)]
pub struct RawArticle {
    /// PubMed ID (records without one are dropped).
    pub pmid: Option<String>,

    /// Article title (empty string if absent).
    pub title: String,

    /// Raw `<PubDate>` year text.
    pub pub_year: String,

    /// Raw `<PubDate>` month text (numeric or a month name).
    pub pub_month: String,

    /// Raw `<PubDate>` day text.
    pub pub_day: String,

    /// Authors in document order.
    pub authors: Vec<RawAuthor>,
}

/// One `<Author>` entry with its affiliation blocks.
#[derive(Debug, Clone, Default)]
pub struct RawAuthor {
    /// `<LastName>` text.
    pub last_name: String,

    /// `<ForeName>` text.
    pub fore_name: String,

    /// All `<Affiliation>` text blocks, in document order.
    pub affiliations: Vec<String>,

    /// Text of `<ELocationID EIdType="email">` elements.
    pub email_ids: Vec<String>,
}

impl RawAuthor {
    /// Display name as `"LastName, ForeName"`, trimmed of stray separators
    /// when either part is missing.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.fore_name)
            .trim_matches([',', ' '])
            .to_string()
    }
}
