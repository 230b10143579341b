//! Data models for PubMed records and filtered results.

mod article;
mod paper;

pub use article::{RawArticle, RawAuthor};
pub use paper::CompanyPaper;
