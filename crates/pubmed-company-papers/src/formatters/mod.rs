//! Output formatting: CSV serialization and console tables.

pub mod csv;
pub mod table;

/// Fixed output columns, in order.
pub const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];
