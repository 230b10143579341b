//! PubMed Company Papers
//!
//! Queries the NCBI E-utilities API and filters the results down to papers
//! with at least one author affiliated with a pharmaceutical or biotech
//! company, producing a tabular report (console table or CSV file).
//!
//! # Pipeline
//!
//! - **Search client**: paginated esearch ID lookup + chunked efetch
//! - **Parser**: streaming XML extraction + affiliation classification
//! - **Fetch controller**: adapts request sizes to the observed filter yield
//! - **Formatters**: CSV and console-table output
//!
//! # Example
//!
//! ```no_run
//! use pubmed_company_papers::{Config, EntrezClient, fetch};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EntrezClient::new(Config::from_env()?)?;
//!     let papers = fetch::run(&client, "cancer immunotherapy", 25).await?;
//!     println!("{}", pubmed_company_papers::formatters::table::render(&papers));
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod models;
pub mod parser;

pub use client::EntrezClient;
pub use config::Config;
pub use error::{ClientError, FetchError};
pub use models::CompanyPaper;
