//! CSV serialization of qualifying papers.

use std::path::Path;

use crate::models::CompanyPaper;

use super::COLUMNS;

/// Serialize papers as CSV with the fixed header row.
///
/// Empty input still yields the header row. No index column is written.
pub fn to_csv(papers: &[CompanyPaper]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for paper in papers {
        writer.write_record([
            paper.pubmed_id.as_str(),
            paper.title.as_str(),
            paper.publication_date.as_str(),
            &paper.authors_joined(),
            &paper.companies_joined(),
            paper.email_or_empty(),
        ])?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Write papers to a CSV file at `path`.
pub fn write_file(papers: &[CompanyPaper], path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, to_csv(papers)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str, title: &str) -> CompanyPaper {
        CompanyPaper {
            pubmed_id: id.to_string(),
            title: title.to_string(),
            publication_date: "2024-01-15".to_string(),
            non_academic_authors: vec!["Doe, Jane".to_string()],
            company_affiliations: vec!["Genentech".to_string()],
            corresponding_email: Some("jane@gene.com".to_string()),
        }
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let output = to_csv(&[]).unwrap();
        assert_eq!(
            output.trim_end(),
            "PubmedID,Title,Publication Date,Non-academic Author(s),\
             Company Affiliation(s),Corresponding Author Email"
        );
    }

    #[test]
    fn test_rows_follow_column_order() {
        let output = to_csv(&[paper("123", "A study")]).unwrap();
        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("PubmedID,"));
        assert_eq!(
            lines.next().unwrap(),
            "123,A study,2024-01-15,\"Doe, Jane\",Genentech,jane@gene.com"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let output = to_csv(&[paper("9", "Outcomes, benefits, and risks")]).unwrap();
        assert!(output.contains("\"Outcomes, benefits, and risks\""));
    }
}
