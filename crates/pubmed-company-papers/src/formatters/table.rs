//! Console table rendering.

use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use crate::models::CompanyPaper;

use super::COLUMNS;

/// Render papers as a console table.
///
/// Empty input still produces a table carrying the fixed header set.
#[must_use]
pub fn render(papers: &[CompanyPaper]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(
            COLUMNS.iter().map(|column| Cell::new(column).fg(Color::Cyan)).collect::<Vec<_>>(),
        );

    for paper in papers {
        table.add_row(vec![
            Cell::new(&paper.pubmed_id),
            Cell::new(&paper.title),
            Cell::new(&paper.publication_date),
            Cell::new(paper.authors_joined()),
            Cell::new(paper.companies_joined()),
            Cell::new(paper.email_or_empty()),
        ]);
    }

    table
}
