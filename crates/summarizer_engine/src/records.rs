use summarizer_core::{CompanyRecord, CompanyStatus};

/// Maps one sheet row positionally: name, website, source, summary.
///
/// Missing trailing cells become empty strings and extra cells are ignored.
/// The status is always `Completed`, whether or not a summary is present.
pub fn record_from_row(row: &[String]) -> CompanyRecord {
    let cell = |index: usize| row.get(index).cloned().unwrap_or_default();
    CompanyRecord {
        name: cell(0),
        website: cell(1),
        source: cell(2),
        summary: cell(3),
        status: CompanyStatus::Completed,
    }
}

/// Maps every row in source order.
pub fn records_from_rows(rows: &[Vec<String>]) -> Vec<CompanyRecord> {
    rows.iter().map(|row| record_from_row(row)).collect()
}
