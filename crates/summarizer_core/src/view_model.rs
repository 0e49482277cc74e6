use serde::Serialize;

use crate::{CompanyRecord, CompanyStatus, LoadState, ViewVariant};

/// Text shown in the summary cell when no summary exists yet.
pub const SUMMARY_PLACEHOLDER: &str = "No summary available yet.";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AppViewModel {
    pub variant: ViewVariant,
    pub load_state: LoadState,
    pub loading: bool,
    pub error: bool,
    pub error_message: Option<String>,
    pub counts: StatusCounts,
    /// Empty unless the list is loaded.
    pub rows: Vec<CompanyRowView>,
    pub is_running: bool,
    pub current_index: Option<usize>,
    pub dirty: bool,
}

/// Dashboard counters, always recomputed from the displayed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub processing: usize,
    pub pending: usize,
}

impl StatusCounts {
    pub fn from_records(records: &[CompanyRecord]) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut counts, record| {
                match record.status {
                    CompanyStatus::Completed => counts.completed += 1,
                    CompanyStatus::Processing => counts.processing += 1,
                    CompanyStatus::Pending => counts.pending += 1,
                }
                counts
            },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIcon {
    Check,
    Spinner,
    Idle,
}

impl From<CompanyStatus> for StatusIcon {
    fn from(status: CompanyStatus) -> Self {
        match status {
            CompanyStatus::Completed => StatusIcon::Check,
            CompanyStatus::Processing => StatusIcon::Spinner,
            CompanyStatus::Pending => StatusIcon::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRowView {
    pub index: usize,
    pub name: String,
    pub website: String,
    /// Only set for absolute http(s) URLs, so the page never links to anything else.
    pub website_href: Option<String>,
    pub source: String,
    /// Summary text, or `SUMMARY_PLACEHOLDER` when the record has none.
    pub summary: String,
    pub has_summary: bool,
    pub status: CompanyStatus,
    pub icon: StatusIcon,
    pub is_current: bool,
}

impl CompanyRowView {
    pub(crate) fn from_record(index: usize, record: &CompanyRecord, is_current: bool) -> Self {
        let has_summary = !record.summary.trim().is_empty();
        Self {
            index,
            name: record.name.clone(),
            website: record.website.clone(),
            website_href: link_target(&record.website),
            source: record.source.clone(),
            summary: if has_summary {
                record.summary.clone()
            } else {
                SUMMARY_PLACEHOLDER.to_string()
            },
            has_summary,
            status: record.status,
            icon: record.status.into(),
            is_current,
        }
    }
}

fn link_target(website: &str) -> Option<String> {
    let trimmed = website.trim();
    let parsed = url::Url::parse(trimmed).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| trimmed.to_string())
}
