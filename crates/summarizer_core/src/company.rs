use serde::{Deserialize, Deserializer, Serialize};

/// Processing state of a single company row.
///
/// Status strings other than the three known ones decode as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Processing,
    Completed,
    #[default]
    #[serde(other)]
    Pending,
}

/// One company entry as shown in the results table.
///
/// `summary` is empty until a summary has been produced for the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub website: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub source: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable_status")]
    pub status: CompanyStatus,
}

impl CompanyRecord {
    /// A record that has not been summarized yet.
    pub fn pending(
        name: impl Into<String>,
        website: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
            source: source.into(),
            summary: String::new(),
            status: CompanyStatus::Pending,
        }
    }

    /// Marks the record completed with the given summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self.status = CompanyStatus::Completed;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == CompanyStatus::Completed
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn nullable_status<'de, D>(deserializer: D) -> Result<CompanyStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<CompanyStatus>::deserialize(deserializer).map(Option::unwrap_or_default)
}
