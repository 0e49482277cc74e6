use serde::Deserialize;
use serde_json::Value;

use engine_logging::{engine_debug, engine_info};

use crate::fetch::map_reqwest_error;
use crate::{FailureKind, FetchError, FetchSettings};

pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Company rows live in the `data` tab; row 1 is the header.
pub const DEFAULT_RANGE: &str = "data!A2:D";

/// Read-only access to rows of one spreadsheet range.
#[async_trait::async_trait]
pub trait SheetSource: Send + Sync {
    /// Returns every data row in the configured range, each cell as text.
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, FetchError>;
}

/// Which range of which spreadsheet to read, and how to authenticate.
#[derive(Debug, Clone)]
pub struct SheetsSettings {
    pub api_base: String,
    pub spreadsheet_id: Option<String>,
    pub range: String,
    /// OAuth bearer token with the `spreadsheets.readonly` scope.
    pub access_token: Option<String>,
    pub fetch: FetchSettings,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_SHEETS_API_BASE.to_string(),
            spreadsheet_id: None,
            range: DEFAULT_RANGE.to_string(),
            access_token: None,
            fetch: FetchSettings::default(),
        }
    }
}

/// `spreadsheets.values.get` response. `values` is omitted for an empty range.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Clone)]
pub struct SheetsClient {
    settings: SheetsSettings,
}

impl SheetsClient {
    pub fn new(settings: SheetsSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SheetsSettings {
        &self.settings
    }

    fn values_url(&self) -> Result<reqwest::Url, FetchError> {
        let spreadsheet_id = self
            .settings
            .spreadsheet_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| FetchError::new(FailureKind::NotConfigured, "spreadsheet id missing"))?;

        let mut url = reqwest::Url::parse(&self.settings.api_base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "api base cannot hold a path"))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                spreadsheet_id,
                "values",
                self.settings.range.as_str(),
            ]);
        url.query_pairs_mut().append_pair("majorDimension", "ROWS");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SheetSource for SheetsClient {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, FetchError> {
        let url = self.values_url()?;
        let client = self.settings.fetch.build_client()?;

        engine_debug!("Sheets request range={} url={}", self.settings.range, url);
        let mut request = client.get(url);
        if let Some(token) = self.settings.access_token.as_deref() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.settings.fetch.read_body(response).await?;
        let range: ValueRange = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

        let rows: Vec<Vec<String>> = range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();
        engine_info!("Sheets returned {} rows for {}", rows.len(), self.settings.range);
        Ok(rows)
    }
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
