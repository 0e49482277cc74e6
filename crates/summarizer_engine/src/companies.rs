use summarizer_core::CompanyRecord;

use engine_logging::{engine_info, engine_warn};

use crate::fetch::map_reqwest_error;
use crate::{FailureKind, FetchError, FetchSettings};

/// Something the view can ask for the current company list.
#[async_trait::async_trait]
pub trait CompanySource: Send + Sync {
    async fn fetch_companies(&self) -> Result<Vec<CompanyRecord>, FetchError>;
}

/// Client for the `GET /api/companies` read endpoint.
///
/// Non-success statuses and transport failures are errors. A success whose
/// body is not a list is downgraded to an empty list.
#[derive(Debug, Clone)]
pub struct CompaniesClient {
    url: String,
    settings: FetchSettings,
}

impl CompaniesClient {
    pub fn new(url: impl Into<String>, settings: FetchSettings) -> Self {
        Self {
            url: url.into(),
            settings,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl CompanySource for CompaniesClient {
    async fn fetch_companies(&self) -> Result<Vec<CompanyRecord>, FetchError> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.settings.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = self.settings.read_body(response).await.unwrap_or_default();
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                upstream_message(&body).unwrap_or_else(|| status.to_string()),
            ));
        }

        let body = self.settings.read_body(response).await?;
        match decode_company_list(&body) {
            Ok(companies) => {
                engine_info!("Fetched {} companies from {}", companies.len(), self.url);
                Ok(companies)
            }
            Err(err) => {
                engine_warn!("Malformed companies payload from {}: {}", self.url, err);
                Ok(Vec::new())
            }
        }
    }
}

/// Decodes a JSON array of records. A body that is not an array is an error;
/// elements that do not decode as a record are logged and skipped.
pub fn decode_company_list(body: &[u8]) -> Result<Vec<CompanyRecord>, serde_json::Error> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                engine_warn!("Skipping company at index {}: {}", index, err);
                None
            }
        })
        .collect())
}

/// Pulls `error` out of a `{"error": "..."}` failure body.
fn upstream_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("error")?.as_str().map(ToOwned::to_owned)
}
