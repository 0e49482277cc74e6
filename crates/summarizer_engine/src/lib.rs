//! Summarizer engine: spreadsheet access and the companies endpoint client.
mod companies;
mod fetch;
mod records;
mod sheets;
mod types;

pub use companies::{decode_company_list, CompaniesClient, CompanySource};
pub use fetch::FetchSettings;
pub use records::{record_from_row, records_from_rows};
pub use sheets::{SheetSource, SheetsClient, SheetsSettings, DEFAULT_RANGE, DEFAULT_SHEETS_API_BASE};
pub use types::{FailureKind, FetchError};
