#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view was opened for the first time.
    Mounted,
    /// User clicked Refresh on the live view.
    RefreshClicked,
    /// Data provider answered with a list (possibly empty).
    CompaniesLoaded(Vec<crate::CompanyRecord>),
    /// Data provider could not be reached or answered with a failure.
    FetchFailed(String),
    /// User clicked Run on the sample view.
    RunClicked,
    /// The fixed delay for the given index has elapsed.
    StepElapsed { index: usize },
    /// User asked for the pristine sample list back.
    ResetSample,
}
