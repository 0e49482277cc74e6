//! Summarizer core: pure view state machine, sample data and view-model helpers.
mod company;
mod effect;
mod msg;
mod sample;
mod state;
mod update;
mod view_model;

pub use company::{CompanyRecord, CompanyStatus};
pub use effect::Effect;
pub use msg::Msg;
pub use sample::{canned_summary, sample_companies};
pub use state::{AppState, LoadState, ProcessingState, ViewVariant, DEFAULT_STEP_DELAY};
pub use update::update;
pub use view_model::{
    AppViewModel, CompanyRowView, StatusCounts, StatusIcon, SUMMARY_PLACEHOLDER,
};
