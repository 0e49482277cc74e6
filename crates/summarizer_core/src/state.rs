use std::time::Duration;

use serde::Serialize;

use crate::view_model::{AppViewModel, CompanyRowView, StatusCounts};
use crate::{canned_summary, sample_companies, CompanyRecord, CompanyStatus};

/// Delay applied to every record by the simulated routine unless configured otherwise.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(2);

/// Which data the view works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewVariant {
    /// Rows come from the data provider.
    #[default]
    Live,
    /// Rows come from the built-in sample set and can be "processed".
    Sample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Error,
}

/// Progress of the simulated processing routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessingState {
    pub running: bool,
    pub current: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    variant: ViewVariant,
    load: LoadState,
    companies: Vec<CompanyRecord>,
    fetch_in_flight: bool,
    last_error: Option<String>,
    processing: ProcessingState,
    step_delay: Duration,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Live view: starts in `Loading` with no rows until the first fetch answers.
    pub fn new() -> Self {
        Self {
            variant: ViewVariant::Live,
            load: LoadState::Loading,
            companies: Vec::new(),
            fetch_in_flight: false,
            last_error: None,
            processing: ProcessingState::default(),
            step_delay: DEFAULT_STEP_DELAY,
            dirty: false,
        }
    }

    /// Sample view over the built-in data set.
    pub fn sample(step_delay: Duration) -> Self {
        Self::with_companies(sample_companies(), step_delay)
    }

    /// Sample view over an arbitrary in-memory list.
    pub fn with_companies(companies: Vec<CompanyRecord>, step_delay: Duration) -> Self {
        Self {
            variant: ViewVariant::Sample,
            load: LoadState::Loaded,
            companies,
            step_delay,
            ..Self::new()
        }
    }

    /// Counts and rows are built from the same slice, which is empty unless loaded.
    pub fn view(&self) -> AppViewModel {
        let shown: &[CompanyRecord] = if self.load == LoadState::Loaded {
            &self.companies
        } else {
            &[]
        };
        let rows = shown
            .iter()
            .enumerate()
            .map(|(index, record)| {
                CompanyRowView::from_record(index, record, self.processing.current == Some(index))
            })
            .collect();

        AppViewModel {
            variant: self.variant,
            load_state: self.load,
            loading: self.load == LoadState::Loading,
            error: self.load == LoadState::Error,
            error_message: self.last_error.clone(),
            counts: StatusCounts::from_records(shown),
            rows,
            is_running: self.processing.running,
            current_index: self.processing.current,
            dirty: self.dirty,
        }
    }

    pub fn variant(&self) -> ViewVariant {
        self.variant
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn companies(&self) -> &[CompanyRecord] {
        &self.companies
    }

    pub fn processing(&self) -> ProcessingState {
        self.processing
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    pub fn is_fetch_in_flight(&self) -> bool {
        self.fetch_in_flight
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.load = LoadState::Loading;
        self.fetch_in_flight = true;
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn finish_fetch(&mut self, companies: Vec<CompanyRecord>) {
        self.load = LoadState::Loaded;
        self.fetch_in_flight = false;
        self.companies = companies;
        self.mark_dirty();
    }

    /// Drops any previous rows so the table never shows stale data next to an error.
    pub(crate) fn fail_fetch(&mut self, reason: String) {
        self.load = LoadState::Error;
        self.fetch_in_flight = false;
        self.last_error = Some(reason);
        self.companies.clear();
        self.mark_dirty();
    }

    /// Returns the first index to process, or `None` when there is nothing to walk.
    pub(crate) fn start_run(&mut self) -> Option<usize> {
        if self.companies.is_empty() {
            return None;
        }
        self.processing = ProcessingState {
            running: true,
            current: Some(0),
        };
        self.mark_dirty();
        Some(0)
    }

    /// Applies the canned summary at `index` unless the record is already completed,
    /// then advances. Returns the next index, or `None` once the run has finished.
    pub(crate) fn complete_step(&mut self, index: usize) -> Option<usize> {
        if let Some(record) = self.companies.get_mut(index) {
            if record.status != CompanyStatus::Completed {
                record.status = CompanyStatus::Completed;
                record.summary = canned_summary(index).to_string();
            }
        }

        let next = index + 1;
        if next < self.companies.len() {
            self.processing.current = Some(next);
        } else {
            self.processing = ProcessingState::default();
        }
        self.mark_dirty();
        self.processing.current
    }

    pub(crate) fn reset_sample(&mut self) {
        self.companies = sample_companies();
        self.load = LoadState::Loaded;
        self.mark_dirty();
    }
}
