use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the data provider for the current company list.
    FetchCompanies,
    /// Wake the routine up with `Msg::StepElapsed { index }` after `delay`.
    ScheduleStep { index: usize, delay: Duration },
}
