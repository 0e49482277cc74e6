use crate::{AppState, Effect, Msg, ViewVariant};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted | Msg::RefreshClicked => {
            // One fetch at a time; a second click while waiting is swallowed.
            if state.variant() != ViewVariant::Live || state.is_fetch_in_flight() {
                return (state, Vec::new());
            }
            state.begin_fetch();
            vec![Effect::FetchCompanies]
        }
        Msg::CompaniesLoaded(companies) => {
            if state.is_fetch_in_flight() {
                state.finish_fetch(companies);
            }
            Vec::new()
        }
        Msg::FetchFailed(reason) => {
            if state.is_fetch_in_flight() {
                state.fail_fetch(reason);
            }
            Vec::new()
        }
        Msg::RunClicked => {
            if state.variant() != ViewVariant::Sample || state.processing().running {
                return (state, Vec::new());
            }
            match state.start_run() {
                Some(index) => vec![Effect::ScheduleStep {
                    index,
                    delay: state.step_delay(),
                }],
                None => Vec::new(),
            }
        }
        Msg::StepElapsed { index } => {
            let processing = state.processing();
            if !processing.running || processing.current != Some(index) {
                return (state, Vec::new());
            }
            match state.complete_step(index) {
                Some(next) => vec![Effect::ScheduleStep {
                    index: next,
                    delay: state.step_delay(),
                }],
                None => Vec::new(),
            }
        }
        Msg::ResetSample => {
            if state.variant() == ViewVariant::Sample && !state.processing().running {
                state.reset_sample();
            }
            Vec::new()
        }
    };

    (state, effects)
}
