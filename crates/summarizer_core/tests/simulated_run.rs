use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use summarizer_core::{
    canned_summary, sample_companies, update, AppState, CompanyRecord, CompanyStatus, Effect, Msg,
};

const DELAY: Duration = Duration::from_millis(10);

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

/// Feeds every scheduled step back as `StepElapsed` until no effects remain.
/// Returns the final state and the indices that were scheduled, in order.
fn drive(mut state: AppState, mut pending: Vec<Effect>) -> (AppState, Vec<usize>) {
    let mut scheduled = Vec::new();
    while let Some(effect) = pending.pop() {
        match effect {
            Effect::ScheduleStep { index, delay } => {
                assert_eq!(delay, DELAY);
                scheduled.push(index);
                let (next, effects) = update(state, Msg::StepElapsed { index });
                state = next;
                pending.extend(effects);
            }
            Effect::FetchCompanies => panic!("sample view must not fetch"),
        }
    }
    (state, scheduled)
}

#[test]
fn run_walks_every_record_in_order() {
    init_logging();
    let state = AppState::sample(DELAY);
    let len = state.companies().len();

    let (state, effects) = update(state, Msg::RunClicked);
    assert_eq!(
        effects,
        vec![Effect::ScheduleStep {
            index: 0,
            delay: DELAY
        }]
    );
    assert!(state.processing().running);
    assert_eq!(state.processing().current, Some(0));

    let (state, scheduled) = drive(state, effects);
    assert_eq!(scheduled, (0..len).collect::<Vec<_>>());
    assert!(!state.processing().running);
    assert_eq!(state.processing().current, None);

    let view = state.view();
    assert_eq!(view.counts.completed, len);
    assert!(view.rows.iter().all(|row| row.has_summary));
}

#[test]
fn second_run_click_while_running_is_noop() {
    init_logging();
    let state = AppState::sample(DELAY);
    let len = state.companies().len();

    let (state, first) = update(state, Msg::RunClicked);
    let (state, second) = update(state, Msg::RunClicked);
    assert!(second.is_empty());

    let (state, scheduled) = drive(state, first);
    assert_eq!(scheduled.len(), len);
    assert!(!state.processing().running);
}

#[test]
fn preseeded_summary_is_not_overwritten() {
    init_logging();
    let original = sample_companies();
    let apple = original[0].clone();
    assert_eq!(apple.name, "Apple Inc.");
    assert_eq!(apple.status, CompanyStatus::Completed);

    let state = AppState::sample(DELAY);
    let (state, effects) = update(state, Msg::RunClicked);
    let (state, _) = drive(state, effects);

    assert_eq!(state.companies()[0], apple);
}

#[test]
fn completed_records_still_take_their_step() {
    init_logging();
    let companies = vec![
        CompanyRecord::pending("Done Co", "https://done.test", "Test").with_summary("kept"),
        CompanyRecord::pending("Todo Co", "https://todo.test", "Test"),
    ];
    let state = AppState::with_companies(companies, DELAY);

    let (state, _) = update(state, Msg::RunClicked);
    let (state, effects) = update(state, Msg::StepElapsed { index: 0 });
    assert_eq!(
        effects,
        vec![Effect::ScheduleStep {
            index: 1,
            delay: DELAY
        }]
    );
    assert_eq!(state.companies()[0].summary, "kept");
    assert_eq!(state.companies()[1].status, CompanyStatus::Pending);
    assert_eq!(state.processing().current, Some(1));
    assert!(state.view().rows[1].is_current);

    let (state, effects) = update(state, Msg::StepElapsed { index: 1 });
    assert!(effects.is_empty());
    assert_eq!(state.companies()[1].status, CompanyStatus::Completed);
    assert_eq!(state.companies()[1].summary, canned_summary(1));
}

#[test]
fn out_of_turn_steps_are_ignored() {
    init_logging();
    let state = AppState::sample(DELAY);
    let (before, _) = update(state.clone(), Msg::StepElapsed { index: 0 });
    assert_eq!(before, state);

    let (running, _) = update(state, Msg::RunClicked);
    let (next, effects) = update(running.clone(), Msg::StepElapsed { index: 3 });
    assert!(effects.is_empty());
    assert_eq!(next, running);
}

#[test]
fn empty_list_never_starts() {
    init_logging();
    let state = AppState::with_companies(Vec::new(), DELAY);
    let (state, effects) = update(state, Msg::RunClicked);

    assert!(effects.is_empty());
    assert!(!state.processing().running);
}

#[test]
fn reset_restores_sample_only_when_idle() {
    init_logging();
    let state = AppState::sample(DELAY);
    let (state, _) = update(state, Msg::RunClicked);

    let (state, _) = update(state, Msg::StepElapsed { index: 0 });
    let (state, _) = update(state, Msg::StepElapsed { index: 1 });
    let (state, _) = update(state, Msg::StepElapsed { index: 2 });
    assert_eq!(state.companies()[2].status, CompanyStatus::Completed);

    let (state, _) = update(state, Msg::ResetSample);
    assert_eq!(state.companies()[2].status, CompanyStatus::Completed);

    let (state, _) = drive(
        state,
        vec![Effect::ScheduleStep {
            index: 3,
            delay: DELAY,
        }],
    );
    let (state, _) = update(state, Msg::ResetSample);
    assert_eq!(state.companies(), sample_companies().as_slice());
}
