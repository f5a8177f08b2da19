use std::sync::Once;

use downdeck_core::{
    update, AppState, Effect, Msg, Page, Progress, StatusSnapshot, Task, TaskPhase,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(deck_logging::initialize_for_tests);
}

fn running_snapshot() -> StatusSnapshot {
    StatusSnapshot {
        is_running: true,
        task_count: 3,
        phase: TaskPhase::from_parts(
            Some(Task::from_url("http://x")),
            Some(Progress {
                stage: "downloading".to_owned(),
                percent: 10.0,
                raw_line: "10%".to_owned(),
            }),
        ),
        config: None,
    }
}

fn issued_seq(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchStatus { seq } => Some(*seq),
            _ => None,
        })
        .expect("poll effect")
}

#[test]
fn poll_ticks_issue_monotonic_sequence_numbers() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PollTick);
    let first = issued_seq(&effects);
    let (_state, effects) = update(state, Msg::PollTick);
    let second = issued_seq(&effects);

    assert!(second > first);
}

#[test]
fn stale_poll_response_is_dropped() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PollTick);
    let stale = issued_seq(&effects);
    let (state, effects) = update(state, Msg::PollTick);
    let latest = issued_seq(&effects);

    // The older poll resolves last-but-one; its payload must not land.
    let (state, effects) = update(
        state,
        Msg::SnapshotFetched {
            seq: stale,
            snapshot: running_snapshot(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.dashboard_view().widget.is_none());
    assert_eq!(state.dashboard_view().task_count, 0);

    let (state, _) = update(
        state,
        Msg::SnapshotFetched {
            seq: latest,
            snapshot: running_snapshot(),
        },
    );
    assert!(state.dashboard_view().widget.is_some());
    assert_eq!(state.dashboard_view().task_count, 3);
}

#[test]
fn poll_failure_is_swallowed() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::PollTick);
    let seq = issued_seq(&effects);
    let _ = state.consume_dirty();
    let before = state.dashboard_view();

    let (mut state, effects) = update(state, Msg::PollFailed { seq });

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.dashboard_view(), before);
}

#[test]
fn poll_tick_is_ignored_on_the_tasks_page() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PageOpened(Page::Tasks));
    assert_eq!(effects, vec![Effect::ReloadTaskView]);

    let (_state, effects) = update(state, Msg::PollTick);
    assert!(effects.is_empty());
}

#[test]
fn reload_tick_is_ignored_on_the_dashboard() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::ReloadTick);
    assert!(effects.is_empty());
}

#[test]
fn reload_replaces_the_task_view_wholesale() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageOpened(Page::Tasks));
    assert!(state.tasks_view().reloading);

    let (state, effects) = update(
        state,
        Msg::TaskViewReloaded {
            snapshot: running_snapshot(),
        },
    );
    assert!(effects.is_empty());

    let view = state.tasks_view();
    assert!(!view.reloading);
    assert!(view.is_running);
    assert_eq!(view.task_count, 3);
    assert_eq!(view.current_url.as_deref(), Some("http://x"));
}

#[test]
fn reload_is_not_reissued_while_one_is_in_flight() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageOpened(Page::Tasks));
    let (_state, effects) = update(state, Msg::ReloadTick);

    assert!(effects.is_empty());
}

#[test]
fn failed_reload_allows_the_next_tick_to_retry() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageOpened(Page::Tasks));
    let (state, effects) = update(state, Msg::ReloadFailed);
    assert!(effects.is_empty());
    assert!(!state.tasks_view().reloading);

    let (_state, effects) = update(state, Msg::ReloadTick);
    assert_eq!(effects, vec![Effect::ReloadTaskView]);
}

#[test]
fn opening_the_dashboard_polls_immediately() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageOpened(Page::Tasks));
    let (state, effects) = update(state, Msg::PageOpened(Page::Dashboard));

    assert_eq!(state.page(), Page::Dashboard);
    let _ = issued_seq(&effects);
}
