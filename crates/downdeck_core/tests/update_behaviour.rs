use std::sync::Once;

use downdeck_core::{
    update, ActionKind, ActionOutcome, ActionRequest, AppState, ControlButton, Effect,
    ExecutorConfig, Msg, Notice, Progress, StatusSnapshot, Task, TaskPhase,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(deck_logging::initialize_for_tests);
}

fn idle_snapshot() -> StatusSnapshot {
    StatusSnapshot {
        is_running: false,
        task_count: 0,
        phase: TaskPhase::from_parts(None, None),
        config: None,
    }
}

fn running_snapshot(percent: f64) -> StatusSnapshot {
    StatusSnapshot {
        is_running: true,
        task_count: 1,
        phase: TaskPhase::from_parts(
            Some(Task::from_url("http://x")),
            Some(Progress {
                stage: "downloading".to_owned(),
                percent,
                raw_line: format!("{percent}% of 10MB"),
            }),
        ),
        config: None,
    }
}

/// Runs one full poll cycle: tick, then the matching response.
fn apply_snapshot(state: AppState, snapshot: StatusSnapshot) -> AppState {
    let (state, effects) = update(state, Msg::PollTick);
    let seq = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchStatus { seq } => Some(*seq),
            _ => None,
        })
        .expect("poll effect");
    let (state, effects) = update(state, Msg::SnapshotFetched { seq, snapshot });
    assert!(effects.is_empty());
    state
}

#[test]
fn idle_snapshot_shows_start_button_and_no_widget() {
    init_logging();
    let state = apply_snapshot(AppState::new(), idle_snapshot());
    let view = state.dashboard_view();

    assert!(!view.is_running);
    assert_eq!(view.current_url, None);
    assert_eq!(view.task_count, 0);
    assert!(view.widget.is_none());
    assert_eq!(
        view.buttons,
        vec![ControlButton::Start, ControlButton::ManageTasks]
    );
}

#[test]
fn running_snapshot_creates_widget_and_stop_button() {
    init_logging();
    let state = apply_snapshot(AppState::new(), running_snapshot(42.0));
    let view = state.dashboard_view();

    assert!(view.is_running);
    assert_eq!(view.current_url.as_deref(), Some("http://x"));
    assert_eq!(view.task_count, 1);
    assert_eq!(
        view.buttons,
        vec![ControlButton::Stop, ControlButton::ManageTasks]
    );

    let widget = view.widget.expect("widget created");
    assert_eq!(widget.stage, "downloading");
    assert_eq!(widget.percent_text, "42%");
    assert_eq!(widget.fill_percent, 42.0);
    assert_eq!(widget.raw_line, "42% of 10MB");
}

#[test]
fn follow_up_snapshot_updates_widget_fields() {
    init_logging();
    let state = apply_snapshot(AppState::new(), running_snapshot(42.0));
    let state = apply_snapshot(state, running_snapshot(73.0));
    let widget = state.dashboard_view().widget.expect("widget kept");

    assert_eq!(widget.percent_text, "73%");
    assert_eq!(widget.fill_percent, 73.0);
}

#[test]
fn progress_disappearing_removes_widget() {
    init_logging();
    let state = apply_snapshot(AppState::new(), running_snapshot(42.0));
    let state = apply_snapshot(state, idle_snapshot());

    assert!(state.dashboard_view().widget.is_none());
}

#[test]
fn presentation_reflects_only_the_latest_snapshot() {
    init_logging();
    let state = apply_snapshot(AppState::new(), running_snapshot(42.0));
    let state = apply_snapshot(state, idle_snapshot());

    // Nothing from the superseded snapshot may survive.
    let presentation = state.presentation();
    assert!(presentation.widget.is_none());
    assert_eq!(
        presentation.buttons,
        vec![ControlButton::Start, ControlButton::ManageTasks]
    );
}

#[test]
fn start_dispatches_even_when_already_running() {
    init_logging();
    // The executor owns idempotence; the client never skips on local state.
    let state = apply_snapshot(AppState::new(), running_snapshot(42.0));
    let (_state, effects) = update(state, Msg::StartClicked);

    assert_eq!(effects, vec![Effect::Dispatch(ActionRequest::Start)]);
}

#[test]
fn accepted_start_forces_an_immediate_repoll() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::ActionFinished {
            action: ActionKind::Start,
            outcome: ActionOutcome::Accepted,
        },
    );

    assert!(matches!(effects[..], [Effect::FetchStatus { .. }]));
}

#[test]
fn failed_stop_leaves_state_unchanged() {
    init_logging();
    let mut state = apply_snapshot(AppState::new(), running_snapshot(42.0));
    let _ = state.consume_dirty();
    let before = state.dashboard_view();
    let (mut state, effects) = update(
        state,
        Msg::ActionFinished {
            action: ActionKind::Stop,
            outcome: ActionOutcome::Failed,
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.dashboard_view(), before);
}

#[test]
fn task_submission_trims_input_and_dispatches() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::TaskInputChanged("  http://y  ".to_owned()),
    );
    let (_state, effects) = update(state, Msg::TaskSubmitted);

    assert_eq!(
        effects,
        vec![Effect::Dispatch(ActionRequest::AddTask {
            url: "http://y".to_owned(),
        })]
    );
}

#[test]
fn empty_task_submission_is_ignored() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::TaskInputChanged("   ".to_owned()));
    let (_state, effects) = update(state, Msg::TaskSubmitted);

    assert!(effects.is_empty());
}

#[test]
fn accepted_add_clears_input_notifies_and_repolls() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::TaskInputChanged("http://y".to_owned()),
    );
    let (state, _) = update(state, Msg::TaskSubmitted);
    let (state, effects) = update(
        state,
        Msg::ActionFinished {
            action: ActionKind::AddTask,
            outcome: ActionOutcome::Accepted,
        },
    );

    assert_eq!(state.dashboard_view().task_input, "");
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::Notify(Notice::TaskAdded));
    assert!(matches!(effects[1], Effect::FetchStatus { .. }));
}

#[test]
fn rejected_add_relays_server_error_verbatim_without_repoll() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::ActionFinished {
            action: ActionKind::AddTask,
            outcome: ActionOutcome::Rejected {
                message: "invalid url".to_owned(),
            },
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::Error("invalid url".to_owned()))]
    );
}

#[test]
fn removal_requires_confirmation_and_cancel_sends_nothing() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RemoveRequested { index: 2 });
    assert_eq!(effects, vec![Effect::ConfirmRemoval { index: 2 }]);

    let (state, effects) = update(state, Msg::ConfirmAnswered { accepted: false });
    assert!(effects.is_empty());

    // The answer consumed the pending removal; a stray "yes" later must
    // not dispatch anything.
    let (_state, effects) = update(state, Msg::ConfirmAnswered { accepted: true });
    assert!(effects.is_empty());
}

#[test]
fn confirmed_removal_dispatches_then_reloads_task_view() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::RemoveRequested { index: 2 });
    let (state, effects) = update(state, Msg::ConfirmAnswered { accepted: true });
    assert_eq!(
        effects,
        vec![Effect::Dispatch(ActionRequest::RemoveTask { index: 2 })]
    );

    let (state, effects) = update(
        state,
        Msg::ActionFinished {
            action: ActionKind::RemoveTask,
            outcome: ActionOutcome::Accepted,
        },
    );
    assert_eq!(effects[0], Effect::Notify(Notice::TaskRemoved));
    assert_eq!(effects[1], Effect::ReloadTaskView);
    assert!(state.tasks_view().reloading);
}

#[test]
fn rejected_removal_relays_server_error() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::ActionFinished {
            action: ActionKind::RemoveTask,
            outcome: ActionOutcome::Rejected {
                message: "no such task".to_owned(),
            },
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::Error("no such task".to_owned()))]
    );
}

#[test]
fn config_save_notifies_success_or_generic_failure() {
    init_logging();
    let config = ExecutorConfig {
        download_dir: "./downloads".to_owned(),
        min_interval: 7,
        max_interval: 15,
        resolution: String::new(),
    };
    let (state, effects) = update(AppState::new(), Msg::ConfigSubmitted(config.clone()));
    assert_eq!(
        effects,
        vec![Effect::Dispatch(ActionRequest::UpdateConfig(config))]
    );

    let (state, effects) = update(
        state,
        Msg::ActionFinished {
            action: ActionKind::UpdateConfig,
            outcome: ActionOutcome::Accepted,
        },
    );
    assert_eq!(effects, vec![Effect::Notify(Notice::ConfigSaved)]);

    // The server error text is not relayed for config saves.
    let (_state, effects) = update(
        state,
        Msg::ActionFinished {
            action: ActionKind::UpdateConfig,
            outcome: ActionOutcome::Rejected {
                message: "disk full".to_owned(),
            },
        },
    );
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::Error("failed to save config".to_owned()))]
    );
}
