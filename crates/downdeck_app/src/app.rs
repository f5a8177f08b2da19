use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use deck_logging::deck_info;
use downdeck_core::{update, AppState, Effect, Msg, Page};

use crate::effects::EffectRunner;
use crate::input;
use crate::render;
use crate::settings::AppSettings;

/// One event on the single cooperative timeline.
pub enum LoopEvent {
    Core(Msg),
    Quit,
}

pub fn run(settings: AppSettings) -> anyhow::Result<()> {
    deck_info!("starting downdeck against {}", settings.base_url);

    let (event_tx, event_rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(&settings, event_tx.clone())?;

    spawn_timer(
        event_tx.clone(),
        Duration::from_secs(settings.poll_interval_secs),
        Msg::PollTick,
    );
    spawn_timer(
        event_tx.clone(),
        Duration::from_secs(settings.reload_interval_secs),
        Msg::ReloadTick,
    );
    input::spawn_stdin_reader(event_tx.clone());

    let mut state = AppState::new();
    let mut refreshed_at: Option<DateTime<Local>> = None;

    // Seed the first poll instead of waiting a full interval.
    let _ = event_tx.send(LoopEvent::Core(Msg::PollTick));

    while let Ok(event) = event_rx.recv() {
        let msg = match event {
            LoopEvent::Quit => break,
            LoopEvent::Core(msg) => msg,
        };

        let carried_snapshot = matches!(
            msg,
            Msg::SnapshotFetched { .. } | Msg::TaskViewReloaded { .. }
        );

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;

        for effect in effects {
            match effect {
                Effect::Notify(notice) => render::render_notice(&notice),
                Effect::ConfirmRemoval { index } => render::render_confirm_prompt(index),
                other => runner.submit(other),
            }
        }

        // A stale snapshot leaves the state clean, so it never repaints
        // nor bumps the refresh stamp.
        if state.consume_dirty() {
            if carried_snapshot {
                refreshed_at = Some(Local::now());
                deck_info!("snapshot applied (cycle {})", deck_logging::get_poll_cycle());
            }
            match state.page() {
                Page::Dashboard => render::render_dashboard(&state.dashboard_view(), refreshed_at),
                Page::Tasks => render::render_tasks(&state.tasks_view()),
            }
        }
    }

    deck_info!("downdeck exiting");
    Ok(())
}

fn spawn_timer(event_tx: mpsc::Sender<LoopEvent>, interval: Duration, msg: Msg) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if event_tx.send(LoopEvent::Core(msg.clone())).is_err() {
            break;
        }
    });
}
