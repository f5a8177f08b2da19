use crate::snapshot::{StatusSnapshot, TaskPhase};

/// The rendered progress display.
///
/// `fill_percent` is clamped to [0, 100] for bar rendering; `percent_text`
/// keeps the value exactly as the executor reported it, so an out-of-range
/// payload stays visible instead of being silently corrected.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressWidget {
    pub stage: String,
    pub percent_text: String,
    pub fill_percent: f64,
    pub raw_line: String,
}

/// A structural mutation of the presentation surface.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetOp {
    /// Insert a new widget immediately after the status summary region.
    Create(ProgressWidget),
    /// Patch the three fields in place; widget identity is preserved.
    Update(ProgressWidget),
    Remove,
}

/// Reconciles the progress widget against a snapshot.
///
/// Returns the next widget value and at most one [`WidgetOp`] describing
/// the mutation needed to get there. Reconciling the same snapshot twice
/// yields no op on the second pass.
pub fn reconcile(
    snapshot: &StatusSnapshot,
    widget: Option<&ProgressWidget>,
) -> (Option<ProgressWidget>, Option<WidgetOp>) {
    let desired = match &snapshot.phase {
        TaskPhase::Active {
            progress: Some(progress),
            ..
        } => Some(ProgressWidget {
            stage: progress.stage.clone(),
            percent_text: format!("{}%", progress.percent),
            fill_percent: progress.percent.clamp(0.0, 100.0),
            raw_line: progress.raw_line.clone(),
        }),
        // Idle, or an active task that has not produced progress yet.
        _ => None,
    };

    match (widget, desired) {
        (None, Some(next)) => (Some(next.clone()), Some(WidgetOp::Create(next))),
        (Some(current), Some(next)) if *current == next => (Some(next), None),
        (Some(_), Some(next)) => (Some(next.clone()), Some(WidgetOp::Update(next))),
        (Some(_), None) => (None, Some(WidgetOp::Remove)),
        (None, None) => (None, None),
    }
}
