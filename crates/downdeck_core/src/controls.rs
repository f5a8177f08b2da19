/// A button on the dashboard control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Start,
    Stop,
    ManageTasks,
}

/// Pure, total mapping from run state to the full button set.
///
/// The panel is replaced wholesale on every pass; unlike the progress
/// widget it is never patched incrementally.
pub fn render_controls(is_running: bool) -> Vec<ControlButton> {
    if is_running {
        vec![ControlButton::Stop, ControlButton::ManageTasks]
    } else {
        vec![ControlButton::Start, ControlButton::ManageTasks]
    }
}
