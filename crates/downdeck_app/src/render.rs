use chrono::{DateTime, Local};
use downdeck_core::{ControlButton, DashboardViewModel, Notice, TasksViewModel};

const BAR_WIDTH: usize = 40;

pub fn render_dashboard(view: &DashboardViewModel, refreshed_at: Option<DateTime<Local>>) {
    let stamp = refreshed_at
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_owned());

    println!();
    println!("== downdeck == (refreshed {stamp})");
    println!(
        "state: {} | current: {} | queued: {}",
        if view.is_running { "running" } else { "stopped" },
        view.current_url.as_deref().unwrap_or("none"),
        view.task_count
    );
    if let Some(widget) = &view.widget {
        println!(
            "[{}] {}  {}",
            widget.stage,
            widget.percent_text,
            bar(widget.fill_percent)
        );
        println!("{}", widget.raw_line);
    }
    let labels: Vec<&str> = view.buttons.iter().map(button_label).collect();
    println!("({})", labels.join(" | "));
}

pub fn render_tasks(view: &TasksViewModel) {
    println!();
    println!("== downdeck: task management ==");
    if view.reloading {
        println!("(reloading...)");
        return;
    }
    println!(
        "state: {} | current: {} | queued: {}",
        if view.is_running { "running" } else { "stopped" },
        view.current_url.as_deref().unwrap_or("none"),
        view.task_count
    );
    match &view.config {
        Some(config) => println!(
            "config: dir={} interval={}..{}min resolution={}",
            config.download_dir,
            config.min_interval,
            config.max_interval,
            if config.resolution.is_empty() {
                "auto"
            } else {
                &config.resolution
            }
        ),
        None => println!("config: (not reported yet)"),
    }
    println!("(add <url> | remove <n> | config <dir> <min> <max> [resolution] | home)");
}

pub fn render_notice(notice: &Notice) {
    match notice {
        Notice::TaskAdded => println!("[ok] task added"),
        Notice::TaskRemoved => println!("[ok] task removed"),
        Notice::ConfigSaved => println!("[ok] config saved"),
        Notice::Error(message) => println!("[error] {message}"),
    }
}

pub fn render_confirm_prompt(index: usize) {
    println!("remove task {index}? [y/n]");
}

fn button_label(button: &ControlButton) -> &'static str {
    match button {
        ControlButton::Start => "start",
        ControlButton::Stop => "stop",
        ControlButton::ManageTasks => "tasks",
    }
}

fn bar(fill_percent: f64) -> String {
    let filled = ((fill_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
