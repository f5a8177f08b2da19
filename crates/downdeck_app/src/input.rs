use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use downdeck_core::{ExecutorConfig, Msg, Page};

use crate::app::LoopEvent;

const USAGE: &str =
    "commands: start, stop, add <url>, remove <n>, config <dir> <min> <max> [resolution], tasks, home, quit";

/// One parsed line of user input.
#[derive(Debug, PartialEq)]
pub enum Input {
    Core(Vec<Msg>),
    Quit,
    Unknown(String),
    Empty,
}

pub fn spawn_stdin_reader(event_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                Input::Core(msgs) => {
                    for msg in msgs {
                        if event_tx.send(LoopEvent::Core(msg)).is_err() {
                            return;
                        }
                    }
                }
                Input::Quit => {
                    let _ = event_tx.send(LoopEvent::Quit);
                    return;
                }
                Input::Unknown(command) => {
                    println!("unknown command: {command}");
                    println!("{USAGE}");
                }
                Input::Empty => {}
            }
        }
    });
}

pub fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match command {
        "start" => Input::Core(vec![Msg::StartClicked]),
        "stop" => Input::Core(vec![Msg::StopClicked]),
        "add" => match rest.first() {
            Some(url) => Input::Core(vec![
                Msg::TaskInputChanged((*url).to_owned()),
                Msg::TaskSubmitted,
            ]),
            None => Input::Unknown(trimmed.to_owned()),
        },
        "remove" | "rm" => match rest.first().and_then(|raw| raw.parse::<usize>().ok()) {
            Some(index) => Input::Core(vec![Msg::RemoveRequested { index }]),
            None => Input::Unknown(trimmed.to_owned()),
        },
        "y" | "yes" => Input::Core(vec![Msg::ConfirmAnswered { accepted: true }]),
        "n" | "no" => Input::Core(vec![Msg::ConfirmAnswered { accepted: false }]),
        "config" => match parse_config(&rest) {
            Some(config) => Input::Core(vec![Msg::ConfigSubmitted(config)]),
            None => Input::Unknown(trimmed.to_owned()),
        },
        "tasks" => Input::Core(vec![Msg::PageOpened(Page::Tasks)]),
        "home" | "dash" => Input::Core(vec![Msg::PageOpened(Page::Dashboard)]),
        "quit" | "exit" => Input::Quit,
        _ => Input::Unknown(trimmed.to_owned()),
    }
}

fn parse_config(args: &[&str]) -> Option<ExecutorConfig> {
    let [dir, min, max, rest @ ..] = args else {
        return None;
    };
    Some(ExecutorConfig {
        download_dir: (*dir).to_owned(),
        min_interval: min.parse().ok()?,
        max_interval: max.parse().ok()?,
        resolution: rest.first().map(|r| (*r).to_owned()).unwrap_or_default(),
    })
}
