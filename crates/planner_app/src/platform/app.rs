use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use planner_core::{update, AppState, Msg};
use planner_logging::planner_info;

use super::config::Cli;
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{parse_command, Command};
use super::ui::constants::{HELP_TEXT, PROMPT};
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log_destination(), cli.level_filter());
    planner_info!("Starting meal planner client");

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    let runner = EffectRunner::new(cli.client_settings(), cmd_tx.clone())
        .context("failed to start backend engine")?;

    spawn_input_reader(cmd_tx.clone());
    // Application load fires the health probe before any user input.
    cmd_tx
        .send(Command::Dispatch(Msg::SessionStarted))
        .context("dispatch queue closed")?;
    drop(cmd_tx);

    let mut session = Session::new(runner);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.draw(&mut out)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for command in cmd_rx {
        match command {
            Command::Dispatch(msg) => {
                if session.dispatch(msg) {
                    session.draw(&mut out)?;
                }
            }
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::Status => {
                for line in render::status_lines(&session.state.view()) {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Invalid(message) => writeln!(out, "{message}")?,
            Command::Quit => break,
            Command::Empty => {}
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    planner_info!("Meal planner client exiting");
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    /// Applies one message; returns whether the screen needs redrawing.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.enqueue(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        was_dirty
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        for line in render::render(&self.state.view()) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

fn spawn_input_reader(cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let command = parse_command(&line);
            let quit = command == Command::Quit;
            if cmd_tx.send(command).is_err() || quit {
                return;
            }
        }
        // End of input behaves like `quit`.
        let _ = cmd_tx.send(Command::Quit);
    });
}
