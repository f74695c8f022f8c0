use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use extractor_logging::{extractor_info, LogDestination};
use link_extractor_core::{update, AppState, Effect, Msg};
use log::LevelFilter;

use crate::effects::EffectRunner;
use crate::ui::commands::{self, UiCommand};
use crate::ui::{dialog, render};

pub fn run_app() -> anyhow::Result<()> {
    extractor_logging::initialize(LogDestination::default(), LevelFilter::Info);
    extractor_info!("link_extractor_app starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock());
    app.run().context("terminal session failed")?;

    extractor_info!("link_extractor_app exiting");
    Ok(())
}

/// Terminal front end holding the session state. Every command runs to
/// completion (including the effects it triggers) before the next is read.
pub struct App<R, W> {
    state: AppState,
    runner: EffectRunner,
    input: R,
    output: W,
    rendered_generation: u64,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(),
            input,
            output,
            rendered_generation: 0,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "URL Extractor. Type 'help' for commands.")?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            let command = match commands::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.output, "{}", err.to_string().trim_end())?;
                    continue;
                }
            };
            match command {
                UiCommand::Quit => return Ok(()),
                UiCommand::List => {
                    let view = self.state.view();
                    self.write_lines(&render::display_area(&view))?;
                }
                UiCommand::Open { files } => self.dispatch(Msg::FilesSelected(files))?,
                UiCommand::Folder { dir } => self.dispatch(Msg::FolderSelected(dir))?,
                UiCommand::Extract => self.dispatch(Msg::ExtractClicked)?,
                UiCommand::Save => self.dispatch(Msg::SaveClicked)?,
                UiCommand::Policy { policy } => self.dispatch(Msg::PolicyChanged(policy.into()))?,
            }
        }
    }

    /// Apply `msg` and every message its effects produce, then render once.
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;

            for effect in effects {
                let reply = match effect {
                    Effect::PromptSavePath => Some(Msg::SavePathChosen(dialog::ask_save_path(
                        &mut self.input,
                        &mut self.output,
                    )?)),
                    other => self.runner.run(other),
                };
                inbox.extend(reply);
            }
        }
        self.render()
    }

    fn render(&mut self) -> io::Result<()> {
        if !self.state.consume_dirty() {
            return Ok(());
        }
        let view = self.state.view();
        let show_urls = view.generation != self.rendered_generation;
        self.rendered_generation = view.generation;
        self.write_lines(&render::render(&view, show_urls))
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
