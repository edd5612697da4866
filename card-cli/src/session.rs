//! The terminal event loop.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use card_core::{AppConfig, CardApp, CardError, ImagePicker, Screen, ScreenId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::Instant;

use crate::command::{self, Command, HELP};
use crate::picker::FsPicker;
use crate::render;

/// Builds the picker for one `image` command from its optional path.
pub type PickerFactory = fn(Option<PathBuf>) -> Box<dyn ImagePicker>;

fn fs_picker(path: Option<PathBuf>) -> Box<dyn ImagePicker> {
    Box::new(FsPicker::new(path))
}

/// Drives a [`CardApp`] from input lines and the tokio clock.
pub struct Session<W: Write> {
    app: CardApp,
    started: Instant,
    out: W,
    json: bool,
    shown: Option<(ScreenId, bool)>,
    picker: PickerFactory,
}

impl<W: Write> Session<W> {
    /// Launch the app now, writing screens to `out`.
    #[must_use]
    pub fn new(config: AppConfig, json: bool, out: W) -> Self {
        Self {
            app: CardApp::new(config),
            started: Instant::now(),
            out,
            json,
            shown: None,
            picker: fs_picker,
        }
    }

    /// Use `picker` instead of the filesystem picker for `image` commands.
    #[must_use]
    pub fn with_picker(mut self, picker: PickerFactory) -> Self {
        self.picker = picker;
        self
    }

    /// The app being driven.
    #[must_use]
    pub fn app(&self) -> &CardApp {
        &self.app
    }

    /// Consume the session and return its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    #[allow(clippy::cast_possible_truncation)] // u64 ms covers ~584 million years
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Run until `quit`, or until input ends and no timer is pending.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        let mut input_open = true;
        self.refresh()?;

        loop {
            let deadline = self.app.next_deadline();
            if !input_open && deadline.is_none() {
                break;
            }
            let wake = self.started + Duration::from_millis(deadline.unwrap_or(0));

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    if let Some(line) = line.context("Failed to read command")? {
                        if !self.execute(&line).await? {
                            break;
                        }
                    } else {
                        tracing::debug!("Input closed, waiting for pending timers");
                        input_open = false;
                    }
                }
                () = tokio::time::sleep_until(wake), if deadline.is_some() => {
                    let now = self.elapsed_ms().max(deadline.unwrap_or(0));
                    self.app.advance_to(now);
                }
            }
            self.refresh()?;
        }

        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Execute one input line. Returns `false` on quit.
    async fn execute(&mut self, line: &str) -> Result<bool> {
        let command = match command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                writeln!(self.out, "error: {e}")?;
                return Ok(true);
            }
        };

        let now = self.elapsed_ms();
        let applied = match command {
            Command::Event(event) => self.app.handle(event, now),
            Command::PickImage(path) => {
                self.app.advance_to(now);
                let picker = (self.picker)(path);
                self.shown = None;
                self.app.pick_image(picker.as_ref()).await
            }
            Command::Show => {
                self.shown = None;
                Ok(())
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                Ok(())
            }
            Command::Quit => return Ok(false),
        };

        match applied {
            Ok(()) => {}
            Err(CardError::NotApplicable { route, .. }) => {
                writeln!(self.out, "ignored: {} (on {route})", line.trim())?;
            }
            Err(e) => writeln!(self.out, "error: {e}")?,
        }
        Ok(true)
    }

    /// Print alerts, then the current screen if it changed since last shown.
    fn refresh(&mut self) -> Result<()> {
        for alert in self.app.take_alerts() {
            writeln!(self.out, "! {}: {}", alert.title, alert.message)?;
        }

        let entry = self.app.current();
        let busy = match &entry.screen {
            Screen::Home(home) => home.busy().is_busy(),
            Screen::Composer(composer) => composer.busy().is_busy(),
            Screen::Splash(_) | Screen::Preview(_) => false,
        };
        let key = (entry.id, busy);
        if self.shown == Some(key) {
            return Ok(());
        }

        write!(self.out, "\n{}", render::screen(&entry.screen))?;
        if let (true, Screen::Preview(preview)) = (self.json, &entry.screen) {
            writeln!(self.out, "{}", preview.card().to_json()?)?;
        }
        self.out.flush()?;
        self.shown = Some(key);
        Ok(())
    }
}
