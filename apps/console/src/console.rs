//! # Console
//!
//! The request/response seam between the machine and whoever is typing.
//!
//! ```text
//! VendingMachine ──read_line(prompt)──► Console ──► "3"
//!                ──write_line(text)──►          ──► screen
//! ```
//!
//! [`Terminal`] talks to a real terminal; tests drive the same flows with a
//! scripted console.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::config::MachineSettings;
use crate::error::{AppError, AppResult};

const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// A blocking prompt/print interface.
pub trait Console {
    /// Shows `prompt` and returns the next line without its line ending.
    ///
    /// Returns [`AppError::InputClosed`] once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> AppResult<String>;

    fn write_line(&mut self, line: &str) -> AppResult<()>;

    fn clear(&mut self) -> AppResult<()>;

    /// Presentation pause; implementations may skip it.
    fn pause(&mut self, duration: Duration);
}

/// Console over any reader/writer pair, normally stdin/stdout.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
    pacing: bool,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(settings: &MachineSettings) -> Self {
        Terminal::new(io::stdin().lock(), io::stdout(), settings)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W, settings: &MachineSettings) -> Self {
        Terminal {
            reader,
            writer,
            clear_screen: settings.clear_screen,
            pacing: settings.pacing,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) -> AppResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        if self.clear_screen {
            write!(self.writer, "{}", CLEAR_SEQUENCE)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        if self.pacing {
            if let Err(err) = self.writer.flush() {
                warn!(error = %err, "Could not flush terminal output before pausing");
            }
            thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> MachineSettings {
        MachineSettings {
            clear_screen: false,
            pacing: false,
            ..MachineSettings::default()
        }
    }

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut terminal = Terminal::new("3\r\nadminadmin\n".as_bytes(), Vec::new(), &quiet());

        assert_eq!(terminal.read_line("> ").unwrap(), "3");
        assert_eq!(terminal.read_line("> ").unwrap(), "adminadmin");
        assert!(matches!(terminal.read_line("> "), Err(AppError::InputClosed)));

        let output = String::from_utf8(terminal.into_writer()).unwrap();
        assert_eq!(output, "> > > ");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }
    }

    #[test]
    fn test_pause_survives_flush_failure() {
        let mut terminal = Terminal::new("1\n".as_bytes(), BrokenPipe, &MachineSettings::default());

        terminal.pause(Duration::ZERO);
        assert!(matches!(
            terminal.read_line("> "),
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn test_clear_respects_settings() {
        let mut terminal = Terminal::new("".as_bytes(), Vec::new(), &quiet());
        terminal.clear().unwrap();
        terminal.write_line("Opties:").unwrap();
        assert_eq!(String::from_utf8(terminal.into_writer()).unwrap(), "Opties:\n");

        let settings = MachineSettings {
            pacing: false,
            ..MachineSettings::default()
        };
        let mut terminal = Terminal::new("".as_bytes(), Vec::new(), &settings);
        terminal.clear().unwrap();
        assert_eq!(
            String::from_utf8(terminal.into_writer()).unwrap(),
            CLEAR_SEQUENCE
        );
    }
}
