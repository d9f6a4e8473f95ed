//! Interactive session
//!
//! Owns the tracker state and runs the read-dispatch-print loop. Each line is
//! handled to completion before the next is read, and a failed submission
//! never disturbs state built by earlier commands.

use std::io::{BufRead, Write};

use serde::Serialize;
use thiserror::Error;

use crate::models::FoodLog;
use crate::tools::status::StatusTracker;
use crate::tools::tdee::TdeeResponse;
use crate::tools::{convert, tdee, tracker};

use super::command::{parse_line, Command, HELP};

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for command responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text and tables
    #[default]
    Text,
    /// Pretty-printed JSON, one document per command
    Json,
}

impl OutputMode {
    /// Parse from a configuration string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputMode::Text),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// An interactive calculator session
///
/// All state lives for the duration of the session and resets on restart.
pub struct Session {
    log: FoodLog,
    last_tdee: Option<TdeeResponse>,
    status: StatusTracker,
    output: OutputMode,
}

impl Session {
    /// Create a session with an empty food log
    pub fn new(output: OutputMode) -> Self {
        Self {
            log: FoodLog::new(),
            last_tdee: None,
            status: StatusTracker::new(),
            output,
        }
    }

    /// Run the read-dispatch-print loop until quit or end of input
    ///
    /// The prompt goes to stderr so piped stdout stays clean.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<(), SessionError> {
        let mut line = String::new();
        loop {
            eprint!("> ");
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            tracing::debug!(command = %trimmed, "dispatching");
            match parse_line(trimmed) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command, &mut out)?,
                Err(message) => self.emit_message(&mut out, &message)?,
            }
        }
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), SessionError> {
        match command {
            Command::Tdee {
                sex,
                age,
                height_cm,
                weight_kg,
                activity,
            } => {
                let fields = tdee::TdeeFields {
                    sex,
                    age,
                    height_cm,
                    weight_kg,
                    activity,
                };
                match tdee::calculate(&fields) {
                    Ok(response) => {
                        self.emit(out, &response.render(), &response)?;
                        self.last_tdee = Some(response);
                    }
                    Err(message) => {
                        // The message replaces the displayed result
                        self.last_tdee = None;
                        self.emit_message(out, &message)?;
                    }
                }
            }
            Command::Reset => {
                let response = tdee::reset(&mut self.last_tdee);
                self.emit(out, "Results cleared.", &response)?;
            }
            Command::Add {
                name,
                amount,
                energy,
                unit,
            } => {
                let fields = tracker::AddEntryFields {
                    name,
                    amount,
                    energy,
                    unit,
                };
                // An invalid submission is dropped without output
                if let Some(response) = tracker::add_entry(&mut self.log, &fields) {
                    let table = tracker::table(&self.log);
                    self.emit(out, &table.render(), &response)?;
                }
            }
            Command::Remove { position } => match tracker::remove_entry(&mut self.log, position) {
                Some(response) => {
                    let table = tracker::table(&self.log);
                    self.emit(out, &table.render(), &response)?;
                }
                None => {
                    self.emit_message(out, &format!("No entry at position {}.", position))?;
                }
            },
            Command::Clear => {
                let response = tracker::clear_entries(&mut self.log);
                let table = tracker::table(&self.log);
                self.emit(out, &table.render(), &response)?;
            }
            Command::Table => {
                let table = tracker::table(&self.log);
                self.emit(out, &table.render(), &table)?;
            }
            Command::Convert { value, from, to } => {
                let fields = convert::ConvertFields { value, from, to };
                match convert::convert_value(&fields) {
                    Ok(response) => self.emit(out, &response.render(), &response)?,
                    Err(message) => self.emit_message(out, &message)?,
                }
            }
            Command::Status => {
                let status = self
                    .status
                    .get_status(self.log.len(), self.last_tdee.is_some());
                self.emit(out, &status.render(), &status)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            // Quit never reaches dispatch; the loop handles it
            Command::Quit => {}
        }
        Ok(())
    }

    /// Write a response in the session's output mode
    fn emit<W: Write, T: Serialize>(
        &self,
        out: &mut W,
        text: &str,
        response: &T,
    ) -> Result<(), SessionError> {
        match self.output {
            OutputMode::Text => writeln!(out, "{}", text)?,
            OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(response)?)?,
        }
        Ok(())
    }

    /// Write a validation or usage message
    fn emit_message<W: Write>(&self, out: &mut W, message: &str) -> Result<(), SessionError> {
        match self.output {
            OutputMode::Text => writeln!(out, "{}", message)?,
            OutputMode::Json => {
                let body = serde_json::json!({ "error": message });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut session = Session::new(OutputMode::Text);
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let output = run_script("quit\ntable\n");
        assert!(output.is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let output = run_script("\n   \nquit\n");
        assert!(output.is_empty());
    }

    #[test]
    fn test_invalid_add_is_silent() {
        let output = run_script("add \"\" 95\nquit\n");
        assert!(output.is_empty());
    }

    #[test]
    fn test_validation_message_replaces_result() {
        let output = run_script("tdee male abc 175 70 moderate\nquit\n");
        assert!(output.contains("Please fill in valid numbers for age, height, and weight."));
        assert!(!output.contains("BMR"));
    }

    #[test]
    fn test_session_ends_at_eof() {
        // No quit command; the reader just runs dry
        let output = run_script("convert 500 kcal kJ\n");
        assert!(output.contains("2092.000 kJ"));
    }
}
