//! Scripted console for driving the machine in tests.

use std::collections::VecDeque;
use std::time::Duration;

use crate::console::Console;
use crate::error::{AppError, AppResult};

/// Replays queued input lines and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
    pub clears: usize,
    pub pauses: Vec<Duration>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything written so far, prompts included.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        self.output.push(prompt.to_string());
        self.inputs.pop_front().ok_or(AppError::InputClosed)
    }

    fn write_line(&mut self, line: &str) -> AppResult<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
