//! In-memory reader and writer.
//!
//! Both are cheap to clone and share their state, so a test can hand one
//! clone to the engine and inspect the other afterwards.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use vetted_core::{
    application::ports::{LineReader, LineWriter},
    error::VettedResult,
};

/// Replays queued lines and records every prompt it was shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReader {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    pending: VecDeque<String>,
    prompts: Vec<String>,
    consumed: usize,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inner = ScriptedInner {
            pending: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Split a block of text into lines, one answer per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    fn lock(&self) -> MutexGuard<'_, ScriptedInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Number of lines handed out.
    pub fn consumed(&self) -> usize {
        self.lock().consumed
    }

    /// Number of lines still queued.
    pub fn remaining(&self) -> usize {
        self.lock().pending.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> VettedResult<Option<String>> {
        let mut inner = self.lock();
        inner.prompts.push(prompt.to_owned());
        let line = inner.pending.pop_front();
        if line.is_some() {
            inner.consumed += 1;
        }
        Ok(line)
    }
}

/// Captures written lines.
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LineWriter for RecordingWriter {
    fn write_line(&mut self, line: &str) -> VettedResult<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
        Ok(())
    }
}
