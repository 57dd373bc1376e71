// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Write;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::capability::ErrorLogger;
use crate::capability::InfoLogger;
use crate::kv::Fields;
use crate::kv::Key;
use crate::kv::Value;
use crate::kv::Visitor;

struct KvWriter {
    text: String,
}

impl Visitor for KvWriter {
    fn visit(&mut self, key: Key, value: Value) -> Result<(), Error> {
        write!(&mut self.text, " {key}={value}")?;
        Ok(())
    }
}

fn format_line(head: &str, fields: &Fields, msg: &str) -> Result<String, Error> {
    let mut visitor = KvWriter {
        text: format!("{head} {msg}"),
    };
    fields.visit(&mut visitor)?;
    Ok(visitor.text)
}

/// A backend that writes messages that can be captured by a test harness (like `cargo test`),
/// and thus the outputs are suppressed unless `--nocapture` or `--show-output` is specified.
///
/// Info lines look like `V2 connected peer=10.0.0.1`, error lines like
/// `ERROR handshake failed peer=10.0.0.1`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logface::Logger;
/// use logface::capability::Testing;
///
/// let log = Logger::from_backend(Arc::new(Testing::default()));
/// log.info(&[&"hello", &"world"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Testing {}

impl InfoLogger for Testing {
    fn log_info(&self, level: i32, fields: &Fields, msg: &str) {
        match format_line(&format!("V{level}"), fields, msg) {
            Ok(line) => eprintln!("{line}"),
            Err(err) => eprintln!("failed to format log line: {err}"),
        }
    }
}

impl ErrorLogger for Testing {
    fn log_error(&self, fields: &Fields, msg: &str) {
        match format_line("ERROR", fields, msg) {
            Ok(line) => eprintln!("{line}"),
            Err(err) => eprintln!("failed to format log line: {err}"),
        }
    }
}

/// Which capability an [`Entry`] came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A call to [`InfoLogger::log_info`] at the given verbosity level.
    Info(i32),
    /// A call to [`ErrorLogger::log_error`].
    Error,
}

/// One message captured by a [`Recorder`].
#[derive(Debug, Clone)]
pub struct Entry {
    /// The capability the message came through.
    pub kind: EntryKind,
    /// The fields attached to the message.
    pub fields: Fields,
    /// The message, prefix included.
    pub message: String,
}

impl Entry {
    /// The verbosity level of an info entry, `None` for an error entry.
    pub fn level(&self) -> Option<i32> {
        match self.kind {
            EntryKind::Info(level) => Some(level),
            EntryKind::Error => None,
        }
    }

    /// Render the entry as a single line, in the same shape [`Testing`] prints.
    pub fn to_line(&self) -> Result<String, Error> {
        let head = match self.kind {
            EntryKind::Info(level) => format!("V{level}"),
            EntryKind::Error => "ERROR".to_string(),
        };
        format_line(&head, &self.fields, &self.message)
    }
}

/// A backend that keeps every message in memory so tests can assert on them.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logface::Info;
/// use logface::capability::Recorder;
///
/// let recorder = Arc::new(Recorder::default());
/// let log = Info::new(recorder.clone());
/// log.infof(format_args!("count={}", 5));
///
/// assert_eq!(recorder.entries()[0].message, "count=5");
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Mutex<Vec<Entry>>,
}

impl Recorder {
    /// Create an empty recorder. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Return a snapshot of the messages captured so far.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Return and forget the messages captured so far.
    pub fn take(&self) -> Vec<Entry> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *entries)
    }

    /// Number of messages captured so far.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, entry: Entry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

impl InfoLogger for Recorder {
    fn log_info(&self, level: i32, fields: &Fields, msg: &str) {
        self.push(Entry {
            kind: EntryKind::Info(level),
            fields: fields.clone(),
            message: msg.to_string(),
        });
    }
}

impl ErrorLogger for Recorder {
    fn log_error(&self, fields: &Fields, msg: &str) {
        self.push(Entry {
            kind: EntryKind::Error,
            fields: fields.clone(),
            message: msg.to_string(),
        });
    }
}
