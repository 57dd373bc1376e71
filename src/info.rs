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

use std::fmt;
use std::fmt::Write;
use std::sync::Arc;

use crate::capability::InfoLogger;
use crate::kv::Fields;

// Render `args` the way a println would, minus the newline: every operand separated by one space.
pub(crate) fn line_message(prefix: &str, args: &[&dyn fmt::Display]) -> String {
    let mut msg = String::from(prefix);
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            msg.push(' ');
        }
        // SAFETY: write to a string always succeeds
        write!(&mut msg, "{arg}").unwrap();
    }
    msg
}

pub(crate) fn format_message(prefix: &str, args: fmt::Arguments) -> String {
    if prefix.is_empty() {
        return fmt::format(args);
    }
    format!("{prefix}{args}")
}

/// Logs non-error messages to an [`InfoLogger`].
///
/// An `Info` carries a verbosity level, a set of fields and a message prefix. It never changes
/// after construction: [`v`](Info::v), [`with_fields`](Info::with_fields) and
/// [`with_prefix`](Info::with_prefix) return new emitters and leave the receiver as it was.
/// Every emitter derived from the same root shares the root's backend.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logface::Info;
/// use logface::capability::Recorder;
/// use logface::kv::Fields;
///
/// let recorder = Arc::new(Recorder::default());
/// let root = Info::new(recorder.clone());
///
/// let conn = root
///     .with_prefix("conn: ")
///     .with_fields(Fields::from([("peer", "10.0.0.1")]));
/// conn.v(2).info(&[&"accepted", &42]);
///
/// let entries = recorder.entries();
/// let entry = &entries[0];
/// assert_eq!(entry.message, "conn: accepted 42");
/// assert_eq!(entry.level(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Info {
    logger: Arc<dyn InfoLogger>,
    level: i32,
    fields: Fields,
    prefix: String,
}

impl Info {
    /// Create a root emitter at level 0, with no field and no prefix.
    pub fn new(logger: Arc<dyn InfoLogger>) -> Self {
        Info {
            logger,
            level: 0,
            fields: Fields::new(),
            prefix: String::new(),
        }
    }

    /// The verbosity level messages are logged at.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// The fields attached to every message.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// The prefix prepended to every message.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Log a message built from `args` in the manner of `println!("{} {} ...")`.
    ///
    /// The operands are separated by a single space and no trailing newline is sent.
    pub fn info(&self, args: &[&dyn fmt::Display]) {
        let msg = line_message(&self.prefix, args);
        self.logger.log_info(self.level, &self.fields, &msg);
    }

    /// Log a message built from pre-formatted arguments, usually from [`format_args!`].
    pub fn infof(&self, args: fmt::Arguments) {
        let msg = format_message(&self.prefix, args);
        self.logger.log_info(self.level, &self.fields, &msg);
    }

    /// Return a new emitter at the given verbosity level.
    ///
    /// A higher verbosity level means a log message is less important. The value is passed to
    /// the backend untouched.
    #[must_use]
    pub fn v(&self, level: i32) -> Info {
        Info {
            logger: self.logger.clone(),
            level,
            fields: self.fields.clone(),
            prefix: self.prefix.clone(),
        }
    }

    /// Return a new emitter with `fields` added to the current ones.
    ///
    /// On a key collision the newly supplied value wins.
    #[must_use]
    pub fn with_fields(&self, fields: impl Into<Fields>) -> Info {
        Info {
            logger: self.logger.clone(),
            level: self.level,
            fields: self.fields.merge(&fields.into()),
            prefix: self.prefix.clone(),
        }
    }

    /// Return a new emitter that appends `prefix` to the current prefix.
    #[must_use]
    pub fn with_prefix(&self, prefix: impl AsRef<str>) -> Info {
        Info {
            logger: self.logger.clone(),
            level: self.level,
            fields: self.fields.clone(),
            prefix: format!("{}{}", self.prefix, prefix.as_ref()),
        }
    }
}
