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
use std::sync::Arc;

use crate::Info;
use crate::capability::ErrorLogger;
use crate::capability::InfoLogger;
use crate::info::format_message;
use crate::info::line_message;
use crate::kv::Fields;

/// Logs both error and non-error messages.
///
/// Non-error messages go through an embedded [`Info`]; error messages go to an [`ErrorLogger`]
/// with the fields and prefix of that same [`Info`]. Errors carry no verbosity level.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logface::Logger;
/// use logface::capability::Recorder;
///
/// let recorder = Arc::new(Recorder::default());
/// let log = Logger::from_backend(recorder.clone()).with_prefix("db: ");
///
/// log.info(&[&"connected"]);
/// log.errorf(format_args!("query failed after {}ms", 30));
///
/// let entries = recorder.entries();
/// assert_eq!(entries[0].message, "db: connected");
/// assert_eq!(entries[1].message, "db: query failed after 30ms");
/// assert_eq!(entries[1].level(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    info: Info,
    err: Arc<dyn ErrorLogger>,
}

impl Logger {
    /// Create a new logger that sends output to the given backends.
    pub fn new(info: Arc<dyn InfoLogger>, err: Arc<dyn ErrorLogger>) -> Self {
        Logger {
            info: Info::new(info),
            err,
        }
    }

    /// Create a new logger whose single backend handles both info and error messages.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: InfoLogger + ErrorLogger,
    {
        Logger::new(backend.clone(), backend)
    }

    /// Return the embedded info emitter.
    pub fn as_info(&self) -> &Info {
        &self.info
    }

    /// Log a message built from `args` in the manner of `println!`. See [`Info::info`].
    pub fn info(&self, args: &[&dyn fmt::Display]) {
        self.info.info(args)
    }

    /// Log a message built from pre-formatted arguments. See [`Info::infof`].
    pub fn infof(&self, args: fmt::Arguments) {
        self.info.infof(args)
    }

    /// Log an error message built from `args` in the manner of `println!`.
    ///
    /// The operands are separated by a single space and no trailing newline is sent.
    pub fn error(&self, args: &[&dyn fmt::Display]) {
        let msg = line_message(self.info.prefix(), args);
        self.err.log_error(self.info.fields(), &msg);
    }

    /// Log an error message built from pre-formatted arguments, usually from [`format_args!`].
    pub fn errorf(&self, args: fmt::Arguments) {
        let msg = format_message(self.info.prefix(), args);
        self.err.log_error(self.info.fields(), &msg);
    }

    /// Return an info emitter at the given verbosity level.
    ///
    /// The result cannot log errors; verbosity only applies to non-error messages.
    #[must_use]
    pub fn v(&self, level: i32) -> Info {
        self.info.v(level)
    }

    /// Return a new logger with `fields` added to the current ones. See [`Info::with_fields`].
    #[must_use]
    pub fn with_fields(&self, fields: impl Into<Fields>) -> Logger {
        Logger {
            info: self.info.with_fields(fields),
            err: self.err.clone(),
        }
    }

    /// Return a new logger that appends `prefix` to the current prefix.
    #[must_use]
    pub fn with_prefix(&self, prefix: impl AsRef<str>) -> Logger {
        Logger {
            info: self.info.with_prefix(prefix),
            err: self.err.clone(),
        }
    }
}
