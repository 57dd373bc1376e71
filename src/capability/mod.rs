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

//! The capabilities a logging backend provides to the emitters.
//!
//! A backend implements [`InfoLogger`], [`ErrorLogger`], or both. The two traits are
//! independent: an info-only backend never has to care about errors.
//!
//! Calls are fire and forget. A backend that fails to write a message handles the failure
//! itself; nothing is reported back to the code that logged.

use std::fmt;
use std::sync::Arc;

use crate::kv::Fields;

mod discard;
mod testing;

pub use self::discard::Discard;
pub use self::testing::Entry;
pub use self::testing::EntryKind;
pub use self::testing::Recorder;
pub use self::testing::Testing;

/// The ability to log non-error messages.
pub trait InfoLogger: fmt::Debug + Send + Sync + 'static {
    /// Log `msg` at verbosity `level` with the given fields.
    ///
    /// A higher level means a less important message. Any filtering is up to the backend.
    fn log_info(&self, level: i32, fields: &Fields, msg: &str);
}

/// The ability to log error messages.
pub trait ErrorLogger: fmt::Debug + Send + Sync + 'static {
    /// Log the error message `msg` with the given fields.
    fn log_error(&self, fields: &Fields, msg: &str);
}

impl<T: InfoLogger + ?Sized> InfoLogger for Arc<T> {
    fn log_info(&self, level: i32, fields: &Fields, msg: &str) {
        (**self).log_info(level, fields, msg)
    }
}

impl<T: InfoLogger + ?Sized> InfoLogger for Box<T> {
    fn log_info(&self, level: i32, fields: &Fields, msg: &str) {
        (**self).log_info(level, fields, msg)
    }
}

impl<T: InfoLogger + ?Sized> InfoLogger for &'static T {
    fn log_info(&self, level: i32, fields: &Fields, msg: &str) {
        (**self).log_info(level, fields, msg)
    }
}

impl<T: ErrorLogger + ?Sized> ErrorLogger for Arc<T> {
    fn log_error(&self, fields: &Fields, msg: &str) {
        (**self).log_error(fields, msg)
    }
}

impl<T: ErrorLogger + ?Sized> ErrorLogger for Box<T> {
    fn log_error(&self, fields: &Fields, msg: &str) {
        (**self).log_error(fields, msg)
    }
}

impl<T: ErrorLogger + ?Sized> ErrorLogger for &'static T {
    fn log_error(&self, fields: &Fields, msg: &str) {
        (**self).log_error(fields, msg)
    }
}
