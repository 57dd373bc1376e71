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

/// Log a non-error message made of space-separated operands.
///
/// Works with both [`Info`](crate::Info) and [`Logger`](crate::Logger).
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
/// logface::info!(log, "a", "b", 3);
///
/// assert_eq!(recorder.entries()[0].message, "a b 3");
/// ```
#[macro_export]
macro_rules! info {
    ($log:expr $(, $arg:expr)* $(,)?) => {
        $log.info(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log a non-error message with [`format_args!`] syntax.
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
/// logface::infof!(log, "count={}", 5);
///
/// assert_eq!(recorder.entries()[0].message, "count=5");
/// ```
#[macro_export]
macro_rules! infof {
    ($log:expr, $($arg:tt)+) => {
        $log.infof(::std::format_args!($($arg)+))
    };
}

/// Log an error message made of space-separated operands through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! error {
    ($log:expr $(, $arg:expr)* $(,)?) => {
        $log.error(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log an error message with [`format_args!`] syntax through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! errorf {
    ($log:expr, $($arg:tt)+) => {
        $log.errorf(::std::format_args!($($arg)+))
    };
}
