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

use crate::capability::ErrorLogger;
use crate::capability::InfoLogger;
use crate::kv::FieldValue;
use crate::kv::Fields;

const DEFAULT_TARGET: &str = "logface";

struct FieldsSource<'a>(&'a Fields);

impl log::kv::Source for FieldsSource<'_> {
    fn visit<'kvs>(
        &'kvs self,
        visitor: &mut dyn log::kv::VisitSource<'kvs>,
    ) -> Result<(), log::kv::Error> {
        for (key, value) in self.0.entries() {
            visitor.visit_pair(log::kv::Key::from_str(key), to_log_value(value))?;
        }
        Ok(())
    }

    fn count(&self) -> usize {
        self.0.len()
    }
}

// Primitives keep their type across the bridge; anything else is forwarded through `Display`.
fn to_log_value(field: &FieldValue) -> log::kv::Value<'_> {
    let value = field.by_ref();
    if let Some(v) = value.to_borrowed_str() {
        return log::kv::Value::from(v);
    }
    if let Some(v) = value.to_bool() {
        return log::kv::Value::from(v);
    }
    if let Some(v) = value.to_char() {
        return log::kv::Value::from(v);
    }
    if let Some(v) = value.to_i64() {
        return log::kv::Value::from(v);
    }
    if let Some(v) = value.to_u64() {
        return log::kv::Value::from(v);
    }
    if let Some(v) = value.to_f64() {
        return log::kv::Value::from(v);
    }
    log::kv::Value::from_display(field)
}

/// A backend that forwards messages to the global [`log`] logger.
///
/// Error messages are logged at [`log::Level::Error`]. Info messages map their verbosity level
/// onto `log` levels: `0` and below to `Info`, `1` to `Debug`, `2` and above to `Trace`. Fields
/// are attached as `log` key-values.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logface::Logger;
/// use logface::bridge::LogBridge;
///
/// let log = Logger::from_backend(Arc::new(LogBridge::default().with_target("app")));
/// log.with_fields([("attempt", 2)]).error(&[&"connect failed"]);
/// ```
#[derive(Debug, Clone)]
pub struct LogBridge {
    target: String,
}

impl Default for LogBridge {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl LogBridge {
    /// Set the target of the forwarded records.
    ///
    /// Default to `"logface"`.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    fn forward(&self, level: log::Level, fields: &Fields, msg: &str) {
        if level > log::max_level() {
            return;
        }

        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{msg}"))
                .level(level)
                .target(&self.target)
                .key_values(&FieldsSource(fields))
                .build(),
        );
    }
}

fn verbosity_level(verbosity: i32) -> log::Level {
    match verbosity {
        ..=0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

impl InfoLogger for LogBridge {
    fn log_info(&self, level: i32, fields: &Fields, msg: &str) {
        self.forward(verbosity_level(level), fields, msg);
    }
}

impl ErrorLogger for LogBridge {
    fn log_error(&self, fields: &Fields, msg: &str) {
        self.forward(log::Level::Error, fields, msg);
    }
}
