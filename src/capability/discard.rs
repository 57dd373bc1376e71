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
use crate::kv::Fields;

/// A backend that drops every message.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logface::Logger;
/// use logface::capability::Discard;
///
/// let log = Logger::from_backend(Arc::new(Discard::default()));
/// log.error(&[&"nobody hears this"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Discard {}

impl InfoLogger for Discard {
    fn log_info(&self, _: i32, _: &Fields, _: &str) {}
}

impl ErrorLogger for Discard {
    fn log_error(&self, _: &Fields, _: &str) {}
}
