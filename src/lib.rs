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

//! Logface is a small logging facade: library code logs through it, and the application decides
//! which backend receives the messages.
//!
//! # Overview
//!
//! A backend implements one or both of the capability traits, [`InfoLogger`] and
//! [`ErrorLogger`]. Library code holds a [`Logger`] (info and errors) or an [`Info`] (info only)
//! and derives new emitters with a verbosity level, structured fields or a message prefix.
//! Derivation never changes the emitter it starts from, and only the terminal methods (`info`,
//! `infof`, `error`, `errorf`) reach the backend.
//!
//! Emitters hold no locks. They are `Send + Sync` because the backends are; whether concurrent
//! logging is well behaved is up to the backend.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use logface::Logger;
//! use logface::capability::Recorder;
//!
//! let recorder = Arc::new(Recorder::default());
//! let log = Logger::from_backend(recorder.clone());
//!
//! let request = log.with_prefix("GET /users: ").with_fields([("status", 500)]);
//! logface::errorf!(request, "handler failed after {}ms", 12);
//! logface::info!(request.v(1), "retrying", 1, "of", 3);
//!
//! let lines: Vec<_> = recorder
//!     .entries()
//!     .iter()
//!     .map(|e| e.to_line().unwrap())
//!     .collect();
//! assert_eq!(
//!     lines,
//!     [
//!         "ERROR GET /users: handler failed after 12ms status=500",
//!         "V1 GET /users: retrying 1 of 3 status=500",
//!     ]
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod capability;
pub mod kv;

mod error;
mod info;
mod logger;
mod macros;

pub use capability::ErrorLogger;
pub use capability::InfoLogger;
pub use error::Error;
pub use info::Info;
pub use logger::Logger;
