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

/// The error returned when a [`Visitor`](crate::kv::Visitor) fails to handle a field.
///
/// Emitting never fails, so this type only shows up on the backend side. When the error comes
/// out of [`Fields::visit`](crate::kv::Fields::visit) it names the field being visited.
pub struct Error {
    message: String,
    key: Option<String>,
    source: Option<anyhow::Error>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(key) = &self.key {
            write!(f, " at field {key:?}")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("message", &self.message)
            .field("key", &self.key)
            .field("source", &self.source)
            .finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|v| v.as_ref())
    }
}

impl Error {
    /// Create a new Error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: None,
            source: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        self.source = Some(src.into());
        self
    }

    /// Return the message this error was created with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The key of the field that was being visited, if known.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    // The innermost visit knows the field best, so an existing key is kept.
    pub(crate) fn at_key(mut self, key: &str) -> Self {
        if self.key.is_none() {
            self.key = Some(key.to_string());
        }
        self
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Error::new("failed to format field").with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_names_key_and_source() {
        let err = Error::from(fmt::Error).at_key("user");

        insta::assert_snapshot!(
            err.to_string(),
            @r#"failed to format field at field "user": an error occurred when formatting an argument"#
        );
        assert_eq!(err.key(), Some("user"));
        assert!(err.source().is_some());
    }

    #[test]
    fn display_bare_message() {
        let err = Error::new("plain");
        assert_eq!(err.to_string(), "plain");
        assert_eq!(err.message(), "plain");
        assert_eq!(err.key(), None);
        assert!(err.source().is_none());
    }

    #[test]
    fn first_key_wins() {
        let err = Error::new("stop").at_key("inner").at_key("outer");
        assert_eq!(err.key(), Some("inner"));
    }
}
