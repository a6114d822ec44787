// SPDX-License-Identifier: MPL-2.0
//! Notification identifiers.
//!
//! Generated ids are short random strings so they can be embedded in element
//! ids and handed to user code. Ids supplied by callers (for upserts) only
//! need to be non-empty and alphanumeric.

use crate::config::{ELEMENT_ID_PREFIX, ID_CHARSET, ID_LENGTH};
use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Identifier of a notification, unique among live records of a manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(String);

impl NotificationId {
    /// Generates a random id, retrying while `is_taken` reports the candidate as in use.
    pub fn generate<R, F>(rng: &mut R, is_taken: F) -> Self
    where
        R: Rng,
        F: Fn(&NotificationId) -> bool,
    {
        loop {
            let candidate: String = std::iter::repeat_with(|| {
                ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char
            })
            .take(ID_LENGTH)
            .collect();
            let id = Self(candidate);
            if !is_taken(&id) {
                return id;
            }
        }
    }

    /// Parses a caller-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if `raw` is empty or contains anything
    /// other than ASCII letters and digits.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the id attribute of this notification's element.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("{ELEMENT_ID_PREFIX}{}", self.0)
    }

    /// Recovers a notification id from an element id attribute.
    #[must_use]
    pub fn from_element_id(element_id: &str) -> Option<Self> {
        element_id
            .strip_prefix(ELEMENT_ID_PREFIX)
            .and_then(|raw| Self::parse(raw).ok())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NotificationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for NotificationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
