// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    /// A caller-supplied notification id is empty or contains characters
    /// that cannot appear in an element id.
    #[error("Invalid notification id: {0:?}")]
    InvalidId(String),
    /// A click action could not be turned into a navigation.
    #[error("Navigation Error: {0}")]
    Navigation(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Navigation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
