//! This module defines the errors returned by the fallible strutils operations.
//!
//! [`crate::concat::concat`] and [`crate::random::gen_random_string`] never fail, so only
//! the byte-oriented and fallible-entropy variants return [`Result`].

use std::fmt::Display;

use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

/// Error enum with all possible variants
#[derive(Debug, Serialize)]
pub enum Error {
    /// The concatenated bytes are not valid utf8
    InvalidUtf8 { reason: String },
    /// The entropy source refused to produce more random bits
    Entropy { reason: String },
}

impl Error {
    /// Returns true if this is an instance of a [`Error::Entropy`] variant
    pub fn is_entropy(&self) -> bool {
        matches!(self, Error::Entropy { .. })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for Error {}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::InvalidUtf8 {
            reason: err.to_string(),
        }
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Self::Entropy {
            reason: err.to_string(),
        }
    }
}
