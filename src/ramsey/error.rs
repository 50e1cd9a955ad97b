/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use thiserror::Error;

pub type RamseyResult<T> = std::result::Result<T, RamseyError>;

#[derive(Debug, Error)]
pub enum RamseyError {
    #[error("{0}")]
    Generic(String),

    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Bad UTF8 in string: {0}")]
    UTF8(#[from] std::string::FromUtf8Error),

    #[error("Parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("JSON error: {0}")]
    JSON(#[from] serde_json::Error),

    #[error("No Ramsey number known for ({red}, {blue})")]
    UnknownParameters { red: usize, blue: usize },

    #[error("Malformed graph6 token: expected {expected_bits} adjacency bits, read {read_bits}")]
    MalformedInput {
        expected_bits: usize,
        read_bits: usize,
    },

    #[error("Persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("A pipeline thread panicked")]
    WorkerPanicked,
}

impl RamseyError {
    pub fn new(msg: &str) -> Self {
        Self::Generic(msg.to_owned())
    }
}

impl From<String> for RamseyError {
    fn from(str: String) -> Self {
        RamseyError::Generic(str)
    }
}

impl From<&str> for RamseyError {
    fn from(str: &str) -> Self {
        RamseyError::Generic(str.to_owned())
    }
}
