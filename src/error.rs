//! Errors surfaced by the command layer.
//!
//! The interval engine itself is total; only I/O and field validation fail.

use crate::validate::{FieldError, RequestError};
use std::io;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum RangecutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Field(#[from] FieldError),

    #[error("{0}")]
    Request(#[from] RequestError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, RangecutError>;
