//! Error types for translation.

use std::io;
use std::path::PathBuf;

use crate::marker::Marker;
use thiserror::Error;

/// Errors that can occur while translating or moving documents around.
#[derive(Error, Debug)]
pub enum Error {
    /// A marker was opened but never closed (or closed but never opened)
    /// by the end of the document.
    #[error("unbalanced '{}' marker: some tags were not properly closed/opened", .0.literal())]
    Unbalanced(Marker),

    /// The source document could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The translated document could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
