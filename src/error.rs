//! Error type shared by the loader and the renderer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input file is missing or unreadable.
    #[error("failed to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid JSON or does not match the request shape.
    #[error("failed to parse {}", path.display())]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("series length mismatch: {x} x values, {y} y values")]
    SeriesLength { x: usize, y: usize },

    #[error("failed to render chart: {0}")]
    Render(String),

    #[error("failed to encode image")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// True for failures that happen after the input was accepted
    /// (drawing, encoding, writing the output file).
    pub fn is_render(&self) -> bool {
        matches!(
            self,
            Error::Render(_) | Error::Encode(_) | Error::WriteOutput { .. }
        )
    }

    /// Map any backend error (plotters reports them via `Debug`) into `Error::Render`.
    pub(crate) fn render<E: std::fmt::Debug>(e: E) -> Self {
        Error::Render(format!("{e:?}"))
    }
}
