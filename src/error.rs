use std::path::PathBuf;

/// Errors surfaced by loading, exporting and rendering.
///
/// Bad vertex ids handed to the solvers are not represented here; they are
/// programming errors and panic.
#[derive(Debug, thiserror::Error)]
pub enum SsspError {
    /// The input file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination could not be opened or written.
    #[error("cannot write {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The matrix stream does not match its declared dimensions.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The external drawing tool could not be run or reported failure.
    #[error("renderer failed: {0}")]
    RendererFailed(String),
}

pub type Result<T> = std::result::Result<T, SsspError>;
