use miette::Diagnostic;
use thiserror::Error;

/// Main error type for schmoji operations
#[derive(Error, Diagnostic, Debug)]
pub enum SchmojiError {
    #[error("IO error: {0}")]
    #[diagnostic(code(schmoji::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(schmoji::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid codepoint manifest: {message}")]
    #[diagnostic(code(schmoji::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No codepoint mapping for '{name}'")]
    #[diagnostic(code(schmoji::resolve))]
    UnresolvedName { name: String },

    #[error("Ambiguous skintone for '{name}' ({style}): found {labels} but no Default")]
    #[diagnostic(code(schmoji::skintone))]
    AmbiguousSkintone {
        name: String,
        style: String,
        labels: String,
    },

    #[error("Invalid codepoint sequence: '{input}'")]
    #[diagnostic(code(schmoji::codes))]
    InvalidCodeSequence { input: String },

    #[error("Source root not found: {path}")]
    #[diagnostic(code(schmoji::missing_root))]
    MissingRoot {
        path: std::path::PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Pipeline error: {message}")]
    #[diagnostic(code(schmoji::pipeline))]
    Pipeline {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SchmojiError>;
