//! Error types for contract rendering
//!
//! One enum per stage of the pipeline:
//! - Input decoding (JSON record → `ContractInput`)
//! - Document serialization (blocks → .docx bytes)
//! - Output writing (bytes → file)
//! - Render configuration loading

use std::path::PathBuf;

/// Errors while decoding the contract record
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Record is not valid JSON or has the wrong shape
    #[error("malformed contract record")]
    Malformed(#[from] serde_json::Error),

    /// `number_of_content` is present but not numeric
    #[error("invalid number_of_content: '{value}' is not a number")]
    InvalidCount {
        /// Value as supplied
        value: String,
    },
}

impl InputError {
    /// Create invalid count error
    pub fn invalid_count(value: impl Into<String>) -> Self {
        Self::InvalidCount {
            value: value.into(),
        }
    }
}

/// Errors while assembling the document package
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// Block text contains a character XML 1.0 cannot carry
    #[error("block {block} contains a character not allowed in a document: U+{codepoint:04X}")]
    InvalidCharacter {
        /// Index of the offending block
        block: usize,
        /// Rejected code point
        codepoint: u32,
    },

    /// XML writer failure
    #[error("xml error in {part}: {message}")]
    Xml {
        /// Package part being written
        part: &'static str,
        /// Writer message
        message: String,
    },

    /// ZIP packaging failure
    #[error("archive error")]
    Archive(#[from] zip::result::ZipError),

    /// IO error while filling the in-memory archive
    #[error("io error while packaging")]
    Io(#[from] std::io::Error),
}

impl SerializeError {
    /// Create XML error for a package part
    pub fn xml(part: &'static str, message: impl ToString) -> Self {
        Self::Xml {
            part,
            message: message.to_string(),
        }
    }
}

/// Errors while writing the rendered document to disk
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// IO error during file write
    #[error("io error writing {path}")]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Destination has no file name component
    #[error("output path has no file name: {0}")]
    NoFileName(PathBuf),
}

impl WriteError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while loading render configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {path}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `RenderConfig`
    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
}

/// Combined contract rendering error
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Record could not be decoded
    #[error(transparent)]
    Input(#[from] InputError),

    /// Document could not be assembled
    #[error(transparent)]
    Serialize(#[from] SerializeError),

    /// Document could not be written
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Layout settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for contract operations
pub type ContractResult<T> = Result<T, ContractError>;
