use std::path::PathBuf;

/// Error type for problem construction and loading
#[derive(Debug, thiserror::Error)]
pub enum PddlError {
    #[error("Unable to parse proposition from '{0}'")]
    MalformedProposition(String),

    #[error("Invalid problem description: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to read problem description '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PddlError>;
