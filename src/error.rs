use thiserror::Error;

/// Library error type for slide-deck operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A deck must hold at least one slide.
    #[error("a deck needs at least one slide")]
    EmptyDeck,

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
