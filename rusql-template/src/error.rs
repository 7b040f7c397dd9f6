pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A placeholder was reached after every argument had been consumed.
    #[error("missing argument for placeholder #{position}")]
    MissingArgument { position: usize },

    #[error("unsupported value type: {kind}")]
    UnsupportedType { kind: &'static str },

    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
