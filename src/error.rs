use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhReposError {
    #[error("env variable {var} not found")]
    MissingCredential { var: &'static str },

    #[error("Invalid Field: {0}")]
    InvalidField(String),

    #[error("github error: {0}")]
    Transport(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GhReposError>;
