use pynode_matrix::MatrixError;

pub type PynodeResult<T = (), E = PynodeError> = Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PynodeError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),
    #[error("File not found: {0}")]
    FileNotFound(String),
}
