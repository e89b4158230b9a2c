use pynode_common::error::PynodeError;
use pynode_matrix::MatrixError;
use thiserror::Error;

pub type PynodeCliResult<T = (), E = PynodeCliError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum PynodeCliError {
    #[error("Unable to initialize config: {0}")]
    InitConfig(String),
    #[error("Invalid build matrix: {0}")]
    Matrix(#[from] MatrixError),
    #[error("Unable to render matrix: {0}")]
    Render(String),
}

impl From<PynodeError> for PynodeCliError {
    fn from(error: PynodeError) -> Self {
        match error {
            PynodeError::Matrix(e) => PynodeCliError::Matrix(e),
            e => PynodeCliError::InitConfig(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for PynodeCliError {
    fn from(error: serde_json::Error) -> Self {
        PynodeCliError::Render(error.to_string())
    }
}

impl From<serde_yaml::Error> for PynodeCliError {
    fn from(error: serde_yaml::Error) -> Self {
        PynodeCliError::Render(error.to_string())
    }
}
