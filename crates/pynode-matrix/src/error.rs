use crate::version::Dimension;

pub type MatrixResult<T = (), E = MatrixError> = Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("No compatibility entry for ubuntu version: {0}")]
    UnknownUbuntu(String),
    #[error("No {0} versions specified")]
    EmptyVersions(Dimension),
    #[error("Duplicate {0} version: {1}")]
    DuplicateVersion(Dimension, String),
    #[error("Latest {0} version {1} is not one of the listed versions")]
    UnknownLatest(Dimension, String),
}
