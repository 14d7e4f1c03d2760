use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("could not build the collection store client")]
    ClientBuildError(#[source] reqwest::Error),
    #[error("{0}")]
    ExternalServiceError(String),
    #[error("{0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("could not access the session slot")]
    SessionSlotError(#[from] std::io::Error),
    #[error("invalid credentials")]
    UnauthenticatedError,
    #[error("this action is not allowed for the current role")]
    UnauthorizedError,
    #[error("operation not permitted")]
    ForbiddenOperation,
}

pub type AppResult<T> = Result<T, AppError>;
