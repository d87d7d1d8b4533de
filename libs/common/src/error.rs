//! Library-wide error types and [`From`] impls

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Top level application error, can be converted into a [`Response`]
#[derive(Debug, Error)]
pub enum Error {
	/// Opaque internal server error
	#[error("An error occurred while processing the request.")]
	InternalServerError,
	/// Missing or wrong access key on a guarded route
	#[error("missing or invalid access key")]
	Unauthorized,
}

/// Convert an error into a plain text [`Response`]
///
/// Internal details are logged when the error is created, the body only ever
/// carries the generic message
impl IntoResponse for Error {
	fn into_response(self) -> Response {
		debug!("responding with error -- {self:?}");

		let status = match self {
			Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
			Self::Unauthorized => StatusCode::UNAUTHORIZED,
		};

		(status, self.to_string()).into_response()
	}
}

/// A list of possible internal errors
///
/// API end users should never see these details
#[derive(Debug, Error)]
pub enum InternalServerError {
	/// Error executing some database operation
	#[error("database error -- {0:?}")]
	DatabaseError(diesel::result::Error),
	/// Error interacting with a database connection
	#[error("database interaction error -- {0:?}")]
	DatabaseInteractionError(deadpool_diesel::InteractError),
	/// Error acquiring database pool connection
	#[error("database pool error -- {0:?}")]
	PoolError(deadpool_diesel::PoolError),
}

// Map internal server errors to application errors
impl From<InternalServerError> for Error {
	fn from(value: InternalServerError) -> Self {
		error!("internal server error -- {value}");

		Self::InternalServerError
	}
}

/// Map database interaction errors to application errors
impl From<deadpool_diesel::InteractError> for Error {
	fn from(value: deadpool_diesel::InteractError) -> Self {
		InternalServerError::DatabaseInteractionError(value).into()
	}
}

/// Map database result errors to application errors
impl From<diesel::result::Error> for Error {
	fn from(err: diesel::result::Error) -> Self {
		InternalServerError::DatabaseError(err).into()
	}
}

impl From<deadpool_diesel::PoolError> for Error {
	fn from(value: deadpool_diesel::PoolError) -> Self {
		InternalServerError::PoolError(value).into()
	}
}
