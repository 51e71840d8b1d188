//! # Errores del Servidor
//! src/error.rs
//!
//! Taxonomía de errores del pipeline request → response. Ninguno sale del
//! worker como pánico: todos se convierten en una respuesta HTTP.
//!
//! | Error               | Status |
//! |---------------------|--------|
//! | `MalformedRequest`  | 400    |
//! | `NotFound`          | 404    |
//! | `Io`                | 400    |
//! | `UnsupportedMethod` | 405    |
//! | `Encoding`          | 500    |

use crate::http::{EncodingError, ParseError, Response, StatusCode};
use crate::storage::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] ParseError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[source] StoreError),

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl ServerError {
    /// Código HTTP con el que se reporta el error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::MalformedRequest(_) => StatusCode::BadRequest,
            ServerError::NotFound(_) => StatusCode::NotFound,
            ServerError::Io(_) => StatusCode::BadRequest,
            ServerError::UnsupportedMethod(_) => StatusCode::MethodNotAllowed,
            ServerError::Encoding(_) => StatusCode::InternalServerError,
        }
    }

    /// Respuesta HTTP equivalente
    ///
    /// Solo el 405 lleva body (texto plano); el resto va vacío.
    pub fn into_response(self) -> Response {
        match self.status() {
            StatusCode::MethodNotAllowed => {
                Response::text(StatusCode::MethodNotAllowed, "Method Not Allowed")
            }
            status => Response::new(status),
        }
    }
}
