//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que usa el servidor,
//! sin librerías de alto nivel. Incluye:
//!
//! - Parsing de requests desde el buffer crudo del socket
//! - Construcción y serialización de responses
//! - Headers con política explícita (case-sensitive, última escritura gana)
//! - Compresión gzip negociada por `Accept-Encoding`
//!
//! Fuera de alcance: keep-alive, chunked transfer encoding y headers
//! multilínea.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod encoding; // Compresión gzip
pub mod headers;  // Mapa de headers
pub mod request;  // Parsing de HTTP requests
pub mod response; // Construcción de HTTP responses
pub mod status;   // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use encoding::{encode_response, ContentCoding, EncodingError};
pub use headers::Headers;
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
