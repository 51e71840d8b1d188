//! # Compresión de Respuestas
//! src/http/encoding.rs
//!
//! Negociación de `Accept-Encoding`. Solo se soporta gzip; cualquier otro
//! token (`br`, `deflate`, `identity`, `*`) se ignora sin error.
//!
//! El `Content-Length` se recalcula después de comprimir.

use super::Response;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use thiserror::Error;

/// Codificaciones que el servidor sabe aplicar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCoding {
    Gzip,
}

/// Error al comprimir el body
#[derive(Debug, Error)]
#[error("Compression failed: {0}")]
pub struct EncodingError(#[from] std::io::Error);

impl ContentCoding {
    /// Elige la codificación a partir del valor crudo de `Accept-Encoding`
    ///
    /// # Ejemplo
    /// ```
    /// use httplite::http::ContentCoding;
    ///
    /// assert_eq!(ContentCoding::negotiate("br, gzip"), Some(ContentCoding::Gzip));
    /// assert_eq!(ContentCoding::negotiate("br"), None);
    /// ```
    pub fn negotiate(accept_encoding: &str) -> Option<Self> {
        accept_encoding
            .split(',')
            .map(str::trim)
            .find_map(Self::from_token)
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "gzip" => Some(ContentCoding::Gzip),
            _ => None,
        }
    }

    /// Nombre usado en `Content-Encoding`
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCoding::Gzip => "gzip",
        }
    }

    /// Transforma los bytes con esta codificación
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, EncodingError> {
        match self {
            ContentCoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data)?;
                Ok(encoder.finish()?)
            }
        }
    }
}

/// Aplica la codificación negociada a la respuesta, en el lugar
///
/// Sin `Accept-Encoding` o sin token soportado la respuesta no cambia.
pub fn encode_response(
    response: &mut Response,
    accept_encoding: Option<&str>,
) -> Result<(), EncodingError> {
    let Some(coding) = accept_encoding.and_then(ContentCoding::negotiate) else {
        return Ok(());
    };

    let encoded = coding.encode(response.body())?;
    log::debug!(
        "Body comprimido con {}: {} -> {} bytes",
        coding.as_str(),
        response.body().len(),
        encoded.len()
    );

    response.add_header("Content-Encoding", coding.as_str());
    response.set_body(encoded);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_negotiate_gzip_among_others() {
        assert_eq!(ContentCoding::negotiate("gzip, br"), Some(ContentCoding::Gzip));
        assert_eq!(ContentCoding::negotiate("  deflate ,gzip "), Some(ContentCoding::Gzip));
    }

    #[test]
    fn test_negotiate_unsupported_tokens() {
        assert_eq!(ContentCoding::negotiate("br"), None);
        assert_eq!(ContentCoding::negotiate("deflate, identity, *"), None);
        assert_eq!(ContentCoding::negotiate(""), None);
    }

    #[test]
    fn test_negotiate_is_case_sensitive() {
        assert_eq!(ContentCoding::negotiate("GZIP"), None);
    }

    #[test]
    fn test_encode_response_gzip() {
        let mut response = Response::text(StatusCode::Ok, "abc");
        encode_response(&mut response, Some("gzip")).unwrap();

        assert_eq!(response.headers().get("Content-Encoding"), Some("gzip"));
        let length = response.body().len().to_string();
        assert_eq!(response.headers().get("Content-Length"), Some(length.as_str()));
        assert_eq!(gunzip(response.body()), b"abc");
    }

    #[test]
    fn test_encode_response_without_header() {
        let mut response = Response::text(StatusCode::Ok, "abc");
        encode_response(&mut response, None).unwrap();

        assert_eq!(response.body(), b"abc");
        assert!(!response.headers().contains("Content-Encoding"));
    }

    #[test]
    fn test_encode_response_unsupported_token() {
        let mut response = Response::text(StatusCode::Ok, "abc");
        encode_response(&mut response, Some("br")).unwrap();

        assert_eq!(response.body(), b"abc");
        assert_eq!(response.headers().get("Content-Length"), Some("3"));
    }
}
