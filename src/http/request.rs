//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP desde cero, trabajando sobre el
//! buffer crudo leído del socket.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/notes HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Type: application/octet-stream\r\n
//! \r\n
//! contenido del archivo
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path HTTP/1.1` (el path es opaco, no se
//!    interpretan query strings ni fragmentos)
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: bytes restantes, filtrados según `Content-Type`

use super::Headers;
use thiserror::Error;

const CRLF: &[u8] = b"\r\n";
const HEADER_END: &[u8] = b"\r\n\r\n";

/// Content-Type cuyo body se acepta tal cual
const OCTET_STREAM: &str = "application/octet-stream";

/// Métodos HTTP
///
/// Solo GET y POST tienen semántica propia; cualquier otro token se
/// conserva para que el router pueda responder 405 donde corresponda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro token (PUT, DELETE, ...)
    Other(String),
}

impl Method {
    fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP
    method: Method,

    /// Path de la petición (ej: "/echo/abc")
    path: String,

    /// Versión HTTP (ej: "HTTP/1.1")
    version: String,

    /// Headers HTTP (ej: {"Host": "localhost:4221"})
    headers: Headers,

    /// Body del request
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Buffer vacío o solo relleno
    #[error("Empty request")]
    EmptyRequest,

    /// No hay ni una línea terminada en CRLF
    #[error("Incomplete HTTP request")]
    IncompleteRequest,

    /// La request line no tiene exactamente METHOD PATH VERSION
    #[error("Invalid request line format")]
    InvalidRequestLine,
}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// El buffer puede traer relleno de ceros al final (lecturas de tamaño
    /// fijo); ese relleno no forma parte del body.
    ///
    /// La cabecera (request line y headers) debe ser UTF-8 válido; el body
    /// puede contener bytes arbitrarios.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use httplite::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nHost: x\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("Host"), Some("x"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.iter().all(|b| *b == 0 || b.is_ascii_whitespace()) {
            return Err(ParseError::EmptyRequest);
        }

        // Al menos la request line debe terminar en CRLF
        if find_subsequence(buffer, CRLF).is_none() {
            return Err(ParseError::IncompleteRequest);
        }

        let (head, raw_body) = match find_header_end(buffer) {
            Some(pos) => (&buffer[..pos], &buffer[pos + HEADER_END.len()..]),
            None => (buffer, &buffer[buffer.len()..]),
        };

        let head = std::str::from_utf8(head).map_err(|_| ParseError::InvalidRequestLine)?;
        let mut lines = head.split("\r\n");

        // 1. Request line
        let request_line = lines.next().ok_or(ParseError::IncompleteRequest)?;
        let (method, path, version) = Self::parse_request_line(request_line)?;

        // 2. Headers
        let headers = Self::parse_headers(lines);

        // 3. Body
        let body = Self::parse_body(raw_body, &headers);

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Parsea la request line: `GET /path HTTP/1.1`
    ///
    /// Se separa por espacios simples y deben salir exactamente tres
    /// tokens no vacíos.
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(ParseError::InvalidRequestLine);
        }

        Ok((
            Method::from_token(parts[0]),
            parts[1].to_string(),
            parts[2].to_string(),
        ))
    }

    /// Parsea los headers hasta la primera línea vacía
    ///
    /// Las líneas sin ':' se ignoran.
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> Headers {
        let mut headers = Headers::new();

        for line in lines {
            if line.is_empty() {
                break;
            }

            match line.split_once(':') {
                Some((name, value)) => headers.insert(name, value.trim_matches(' ')),
                None => log::debug!("Header sin ':' ignorado: {:?}", line),
            }
        }

        headers
    }

    /// Filtra el body según `Content-Type`
    ///
    /// Sin `Content-Type` o con `application/octet-stream` se acepta tal
    /// cual; cualquier otro tipo se descarta. Si hay un `Content-Length`
    /// válido se toman exactamente esos bytes, si no se recorta el relleno
    /// final (`\r`, `\n`, `\0`).
    fn parse_body(raw: &[u8], headers: &Headers) -> Vec<u8> {
        match headers.get("Content-Type") {
            None | Some(OCTET_STREAM) => {}
            Some(_) => return Vec::new(),
        }

        match headers
            .get("Content-Length")
            .and_then(|v| v.parse::<usize>().ok())
        {
            Some(len) => raw[..len.min(raw.len())].to_vec(),
            None => trim_padding(raw).to_vec(),
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Posición del `\r\n\r\n` que cierra los headers
pub(crate) fn find_header_end(buffer: &[u8]) -> Option<usize> {
    find_subsequence(buffer, HEADER_END)
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn trim_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !matches!(b, b'\r' | b'\n' | 0))
        .map_or(0, |pos| pos + 1);
    &bytes[..end]
}
