//! # Handlers de Rutas
//! src/handlers.rs
//!
//! Un handler por familia de rutas. Todos retornan
//! `Result<Response, ServerError>`; el router convierte los errores en
//! respuestas HTTP.
//!
//! | Ruta               | Métodos   | Respuesta                         |
//! |--------------------|-----------|-----------------------------------|
//! | `/`                | cualquiera| 200 sin body                      |
//! | `/echo/<texto>`    | cualquiera| 200 `text/plain` con `<texto>`    |
//! | `/user-agent`      | cualquiera| 200 `text/plain` con el User-Agent|
//! | `/files/<nombre>`  | GET, POST | 200 / 201 / 404 / 400 / 405       |

use crate::error::ServerError;
use crate::http::{Method, Request, Response, StatusCode};
use crate::storage::FileStore;

pub type HandlerResult = Result<Response, ServerError>;

/// Handler para `/`
pub fn root_handler(_req: &Request) -> HandlerResult {
    Ok(Response::new(StatusCode::Ok))
}

/// Handler para `/echo/<texto>`
///
/// Devuelve `<texto>` sin modificar, incluidas barras adicionales.
pub fn echo_handler(_req: &Request, text: &str) -> HandlerResult {
    Ok(Response::text(StatusCode::Ok, text))
}

/// Handler para `/user-agent`
pub fn user_agent_handler(req: &Request) -> HandlerResult {
    let user_agent = req.header("User-Agent").unwrap_or("");
    Ok(Response::text(StatusCode::Ok, user_agent))
}

/// Handler para `/files/<nombre>`
///
/// - GET: contenido del archivo como `application/octet-stream`
/// - POST: guarda el body del request, responde 201
/// - Otro método: 405
///
/// Un nombre vacío es 404 sin importar el método.
pub fn files_handler(req: &Request, name: &str, store: &FileStore) -> HandlerResult {
    if name.is_empty() {
        return Err(ServerError::NotFound("/files/".to_string()));
    }

    match req.method() {
        Method::GET => {
            let data = store.read(name).map_err(|e| {
                log::debug!("Lectura de '{}' fallida: {}", name, e);
                ServerError::NotFound(name.to_string())
            })?;

            Ok(Response::new(StatusCode::Ok)
                .with_header("Content-Type", "application/octet-stream")
                .with_body_bytes(data))
        }
        Method::POST => {
            store.write(name, req.body()).map_err(ServerError::Io)?;
            Ok(Response::new(StatusCode::Created))
        }
        Method::Other(method) => Err(ServerError::UnsupportedMethod(method.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(raw: &[u8]) -> Request {
        Request::parse(raw).unwrap()
    }

    #[test]
    fn test_root_handler() {
        let response = root_handler(&request(b"GET / HTTP/1.1\r\n\r\n")).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_echo_handler() {
        let req = request(b"GET /echo/hello HTTP/1.1\r\n\r\n");
        let response = echo_handler(&req, "hello").unwrap();

        assert_eq!(response.body(), b"hello");
        assert_eq!(response.headers().get("Content-Type"), Some("text/plain"));
        assert_eq!(response.headers().get("Content-Length"), Some("5"));
    }

    #[test]
    fn test_user_agent_handler() {
        let req = request(b"GET /user-agent HTTP/1.1\r\nUser-Agent: foobar/1.2.3\r\n\r\n");
        let response = user_agent_handler(&req).unwrap();

        assert_eq!(response.body(), b"foobar/1.2.3");
        assert_eq!(response.headers().get("Content-Length"), Some("12"));
    }

    #[test]
    fn test_user_agent_handler_missing_header() {
        let req = request(b"GET /user-agent HTTP/1.1\r\n\r\n");
        let response = user_agent_handler(&req).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
        assert_eq!(response.headers().get("Content-Length"), Some("0"));
    }

    #[test]
    fn test_files_post_then_get() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        let post = request(b"POST /files/a HTTP/1.1\r\nContent-Length: 5\r\n\r\n12345");
        let response = files_handler(&post, "a", &store).unwrap();
        assert_eq!(response.status(), StatusCode::Created);

        let get = request(b"GET /files/a HTTP/1.1\r\n\r\n");
        let response = files_handler(&get, "a", &store).unwrap();
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"12345");
        assert_eq!(
            response.headers().get("Content-Type"),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn test_files_get_missing() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        let get = request(b"GET /files/nope HTTP/1.1\r\n\r\n");
        let err = files_handler(&get, "nope", &store).unwrap_err();
        assert_eq!(err.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_files_post_write_failure() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("does-not-exist"));

        let post = request(b"POST /files/a HTTP/1.1\r\n\r\nabc");
        let err = files_handler(&post, "a", &store).unwrap_err();
        assert_eq!(err.status(), StatusCode::BadRequest);
    }

    #[test]
    fn test_files_empty_name_any_method() {
        let store = FileStore::new(std::env::temp_dir());

        for raw in [
            &b"GET /files/ HTTP/1.1\r\n\r\n"[..],
            &b"POST /files/ HTTP/1.1\r\n\r\nabc"[..],
            &b"PUT /files/ HTTP/1.1\r\n\r\n"[..],
        ] {
            let err = files_handler(&request(raw), "", &store).unwrap_err();
            assert_eq!(err.status(), StatusCode::NotFound);
        }
    }

    #[test]
    fn test_files_unsupported_method() {
        let store = FileStore::new(std::env::temp_dir());
        let req = request(b"DELETE /files/a HTTP/1.1\r\n\r\n");

        let err = files_handler(&req, "a", &store).unwrap_err();
        assert_eq!(err.status(), StatusCode::MethodNotAllowed);
    }
}
