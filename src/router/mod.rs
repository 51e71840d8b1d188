//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo mapea cada request a la familia de rutas que le corresponde.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response → Compresión
//! ```
//!
//! Las rutas se evalúan en orden y gana la primera que coincide. La
//! coincidencia es por segmento de path (`/echo/...` coincide,
//! `/does-echo-work` no). Si ninguna coincide se retorna 404 sin body.

use crate::error::ServerError;
use crate::handlers;
use crate::http::{encode_response, Request, Response, StatusCode};
use crate::storage::FileStore;

/// Familia de rutas que corresponde a un path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/`
    Root,
    /// `/echo/<texto>`
    Echo(&'a str),
    /// `/user-agent`
    UserAgent,
    /// `/files/<nombre>` (nombre posiblemente vacío)
    Files(&'a str),
    /// Cualquier otro path
    NotFound,
}

impl<'a> Route<'a> {
    /// Resuelve la ruta de un path
    ///
    /// # Ejemplo
    /// ```
    /// use httplite::router::Route;
    ///
    /// assert_eq!(Route::resolve("/echo/abc"), Route::Echo("abc"));
    /// assert_eq!(Route::resolve("/does-echo-work"), Route::NotFound);
    /// ```
    pub fn resolve(path: &'a str) -> Self {
        if path == "/" {
            return Route::Root;
        }

        let Some(rest) = path.strip_prefix('/') else {
            return Route::NotFound;
        };
        let (first, tail) = match rest.split_once('/') {
            Some((first, tail)) => (first, Some(tail)),
            None => (rest, None),
        };

        match (first, tail) {
            ("echo", Some(text)) => Route::Echo(text),
            ("user-agent", None) => Route::UserAgent,
            ("files", name) => Route::Files(name.unwrap_or("")),
            _ => Route::NotFound,
        }
    }
}

/// Router que despacha requests a los handlers
pub struct Router {
    store: FileStore,
}

impl Router {
    /// Crea un router cuyas rutas `/files` usan `store`
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Despacha el request al handler apropiado, sin comprimir
    ///
    /// Los errores de los handlers se convierten en su respuesta HTTP.
    pub fn route(&self, request: &Request) -> Response {
        let result = match Route::resolve(request.path()) {
            Route::Root => handlers::root_handler(request),
            Route::Echo(text) => handlers::echo_handler(request, text),
            Route::UserAgent => handlers::user_agent_handler(request),
            Route::Files(name) => handlers::files_handler(request, name, &self.store),
            Route::NotFound => Ok(Response::new(StatusCode::NotFound)),
        };

        result.unwrap_or_else(|e| {
            log::debug!("{} {} -> {}", request.method().as_str(), request.path(), e);
            e.into_response()
        })
    }

    /// Despacha el request y aplica la compresión negociada
    ///
    /// Un fallo al comprimir se reporta como 500 sin body.
    ///
    /// # Ejemplo
    /// ```
    /// use httplite::http::{Request, StatusCode};
    /// use httplite::router::Router;
    /// use httplite::storage::FileStore;
    ///
    /// let router = Router::new(FileStore::new(std::env::temp_dir()));
    /// let request = Request::parse(b"GET /echo/abc HTTP/1.1\r\n\r\n").unwrap();
    ///
    /// let response = router.handle(&request);
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.body(), b"abc");
    /// ```
    pub fn handle(&self, request: &Request) -> Response {
        let mut response = self.route(request);

        match encode_response(&mut response, request.header("Accept-Encoding")) {
            Ok(()) => response,
            Err(e) => {
                log::error!("{}", e);
                ServerError::from(e).into_response()
            }
        }
    }
}
