//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread: se lee un request, se escribe una respuesta y se cierra.

use crate::config::Config;
use crate::error::ServerError;
use crate::http::request::find_header_end;
use crate::http::{Request, Response};
use crate::router::Router;
use crate::storage::FileStore;
use std::io::{self, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Tamaño de cada lectura del socket
const READ_CHUNK: usize = 4096;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let store = FileStore::new(config.files_dir());

        Self {
            router: Arc::new(Router::new(store)),
            config,
        }
    }

    /// Hace bind en la dirección configurada y atiende conexiones
    pub fn run(&mut self) -> io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        log::info!("Servidor escuchando en {}", address);

        self.serve(listener)
    }

    /// Atiende conexiones de un listener ya creado, un thread por conexión
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let max_request_bytes = self.config.max_request_bytes;

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());
                    log::debug!("Nueva conexión desde {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, &router, max_request_bytes) {
                            log::warn!("Conexión {} terminada: {}", peer_addr, e);
                        }
                    });
                }
                Err(e) => {
                    log::error!("Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }
}

/// Atiende una conexión: lee un request, responde y cierra
///
/// Si el peer cierra sin enviar nada no se responde. Un error de lectura
/// termina la conexión sin respuesta.
pub fn handle_connection(
    mut stream: TcpStream,
    router: &Router,
    max_request_bytes: usize,
) -> io::Result<()> {
    let start = Instant::now();

    let buffer = read_request(&mut stream, max_request_bytes)?;
    if buffer.is_empty() {
        log::debug!("Conexión cerrada sin datos");
        return Ok(());
    }

    let response = process(&buffer, router);
    stream.write_all(&response.to_bytes())?;
    stream.flush()?;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    if status.is_server_error() {
        log::error!("{} ({:.2}ms)", status, elapsed_ms);
    } else {
        log::info!("{} ({:.2}ms)", status, elapsed_ms);
    }

    Ok(())
}

/// Pipeline completo sobre un buffer crudo: parse → router → compresión
///
/// Un request malformado produce 400 sin body.
pub fn process(buffer: &[u8], router: &Router) -> Response {
    match Request::parse(buffer) {
        Ok(request) => {
            log::info!("{} {}", request.method().as_str(), request.path());
            router.handle(&request)
        }
        Err(e) => {
            log::warn!("Parse error: {}", e);
            ServerError::from(e).into_response()
        }
    }
}

/// Lee un request completo del stream
///
/// Lee hasta encontrar el fin de los headers y, si hay `Content-Length`,
/// hasta tener ese número de bytes de body. Se detiene también en EOF o
/// al llegar a `max_request_bytes`; en ese caso el request queda truncado.
pub fn read_request<R: Read>(reader: &mut R, max_request_bytes: usize) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if n == 0 {
            break;
        }

        let room = max_request_bytes.saturating_sub(buffer.len());
        buffer.extend_from_slice(&chunk[..n.min(room)]);

        if buffer.len() >= max_request_bytes {
            log::warn!("Request truncado a {} bytes", max_request_bytes);
            break;
        }

        if is_complete(&buffer) {
            break;
        }
    }

    Ok(buffer)
}

/// Indica si el buffer ya contiene headers y body completos
fn is_complete(buffer: &[u8]) -> bool {
    let Some(end) = find_header_end(buffer) else {
        return false;
    };
    let body_start = end + 4;

    // Si la cabecera no parsea no tiene sentido seguir leyendo: se responde 400
    let content_length = match Request::parse(&buffer[..body_start]) {
        Ok(head) => head
            .header("Content-Length")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0),
        Err(_) => return true,
    };

    buffer.len() - body_start >= content_length
}
