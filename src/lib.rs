//! # httplite
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero sobre sockets TCP,
//! sin librerías HTTP. Atiende cuatro familias de rutas: `/`, `/echo/<texto>`,
//! `/user-agent` y `/files/<nombre>` (lectura y escritura de archivos).
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, serialización de responses y compresión gzip
//! - `router`: Enrutamiento de requests a su familia de rutas
//! - `handlers`: Lógica de cada ruta
//! - `storage`: Archivos bajo un directorio base configurable
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `config` / `logger`: Configuración CLI/env y logging
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use httplite::config::Config;
//! use httplite::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
pub mod storage;
