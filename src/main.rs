//! # httplite - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, instala el logger y arranca el servidor.

use httplite::config::Config;
use httplite::logger;
use httplite::server::Server;
use std::fs;

fn main() {
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("Configuración inválida: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = logger::init_logger(&config) {
        eprintln!("No se pudo inicializar el logger: {}", e);
    }

    config.print_summary();

    let files_dir = config.files_dir();
    if let Err(e) = fs::create_dir_all(&files_dir) {
        log::error!("No se pudo crear {}: {}", files_dir.display(), e);
        std::process::exit(1);
    }

    // Crear el servidor e iniciarlo (esto bloqueará el thread)
    let mut server = Server::new(config);
    if let Err(e) = server.run() {
        log::error!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
