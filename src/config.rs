//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor con soporte para argumentos CLI y variables
//! de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./httplite --port 4221 --directory /tmp/files --log-level debug
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 FILES_DIR=/tmp/files ./httplite
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

/// Tamaño mínimo aceptado para el buffer de lectura de un request
pub const MIN_REQUEST_BYTES: usize = 1024;

/// Niveles de log aceptados por `--log-level`
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "httplite")]
#[command(about = "Servidor HTTP/1.1 mínimo sobre TCP: echo, user-agent y archivos")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio donde se guardan/leen los archivos de `/files`
    /// (por defecto, el directorio temporal del sistema)
    #[arg(long, env = "FILES_DIR")]
    pub directory: Option<PathBuf>,

    /// Tamaño máximo en bytes que se lee de un request
    #[arg(long = "max-request-bytes", default_value = "65536", env = "MAX_REQUEST_BYTES")]
    pub max_request_bytes: usize,

    /// Nivel de log (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use httplite::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Directorio base del almacenamiento de archivos
    pub fn files_dir(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.max_request_bytes < MIN_REQUEST_BYTES {
            return Err(format!(
                "Max request bytes must be >= {}",
                MIN_REQUEST_BYTES
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(format!("Unknown log level: {}", self.log_level));
        }

        if let Some(dir) = &self.directory {
            if dir.as_os_str().is_empty() {
                return Err("Directory must not be empty".to_string());
            }
            if dir.exists() && !Path::new(dir).is_dir() {
                return Err(format!("Directory is not a directory: {}", dir.display()));
            }
        }

        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn print_summary(&self) {
        log::info!("Configuración:");
        log::info!("   Address:      {}", self.address());
        log::info!("   Files dir:    {}", self.files_dir().display());
        log::info!("   Max request:  {} bytes", self.max_request_bytes);
        log::info!("   Log level:    {}", self.log_level);
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "0.0.0.0".to_string(),
            directory: None,
            max_request_bytes: 65_536,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 4221);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.directory, None);
        assert_eq!(config.max_request_bytes, 65_536);
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_files_dir_defaults_to_temp() {
        let config = Config::default();
        assert_eq!(config.files_dir(), std::env::temp_dir());
    }

    #[test]
    fn test_files_dir_custom() {
        let mut config = Config::default();
        config.directory = Some(PathBuf::from("/custom/path"));
        assert_eq!(config.files_dir(), PathBuf::from("/custom/path"));
    }

    #[test]
    fn test_parse_cli_args() {
        let config = Config::parse_from([
            "httplite",
            "--directory",
            "/srv/files",
            "-p",
            "8080",
            "--log-level",
            "debug",
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.directory, Some(PathBuf::from("/srv/files")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_validate_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.host = "  ".to_string();
        assert!(config.validate().unwrap_err().contains("Host"));
    }

    #[test]
    fn test_validate_small_request_cap() {
        let mut config = Config::default();
        config.max_request_bytes = 10;
        assert!(config.validate().unwrap_err().contains("Max request bytes"));
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = Config::default();
        config.log_level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.log_level = "loud".to_string();
        assert!(config.validate().unwrap_err().contains("log level"));
    }

    #[test]
    fn test_validate_directory_is_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.directory = Some(file.path().to_path_buf());

        assert!(config.validate().unwrap_err().contains("not a directory"));
    }

    #[test]
    fn test_config_print_summary() {
        // Should not panic
        Config::default().print_summary();
    }
}
