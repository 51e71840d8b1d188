//! # Logging
//! src/logger.rs
//!
//! Instala un `TermLogger` de simplelog con el nivel configurado.

use crate::config::Config;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::str::FromStr;

/// Convierte el nivel configurado; niveles desconocidos caen en `Info`
pub fn level_from_str(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

/// Inicializa el logger global
///
/// Falla si ya había un logger instalado.
pub fn init_logger(cfg: &Config) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Debug)
        .build();

    TermLogger::init(
        level_from_str(&cfg.log_level),
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
}
