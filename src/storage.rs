//! # Almacenamiento de Archivos
//! src/storage.rs
//!
//! Lee y escribe bodies de requests bajo un directorio base. El nombre
//! del archivo sale del path (`/files/<nombre>`) y se usa tal cual, sin
//! extensión ni metadatos.
//!
//! Los nombres absolutos o con componentes `..`/`.` se rechazan para que
//! ninguna ruta escape del directorio base. No hay locking: dos POST
//! concurrentes al mismo nombre compiten y gana el último en escribir.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errores del almacenamiento
#[derive(Debug, Error)]
pub enum StoreError {
    /// El archivo no existe
    #[error("File not found: {0}")]
    NotFound(String),

    /// El nombre intenta salir del directorio base
    #[error("Invalid filename: {0}")]
    InvalidName(String),

    /// Cualquier otro fallo de E/S
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Almacenamiento de archivos anclado a un directorio base
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Crea un almacenamiento sobre `base_dir`
    ///
    /// El directorio no se crea aquí; si no existe las escrituras fallan.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Lee el contenido completo de un archivo
    ///
    /// # Ejemplo
    /// ```
    /// use httplite::storage::{FileStore, StoreError};
    ///
    /// let store = FileStore::new(std::env::temp_dir());
    /// assert!(matches!(store.read("../etc/passwd"), Err(StoreError::InvalidName(_))));
    /// ```
    pub fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;

        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(name.to_string()),
            _ => StoreError::Io(e),
        })
    }

    /// Escribe (o sobrescribe) un archivo con los bytes dados
    pub fn write(&self, name: &str, data: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        fs::write(&path, data)?;
        log::debug!("Guardados {} bytes en {}", data.len(), path.display());
        Ok(())
    }

    /// Convierte el nombre en una ruta bajo el directorio base
    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(name);

        let only_normal = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        if name.is_empty() || !only_normal || name.split('/').any(|s| s == "." || s == "..") {
            return Err(StoreError::InvalidName(name.to_string()));
        }

        Ok(self.base_dir.join(relative))
    }
}
