//! # Headers HTTP
//! src/http/headers.rs
//!
//! Mapa de headers compartido por requests y responses.
//!
//! Reglas:
//! - Los nombres distinguen mayúsculas/minúsculas (`User-Agent` != `user-agent`).
//! - Si un nombre se repite, gana la última escritura.
//! - Al serializar se respeta el orden de la primera inserción, así la
//!   salida es determinista.

/// Colección ordenada de pares `nombre: valor`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Crea un mapa vacío
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o reemplaza un header
    ///
    /// # Ejemplo
    /// ```
    /// use httplite::http::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.insert("Host", "a");
    /// headers.insert("Host", "b");
    /// assert_eq!(headers.get("Host"), Some("b"));
    /// assert_eq!(headers.len(), 1);
    /// ```
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Obtiene el valor de un header
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Itera en orden de inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
