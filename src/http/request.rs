//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Solo interesan los dos primeros tokens del buffer leído: el método y el
//! path. La versión HTTP, los headers y el body se ignoran.
//!
//! ```text
//! GET /style.css HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! \r\n
//! ```

use crate::error::ParseError;

/// Único método que el servidor atiende
pub const GET: &str = "GET";

/// Request derivado de los primeros bytes de una conexión
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método tal como llegó (se compara exacto, sensible a mayúsculas)
    method: String,

    /// Path de la petición (ej: "/index.html")
    path: String,
}

impl Request {
    /// Parsea un request desde el buffer leído del socket
    ///
    /// Se eliminan los espacios en blanco de los extremos, se decodifica como
    /// UTF-8 y se separa por espacios en blanco. Token 0 = método,
    /// token 1 = path.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use www_server::http::Request;
    ///
    /// let request = Request::parse(b"GET /style.css HTTP/1.1\r\n\r\n").unwrap();
    /// assert!(request.is_get());
    /// assert_eq!(request.path(), "/style.css");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let trimmed = buffer.trim_ascii();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let text = std::str::from_utf8(trimmed).map_err(|_| ParseError::InvalidEncoding)?;

        let mut tokens = text.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(method), Some(path)) => Ok(Request {
                method: method.to_string(),
                path: path.to_string(),
            }),
            _ => Err(ParseError::MalformedRequestLine(text.to_string())),
        }
    }

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `true` solo si el método es exactamente `GET`
    pub fn is_get(&self) -> bool {
        self.method == GET
    }
}
