//! # Construcción de Respuestas HTTP
//!
//! Este módulo construye las respuestas fijas del servidor (301, 404, 405)
//! y las escribe en el socket.
//!
//! ## Formato
//!
//! ```text
//! HTTP/1.1 301 Moved Permanently\r\n
//! Content-Type: text/plain\r\n
//! Location: /deep/\r\n
//! \r\n
//! ```
//!
//! Los headers se escriben en el orden en que se agregan y con el nombre
//! exacto que se pasó (la 404 usa `Content-type`). No se agrega
//! `Content-Length` automáticamente.
//!
//! La respuesta 200 no pasa por aquí: ver `handler::serve_file`.

use super::StatusCode;
use std::io::{self, Write};

/// Body de la respuesta 404
pub const NOT_FOUND_BODY: &str = concat!(
    "<!DOCTYPE html>",
    "<head><meta charset=\"UTF-8\"></head>",
    "<html><body><center><h1>404 not found!</h1></center></body></html>\n",
);

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Headers en orden de escritura
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header al final de la lista
    ///
    /// # Ejemplo
    /// ```
    /// use www_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/css");
    /// assert_eq!(response.header("Content-Type"), Some("text/css"));
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// 405: solo la status line y la línea vacía
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::MethodNotAllowed)
    }

    /// 404 con el body HTML fijo
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
            .with_header("Content-type", "text/html")
            .with_body_bytes(NOT_FOUND_BODY.as_bytes().to_vec())
    }

    /// 301 hacia `path` con una `/` agregada
    ///
    /// El path se reproduce tal cual, aunque no tenga sentido como destino
    /// (ej: `/notes.txt` redirige a `/notes.txt/`).
    ///
    /// # Ejemplo
    /// ```
    /// use www_server::http::Response;
    ///
    /// let response = Response::moved_permanently("/deep");
    /// assert_eq!(response.header("Location"), Some("/deep/"));
    /// ```
    pub fn moved_permanently(path: &str) -> Self {
        Self::new(StatusCode::MovedPermanently)
            .with_header("Content-Type", "text/plain")
            .with_header("Location", &format!("{}/", path))
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 404 Not Found\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        result.extend_from_slice(self.status.status_line().as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Escribe la respuesta completa con un único `write_all`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Busca un header por nombre exacto
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
