//! # Errores del Servidor
//! src/error.rs
//!
//! Taxonomía de errores. Solo los casos "método no soportado", "recurso
//! inexistente" y "extensión no servible" se recuperan con una respuesta
//! HTTP; todo lo que llega aquí termina la conexión sin respuesta.

use thiserror::Error;

/// Errores que pueden ocurrir durante el parsing de la request line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// El cliente no envió nada (o solo espacios en blanco)
    #[error("Empty request")]
    EmptyRequest,

    /// El buffer leído no es UTF-8 válido
    #[error("Request is not valid UTF-8")]
    InvalidEncoding,

    /// Menos de dos tokens: no hay método y path
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),
}

/// Errores del servidor (listener + handler)
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not resolve address {0}")]
    AddressResolution(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;
