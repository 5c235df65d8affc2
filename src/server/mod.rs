//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el listener TCP que:
//! 1. Hace bind en un host y puerto fijos
//! 2. Acepta conexiones de a una
//! 3. Delega cada conexión al handler antes de aceptar la siguiente

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
