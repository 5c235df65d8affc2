//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivos estáticos.
//!
//! Todos los valores son constantes compiladas: no se leen argumentos de
//! línea de comandos, variables de entorno ni archivos de configuración.
//!
//! ```rust
//! use www_server::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.address(), "localhost:8080");
//! ```

use log::info;

/// Host en el que escucha el servidor
pub const HOST: &str = "localhost";

/// Puerto en el que escucha el servidor
pub const PORT: u16 = 8080;

/// Directorio desde el que se sirven los archivos
pub const DOCUMENT_ROOT: &str = "./www";

/// Máximo de bytes leídos por conexión (una sola lectura)
pub const READ_BUFFER_SIZE: usize = 1024;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host/IP en el que escucha
    pub host: String,

    /// Puerto en el que escucha el servidor
    pub port: u16,

    /// Prefijo que se concatena al path del request
    pub document_root: String,

    /// Activa SO_REUSEADDR en el socket antes del bind, para poder
    /// reiniciar el servidor sin esperar a que expire TIME_WAIT
    pub reuse_address: bool,

    /// Tamaño del buffer de lectura. Requests más grandes se truncan.
    pub read_buffer_size: usize,
}

impl Config {
    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use www_server::config::Config;
    ///
    /// let mut config = Config::default();
    /// config.host = "127.0.0.1".to_string();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.document_root.is_empty() {
            return Err("Document root must not be empty".to_string());
        }

        if self.read_buffer_size == 0 {
            return Err("Read buffer size must be >= 1".to_string());
        }

        Ok(())
    }

    /// Registra un resumen de la configuración en el log
    pub fn print_summary(&self) {
        info!("Configuración:");
        info!("   Address:       {}", self.address());
        info!("   Document root: {}", self.document_root);
        info!("   Reuse address: {}", self.reuse_address);
        info!("   Read buffer:   {} bytes", self.read_buffer_size);
    }
}

impl Default for Config {
    /// Configuración por defecto (la del despliegue de referencia)
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            document_root: DOCUMENT_ROOT.to_string(),
            reuse_address: true,
            read_buffer_size: READ_BUFFER_SIZE,
        }
    }
}
