//! # WWW Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo de archivos estáticos (HTML y CSS), de un solo
//! thread, que solo atiende el método GET.
//!
//! ## Arquitectura
//!
//! - `config`: Host, puerto, document root y opciones del socket
//! - `server`: Listener TCP secuencial
//! - `handler`: Procedimiento de decisión por conexión (405/404/301/200)
//! - `http`: Parsing del request y respuestas fijas
//! - `error`: Tipos de error
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use www_server::config::Config;
//! use www_server::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("Error al iniciar servidor");
//! server.run();
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod server;
