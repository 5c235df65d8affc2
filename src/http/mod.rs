//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP/1.1 que necesita el servidor:
//!
//! - Lectura del método y el path de la request line
//! - Construcción de las respuestas fijas (301, 404, 405)
//! - Status codes y tipos de contenido servibles
//!
//! ### Formato de Request (solo se usan los dos primeros tokens)
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! No hay keep-alive ni chunked encoding: una respuesta por conexión.

pub mod content;
pub mod request;
pub mod response;
pub mod status;

pub use content::ContentKind;
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
