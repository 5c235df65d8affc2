//! # Manejo de una Conexión
//! src/handler.rs
//!
//! Transforma una conexión en exactamente una respuesta:
//!
//! ```text
//! START → READ → PARSED ─┬→ METHOD_REJECTED (405)
//!                        └→ PATH_RESOLVED ─┬→ NOT_FOUND  (404)
//!                                          ├→ REDIRECTED (301)
//!                                          └→ SERVED     (200)
//! ```
//!
//! Los errores de parsing o de I/O se propagan: la conexión se abandona sin
//! respuesta y el listener sigue con la siguiente.
//!
//! Limitación conocida: se hace una sola lectura de como máximo
//! `Config::read_buffer_size` bytes. Lo que venga después se ignora sin
//! avisar.

use crate::config::Config;
use crate::error::Result;
use crate::http::{ContentKind, Request, Response, StatusCode};
use log::debug;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Archivo que se agrega a los paths que terminan en `/`
pub const INDEX_FILE: &str = "index.html";

/// Estado terminal de una conexión atendida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 405: método distinto de GET
    MethodRejected,
    /// 404: el recurso no existe
    NotFound,
    /// 301: existe pero no es .html ni .css
    Redirected,
    /// 200: archivo servido
    Served(ContentKind),
}

impl Outcome {
    /// Código de estado que se envió al cliente
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::MethodRejected => StatusCode::MethodNotAllowed,
            Outcome::NotFound => StatusCode::NotFound,
            Outcome::Redirected => StatusCode::MovedPermanently,
            Outcome::Served(_) => StatusCode::Ok,
        }
    }
}

/// Recurso del sistema de archivos asociado a un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Path del request después de agregar `index.html`
    effective_path: String,

    /// Document root concatenado con el effective path
    location: PathBuf,
}

impl Resource {
    /// Resuelve el path del request contra el document root
    ///
    /// La ubicación es una concatenación de strings, no un `join`: el path
    /// del request siempre empieza con `/`.
    ///
    /// # Ejemplo
    /// ```
    /// use www_server::handler::Resource;
    ///
    /// let resource = Resource::resolve("./www", "/deep/");
    /// assert_eq!(resource.effective_path(), "/deep/index.html");
    /// assert_eq!(resource.location().to_str(), Some("./www/deep/index.html"));
    /// ```
    pub fn resolve(document_root: &str, request_path: &str) -> Self {
        let mut effective_path = request_path.to_string();
        if effective_path.ends_with('/') {
            effective_path.push_str(INDEX_FILE);
        }

        let location = PathBuf::from(format!("{}{}", document_root, effective_path));

        Self {
            effective_path,
            location,
        }
    }

    pub fn effective_path(&self) -> &str {
        &self.effective_path
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Se consulta el sistema de archivos en cada llamada (sin caché)
    pub fn exists(&self) -> bool {
        self.location.exists()
    }
}

/// Resultado de atender una conexión: el request leído y el estado final
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handled {
    pub request: Request,
    pub outcome: Outcome,
}

/// Atiende una conexión completa y retorna el estado terminal alcanzado
///
/// Se escribe exactamente una respuesta, salvo que falle el parsing o la
/// lectura del archivo.
pub fn handle<S: Read + Write>(conn: &mut S, config: &Config) -> Result<Handled> {
    let mut buffer = vec![0u8; config.read_buffer_size];
    let bytes_read = conn.read(&mut buffer)?;
    debug!("{} bytes leídos", bytes_read);

    let request = Request::parse(&buffer[..bytes_read])?;
    let outcome = respond(conn, &request, config)?;

    Ok(Handled { request, outcome })
}

fn respond<W: Write>(conn: &mut W, request: &Request, config: &Config) -> Result<Outcome> {
    if !request.is_get() {
        Response::method_not_allowed().write_to(conn)?;
        return Ok(Outcome::MethodRejected);
    }

    let resource = Resource::resolve(&config.document_root, request.path());

    if !resource.exists() {
        Response::not_found().write_to(conn)?;
        return Ok(Outcome::NotFound);
    }

    match ContentKind::from_path(resource.effective_path()) {
        Some(kind) => {
            serve_file(conn, resource.location(), kind)?;
            Ok(Outcome::Served(kind))
        }
        None => {
            Response::moved_permanently(resource.effective_path()).write_to(conn)?;
            Ok(Outcome::Redirected)
        }
    }
}

/// Envía un 200 con el contenido del archivo
///
/// Son tres escrituras separadas, en este orden: status line, header
/// `Content-Type` con la línea vacía, y el contenido. La status line sale
/// antes de leer el archivo, así que si la lectura falla el cliente recibe
/// una respuesta incompleta.
///
/// El archivo se lee como texto (debe ser UTF-8) y se envía byte por byte.
pub fn serve_file<W: Write>(conn: &mut W, location: &Path, kind: ContentKind) -> io::Result<()> {
    conn.write_all(StatusCode::Ok.status_line().as_bytes())?;

    let content = fs::read_to_string(location)?.into_bytes();

    conn.write_all(format!("Content-Type: {}\r\n\r\n", kind.mime()).as_bytes())?;
    conn.write_all(&content)?;
    conn.flush()
}
