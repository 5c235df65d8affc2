//! # Tipos de Contenido
//!
//! Solo se sirven dos extensiones. Cualquier otra cosa (incluyendo
//! directorios y archivos sin extensión) termina en un 301.

/// Tipo de contenido servible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Css,
}

impl ContentKind {
    /// Clasifica un path por su sufijo
    ///
    /// # Ejemplo
    /// ```
    /// use www_server::http::ContentKind;
    ///
    /// assert_eq!(ContentKind::from_path("/index.html"), Some(ContentKind::Html));
    /// assert_eq!(ContentKind::from_path("/base.css"), Some(ContentKind::Css));
    /// assert_eq!(ContentKind::from_path("/deep"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        if path.ends_with(".html") {
            Some(ContentKind::Html)
        } else if path.ends_with(".css") {
            Some(ContentKind::Css)
        } else {
            None
        }
    }

    /// Valor del header `Content-Type`
    pub fn mime(&self) -> &'static str {
        match self {
            ContentKind::Html => "text/html",
            ContentKind::Css => "text/css",
        }
    }
}
