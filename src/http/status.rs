//! # Códigos de Estado HTTP
//!
//! Este módulo define los únicos cuatro códigos que el servidor envía:
//!
//! - **2xx**: Éxito (200 OK)
//! - **3xx**: Redirección (301 Moved Permanently)
//! - **4xx**: Error del cliente (404, 405)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - Se sirve un archivo .html o .css
    Ok = 200,

    /// 301 Moved Permanently - El recurso existe pero no es .html/.css
    MovedPermanently = 301,

    /// 404 Not Found - El recurso no existe bajo el document root
    NotFound = 404,

    /// 405 Method Not Allowed - Cualquier método distinto de GET
    MethodNotAllowed = 405,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use www_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use www_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }

    /// Status line completa, incluyendo el CRLF final
    ///
    /// # Ejemplo
    /// ```
    /// use www_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.1 200 OK\r\n");
    /// ```
    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {}\r\n", self)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::MovedPermanently.as_u16(), 301);
        assert_eq!(StatusCode::NotFound.as_u16(), 404);
        assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.1 200 OK\r\n");
        assert_eq!(
            StatusCode::MovedPermanently.status_line(),
            "HTTP/1.1 301 Moved Permanently\r\n"
        );
        assert_eq!(StatusCode::NotFound.status_line(), "HTTP/1.1 404 Not Found\r\n");
        assert_eq!(
            StatusCode::MethodNotAllowed.status_line(),
            "HTTP/1.1 405 Method Not Allowed\r\n"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::MethodNotAllowed.to_string(), "405 Method Not Allowed");
    }
}
