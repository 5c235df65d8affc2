//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta un `Server` real en un puerto efímero, con un document
//! root temporal, y le habla por TCP como lo haría un navegador.

use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tempfile::TempDir;
use www_server::config::Config;
use www_server::handler::Outcome;
use www_server::http::ContentKind;
use www_server::server::Server;

const INDEX: &str = "<!DOCTYPE html>\n<html><body><h1>Hola</h1></body></html>\n";
const STYLE: &str = "body {\n  color: #333;\n}\n";

const NOT_FOUND: &str = "HTTP/1.1 404 Not Found\r\n\
                         Content-type: text/html\r\n\r\n\
                         <!DOCTYPE html><head><meta charset=\"UTF-8\"></head>\
                         <html><body><center><h1>404 not found!</h1></center></body></html>\n";

/// Helper: crea el document root de prueba
fn document_root() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::write(dir.path().join("base.css"), STYLE).unwrap();
    fs::write(dir.path().join("notes.txt"), "notas").unwrap();
    fs::create_dir(dir.path().join("deep")).unwrap();
    fs::write(dir.path().join("deep").join("index.html"), "<p>deep</p>\n").unwrap();
    dir
}

/// Helper: levanta el servidor y atiende exactamente `connections` conexiones
fn start_server(root: &TempDir, connections: usize) -> (SocketAddr, JoinHandle<Vec<Option<Outcome>>>) {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        document_root: root.path().to_str().unwrap().to_string(),
        ..Config::default()
    };

    let server = Server::bind(config).expect("bind");
    let addr = server.local_addr().unwrap();

    let handle = thread::spawn(move || (0..connections).map(|_| server.handle_next()).collect());

    (addr, handle)
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.write_all(raw).unwrap();
    stream.flush().unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

/// Helper: GET con headers típicos de un cliente
fn get(addr: SocketAddr, path: &str) -> String {
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost:8080\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n",
        path
    );
    String::from_utf8(send_raw(addr, request.as_bytes())).unwrap()
}

#[test]
fn test_root_serves_index() {
    let root = document_root();
    let (addr, server) = start_server(&root, 1);

    let response = get(addr, "/");

    assert_eq!(
        response,
        format!("HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n{}", INDEX)
    );
    assert_eq!(server.join().unwrap(), vec![Some(Outcome::Served(ContentKind::Html))]);
}

#[test]
fn test_css_matches_file_on_disk() {
    let root = document_root();
    let (addr, server) = start_server(&root, 1);

    let response = get(addr, "/base.css");

    let header = "HTTP/1.1 200 OK\r\nContent-Type: text/css\r\n\r\n";
    assert!(response.starts_with(header), "got: {}", response);
    let on_disk = fs::read(root.path().join("base.css")).unwrap();
    assert_eq!(response[header.len()..].as_bytes(), &on_disk[..]);

    server.join().unwrap();
}

#[test]
fn test_missing_file_is_404() {
    let root = document_root();
    let (addr, server) = start_server(&root, 1);

    assert_eq!(get(addr, "/missing.html"), NOT_FOUND);
    assert_eq!(server.join().unwrap(), vec![Some(Outcome::NotFound)]);
}

#[test]
fn test_post_is_405() {
    let root = document_root();
    let (addr, server) = start_server(&root, 1);

    let response = send_raw(addr, b"POST /index.html HTTP/1.1\r\nContent-Length: 0\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
    server.join().unwrap();
}

#[test]
fn test_directory_without_slash_redirects() {
    let root = document_root();
    let (addr, server) = start_server(&root, 2);

    assert_eq!(
        get(addr, "/deep"),
        "HTTP/1.1 301 Moved Permanently\r\nContent-Type: text/plain\r\nLocation: /deep/\r\n\r\n"
    );

    // Seguir la redirección
    assert!(get(addr, "/deep/").ends_with("\r\n\r\n<p>deep</p>\n"));

    server.join().unwrap();
}

#[test]
fn test_other_extension_redirects_verbatim() {
    let root = document_root();
    let (addr, server) = start_server(&root, 1);

    let response = get(addr, "/notes.txt");
    assert!(response.starts_with("HTTP/1.1 301 Moved Permanently\r\n"));
    assert!(response.contains("Location: /notes.txt/\r\n"));

    server.join().unwrap();
}

#[test]
fn test_same_request_twice_is_identical() {
    let root = document_root();
    let (addr, server) = start_server(&root, 2);

    let first = get(addr, "/index.html");
    let second = get(addr, "/index.html");

    assert_eq!(first, second);
    server.join().unwrap();
}

#[test]
fn test_malformed_request_does_not_stop_server() {
    let root = document_root();
    let (addr, server) = start_server(&root, 2);

    // Sin path: la conexión se cierra sin respuesta
    let response = send_raw(addr, b"GET\r\n\r\n");
    assert!(response.is_empty());

    // La siguiente conexión se atiende normalmente
    assert!(get(addr, "/base.css").starts_with("HTTP/1.1 200 OK\r\n"));

    assert_eq!(
        server.join().unwrap(),
        vec![None, Some(Outcome::Served(ContentKind::Css))]
    );
}

#[test]
fn test_requests_served_in_arrival_order() {
    let root = document_root();
    let (addr, server) = start_server(&root, 3);

    get(addr, "/missing.html");
    send_raw(addr, b"PUT / HTTP/1.1\r\n\r\n");
    get(addr, "/deep");

    assert_eq!(
        server.join().unwrap(),
        vec![
            Some(Outcome::NotFound),
            Some(Outcome::MethodRejected),
            Some(Outcome::Redirected),
        ]
    );
}
