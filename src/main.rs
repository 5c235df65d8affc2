//! # WWW Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Host, puerto y document root son
//! constantes: no se leen argumentos ni variables de entorno.

use anyhow::Context;
use log::{info, LevelFilter};
use www_server::config::Config;
use www_server::server::Server;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    info!("=================================");
    info!("  WWW Static HTTP/1.1 Server");
    info!("=================================");

    let config = Config::default();
    config.print_summary();

    let address = config.address();
    let server = Server::bind(config).with_context(|| format!("no se pudo escuchar en {}", address))?;

    // Bloquea para siempre; se termina con Ctrl-C
    server.run()
}
