//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Acepta una conexión, la atiende por completo y recién entonces acepta la
//! siguiente. No hay threads, timeouts ni apagado ordenado: el proceso
//! termina solo por una señal externa.

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::handler::{self, Handled, Outcome};
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

/// Backlog del `listen`, el mismo que usa `std::net::TcpListener::bind`
const LISTEN_BACKLOG: i32 = 128;

/// Servidor HTTP de archivos estáticos
pub struct Server {
    config: Config,
    listener: TcpListener,
}

impl Server {
    /// Crea el socket, aplica `SO_REUSEADDR` según la configuración, hace el
    /// bind y empieza a escuchar
    ///
    /// Falla si el puerto ya está en uso.
    pub fn bind(config: Config) -> Result<Self> {
        config.validate().map_err(ServerError::InvalidConfig)?;

        let address = config.address();
        // Se prefiere IPv4: "localhost" puede resolver primero a ::1
        let candidates: Vec<SocketAddr> = address.to_socket_addrs()?.collect();
        let addr = candidates
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| candidates.first())
            .copied()
            .ok_or_else(|| ServerError::AddressResolution(address.clone()))?;

        info!("Iniciando servidor en {} ({})", address, addr);
        let listener = create_listener(&addr, config.reuse_address)?;
        info!("Servidor escuchando en {}", listener.local_addr()?);

        Ok(Self { config, listener })
    }

    /// Dirección real del socket (útil cuando se usa el puerto 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Loop infinito: acepta y atiende conexiones en orden de llegada
    pub fn run(&self) -> ! {
        info!("Modo secuencial: una conexión a la vez");
        loop {
            self.handle_next();
        }
    }

    /// Acepta una conexión y la atiende hasta escribir su respuesta
    ///
    /// Los errores se registran y nunca detienen al servidor. Retorna el
    /// estado terminal, o `None` si la conexión terminó sin respuesta.
    pub fn handle_next(&self) -> Option<Outcome> {
        match self.listener.accept() {
            Ok((stream, peer)) => {
                debug!("Nueva conexión desde: {}", peer);
                self.handle_connection(stream, peer)
            }
            Err(e) => {
                error!("Error al aceptar conexión: {}", e);
                None
            }
        }
    }

    fn handle_connection(&self, mut stream: TcpStream, peer: SocketAddr) -> Option<Outcome> {
        let start = Instant::now();

        // El stream se cierra al salir de esta función
        match handler::handle(&mut stream, &self.config) {
            Ok(handled) => {
                info!("{}", access_line(peer, &handled, start.elapsed()));
                Some(handled.outcome)
            }
            Err(e) => {
                warn!("{} conexión abandonada sin respuesta: {}", peer, e);
                None
            }
        }
    }
}

/// Línea de log por conexión: peer, request line, estado y latencia
///
/// Formato: `127.0.0.1:53211 "GET /deep" 301 Moved Permanently (0.21ms)`
fn access_line(peer: SocketAddr, handled: &Handled, elapsed: Duration) -> String {
    format!(
        "{} \"{} {}\" {} ({:.2}ms)",
        peer,
        handled.request.method(),
        handled.request.path(),
        handled.outcome.status(),
        elapsed.as_secs_f64() * 1000.0
    )
}

/// Crea un listener TCP con `SO_REUSEADDR` explícito
fn create_listener(addr: &SocketAddr, reuse_address: bool) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(reuse_address)?;
    socket.bind(&(*addr).into())?;
    socket.listen(LISTEN_BACKLOG)?;

    Ok(socket.into())
}
