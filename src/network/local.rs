//! Local interface address via a connected UDP socket.
//!
//! `connect` on a datagram socket sends nothing; it only asks the OS to pick
//! a route, which fixes the socket's local address to the outbound
//! interface.

use std::net::{IpAddr, UdpSocket};

use super::LookupError;
use crate::models::Lookup;

/// Address of the interface that would carry traffic to `probe_addr`.
pub fn local_ip(probe_addr: &str) -> Lookup {
    let result = probe_local_addr(probe_addr).map(|ip| ip.to_string());
    if let Err(ref e) = result {
        tracing::debug!("local IP lookup via {probe_addr} failed: {e}");
    }
    Lookup::from_result(result)
}

/// Fallible core of [`local_ip`]. The socket is closed on return.
pub fn probe_local_addr(probe_addr: &str) -> Result<IpAddr, LookupError> {
    let socket = UdpSocket::bind(("0.0.0.0", 0))?;
    socket.connect(probe_addr)?;
    Ok(socket.local_addr()?.ip())
}
