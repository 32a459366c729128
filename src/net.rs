use std::net::TcpListener;

use crate::error::{Error, Result};

pub const MAX_PROBE_ATTEMPTS: u16 = 100;

/// Probes sequential TCP ports starting from `start` and returns the first
/// one that accepts a bind. The probe listener is dropped before the real
/// listener binds, mirroring how the service claims the port at startup.
pub fn find_free_port(start: u16, max_attempts: u16) -> Result<u16> {
    let end = start.saturating_add(max_attempts);

    for port in start..end {
        match TcpListener::bind(("0.0.0.0", port)) {
            Ok(_) => {
                if port != start {
                    tracing::info!(port, "found available port");
                }
                return Ok(port);
            }
            Err(_) if port == start => {
                tracing::info!(port, "default port in use, probing for the next free one");
            }
            Err(_) => {}
        }
    }

    Err(Error::NoFreePort { start, end })
}
