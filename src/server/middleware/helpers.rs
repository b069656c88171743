//! Helper functions for middleware

use actix_web::dev::ServiceRequest;
use std::net::{IpAddr, SocketAddr};

/// Identify the client for rate limiting
///
/// The socket peer address is used unless `trust_forwarded_for` is set, in
/// which case `Forwarded` / `X-Forwarded-For` win. Only enable that behind a
/// proxy that overwrites those headers.
pub fn client_id(req: &ServiceRequest, trust_forwarded_for: bool) -> String {
    let info = req.connection_info();
    let raw = if trust_forwarded_for {
        info.realip_remote_addr()
    } else {
        info.peer_addr()
    };

    raw.map(normalize_ip).unwrap_or_else(|| "unknown".to_string())
}

/// Strip ports and brackets so one host maps to one key
pub fn normalize_ip(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return addr.ip().to_string();
    }
    if let Ok(ip) = raw.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>() {
        return ip.to_string();
    }
    raw.to_string()
}
