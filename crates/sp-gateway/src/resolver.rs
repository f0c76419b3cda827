//! Client address resolution core.
//!
//! Pure and framework-independent: the request is abstracted behind
//! [`ClientAddressQuery`], and the trusted proxy header name is an explicit
//! parameter. Resolution is total over all reachable inputs and degrades to
//! the empty string rather than failing.

use http::HeaderMap;
use std::net::SocketAddr;
use tracing::debug;

/// Read-only view of an inbound request: named header lookup plus the raw
/// peer-address string.
///
/// Header names are matched ASCII case-insensitively on the stored name, so
/// names that are not valid HTTP tokens (e.g. containing spaces) still match.
#[derive(Clone, Debug, Default)]
pub struct ClientAddressQuery {
    headers: Vec<(String, String)>,
    peer_addr: String,
}

impl ClientAddressQuery {
    pub fn new(peer_addr: impl Into<String>) -> Self {
        Self {
            headers: Vec::new(),
            peer_addr: peer_addr.into(),
        }
    }

    /// Builder-style header attachment.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Bridge from the HTTP pipeline's typed headers and peer socket address.
    pub fn from_parts(headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        let mut query = Self::new(peer.map(|p| p.to_string()).unwrap_or_default());
        for (name, value) in headers {
            if let Ok(value) = value.to_str() {
                query.headers.push((name.as_str().to_string(), value.to_string()));
            }
        }
        query
    }

    /// Value of the first header whose name matches `name`, ignoring ASCII
    /// case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Raw peer address as reported by the connection, possibly `host:port`,
    /// possibly empty when unknown.
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Resolve the client address for a request.
///
/// A non-empty value of the trusted proxy header wins over the raw peer
/// address; the peer address wins over nothing. A candidate in `host:port`
/// form is stripped to `host`; anything else (bare hostname, unbracketed
/// IPv6 literal, host-only) is returned unchanged. An unknown address
/// resolves to the empty string.
pub fn resolve_client_addr(query: &ClientAddressQuery, trusted_header: &str) -> String {
    let mut candidate = query.peer_addr();

    if !trusted_header.is_empty() {
        if let Some(value) = query.header(trusted_header) {
            if !value.is_empty() {
                debug!(
                    header = trusted_header,
                    "Using trusted proxy header for client address"
                );
                candidate = value;
            }
        }
    }

    match split_host_port(candidate) {
        Some((host, _port)) => host.to_string(),
        None => candidate.to_string(),
    }
}

/// Split `host:port`, following the acceptance rules reverse proxies rely
/// on: exactly one unbracketed colon splits host from port, a bracketed IPv6
/// literal may be followed by `:port`, and anything else is not `host:port`.
/// Port digits are not validated.
fn split_host_port(hostport: &str) -> Option<(&str, &str)> {
    let colon = hostport.rfind(':')?;

    if hostport.starts_with('[') {
        // Bracketed form: "[host]:port". The port colon must immediately
        // follow the closing bracket.
        let end = hostport.find(']')?;
        if end + 1 != colon {
            return None;
        }
        return Some((&hostport[1..end], &hostport[colon + 1..]));
    }

    let host = &hostport[..colon];
    // A second colon means a bare IPv6 literal, not host:port
    if host.contains(':') || host.contains('[') || host.contains(']') {
        return None;
    }
    Some((host, &hostport[colon + 1..]))
}
