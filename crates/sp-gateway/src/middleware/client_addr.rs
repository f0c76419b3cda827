//! Client address middleware.
//!
//! Resolves the originating client address once per request and exposes it
//! to downstream handlers through the [`ClientAddr`] request extension.

use crate::config::GatewayConfig;
use crate::resolver::{resolve_client_addr, ClientAddressQuery};
use axum::{body::Body, extract::ConnectInfo, http::Request, response::Response};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::debug;

/// Resolved client address, stored in request extensions. Empty when the
/// address could not be determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientAddr(pub String);

/// Client address layer
#[derive(Clone)]
pub struct ClientAddrLayer {
    config: Arc<GatewayConfig>,
}

impl ClientAddrLayer {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create with no trusted proxy header (always use the peer address)
    pub fn direct_only() -> Self {
        Self::new(GatewayConfig {
            real_ip_header: String::new(),
        })
    }
}

impl Default for ClientAddrLayer {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

impl<S> Layer<S> for ClientAddrLayer {
    type Service = ClientAddrService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientAddrService {
            inner,
            config: Arc::clone(&self.config),
        }
    }
}

/// Client address service
#[derive(Clone)]
pub struct ClientAddrService<S> {
    inner: S,
    config: Arc<GatewayConfig>,
}

impl<S> Service<Request<Body>> for ClientAddrService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let config = Arc::clone(&self.config);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let peer = req
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ci| ci.0);

            let query = ClientAddressQuery::from_parts(req.headers(), peer);
            let addr = resolve_client_addr(&query, &config.real_ip_header);
            debug!(client_addr = %addr, "Resolved client address");

            req.extensions_mut().insert(ClientAddr(addr));
            inner.call(req).await
        })
    }
}
