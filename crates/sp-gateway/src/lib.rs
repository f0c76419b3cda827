//! # SP-Gateway: Client Address Resolution
//!
//! Resolves the originating client's address from an HTTP request for the
//! staking-pool web controller, preferring an operator-configured trusted
//! reverse-proxy header over the raw connection address.
//!
//! ## Architecture
//!
//! - **Resolver**: Pure, framework-independent resolution core
//! - **Middleware**: Tower layer wiring the resolver into the request pipeline
//! - **Config**: Trusted proxy header name, threaded in explicitly

pub mod config;
pub mod middleware;
pub mod resolver;

pub use config::{GatewayConfig, GatewayConfigError, DEFAULT_REAL_IP_HEADER};
pub use middleware::{ClientAddr, ClientAddrLayer, ClientAddrService};
pub use resolver::{resolve_client_addr, ClientAddressQuery};
