//! # SP-Tickets: Ticket Ordering Subsystem
//!
//! Orders in-memory collections of staking-pool ticket records for
//! chronological display: live tickets by maturation height, historic
//! (voted/expired/revoked) tickets by the height their spend was mined.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (TicketRecord, TicketRecordHistoric)
//! - **Algorithms**: Key-parameterized comparison sort, sequential and parallel
//! - **Ports**: Inbound (TicketOrderingApi)
//! - **Application**: Service orchestration

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::TicketOrderingService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::value_objects::*;
pub use ports::inbound::TicketOrderingApi;
