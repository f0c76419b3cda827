//! Core entities for Ticket Ordering
//!
//! Records are immutable value types created by the ticket-state collaborator
//! and discarded once the response is serialized. Ordering permutes positions
//! only, never record content.

use super::value_objects::{BlockHeight, TicketId};
use serde::{Deserialize, Serialize};

/// A live ticket: purchased, matured, not yet spent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Opaque content-addressed ticket identifier
    pub ticket: TicketId,
    /// Block height at which the ticket matured
    pub ticket_height: BlockHeight,
}

impl TicketRecord {
    pub fn new(ticket: impl Into<TicketId>, ticket_height: BlockHeight) -> Self {
        Self {
            ticket: ticket.into(),
            ticket_height,
        }
    }
}

/// A resolved ticket: voted, expired, or revoked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecordHistoric {
    /// Opaque content-addressed ticket identifier
    pub ticket: TicketId,
    /// Transaction that spent the ticket
    pub spent_by: TicketId,
    /// Block height at which the spend was mined
    pub spent_by_height: BlockHeight,
    /// Block height at which the ticket originally matured
    pub ticket_height: BlockHeight,
}

impl TicketRecordHistoric {
    pub fn new(
        ticket: impl Into<TicketId>,
        spent_by: impl Into<TicketId>,
        spent_by_height: BlockHeight,
        ticket_height: BlockHeight,
    ) -> Self {
        Self {
            ticket: ticket.into(),
            spent_by: spent_by.into(),
            spent_by_height,
            ticket_height,
        }
    }
}
