//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{TicketRecord, TicketRecordHistoric};

/// Primary Ticket Ordering API
///
/// Both operations are pure permutations over caller-owned data: no shared
/// state, no blocking, safe to call concurrently with per-call inputs.
pub trait TicketOrderingApi: Send + Sync {
    /// Order live tickets ascending by maturation height.
    fn order_by_ticket_height(&self, records: Vec<TicketRecord>) -> Vec<TicketRecord>;

    /// Order historic tickets ascending by the height their spend was mined.
    fn order_by_spent_by_height(
        &self,
        records: Vec<TicketRecordHistoric>,
    ) -> Vec<TicketRecordHistoric>;
}
