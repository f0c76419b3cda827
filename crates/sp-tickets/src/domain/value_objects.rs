//! Value objects for Ticket Ordering

/// Type aliases for clarity
pub type TicketId = String;
pub type BlockHeight = u32;
