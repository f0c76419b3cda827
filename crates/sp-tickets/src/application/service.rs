//! Ticket Ordering Service
//!
//! Main service implementing TicketOrderingApi. Dispatches between the
//! sequential and parallel sort variants based on collection size.

use crate::algorithms::{par_sort_by_key, sort_by_key, spent_by_height_key, ticket_height_key};
use crate::config::OrderingConfig;
use crate::domain::entities::{TicketRecord, TicketRecordHistoric};
use crate::ports::inbound::TicketOrderingApi;
use tracing::debug;

/// Ticket Ordering Service
pub struct TicketOrderingService {
    config: OrderingConfig,
}

impl TicketOrderingService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: OrderingConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: OrderingConfig) -> Self {
        Self { config }
    }

    fn sort_records<T, K, F>(&self, mut records: Vec<T>, key: F) -> Vec<T>
    where
        T: Send,
        K: Ord + Send,
        F: Fn(&T) -> K + Sync,
    {
        if records.len() >= self.config.parallel_threshold {
            debug!(record_count = records.len(), "Sorting tickets in parallel");
            par_sort_by_key(&mut records, key);
        } else {
            sort_by_key(&mut records, key);
        }
        records
    }
}

impl Default for TicketOrderingService {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketOrderingApi for TicketOrderingService {
    fn order_by_ticket_height(&self, records: Vec<TicketRecord>) -> Vec<TicketRecord> {
        self.sort_records(records, ticket_height_key)
    }

    fn order_by_spent_by_height(
        &self,
        records: Vec<TicketRecordHistoric>,
    ) -> Vec<TicketRecordHistoric> {
        self.sort_records(records, spent_by_height_key)
    }
}
