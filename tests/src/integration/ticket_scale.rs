//! # Ticket Ordering at Scale
//!
//! Correctness of both ordering policies over collections the size of a busy
//! pool's ticket listing: tens of thousands of records keyed by heights
//! spread over many blocks.

#[cfg(test)]
mod tests {
    use rand::Rng;
    use sp_tickets::{
        TicketOrderingApi, TicketOrderingService, TicketRecord, TicketRecordHistoric,
    };

    const HEXVALS: &[u8] = b"123456789abcdef";

    /// Random 64-character hex-like ticket identifier
    fn rand_hash_string(rng: &mut impl Rng) -> String {
        (0..64)
            .map(|_| HEXVALS[rng.gen_range(0..HEXVALS.len())] as char)
            .collect()
    }

    fn is_nondecreasing(keys: &[u32]) -> bool {
        keys.windows(2).all(|w| w[0] <= w[1])
    }

    fn sorted_copy(keys: &[u32]) -> Vec<u32> {
        let mut keys = keys.to_vec();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_sort_by_ticket_height_at_scale() {
        // A large list of tickets, matured over many blocks
        let ticket_count = 55_000;
        let max_tx_height = 123_000u32;

        let mut rng = rand::thread_rng();
        let records: Vec<TicketRecord> = (0..ticket_count)
            .map(|_| {
                TicketRecord::new(
                    rand_hash_string(&mut rng),
                    rng.gen_range(0..max_tx_height),
                )
            })
            .collect();

        let input_keys: Vec<u32> = records.iter().map(|r| r.ticket_height).collect();

        let service = TicketOrderingService::new();
        let ordered = service.order_by_ticket_height(records);

        let output_keys: Vec<u32> = ordered.iter().map(|r| r.ticket_height).collect();
        assert!(is_nondecreasing(&output_keys));
        assert_eq!(output_keys, sorted_copy(&input_keys));
        assert_eq!(ordered.len(), ticket_count);
    }

    #[test]
    fn test_sort_by_spent_by_height_at_scale() {
        let ticket_count = 55_000;
        let max_tx_height = 123_000u32;

        let mut rng = rand::thread_rng();
        let records: Vec<TicketRecordHistoric> = (0..ticket_count)
            .map(|_| {
                TicketRecordHistoric::new(
                    rand_hash_string(&mut rng),
                    rand_hash_string(&mut rng),
                    rng.gen_range(0..max_tx_height),
                    rng.gen_range(0..max_tx_height),
                )
            })
            .collect();

        let input_keys: Vec<u32> = records.iter().map(|r| r.spent_by_height).collect();

        let service = TicketOrderingService::new();
        let ordered = service.order_by_spent_by_height(records);

        let output_keys: Vec<u32> = ordered.iter().map(|r| r.spent_by_height).collect();
        assert!(is_nondecreasing(&output_keys));
        assert_eq!(output_keys, sorted_copy(&input_keys));
    }

    #[test]
    fn test_sorting_a_sorted_collection_is_stable_on_keys() {
        let mut rng = rand::thread_rng();
        let records: Vec<TicketRecord> = (0..10_000)
            .map(|_| TicketRecord::new(rand_hash_string(&mut rng), rng.gen_range(0..53_000)))
            .collect();

        let service = TicketOrderingService::new();
        let once = service.order_by_ticket_height(records);
        let once_keys: Vec<u32> = once.iter().map(|r| r.ticket_height).collect();

        let twice = service.order_by_ticket_height(once);
        let twice_keys: Vec<u32> = twice.iter().map(|r| r.ticket_height).collect();

        assert_eq!(once_keys, twice_keys);
    }
}
