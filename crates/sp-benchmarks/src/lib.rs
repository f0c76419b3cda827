//! Benchmark utilities for Stakepool-Web subsystems
pub mod utils {
    use rand::Rng;

    const HEXVALS: &[u8] = b"123456789abcdef";

    /// Random 64-character hex-like ticket identifier.
    pub fn random_ticket_id() -> String {
        let mut rng = rand::thread_rng();
        (0..64)
            .map(|_| HEXVALS[rng.gen_range(0..HEXVALS.len())] as char)
            .collect()
    }
}
