pub mod client_addr;

pub use client_addr::{ClientAddr, ClientAddrLayer, ClientAddrService};
