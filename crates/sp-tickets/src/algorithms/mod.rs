pub mod sort;

pub use sort::{par_sort_by_key, sort_by_key, spent_by_height_key, ticket_height_key};
