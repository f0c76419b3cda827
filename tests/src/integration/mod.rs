pub mod ticket_scale;
