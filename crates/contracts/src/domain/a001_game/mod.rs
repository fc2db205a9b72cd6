pub mod aggregate;
pub mod monitor;
