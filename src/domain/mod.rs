pub mod credentials;
pub mod errors;
pub mod metric;
pub mod ports;
