pub mod client;
pub mod paginator;
pub mod query;
pub mod types;
