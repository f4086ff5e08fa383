pub mod config;
pub mod fetch;
pub mod notify;
pub mod query;
pub mod report;
pub mod resolve;
pub mod table;
