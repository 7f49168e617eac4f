pub mod health;
pub mod query_extractor;
pub mod server;
pub mod ski_field;
