pub mod common;
pub mod health;
pub mod ski_field;
