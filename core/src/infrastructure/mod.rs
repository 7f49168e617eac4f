pub mod db;
pub mod ski_field;
