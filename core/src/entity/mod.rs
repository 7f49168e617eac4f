pub mod ski_fields;
