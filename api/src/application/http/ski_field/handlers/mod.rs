pub mod create_ski_field;
pub mod delete_ski_field;
pub mod query_ski_fields;
pub mod update_ski_field;
