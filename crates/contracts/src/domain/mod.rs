pub mod a001_master_data;
pub mod a002_field_definition;
pub mod common;
