pub mod http;
pub mod source_model;
pub mod static_db;
