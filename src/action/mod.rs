pub mod action_model;
pub mod error;
pub mod level;
pub mod links;
pub mod log_parse;
pub mod names;
pub mod overrides;
