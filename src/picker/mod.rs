pub mod counter;
pub mod event;
pub mod picker;
pub mod picker_model;
