//! Action id resolution and icon picker state for a combat simulator UI.
//!
//! - [`action`]: the immutable `ActionId` value, its string/key/log formats,
//!   and the tag-driven name table.
//! - [`source`] and [`resolve`]: where names and icons come from and how ids
//!   get filled.
//! - [`picker`]: the icon picker state machine.

pub mod action;
pub mod cli;
pub mod picker;
pub mod report;
pub mod resolve;
pub mod source;
pub mod trace;

pub use action::action_model::{ActionId, ActionIdKey, OtherAction};
pub use action::error::{ActionError, Result};
pub use picker::picker::IconPicker;
pub use resolve::resolver::ActionResolver;
pub use source::source_model::{DataSource, IconData};
