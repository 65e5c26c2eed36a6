//! Error types for elpick.
//!
//! The picker itself degrades by omission during normal interaction (a click
//! with nothing hovered is swallowed, escape while disarmed does nothing), so
//! the error surface is small:
//!
//! - **Picker errors**: lifecycle misuse such as arming while another picker
//!   owns the document, or handles that no longer resolve.
//! - **Config errors**: malformed colors or lengths and unreadable config files.
//!
//! Both are `thiserror` enums. Binaries wrap them in `color_eyre::Result`.

mod config;
mod picker;
mod result;

pub use config::ConfigError;
pub use picker::PickerError;
pub use result::{ConfigResult, PickResult};
