//! elpick - a hover-to-preview, click-to-confirm element picker.
//!
//! The [`picker`] module holds the widget itself; [`document`] is the element
//! tree it mounts into. The remaining modules make up the terminal demo
//! binary and are exposed for integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod picker;
pub mod terminal;
pub mod ui;
