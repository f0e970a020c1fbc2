//! consolelog - Terminal demo app with a bounded, observable console log
//!
//! This library provides the console log store, categorizer and exporter,
//! together with the record screens and terminal UI that drive them.

pub mod app;
pub mod config;
pub mod console;
pub mod input;
pub mod logging;
pub mod records;
pub mod tui;
