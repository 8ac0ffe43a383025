#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for tally
//!
//! This library holds all functionality of the tally tool, which records a daily
//! counter scraped from a web page and charts its history.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`source`]: Retrieval of the counter value
//! - [`store`]: The persisted observation log
//! - [`chart`]: Variation check and chart rendering

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod chart;
#[cfg(not(any(debug_assertions, test)))]
mod chart;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod source;
#[cfg(not(any(debug_assertions, test)))]
mod source;

#[cfg(any(debug_assertions, test))]
pub mod store;
#[cfg(not(any(debug_assertions, test)))]
mod store;

pub use crate::commands::{Host, run};
