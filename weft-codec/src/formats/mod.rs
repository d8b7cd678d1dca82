//! Format implementations
//!
//! This module contains the format implementations that convert between the
//! live fragment and its textual representations.

pub mod html;
pub mod json;

pub use html::HtmlFormat;
pub use json::{JsonFormat, TextOptions};
