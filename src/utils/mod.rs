//! Shared utilities.

pub mod html;
pub mod mime;
