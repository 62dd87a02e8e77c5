//! HTTP service layer.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
