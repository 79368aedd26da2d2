//! Web server for the prediction form.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
