//! Initialization of the logger and per-analysis HTTP session.

mod client;
mod logger;

pub use client::{init_session, HttpSession};
pub use logger::init_logger_with;
