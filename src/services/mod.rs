//! Supporting services

pub mod notify;

pub use notify::{LogNotifier, ResetNotifier};
