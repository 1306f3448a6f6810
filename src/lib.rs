//! Completion notifications for terminals tunneled in from WSL.
//!
//! A request is filtered against `~/.hostnotify/config.json`, logged to the
//! terminal, and shown as a modal popup on the Windows host. When the popup
//! cannot be shown a plain-text banner is printed instead.

pub mod client;
pub mod config;
pub mod filter;
pub mod notify;

pub use client::message::NotificationRequest;
pub use client::send::NotificationSystem;
pub use config::Config;
