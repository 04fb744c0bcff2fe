//! linkdeck - terminal client for a URL-shortening service
//!
//! Shortens long URLs, browses recently created links, and renders per-link
//! click analytics, either interactively (ratatui TUI) or as one-shot CLI
//! commands.
//!
//! # Architecture
//! - `api`: typed service client for the backend HTTP contract
//! - `controllers`: per-flow state machines (submission, recent list,
//!   analytics)
//! - `events`: link-created broadcast bus
//! - `notify`: transient user-feedback channel
//! - `interfaces`: user interfaces (CLI, TUI)
//! - `config`: configuration management

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controllers;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod logging;
pub mod notify;
pub mod utils;
