//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for various services used by ticket-bot:
//! - Chat services (e.g., Slack)
//! - Ticketing services (e.g., Redmine)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod tracker;
