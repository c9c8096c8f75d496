//! Event handling and the message-to-notification pipeline.
//!
//! This module contains the pipeline that turns an inbound chat message into
//! an enriched notification:
//! - Extracting the ticket reference from free-form text
//! - Reconciling ticketing-system identities with chat-platform identities
//! - Formatting and dispatching the outbound notification

pub mod identity;
pub mod message_event;
pub mod notification;
pub mod resolve;
pub mod ticket;
