//! Business-logic services behind the route handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `records` owns every store access, `chat` the LLM proxying, and
//! `contact` the store-then-notify action. Routes stay thin: extract,
//! delegate, map errors to statuses, broadcast.

pub mod chat;
pub mod contact;
pub mod records;
