//! Networking modules for HTTP + the live WebSocket feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `live` manages the one-directional WebSocket
//! subscription, and `types` defines client-side wire schemas.

pub mod api;
pub mod live;
pub mod types;
