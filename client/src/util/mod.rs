//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod activity_cache;
pub mod pointer;
pub mod storage;
pub mod theme;
pub mod window_geometry;
