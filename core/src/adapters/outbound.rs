//! Driven adapters: files on disk and notification channels.

pub mod export;
pub mod notify;
pub mod storage;
