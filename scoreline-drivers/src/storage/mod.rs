//! Score persistence drivers

pub mod kv;

pub use kv::KvScoreStore;
