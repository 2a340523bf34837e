//! Readable-string detection and lookup helpers for deep packet inspection

pub mod bigrams;
pub mod cli;
pub mod config;
pub mod detection;
pub mod errors;
pub mod net;
pub mod tls;
pub mod utils;
