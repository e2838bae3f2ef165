//! Embedded word pool
//!
//! Tier table compiled into the binary at build time.

// Include generated word pool from build script
include!(concat!(env!("OUT_DIR"), "/word_pool.rs"));
