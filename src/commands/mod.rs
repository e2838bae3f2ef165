//! Command implementations

pub mod play;
pub mod pool;

pub use play::run_play;
pub use pool::run_pool;
