//! Command implementations

pub mod serve;
pub mod simple;

pub use serve::run_serve;
pub use simple::run_simple;
