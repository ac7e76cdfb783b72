//! Application layer - use-case handlers over the domain and ports.

pub mod handlers;
