pub mod api;
pub mod coaching;
pub mod config;
pub mod error;
pub mod loader;
pub mod period;
pub mod record;
pub mod scorer;
pub mod store;
// cmd and reports are binary modules, declared from main.rs.
