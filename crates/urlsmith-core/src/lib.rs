pub mod config;
pub mod logging;

// Core modules.
pub mod probe;
pub mod session;
pub mod url_model;
