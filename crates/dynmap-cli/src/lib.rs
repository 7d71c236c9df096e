//! CLI library components for dynamic map scripts.

pub mod logging;
pub mod output;
pub mod render;
pub mod script;
