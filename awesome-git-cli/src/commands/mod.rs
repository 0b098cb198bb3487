//! CLI command implementations

pub mod clone;
pub mod configure;

pub use clone::CloneArgs;
pub use configure::ConfigureArgs;
