//! Configuration module

mod tool;

pub use tool::ToolConfig;
