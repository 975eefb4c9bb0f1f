//! JSON configuration for the command-line tools.

pub mod tool;

pub use tool::{
    load_config, parse_cli, parse_config, GridConfig, NonogramToolConfig, OutputConfig,
    OutputFormat,
};
