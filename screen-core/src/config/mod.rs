//! Configuration types
//!
//! Every tunable the controller needs, with defaults matching the
//! first screen controller board. The firmware embeds a `screen.toml` and
//! parses it at boot with [`parse_config`].

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
