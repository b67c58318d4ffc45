//! Command-line front end for `vyatta-config-core`.
//!
//! The core crate is pure; everything that touches the outside world lives
//! here:
//!
//! - [`files`]: reading inputs and writing `--output` files
//! - [`inspect`]: label tree rendering
//! - [`report`]: colored diff output
//! - [`profile`]: TOML diff profiles
//! - [`logging`]: `tracing` subscriber setup

pub mod files;
pub mod inspect;
pub mod logging;
pub mod profile;
pub mod report;
