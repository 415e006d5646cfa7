// Intent Compiler: Generating Router Startup Configurations from Network Intent
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # GNS3 Config Mover
//!
//! This is a very simple crate to place generated startup configurations into the working
//! directories of the GNS3 (dynamips) routers. Every file named `<id>_startup-config.cfg` is moved
//! into the directory registered for `<id>`. Files without a registered directory are left
//! untouched.
//!
//! ```
//! use gns3_mover::{Mover, MoverConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // the table of target directories
//!     let config = MoverConfig::from_json(
//!         r#"{ "routers": { "i1": "./dynamips/ea02be46-eb1f-48d4-9352-33ca9413d0ec/configs" } }"#,
//!     )?;
//!
//!     let mover = Mover::new(config)?;
//!     assert_eq!(mover.target_of("i1_startup-config.cfg").map(|p| p.is_relative()), Some(true));
//!     assert_eq!(mover.target_of("i7_startup-config.cfg"), None);
//!     // mover.prepare_targets()?;
//!     // let report = mover.move_config_files("./configs")?;
//!     Ok(())
//! }
//! ```
#![deny(missing_docs)]

mod mover;
mod types;
pub use mover::Mover;
pub use types::*;

use thiserror::Error;

/// # Mover Error type
#[derive(Debug, Error)]
pub enum Error {
    /// IO Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Cannot deserialize the directory table
    #[error("Cannot parse JSON: {0}")]
    JsonError(#[from] serde_json::error::Error),
    /// Invalid filename pattern
    #[error("Invalid pattern: {0}")]
    RegexError(#[from] regex::Error),
    /// The source directory does not exist
    #[error("Source directory does not exist: {0}")]
    SourceDirMissing(String),
}

/// Mover Result type
type Result<T> = core::result::Result<T, Error>;
