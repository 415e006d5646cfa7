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

#![deny(missing_docs)]

//! # Intent Compiler: Router Startup Configurations from Network Intent
//!
//! This library translates a declarative description of a network (autonomous systems, routers,
//! interface addresses, the IGP of each AS and the border links between ASes) into the startup
//! configuration of every router, in the Cisco IOS dialect understood by the emulated routers in
//! GNS3 (dynamips).
//!
//! ## Structure
//!
//! - **[`Intent`](intent)**: The [intent model](intent::IntentModel), loaded from a JSON file.
//!
//! - **[`Naming`](naming)**: Derivation of the short name, the router-id and the addresses used in
//!   neighbor and network statements.
//!
//! - **[`Compiler`](compiler)**: Derives the configuration of a single router. The configuration
//!   is assembled from a list of [stanza builders](compiler::StanzaBuilder): header, loopback,
//!   physical interfaces, BGP (iBGP full mesh, eBGP towards the other AS and the address
//!   families), footer and the IGP routing process.
//!
//! - **[`Writer`](writer)**: Stores the compiled configurations as `i<n>_startup-config.cfg`.
//!
//! - **[`ExampleIntents`](example_intents)**: Prepared intents for testing.
//!
//! ## Usage
//!
//! ```
//! use intent_compiler::compiler::compile_router;
//! use intent_compiler::example_intents::*;
//! use intent_compiler::Error;
//!
//! fn main() -> Result<(), Error> {
//!     // load the intent
//!     // let intent = IntentModel::from_file("intent.json")?;
//! # let intent = SmallNet::intent();
//!
//!     // compile the configuration of a router
//!     let config = compile_router("R2", &intent)?;
//!     assert_eq!(config.filename(), "i2_startup-config.cfg");
//!     assert!(config.lines().contains(&" neighbor 2001:db8:23::3 remote-as 2".to_string()));
//!
//!     Ok(())
//! }
//! ```

pub mod compiler;
mod error;
pub mod example_intents;
pub mod intent;
pub mod naming;
mod test;
pub mod writer;

pub use compiler::{compile_all, compile_router, CompiledConfig};
pub use error::{Error, Result};
pub use intent::IntentModel;
