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

//! Module containing all error types

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// An AS references a router that is not defined in the router table
    #[error("AS {as_id} references router {router}, which is not defined")]
    MissingRouter {
        /// AS containing the reference
        as_id: String,
        /// Name of the router that is missing
        router: String,
    },
    /// The router is not defined in the intent
    #[error("Router {0} is not defined")]
    UnknownRouter(String),
    /// The router is not member of any AS
    #[error("Router {0} is not member of any AS")]
    RouterWithoutAs(String),
    /// The router name does not end with a decimal number
    #[error("Malformed router name: {0} (expected R<number>)")]
    MalformedName(String),
    /// The AS is not defined
    #[error("AS {0} is not defined")]
    UnknownAs(String),
    /// The peer AS has no border router that could terminate the eBGP session
    #[error("AS {0} has no border router")]
    NoBorderRouter(String),
    /// The peer AS has more than one border router, and the border link does not name the peer
    #[error("AS {as_id} has multiple border routers ({routers:?}), and the peer is not specified")]
    AmbiguousBorderRouter {
        /// AS with multiple border routers
        as_id: String,
        /// All border routers of that AS
        routers: Vec<String>,
    },
    /// The peer AS cannot be inferred, because there is not exactly one other AS
    #[error("Cannot infer the peer AS of the border link in AS {0}")]
    AmbiguousPeerAs(String),
    /// The peer router has no address on its border interface
    #[error("Router {router} has no address on border interface {interface}")]
    MissingBorderInterface {
        /// Peer router
        router: String,
        /// Border interface of the peer
        interface: String,
    },
    /// IO Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Cannot parse the intent file
    #[error("Cannot parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type of this crate
pub type Result<T> = core::result::Result<T, Error>;
