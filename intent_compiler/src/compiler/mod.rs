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

//! # Config Compiler
//!
//! Derives the startup configuration of a single router from the [`IntentModel`]. All lookups
//! that may fail (the AS of the router, its neighbors, the eBGP peer) are done once while building
//! the [`RouterContext`]. Afterwards, the configuration is assembled by a fixed list of
//! [`StanzaBuilder`]s, each emitting one block of the configuration. Hence, either the complete
//! configuration is generated, or none at all.

pub mod bgp;
pub mod border;
pub mod header;
pub mod igp;
pub mod interfaces;

pub use border::{is_border_link, resolve_ebgp_peer, EbgpPeer};
pub use igp::IgpProcess;

use crate::intent::{AsInfo, IntentModel, Protocol, RouterInfo};
use crate::naming;
use crate::Result;

use chrono::{DateTime, Utc};
use log::*;
use std::fmt;

/// Name of the loopback interface
pub const LOOPBACK_INTERFACE: &str = "Loopback0";

/// Interfaces that are emitted for every router, in this order, whether they are defined in the
/// intent or not.
pub const REQUIRED_INTERFACES: [&str; 4] =
    ["FastEthernet0/0", "GigabitEthernet1/0", "GigabitEthernet2/0", "GigabitEthernet3/0"];

/// # Router Context
///
/// Everything the stanza builders need to know about a single router, resolved from the intent.
#[derive(Debug, Clone)]
pub struct RouterContext<'a> {
    /// Name of the router (`R1`)
    pub name: &'a str,
    /// Synthetic router-id (`1.1.1.1`)
    pub router_id: String,
    /// AS of the router
    pub as_id: &'a str,
    /// Information of the AS
    pub as_info: &'a AsInfo,
    /// Information of the router
    pub router: &'a RouterInfo,
    /// IGP process of the router
    pub igp: IgpProcess,
    /// Bare loopback addresses of all other routers in the same AS (iBGP full mesh)
    pub ibgp_neighbors: Vec<String>,
    /// eBGP peer, if the router is a border router
    pub ebgp_peer: Option<EbgpPeer>,
    /// The intent from which the context was resolved
    pub intent: &'a IntentModel,
    /// Timestamp written into the header comment
    pub timestamp: String,
}

impl<'a> RouterContext<'a> {
    /// Resolve the context of a router.
    pub fn new(name: &'a str, intent: &'a IntentModel, now: DateTime<Utc>) -> Result<Self> {
        let router = intent.router(name)?;
        let number = naming::router_number(name)?;
        let router_id = naming::router_id(name)?;
        let (as_id, as_info) = intent.as_of(name)?;
        let igp = IgpProcess::new(as_info.protocol, as_id, number, &router_id);
        let ibgp_neighbors = bgp::ibgp_neighbors(name, as_id, as_info, intent)?;
        let ebgp_peer = resolve_ebgp_peer(name, intent)?;

        Ok(Self {
            name,
            router_id,
            as_id,
            as_info,
            router,
            igp,
            ibgp_neighbors,
            ebgp_peer,
            intent,
            timestamp: header::format_timestamp(now),
        })
    }

    /// IGP of the AS
    pub fn protocol(&self) -> Protocol {
        self.as_info.protocol
    }

    /// Address of an interface, if it is defined in the intent
    pub fn interface_address(&self, iface: &str) -> Option<&'a str> {
        self.router.interfaces.get(iface).map(|a| a.as_str())
    }

    /// Returns true if the interface connects to another AS.
    pub fn is_border_interface(&self, iface: &str) -> bool {
        is_border_link(self.name, iface, self.intent)
    }
}

/// A builder emitting one block of the configuration.
pub trait StanzaBuilder {
    /// Name of the block, used for logging
    fn name(&self) -> &'static str;

    /// Generate all lines of the block
    fn build(&self, ctx: &RouterContext<'_>) -> Vec<String>;
}

/// All stanza builders, in the order in which their output appears in the configuration.
pub fn stanzas() -> [&'static dyn StanzaBuilder; 7] {
    [
        &header::Header,
        &interfaces::Loopback,
        &interfaces::RequiredInterfaces,
        &bgp::Bgp,
        &header::ServiceFooter,
        &igp::IgpStanza,
        &header::Trailer,
    ]
}

/// # Compiled Configuration
///
/// Ordered sequence of configuration lines of a single router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledConfig {
    router: String,
    lines: Vec<String>,
}

impl CompiledConfig {
    /// Name of the router
    pub fn router(&self) -> &str {
        &self.router
    }

    /// Filename under which the configuration is stored
    pub fn filename(&self) -> String {
        naming::config_filename(&self.router)
    }

    /// All lines of the configuration
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume self and return the lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Render the configuration, with every line terminated by a newline
    pub fn render(&self) -> String {
        let mut s = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in self.lines.iter() {
            s.push_str(line);
            s.push('\n');
        }
        s
    }
}

impl fmt::Display for CompiledConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Compile the configuration of a single router, using the current time for the header.
pub fn compile_router(router: &str, intent: &IntentModel) -> Result<CompiledConfig> {
    compile_router_at(router, intent, Utc::now())
}

/// Compile the configuration of a single router, with a fixed timestamp.
pub fn compile_router_at(
    router: &str,
    intent: &IntentModel,
    now: DateTime<Utc>,
) -> Result<CompiledConfig> {
    let ctx = RouterContext::new(router, intent, now)?;
    let mut lines = Vec::new();
    for stanza in stanzas().iter() {
        let block = stanza.build(&ctx);
        trace!("[{}] {}: {} lines", router, stanza.name(), block.len());
        lines.extend(block);
    }
    debug!(
        "Compiled {} (AS {}, {}, {} iBGP neighbors, eBGP: {})",
        router,
        ctx.as_id,
        ctx.protocol(),
        ctx.ibgp_neighbors.len(),
        ctx.ebgp_peer.as_ref().map(|p| p.address.as_str()).unwrap_or("none"),
    );
    Ok(CompiledConfig { router: router.to_string(), lines })
}

/// Compile the configuration of every router in the intent. Fails on the first error, without
/// returning any configuration.
pub fn compile_all(intent: &IntentModel) -> Result<Vec<CompiledConfig>> {
    intent.check_members()?;
    let now = Utc::now();
    intent.router_names().map(|r| compile_router_at(r, intent, now)).collect()
}
