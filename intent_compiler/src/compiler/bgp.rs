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

//! # BGP
//!
//! Every router runs BGP in the AS of its intent. All routers of an AS form an iBGP full mesh,
//! established between the loopback addresses. Border routers additionally peer with the border
//! router of the other AS, on the address of the border link.

use super::{RouterContext, StanzaBuilder, LOOPBACK_INTERFACE};
use crate::intent::{AsInfo, IntentModel};
use crate::naming::{loopback_network, neighbor_address, network_64};
use crate::{Error, Result};

/// Bare loopback addresses of all other routers in the AS, in the order of the AS router list.
pub fn ibgp_neighbors(
    router: &str,
    as_id: &str,
    as_info: &AsInfo,
    intent: &IntentModel,
) -> Result<Vec<String>> {
    as_info
        .routers
        .iter()
        .filter(|r| r.as_str() != router)
        .map(|r| {
            intent
                .routers
                .get(r)
                .map(|info| neighbor_address(&info.loopback).to_string())
                .ok_or_else(|| Error::MissingRouter { as_id: as_id.to_string(), router: r.clone() })
        })
        .collect()
}

/// The complete `router bgp` block, including both address families.
#[derive(Debug, Clone, Copy)]
pub struct Bgp;

impl StanzaBuilder for Bgp {
    fn name(&self) -> &'static str {
        "bgp"
    }

    fn build(&self, ctx: &RouterContext<'_>) -> Vec<String> {
        let mut lines = process_lines(ctx);
        lines.extend(ibgp_mesh_lines(ctx));
        lines.extend(ebgp_lines(ctx));
        lines.extend(address_family_lines(ctx));
        lines
    }
}

/// `router bgp` header with the router-id
pub fn process_lines(ctx: &RouterContext<'_>) -> Vec<String> {
    vec![
        format!("router bgp {}", ctx.as_id),
        format!(" bgp router-id {}", ctx.router_id),
        " bgp log-neighbor-changes".to_string(),
        " no bgp default ipv4-unicast".to_string(),
    ]
}

/// Full-mesh iBGP sessions, sourced from the loopback
pub fn ibgp_mesh_lines(ctx: &RouterContext<'_>) -> Vec<String> {
    ctx.ibgp_neighbors
        .iter()
        .flat_map(|n| {
            vec![
                format!(" neighbor {} remote-as {}", n, ctx.as_id),
                format!(" neighbor {} update-source {}", n, LOOPBACK_INTERFACE),
            ]
        })
        .collect()
}

/// eBGP session towards the peer AS (only on border routers)
pub fn ebgp_lines(ctx: &RouterContext<'_>) -> Vec<String> {
    ctx.ebgp_peer
        .iter()
        .map(|peer| format!(" neighbor {} remote-as {}", peer.address, peer.as_id))
        .collect()
}

/// The (empty) IPv4 and the IPv6 address family. The IPv6 family advertises the loopback and
/// every interface network, and activates all neighbors.
pub fn address_family_lines(ctx: &RouterContext<'_>) -> Vec<String> {
    let mut lines = vec![
        " !".to_string(),
        " address-family ipv4".to_string(),
        " exit-address-family".to_string(),
        " !".to_string(),
        " address-family ipv6".to_string(),
        format!("  network {}", loopback_network(&ctx.router.loopback)),
    ];
    lines.extend(
        ctx.router.interfaces.values().map(|addr| format!("  network {}", network_64(addr))),
    );
    lines.extend(ctx.ibgp_neighbors.iter().map(|n| format!("  neighbor {} activate", n)));
    lines.extend(ctx.ebgp_peer.iter().map(|p| format!("  neighbor {} activate", p.address)));
    lines.push(" exit-address-family".to_string());
    lines.push("!".to_string());
    lines
}
