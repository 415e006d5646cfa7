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

//! # Header and Footer
//!
//! Fixed blocks that are identical for every router, except for the hostname and the timestamp.

use super::{RouterContext, StanzaBuilder};

use chrono::{DateTime, Utc};

/// Format of the timestamp in the header comment
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S UTC %a %b %d %Y";

/// Format the timestamp for the header comment (`14:03:59 UTC Mon Mar 04 2024`).
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Version banner, timestamp, global service flags and IPv6 routing.
#[derive(Debug, Clone, Copy)]
pub struct Header;

impl StanzaBuilder for Header {
    fn name(&self) -> &'static str {
        "header"
    }

    fn build(&self, ctx: &RouterContext<'_>) -> Vec<String> {
        vec![
            "!".to_string(),
            format!("! Last configuration change at {}", ctx.timestamp),
            "!".to_string(),
            "version 15.2".to_string(),
            "service timestamps debug datetime msec".to_string(),
            "service timestamps log datetime msec".to_string(),
            "!".to_string(),
            format!("hostname {}", ctx.name),
            "!".to_string(),
            "boot-start-marker".to_string(),
            "boot-end-marker".to_string(),
            "!".to_string(),
            "no aaa new-model".to_string(),
            "no ip icmp rate-limit unreachable".to_string(),
            "ip cef".to_string(),
            "!".to_string(),
            "no ip domain lookup".to_string(),
            "ipv6 unicast-routing".to_string(),
            "ipv6 cef".to_string(),
            "!".to_string(),
            "multilink bundle-name authenticated".to_string(),
            "ip tcp synwait-time 5".to_string(),
            "!".to_string(),
        ]
    }
}

/// Global service lines, emitted between the BGP block and the IGP process.
#[derive(Debug, Clone, Copy)]
pub struct ServiceFooter;

impl StanzaBuilder for ServiceFooter {
    fn name(&self) -> &'static str {
        "service footer"
    }

    fn build(&self, _ctx: &RouterContext<'_>) -> Vec<String> {
        ["ip forward-protocol nd", "no ip http server", "no ip http secure-server"]
            .iter()
            .map(|l| l.to_string())
            .collect()
    }
}

/// Console and vty lines, and the final `end` marker.
#[derive(Debug, Clone, Copy)]
pub struct Trailer;

const TRAILER: [&str; 17] = [
    "!",
    "control-plane",
    "!",
    "line con 0",
    " exec-timeout 0 0",
    " privilege level 15",
    " logging synchronous",
    " stopbits 1",
    "line aux 0",
    " exec-timeout 0 0",
    " privilege level 15",
    " logging synchronous",
    " stopbits 1",
    "line vty 0 4",
    " login",
    "!",
    "end",
];

impl StanzaBuilder for Trailer {
    fn name(&self) -> &'static str {
        "trailer"
    }

    fn build(&self, _ctx: &RouterContext<'_>) -> Vec<String> {
        TRAILER.iter().map(|l| l.to_string()).collect()
    }
}
