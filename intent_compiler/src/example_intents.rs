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

//! # Example Intents
//!
//! Prepared intent models, used for testing and for the `show --example` command.

use crate::intent::{AsInfo, BorderLink, IntentModel, Protocol, RouterInfo};

use maplit::btreemap;

/// Trait for all example intents
pub trait ExampleIntent {
    /// Get the intent model
    fn intent() -> IntentModel;
}

fn router(loopback: &str, interfaces: &[(&str, &str)]) -> RouterInfo {
    RouterInfo {
        loopback: loopback.to_string(),
        interfaces: interfaces.iter().map(|(i, a)| (i.to_string(), a.to_string())).collect(),
    }
}

fn border(iface: &str) -> BorderLink {
    BorderLink::Interface(iface.to_string())
}

/// # SmallNet
///
/// ```text
///      AS 1 (OSPF)           |  AS 2 (RIP)
///                            |
///  R1 ------------ R2 ------------- R3
///    Gi2/0    Gi2/0  Gi1/0   |   Gi1/0
/// ```
///
/// `R2` is the border router of AS 1, and `R3` the border router of AS 2.
#[derive(Debug)]
pub struct SmallNet;

impl ExampleIntent for SmallNet {
    fn intent() -> IntentModel {
        IntentModel {
            as_numbers: btreemap! {
                "1".to_string() => AsInfo {
                    protocol: Protocol::Ospf,
                    routers: vec!["R1".to_string(), "R2".to_string()],
                    border_routers: btreemap! { "R2".to_string() => border("GigabitEthernet1/0") },
                },
                "2".to_string() => AsInfo {
                    protocol: Protocol::Rip,
                    routers: vec!["R3".to_string()],
                    border_routers: btreemap! { "R3".to_string() => border("GigabitEthernet1/0") },
                },
            },
            routers: btreemap! {
                "R1".to_string() => router(
                    "2001:db8:ffff::1/128",
                    &[("GigabitEthernet2/0", "2001:db8:12::1/64")],
                ),
                "R2".to_string() => router(
                    "2001:db8:ffff::2/128",
                    &[
                        ("GigabitEthernet1/0", "2001:db8:23::2/64"),
                        ("GigabitEthernet2/0", "2001:db8:12::2/64"),
                    ],
                ),
                "R3".to_string() => router(
                    "2001:db8:ffff::3/128",
                    &[("GigabitEthernet1/0", "2001:db8:23::3/64")],
                ),
            },
        }
    }
}

/// # TwoAsNet
///
/// Two ASes with three routers each. AS 1 runs RIP, AS 2 runs OSPF. The two ASes are connected
/// on the link `R3 --- R4`.
///
/// ```text
///          AS 1 (RIP)                     AS 2 (OSPF)
///
///  R1 --------- R2 --------- R3 ======== R4 --------- R5 --------- R6
///  |                                                               |
/// host                                                            host
/// ```
#[derive(Debug)]
pub struct TwoAsNet;

impl ExampleIntent for TwoAsNet {
    fn intent() -> IntentModel {
        IntentModel {
            as_numbers: btreemap! {
                "1".to_string() => AsInfo {
                    protocol: Protocol::Rip,
                    routers: vec!["R1".to_string(), "R2".to_string(), "R3".to_string()],
                    border_routers: btreemap! { "R3".to_string() => border("GigabitEthernet1/0") },
                },
                "2".to_string() => AsInfo {
                    protocol: Protocol::Ospf,
                    routers: vec!["R4".to_string(), "R5".to_string(), "R6".to_string()],
                    border_routers: btreemap! { "R4".to_string() => border("GigabitEthernet1/0") },
                },
            },
            routers: btreemap! {
                "R1".to_string() => router(
                    "2001:100::1/128",
                    &[
                        ("FastEthernet0/0", "2001:1:1::1/64"),
                        ("GigabitEthernet2/0", "2001:1:12::1/64"),
                    ],
                ),
                "R2".to_string() => router(
                    "2001:100::2/128",
                    &[
                        ("GigabitEthernet2/0", "2001:1:12::2/64"),
                        ("GigabitEthernet3/0", "2001:1:23::2/64"),
                    ],
                ),
                "R3".to_string() => router(
                    "2001:100::3/128",
                    &[
                        ("GigabitEthernet1/0", "2001:3:34::3/64"),
                        ("GigabitEthernet3/0", "2001:1:23::3/64"),
                    ],
                ),
                "R4".to_string() => router(
                    "2001:200::4/128",
                    &[
                        ("GigabitEthernet1/0", "2001:3:34::4/64"),
                        ("GigabitEthernet2/0", "2001:2:45::4/64"),
                    ],
                ),
                "R5".to_string() => router(
                    "2001:200::5/128",
                    &[
                        ("GigabitEthernet2/0", "2001:2:45::5/64"),
                        ("GigabitEthernet3/0", "2001:2:56::5/64"),
                    ],
                ),
                "R6".to_string() => router(
                    "2001:200::6/128",
                    &[
                        ("FastEthernet0/0", "2001:2:6::6/64"),
                        ("GigabitEthernet3/0", "2001:2:56::6/64"),
                    ],
                ),
            },
        }
    }
}
