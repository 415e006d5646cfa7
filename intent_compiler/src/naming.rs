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

//! # Name & ID Derivation
//!
//! Routers are named `R<number>`. Everything that needs to be unique per router (the filename,
//! the BGP router-id and the RIP / OSPF process number) is derived from that number.

use crate::{Error, Result};

/// Suffix of every generated startup configuration file.
pub const CONFIG_FILE_SUFFIX: &str = "_startup-config.cfg";

/// Strip the leading letter of a router name.
fn name_suffix(router: &str) -> &str {
    let mut chars = router.chars();
    chars.next();
    chars.as_str()
}

/// Extract the number of a router (`R7` -> `7`). Returns [`Error::MalformedName`] if the part
/// after the leading letter is not a decimal number.
pub fn router_number(router: impl AsRef<str>) -> Result<u32> {
    let router = router.as_ref();
    let suffix = name_suffix(router);
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedName(router.to_string()));
    }
    suffix.parse().map_err(|_| Error::MalformedName(router.to_string()))
}

/// Short name, used only for the filename (`R7` -> `i7`). The suffix is not validated.
pub fn short_name(router: impl AsRef<str>) -> String {
    format!("i{}", name_suffix(router.as_ref()))
}

/// Filename of the startup configuration of a router (`R7` -> `i7_startup-config.cfg`).
pub fn config_filename(router: impl AsRef<str>) -> String {
    format!("{}{}", short_name(router), CONFIG_FILE_SUFFIX)
}

/// Synthetic BGP / OSPF router-id (`R7` -> `7.7.7.7`).
pub fn router_id(router: impl AsRef<str>) -> Result<String> {
    let n = router_number(router)?;
    Ok(format!("{n}.{n}.{n}.{n}", n = n))
}

/// Strip the prefix length from an address (`2001:db8::1/64` -> `2001:db8::1`).
pub fn neighbor_address(cidr: &str) -> &str {
    cidr.split('/').next().unwrap_or(cidr)
}

/// Network statement of a loopback address (`2001:db8::1/128` -> `2001:db8::1/128`, always
/// `/128` regardless of the configured length).
pub fn loopback_network(cidr: &str) -> String {
    format!("{}/128", neighbor_address(cidr))
}

/// `/64` network of an interface address, obtained by cutting the address at its last `::`
/// (`2001:db8:12::1/64` -> `2001:db8:12::/64`). Addresses without `::` keep their full address
/// part.
pub fn network_64(cidr: &str) -> String {
    let base = match cidr.rfind("::") {
        Some(pos) => &cidr[..pos],
        None => neighbor_address(cidr),
    };
    format!("{}::/64", base)
}
