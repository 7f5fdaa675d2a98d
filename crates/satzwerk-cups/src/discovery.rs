// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Discoverable-device aggregation.
//
// Each line of the discovery listing is `<backend> <uri> [free text]`.
// Backends that are network print protocols or fax gateways rather than
// physical peripherals are dropped wholesale.  Devices are grouped under the
// verbatim backend token — NOT the classified connection type.  The two
// usually coincide but are not guaranteed to, and downstream callers depend
// on backend-token grouping.

use tracing::debug;

use satzwerk_core::types::DiscoveryResult;

use crate::lines::trimmed_lines;
use crate::uri::classify;

/// Backends that never describe an installable peripheral.
const IGNORED_BACKENDS: [&str; 12] = [
    "http",
    "https",
    "ipp",
    "ipps",
    "lpd",
    "smb",
    "socket",
    "fax",
    "canonoipnets2",
    "cnips2",
    "epsonfax",
    "hpfax",
];

/// Parse the discovery listing into devices grouped by backend.
///
/// Malformed lines (fewer than two tokens) are skipped; input with no usable
/// lines yields an empty map rather than failing.
pub fn parse_discovery_listing(raw: &str) -> DiscoveryResult {
    let mut devices = DiscoveryResult::new();

    for line in trimmed_lines(raw) {
        let mut tokens = line.split_whitespace();
        let (Some(backend), Some(uri)) = (tokens.next(), tokens.next()) else {
            debug!(line, "skipping short discovery line");
            continue;
        };

        if IGNORED_BACKENDS.contains(&backend) {
            debug!(backend, "ignoring non-peripheral backend");
            continue;
        }

        devices
            .entry(backend.to_string())
            .or_default()
            .push(classify(uri));
    }

    devices
}
