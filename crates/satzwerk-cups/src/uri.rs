// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Device URI classification.
//
// The discovery tool's URI format is not contractually stable across
// vendors, so extraction is best-effort: every rule that fails degrades to
// an explicit "unknown" instead of failing the discovery call for one
// malformed line.  Patterns are compiled once and applied statelessly; no
// match state is carried between calls.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use satzwerk_core::types::{ConnectionType, DeviceUri, InstallableDevice};

/// Fallback model string when scheme-specific extraction fails.
pub const UNKNOWN_MODEL: &str = "unknown";

struct UriPatterns {
    /// `scheme://` prefix; scheme is one or more ASCII letters.
    scheme: Regex,
    /// `usb://<vendor>/<product>?<query>` — both groups required.
    usb: Regex,
    /// Service instance name between `//` and the first `._` of a
    /// network-style URI (dnssd and friends).
    service: Regex,
}

fn patterns() -> &'static UriPatterns {
    static PATTERNS: OnceLock<UriPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime
        // condition.
        UriPatterns {
            scheme: Regex::new(r"^([A-Za-z]+)://").expect("static regex must compile"),
            usb: Regex::new(r"^usb://([^/?]+)/([^?]+)\?").expect("static regex must compile"),
            service: Regex::new(r"//(.*?)\._").expect("static regex must compile"),
        }
    })
}

/// Classify one whitespace-free URI token from the discovery listing.
///
/// Returns an [`InstallableDevice`] carrying the raw URI, its decoded form,
/// the scheme classification, and a best-effort model string.
pub fn classify(raw: &str) -> InstallableDevice {
    let uri = DeviceUri::parse(raw);
    let decoded = uri.decoded();

    let scheme = patterns()
        .scheme
        .captures(decoded)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();

    let protocol = ConnectionType::from_scheme(&scheme);
    let model = extract_model(&protocol, decoded);

    if model == UNKNOWN_MODEL {
        debug!(uri = raw, "no model extracted from device URI");
    }

    InstallableDevice {
        uri: uri.raw().to_string(),
        uri_pretty: decoded.to_string(),
        protocol,
        model,
    }
}

/// Scheme-specific model extraction rules over the decoded URI.
fn extract_model(protocol: &ConnectionType, decoded: &str) -> String {
    match protocol {
        ConnectionType::Unknown => UNKNOWN_MODEL.to_string(),
        ConnectionType::Usb => patterns()
            .usb
            .captures(decoded)
            .map(|c| format!("{} {}", c[1].trim(), c[2].trim()))
            .unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
        _ => patterns()
            .service
            .captures(decoded)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
    }
}
