// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Satzwerk CUPS queue manager.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One installed CUPS queue as reported by the status listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterRecord {
    /// Queue name (e.g. "HP_LaserJet").
    pub name: String,
    /// Device connection string (e.g. "ipp://host/printers/HP_LaserJet").
    pub connection: String,
    /// Whether this queue is the system default destination.
    pub is_default: bool,
}

/// A device URI as reported by the discovery command, in both its raw and
/// percent-decoded forms.
///
/// `decoded` is always derived from `raw` at construction time; the pair is
/// immutable afterwards, so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceUri {
    raw: String,
    decoded: String,
}

impl DeviceUri {
    /// Build a `DeviceUri` from the raw token, percent-decoding it.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            decoded: percent_decode(raw),
        }
    }

    /// The URI exactly as the discovery tool reported it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The percent-decoded form, suitable for display.
    pub fn decoded(&self) -> &str {
        &self.decoded
    }
}

/// Connection scheme of a device URI, derived solely from the token before
/// `://`.
///
/// The discovery tool may report vendor-specific schemes we have no name
/// for; those are retained verbatim in `Other` rather than collapsed into
/// `Unknown`, which is reserved for URIs with no scheme at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    Usb,
    Dnssd,
    Socket,
    Ipp,
    Ipps,
    Lpd,
    Smb,
    Other(String),
    Unknown,
}

impl ConnectionType {
    /// Classify a scheme token. An empty token means the URI had no
    /// `scheme://` prefix at all.
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme {
            "" => Self::Unknown,
            "usb" => Self::Usb,
            "dnssd" => Self::Dnssd,
            "socket" => Self::Socket,
            "ipp" => Self::Ipp,
            "ipps" => Self::Ipps,
            "lpd" => Self::Lpd,
            "smb" => Self::Smb,
            other => Self::Other(other.to_string()),
        }
    }

    /// The scheme token this classification was derived from.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Usb => "usb",
            Self::Dnssd => "dnssd",
            Self::Socket => "socket",
            Self::Ipp => "ipp",
            Self::Ipps => "ipps",
            Self::Lpd => "lpd",
            Self::Smb => "smb",
            Self::Other(s) => s,
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered device that can be installed as a queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallableDevice {
    /// Raw device URI, passed verbatim to the install command.
    pub uri: String,
    /// Percent-decoded URI for display.
    pub uri_pretty: String,
    /// Connection scheme classification.
    pub protocol: ConnectionType,
    /// Best-effort device model string; `"unknown"` when extraction failed,
    /// never empty.
    pub model: String,
}

/// Discovered devices grouped by the backend token the discovery tool
/// reported them under.
///
/// The key is the literal backend token, NOT the classified connection type.
/// The two usually coincide but are not guaranteed to, and downstream
/// callers rely on backend-token grouping.
pub type DiscoveryResult = BTreeMap<String, Vec<InstallableDevice>>;

/// One entry of the driver catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRecord {
    /// Driver identifier (e.g. "drv:///sample.drv/generic.ppd").
    pub driver: String,
    /// Natural language of the driver's PPD.
    pub lang: String,
    /// Human-readable make and model; the field fuzzy matching runs against.
    pub make_and_model: String,
    /// IEEE 1284 device id.
    pub id: String,
}

/// Everything needed to install a queue for a discovered device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallRequest {
    /// Queue name to create.
    pub queue: String,
    /// Device URI the queue points at.
    pub device_uri: String,
    /// Driver identifier from the catalog; `None` installs driverless.
    pub driver: Option<String>,
    /// Human-readable description (-D).
    pub description: Option<String>,
    /// Physical location (-L).
    pub location: Option<String>,
    /// Extra queue options as key/value pairs, validated against the
    /// option schema before the command line is built.
    pub options: BTreeMap<String, String>,
}

impl InstallRequest {
    pub fn new(queue: impl Into<String>, device_uri: impl Into<String>) -> Self {
        Self {
            queue: queue.into(),
            device_uri: device_uri.into(),
            driver: None,
            description: None,
            location: None,
            options: BTreeMap::new(),
        }
    }
}

/// Receipt for a submitted job, parsed from the submission command output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReceipt {
    /// Spooler-assigned request id (e.g. "HP_LaserJet-42").
    pub request_id: String,
    /// Queue the job was submitted to.
    pub queue: String,
    /// When the submission command returned.
    pub submitted_at: DateTime<Utc>,
}

/// Percent-decode a URI token.
///
/// Invalid escapes (truncated or non-hex) are kept verbatim rather than
/// rejected; a malformed URI must never abort a whole discovery listing.
/// Decoded bytes are reassembled lossily so multi-byte UTF-8 escapes work.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
