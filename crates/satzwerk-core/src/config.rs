// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Persistent settings for the CUPS command wiring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CupsConfig {
    /// Path or name of the `lpstat` binary.
    pub lpstat_path: String,
    /// Path or name of the `lpinfo` binary.
    pub lpinfo_path: String,
    /// Path or name of the `lpadmin` binary.
    pub lpadmin_path: String,
    /// Path or name of the `lp` binary.
    pub lp_path: String,
    /// Cap on combined driver search results.
    pub max_driver_results: usize,
}

impl Default for CupsConfig {
    fn default() -> Self {
        Self {
            lpstat_path: "lpstat".into(),
            lpinfo_path: "lpinfo".into(),
            lpadmin_path: "lpadmin".into(),
            lp_path: "lp".into(),
            max_driver_results: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_plain_tool_names() {
        let cfg = CupsConfig::default();
        assert_eq!(cfg.lpstat_path, "lpstat");
        assert_eq!(cfg.max_driver_results, 10);
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = CupsConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CupsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lpadmin_path, cfg.lpadmin_path);
    }
}
