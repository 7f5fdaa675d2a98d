// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Job and queue option schema, and command argument construction.
//
// The recognized options form a closed compile-time schema instead of open
// string dictionaries: every key knows its aliases and value kind, and
// anything outside the schema is rejected before a command line is built.

use std::collections::BTreeMap;

use satzwerk_core::error::{Result, SatzwerkError};
use satzwerk_core::types::InstallRequest;

/// What a value an option carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Flag option; present or absent, no value.
    None,
    /// Free-text value passed through verbatim.
    Text,
    /// Integer value, validated before use.
    Number,
}

/// One entry of the option schema.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Canonical key as the print system spells it.
    pub key: &'static str,
    /// Accepted alternative spellings.
    pub aliases: &'static [&'static str],
    pub kind: ValueKind,
    /// Default applied by the spooler when the option is omitted (documented
    /// here; never injected into command lines).
    pub default: Option<&'static str>,
}

impl OptionSpec {
    fn matches(&self, key: &str) -> bool {
        self.key == key || self.aliases.contains(&key)
    }
}

/// Queue-level options accepted by the install command.
pub const GENERAL_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        key: "printer-is-shared",
        aliases: &["shared"],
        kind: ValueKind::Text,
        default: Some("false"),
    },
    OptionSpec {
        key: "printer-error-policy",
        aliases: &["error-policy"],
        kind: ValueKind::Text,
        default: Some("stop-printer"),
    },
    OptionSpec {
        key: "job-sheets-default",
        aliases: &["banner"],
        kind: ValueKind::Text,
        default: Some("none,none"),
    },
];

/// Job-level options accepted by the print command.
pub const PRINT_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        key: "media",
        aliases: &["paper", "page-size"],
        kind: ValueKind::Text,
        default: None,
    },
    OptionSpec {
        key: "copies",
        aliases: &["n", "num-copies"],
        kind: ValueKind::Number,
        default: Some("1"),
    },
    OptionSpec {
        key: "sides",
        aliases: &["duplex"],
        kind: ValueKind::Text,
        default: Some("one-sided"),
    },
    OptionSpec {
        key: "number-up",
        aliases: &["nup"],
        kind: ValueKind::Number,
        default: Some("1"),
    },
    OptionSpec {
        key: "orientation-requested",
        aliases: &["orientation"],
        kind: ValueKind::Number,
        default: None,
    },
    OptionSpec {
        key: "page-ranges",
        aliases: &["pages"],
        kind: ValueKind::Text,
        default: None,
    },
    OptionSpec {
        key: "priority",
        aliases: &["q"],
        kind: ValueKind::Number,
        default: Some("50"),
    },
    OptionSpec {
        key: "fit-to-page",
        aliases: &["fitplot"],
        kind: ValueKind::None,
        default: None,
    },
    OptionSpec {
        key: "landscape",
        aliases: &[],
        kind: ValueKind::None,
        default: None,
    },
    OptionSpec {
        key: "collate",
        aliases: &[],
        kind: ValueKind::Text,
        default: Some("true"),
    },
];

/// Resolve a key or alias against both tables.
fn find_spec(key: &str) -> Option<&'static OptionSpec> {
    GENERAL_OPTIONS
        .iter()
        .chain(PRINT_OPTIONS.iter())
        .find(|spec| spec.matches(key))
}

/// Validate keys and values against the schema.
///
/// Flag options accept an empty value or "true"; number options must parse
/// as an integer.
pub fn validate_options(options: &BTreeMap<String, String>) -> Result<()> {
    for (key, value) in options {
        let spec = find_spec(key).ok_or_else(|| SatzwerkError::UnknownOption(key.clone()))?;
        let ok = match spec.kind {
            ValueKind::None => value.is_empty() || value == "true",
            ValueKind::Text => true,
            ValueKind::Number => value.parse::<i64>().is_ok(),
        };
        if !ok {
            return Err(SatzwerkError::InvalidOptionValue {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Argument vector for submitting a file to a queue.
pub fn job_args(
    queue: &str,
    path: &str,
    options: &BTreeMap<String, String>,
) -> Result<Vec<String>> {
    validate_options(options)?;

    let mut args = vec!["-d".to_string(), queue.to_string()];
    for (key, value) in options {
        let spec = find_spec(key).ok_or_else(|| SatzwerkError::UnknownOption(key.clone()))?;
        match spec.key {
            // These have dedicated flags on the print command.
            "copies" => {
                args.push("-n".into());
                args.push(value.clone());
            }
            "priority" => {
                args.push("-q".into());
                args.push(value.clone());
            }
            canonical => {
                args.push("-o".into());
                if spec.kind == ValueKind::None {
                    args.push(canonical.to_string());
                } else {
                    args.push(format!("{canonical}={value}"));
                }
            }
        }
    }
    args.push(path.to_string());
    Ok(args)
}

/// Argument vector for installing a queue.
pub fn install_args(request: &InstallRequest) -> Result<Vec<String>> {
    validate_options(&request.options)?;

    let mut args = vec![
        "-p".to_string(),
        request.queue.clone(),
        "-v".to_string(),
        request.device_uri.clone(),
    ];
    if let Some(driver) = &request.driver {
        args.push("-m".into());
        args.push(driver.clone());
    }
    if let Some(description) = &request.description {
        args.push("-D".into());
        args.push(description.clone());
    }
    if let Some(location) = &request.location {
        args.push("-L".into());
        args.push(location.clone());
    }
    for (key, value) in &request.options {
        let spec = find_spec(key).ok_or_else(|| SatzwerkError::UnknownOption(key.clone()))?;
        args.push("-o".into());
        if spec.kind == ValueKind::None {
            args.push(spec.key.to_string());
        } else {
            args.push(format!("{}={}", spec.key, value));
        }
    }
    // Enable the queue and accept jobs immediately.
    args.push("-E".into());
    Ok(args)
}

/// Argument vector for removing a queue.
pub fn uninstall_args(queue: &str) -> Vec<String> {
    vec!["-x".to_string(), queue.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = validate_options(&opts(&[("frobnicate", "1")])).unwrap_err();
        assert!(matches!(err, SatzwerkError::UnknownOption(k) if k == "frobnicate"));
    }

    #[test]
    fn number_options_must_parse() {
        assert!(validate_options(&opts(&[("copies", "3")])).is_ok());
        let err = validate_options(&opts(&[("copies", "three")])).unwrap_err();
        assert!(matches!(err, SatzwerkError::InvalidOptionValue { .. }));
    }

    #[test]
    fn aliases_resolve_to_canonical_keys() {
        let args = job_args("Office", "/tmp/doc.pdf", &opts(&[("duplex", "two-sided-long-edge")]))
            .unwrap();
        assert!(args.contains(&"sides=two-sided-long-edge".to_string()));
    }

    #[test]
    fn copies_and_priority_use_dedicated_flags() {
        let args = job_args("Office", "doc.pdf", &opts(&[("copies", "2"), ("q", "75")])).unwrap();
        let joined = args.join(" ");
        assert!(joined.contains("-n 2"));
        assert!(joined.contains("-q 75"));
        assert!(!joined.contains("-o copies"));
    }

    #[test]
    fn flag_options_emit_bare_keys() {
        let args = job_args("Office", "doc.pdf", &opts(&[("fitplot", "")])).unwrap();
        let pos = args.iter().position(|a| a == "-o").unwrap();
        assert_eq!(args[pos + 1], "fit-to-page");
    }

    #[test]
    fn job_args_end_with_the_file() {
        let args = job_args("Office", "doc.pdf", &BTreeMap::new()).unwrap();
        assert_eq!(args, vec!["-d", "Office", "doc.pdf"]);
    }

    #[test]
    fn install_args_cover_driver_and_metadata() {
        let mut request = InstallRequest::new("Office", "usb://HP/LaserJet?serial=1");
        request.driver = Some("drv:///sample.drv/generic.ppd".into());
        request.description = Some("Front desk".into());
        request.location = Some("Reception".into());
        request.options = opts(&[("shared", "true")]);

        let args = install_args(&request).unwrap();
        let joined = args.join(" ");
        assert!(joined.starts_with("-p Office -v usb://HP/LaserJet?serial=1"));
        assert!(joined.contains("-m drv:///sample.drv/generic.ppd"));
        assert!(joined.contains("-D Front desk"));
        assert!(joined.contains("-L Reception"));
        assert!(joined.contains("-o printer-is-shared=true"));
        assert_eq!(args.last().unwrap(), "-E");
    }

    #[test]
    fn uninstall_args_are_minimal() {
        assert_eq!(uninstall_args("Office"), vec!["-x", "Office"]);
    }
}
