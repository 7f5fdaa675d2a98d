// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Driver catalog parsing.
//
// The long-form driver listing describes each driver with exactly four
// consecutive `label = value` lines: driver id, language, make-and-model,
// device id.  Only the order matters; labels are not inspected.  A trailing
// group of fewer than four lines is dropped without error.

use tracing::debug;

use satzwerk_core::types::DriverRecord;

use crate::lines::lines;

/// Parse the long-form driver listing into catalog order.
pub fn parse_driver_catalog(raw: &str) -> Vec<DriverRecord> {
    let all = lines(raw);
    let dropped = all.len() % 4;
    if dropped != 0 {
        debug!(lines = dropped, "dropping short trailing driver group");
    }

    all.chunks_exact(4)
        .map(|group| DriverRecord {
            driver: value_of(group[0]),
            lang: value_of(group[1]),
            make_and_model: value_of(group[2]),
            id: value_of(group[3]),
        })
        .collect()
}

/// The trimmed text after the first `=`; lines are not trimmed beforehand.
/// A line with no `=` degrades to its own trimmed text.
fn value_of(line: &str) -> String {
    line.split_once('=').map(|(_, v)| v).unwrap_or(line).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
Model:  name = drv:///sample.drv/generic.ppd
        natural_language = en
        make-and-model = Generic PDF Printer
        device-id = MFG:Generic;MDL:PDF;
Model:  name = lsb/usr/HP/hp-laserjet_4050.ppd
        natural_language = en
        make-and-model = HP LaserJet 4050 Postscript
        device-id = MFG:Hewlett-Packard;MDL:HP LaserJet 4050;
";

    #[test]
    fn parses_groups_of_four_in_catalog_order() {
        let catalog = parse_driver_catalog(CATALOG);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].driver, "drv:///sample.drv/generic.ppd");
        assert_eq!(catalog[0].lang, "en");
        assert_eq!(catalog[0].make_and_model, "Generic PDF Printer");
        assert_eq!(catalog[0].id, "MFG:Generic;MDL:PDF;");
        assert_eq!(catalog[1].make_and_model, "HP LaserJet 4050 Postscript");
    }

    #[test]
    fn short_trailing_group_is_dropped() {
        let raw = format!("{CATALOG}Model:  name = drv:///leftover.ppd\n        natural_language = en\n");
        let catalog = parse_driver_catalog(&raw);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_catalog() {
        assert!(parse_driver_catalog("").is_empty());
    }

    #[test]
    fn reparsing_reconstructed_text_is_idempotent() {
        let catalog = parse_driver_catalog(CATALOG);
        let rebuilt: String = catalog
            .iter()
            .map(|d| {
                format!(
                    "name = {}\nnatural_language = {}\nmake-and-model = {}\ndevice-id = {}\n",
                    d.driver, d.lang, d.make_and_model, d.id
                )
            })
            .collect();
        assert_eq!(parse_driver_catalog(&rebuilt), catalog);
    }

    #[test]
    fn value_is_everything_after_first_equals() {
        let raw = "a = x=y\nb = 1\nc = 2\nd = 3\n";
        let catalog = parse_driver_catalog(raw);
        assert_eq!(catalog[0].driver, "x=y");
    }
}
