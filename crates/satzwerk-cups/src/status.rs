// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Installed-printer status parsing.
//
// The status listing opens with the default destination line
// ("system default destination: NAME") followed by one line per queue.
// Queue lines carry a label, a colon, and the connection string; the label
// either ends in the queue name ("device for NAME") or is a status sentence
// ("printer NAME is idle. ...").  A listing that could not be produced at
// all is an empty result, not an error — "no printers" and "no spooler"
// look the same to callers.

use tracing::debug;

use satzwerk_core::types::PrinterRecord;

use crate::lines::raw_lines;

/// Parse the installed-printer status text into records.
///
/// Empty or whitespace-only input yields an empty vec.
pub fn parse_printer_listing(raw: &str) -> Vec<PrinterRecord> {
    let mut lines = raw_lines(raw)
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    // First line names the default destination after its colon.
    let default_name = lines
        .next()
        .and_then(|l| l.split_once(':'))
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default();

    let mut printers = Vec::new();
    for line in lines {
        let Some((label, connection)) = split_at_connection(line) else {
            debug!(line, "skipping unparsable status line");
            continue;
        };
        let Some(name) = queue_name(label) else {
            debug!(line, "skipping status line with no queue name");
            continue;
        };
        let is_default = name == default_name;
        printers.push(PrinterRecord {
            name,
            connection: connection.trim().to_string(),
            is_default,
        });
    }
    printers
}

/// Split a queue line at the first colon whose remainder is non-empty.
fn split_at_connection(line: &str) -> Option<(&str, &str)> {
    let mut search_from = 0;
    while let Some(offset) = line[search_from..].find(':') {
        let at = search_from + offset;
        let rest = &line[at + 1..];
        if !rest.trim().is_empty() {
            return Some((&line[..at], rest));
        }
        search_from = at + 1;
    }
    None
}

/// Extract the queue name from the label left of the colon.
///
/// Status-sentence labels ("printer NAME is idle. ...") carry the name as
/// their second word; device labels ("device for NAME") end in it.
fn queue_name(label: &str) -> Option<String> {
    let label = label.trim();
    if let Some(rest) = label.strip_prefix("printer ") {
        return rest.split_whitespace().next().map(str::to_string);
    }
    label.rsplit(' ').next().filter(|n| !n.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty_result() {
        assert!(parse_printer_listing("").is_empty());
        assert!(parse_printer_listing("  \n \n").is_empty());
    }

    #[test]
    fn device_listing_parses_with_default_flag() {
        let raw = "system default destination: HP_LaserJet\n\
                   device for HP_LaserJet: ipp://host/printers/HP_LaserJet\n\
                   device for Basement: socket://192.168.1.9:9100\n";
        let printers = parse_printer_listing(raw);
        assert_eq!(printers.len(), 2);
        assert_eq!(
            printers[0],
            PrinterRecord {
                name: "HP_LaserJet".into(),
                connection: "ipp://host/printers/HP_LaserJet".into(),
                is_default: true,
            }
        );
        assert_eq!(printers[1].name, "Basement");
        assert!(!printers[1].is_default);
    }

    #[test]
    fn status_sentence_lines_resolve_to_queue_name() {
        let raw = "system default destination: HP_LaserJet\n\
                   printer HP_LaserJet is idle.  enabled since ...: ipp://host/printers/HP_LaserJet\n";
        let printers = parse_printer_listing(raw);
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].name, "HP_LaserJet");
        assert_eq!(printers[0].connection, "ipp://host/printers/HP_LaserJet");
        assert!(printers[0].is_default);
    }

    #[test]
    fn default_match_is_case_sensitive() {
        let raw = "system default destination: office\n\
                   device for Office: usb://HP/LaserJet?serial=1\n";
        let printers = parse_printer_listing(raw);
        assert_eq!(printers.len(), 1);
        assert!(!printers[0].is_default);
    }

    #[test]
    fn lines_without_connection_are_skipped() {
        let raw = "system default destination: A\n\
                   device for A:\n\
                   device for B: lpd://host/queue\n";
        let printers = parse_printer_listing(raw);
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].name, "B");
    }

    #[test]
    fn blank_lines_are_dropped() {
        let raw = "system default destination: A\n\n\r\n\
                   device for A: usb://V/P?x\n";
        let printers = parse_printer_listing(raw);
        assert_eq!(printers.len(), 1);
        assert!(printers[0].is_default);
    }
}
