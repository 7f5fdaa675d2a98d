// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fuzzy driver matching.
//
// Query slugs are matched against the catalog's make-and-model field using
// progressively shortened token windows: the full slug first, then one token
// fewer, down to a single token.  The first window with any hits wins and
// shorter windows are never tried, so a full model name is preferred over an
// over-eager match on a bare manufacturer token.

use tracing::debug;

use satzwerk_core::types::DriverRecord;

/// Default cap on combined results across all slugs.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Search the catalog with one or more free-text slugs.
///
/// Hits across slugs are flattened, deduplicated (a record matched under two
/// slugs counts once), and capped at `maxsize` in first-seen order.  With no
/// slugs the full catalog is returned unchanged, unranked and uncapped.
pub fn search_drivers(
    catalog: &[DriverRecord],
    slugs: &[&str],
    maxsize: usize,
) -> Vec<DriverRecord> {
    if slugs.is_empty() {
        return catalog.to_vec();
    }

    let mut seen = vec![false; catalog.len()];
    let mut results = Vec::new();

    for slug in slugs {
        for index in match_slug(catalog, slug) {
            if seen[index] {
                continue;
            }
            seen[index] = true;
            if results.len() < maxsize {
                results.push(catalog[index].clone());
            }
        }
    }

    results
}

/// Match one slug, returning catalog indices in ranking order.
///
/// Windows run from the full token count down to one; the first window that
/// produces hits is final.
fn match_slug(catalog: &[DriverRecord], slug: &str) -> Vec<usize> {
    let tokens: Vec<&str> = slug.split_whitespace().collect();

    for window in (1..=tokens.len()).rev() {
        let candidate = tokens[..window].join(" ");
        let hits = rank_candidate(catalog, &candidate);
        if !hits.is_empty() {
            debug!(slug, window, hits = hits.len(), "driver query window matched");
            return hits;
        }
    }
    Vec::new()
}

/// Rank the whole catalog against one candidate string, best first.
/// Ties keep catalog order.
fn rank_candidate(catalog: &[DriverRecord], candidate: &str) -> Vec<usize> {
    let mut scored: Vec<(i64, usize)> = catalog
        .iter()
        .enumerate()
        .filter_map(|(i, d)| fuzzy_score(candidate, &d.make_and_model).map(|s| (s, i)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, i)| i).collect()
}

/// Score a query against a target, higher is better, `None` is no match.
///
/// A case-insensitive contiguous substring outranks any subsequence match;
/// earlier positions rank above later ones.  Failing that, the query must
/// appear as an in-order character subsequence of the target, scored by how
/// tightly it packs (total gap between matched characters).
fn fuzzy_score(query: &str, target: &str) -> Option<i64> {
    if query.is_empty() {
        return None;
    }
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    if let Some(pos) = target.find(&query) {
        let prefix = target[..pos].chars().count() as i64;
        return Some(10_000 - prefix);
    }

    // Subsequence scan: every query char must appear, in order.
    let mut gaps = 0i64;
    let mut run_started = false;
    let mut chars = target.chars();
    for qc in query.chars() {
        let mut gap = 0i64;
        loop {
            let tc = chars.next()?;
            if tc == qc {
                break;
            }
            gap += 1;
        }
        if run_started {
            gaps += gap;
        }
        run_started = true;
    }
    Some(1_000 - gaps)
}
