//! Sort key resolution and natural value ordering.

use crate::field::{Field, SortDirection};
use std::cmp::Ordering;
use tracing::warn;

/// The field a table is ordered by, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Pick the ordering key for a field list.
///
/// Candidates come from the first non-empty tier:
/// 1. fields with an explicit sort request, in request order;
/// 2. fields flagged `default_sort`, in declaration order;
/// 3. the first non-header field.
///
/// Only one key is ever applied. Extra candidates are reported and dropped.
/// `reverse` flips the chosen key's direction.
pub fn resolve_sort(fields: &[Field], reverse: bool) -> Option<SortKey> {
    let mut requested: Vec<&Field> = fields.iter().filter(|f| f.is_sort_requested()).collect();
    requested.sort_by_key(|f| f.sort_rank);

    let candidates = if !requested.is_empty() {
        requested
    } else {
        let defaults: Vec<&Field> = fields.iter().filter(|f| f.default_sort).collect();
        if !defaults.is_empty() {
            defaults
        } else {
            fields
                .iter()
                .filter(|f| !f.section_header)
                .take(1)
                .collect()
        }
    };

    let first = candidates.first()?;
    if candidates.len() > 1 {
        let ignored: Vec<&str> = candidates[1..].iter().map(|f| f.name).collect();
        warn!(
            field = first.name,
            ignored = ?ignored,
            "multiple sort fields requested; sorting by the first only"
        );
    }

    let direction = if reverse {
        first.sort_direction.reversed()
    } else {
        first.sort_direction
    };
    Some(SortKey {
        field: first.name,
        direction,
    })
}

/// Stable-sort `rows` by the string `key` extracts, honoring `direction`.
///
/// Descending output is the exact reverse of ascending output, including the
/// relative order of rows with equal keys.
pub fn sort_rows<T>(rows: &mut [T], direction: SortDirection, key: impl Fn(&T) -> &str) {
    rows.sort_by(|a, b| compare_natural(key(a), key(b)));
    if direction == SortDirection::Descending {
        rows.reverse();
    }
}

/// Compare display strings the way a person reads them.
///
/// Both strings are split into digit and non-digit runs and compared run by
/// run: digit runs by value (so `2 < 16`), text runs case-insensitively, and a
/// digit run before a text run. Strings equal under those rules fall back to a
/// byte comparison, which keeps this a total order.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => compare_digits(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => x.to_lowercase().cmp(&y.to_lowercase()),
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}
