// Copyright (C) 2025 The rphonefield Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use crate::callingcode::table::CallingCodeTable;

/// The set of calling codes still consistent with the digits typed so far,
/// narrowed left-to-right.
///
/// `candidates` are indices into the session's table, kept in table order;
/// narrowing preserves that order, so "first candidate" is always the
/// tie-break winner. `digits_considered` is the longest digit prefix for
/// which at least one candidate survived, which can be shorter than the
/// typed digits once the pool stops narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    pub digits_considered: String,
    /// Shortest calling-code length among `candidates`.
    pub min_code_digits: usize,
    /// Longest calling-code length among `candidates`.
    pub max_code_digits: usize,
    pub candidates: Vec<usize>,
}

impl CandidateSet {
    pub(crate) fn empty() -> Self {
        Self {
            digits_considered: String::new(),
            min_code_digits: 0,
            max_code_digits: 0,
            candidates: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Result of one resolver run: the (re)narrowed candidate set and, when one
/// exists, the table index of the exact calling-code match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub candidate_set: CandidateSet,
    pub exact_match: Option<usize>,
}

/// Whether `previous` no longer describes `digits` and the narrowing has to
/// be recomputed. True when any of:
/// 1. there is no previous candidate set,
/// 2. the prefix of `digits` of the previously considered length differs
///    from the considered digits (the user edited inside the code span),
/// 3. `digits` has grown past the considered length while a longer calling
///    code is still reachable within the previous pool.
pub fn is_stale(digits: &str, previous: Option<&CandidateSet>) -> bool {
    let Some(previous) = previous else {
        return true;
    };
    let considered_len = previous.digits_considered.len();
    if digits.len() < considered_len || digits[..considered_len] != previous.digits_considered {
        return true;
    }
    digits.len() > considered_len && previous.max_code_digits > considered_len
}

/// Narrows the candidate pool against `digits` and searches for an exact
/// calling-code match.
///
/// Narrowing starts from the previous candidate pool (or the full table when
/// there is none) and extends the considered prefix one digit at a time,
/// keeping the entries whose calling code starts with the prefix. The prefix
/// stops growing at the first digit that would empty the pool; if even the
/// first digit empties it, detection abstains with an empty candidate set.
///
/// `digits` must be a pure ASCII digit string (see `digit_util`).
pub fn resolve(
    table: &CallingCodeTable,
    digits: &str,
    previous: Option<&CandidateSet>,
) -> ResolveOutcome {
    let mut pool: Vec<usize> = match previous {
        Some(prev) if !prev.candidates.is_empty() => prev.candidates.clone(),
        _ => (0..table.len()).collect(),
    };
    let mut considered_len = 0;
    let (mut min_code_digits, mut max_code_digits) = code_length_bounds(table, &pool);

    for end in 1..=digits.len() {
        let prefix = &digits[..end];
        let narrowed: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|&index| table.entry(index).calling_code.starts_with(prefix))
            .collect();
        if narrowed.is_empty() {
            break;
        }
        pool = narrowed;
        considered_len = end;
        (min_code_digits, max_code_digits) = code_length_bounds(table, &pool);
    }

    if considered_len == 0 && !digits.is_empty() {
        trace!("no calling code starts with {:?}, detection abstains", &digits[..1]);
        return ResolveOutcome {
            candidate_set: CandidateSet::empty(),
            exact_match: None,
        };
    }

    let candidate_set = CandidateSet {
        digits_considered: digits[..considered_len].to_owned(),
        min_code_digits,
        max_code_digits,
        candidates: pool,
    };
    let exact_match = find_exact_match(table, digits, &candidate_set);
    trace!(
        "narrowed {:?} to {} candidate(s), exact match: {:?}",
        candidate_set.digits_considered,
        candidate_set.candidates.len(),
        exact_match.map(|index| table.entry(index).iso_code.as_str())
    );
    ResolveOutcome {
        candidate_set,
        exact_match,
    }
}

/// Longest-first scan for a calling code equal to a prefix of `digits`.
///
/// Prefixes at or above the narrowed pool's minimum code length are looked
/// up inside the pool; shorter prefixes fall back to the full table, so that
/// backspacing below the narrowed minimum can still re-detect a short code.
/// Ties (several territories with the identical code) resolve by table
/// order.
fn find_exact_match(table: &CallingCodeTable, digits: &str, set: &CandidateSet) -> Option<usize> {
    let upper = set.digits_considered.len().min(digits.len());
    // A zero-length prefix equals no calling code, so 1 is the floor.
    for len in (1..=upper).rev() {
        let prefix = &digits[..len];
        let found = if len >= set.min_code_digits {
            set.candidates
                .iter()
                .copied()
                .find(|&index| table.entry(index).calling_code == prefix)
        } else {
            table.indices_for_code(prefix).first().copied()
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

fn code_length_bounds(table: &CallingCodeTable, pool: &[usize]) -> (usize, usize) {
    pool.iter().fold((usize::MAX, 0), |(min, max), &index| {
        let len = table.entry(index).calling_code.len();
        (min.min(len), max.max(len))
    })
}
