//! Independent checks for chains produced by the solver.
//!
//! [`check_chain`] validates structure only: connectivity and piece counts.
//! [`verify_maximal`] additionally compares the length against
//! [`max_chain_length`], a separate exhaustive search that shares no code
//! with the solver.

use fnv::FnvHashMap;
use log::debug;

use crate::{
    config::MAX_PIECES,
    types::{ChainError, ChainResult, Domino},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Correct,

    EmptyChain, // empty chain for a non-empty input

    TooLong(Vec<Domino>), // more pieces than the input holds

    // the right side of piece `.0` does not match the left side of the next
    ChainingFailure(usize, Vec<Domino>),

    DominoMismatch(Domino, Vec<Domino>), // piece used more often than supplied

    LengthMismatch { expected: usize, got: usize },
}

impl CheckResult {
    pub fn is_correct(&self) -> bool {
        matches!(self, CheckResult::Correct)
    }
}

/// The piece with its smaller value first, so a piece and its flip compare equal.
pub fn canonical(d: Domino) -> Domino {
    match d {
        (m, n) if m > n => (n, m),
        (m, n) => (m, n),
    }
}

pub fn is_connected(chain: &[Domino]) -> bool {
    first_break(chain).is_none()
}

fn first_break(chain: &[Domino]) -> Option<usize> {
    chain.windows(2).position(|w| w[0].1 != w[1].0)
}

fn counts(pieces: &[Domino]) -> FnvHashMap<Domino, usize> {
    let mut counts = FnvHashMap::default();
    for &d in pieces {
        *counts.entry(canonical(d)).or_insert(0) += 1;
    }
    counts
}

pub fn check_chain(input: &[Domino], chain: &[Domino]) -> CheckResult {
    if chain.is_empty() {
        return if input.is_empty() {
            CheckResult::Correct
        } else {
            CheckResult::EmptyChain
        };
    }

    if chain.len() > input.len() {
        return CheckResult::TooLong(chain.to_vec());
    }

    if let Some(i) = first_break(chain) {
        return CheckResult::ChainingFailure(i, chain.to_vec());
    }

    let available = counts(input);
    let mut used = counts(chain).into_iter().collect::<Vec<_>>();
    used.sort_unstable();
    for (domino, count) in used {
        if count > available.get(&domino).copied().unwrap_or(0) {
            return CheckResult::DominoMismatch(domino, chain.to_vec());
        }
    }

    CheckResult::Correct
}

/// Length of the longest chain `input` admits.
pub fn max_chain_length(input: &[Domino]) -> ChainResult<usize> {
    if input.len() > MAX_PIECES {
        return Err(ChainError::TooManyPieces {
            pieces: input.len(),
            limit: MAX_PIECES,
        });
    }

    let mut memo = FnvHashMap::default();
    let best = longest(input, None, 0, &mut memo);
    debug!(
        "reference search over {} pieces: {best} ({} memo entries)",
        input.len(),
        memo.len()
    );

    Ok(best)
}

fn longest(
    pieces: &[Domino],
    current: Option<u8>,
    used: u64,
    memo: &mut FnvHashMap<(Option<u8>, u64), usize>,
) -> usize {
    if let Some(&best) = memo.get(&(current, used)) {
        return best;
    }

    let mut best = 0;
    for (i, &(a, b)) in pieces.iter().enumerate() {
        let bit = 1u64 << i;
        if used & bit != 0 {
            continue;
        }
        if current.is_none() || current == Some(a) {
            best = best.max(1 + longest(pieces, Some(b), used | bit, memo));
        }
        if a != b && (current.is_none() || current == Some(b)) {
            best = best.max(1 + longest(pieces, Some(a), used | bit, memo));
        }
    }

    memo.insert((current, used), best);
    best
}

/// [`check_chain`], then a length comparison against [`max_chain_length`].
pub fn verify_maximal(input: &[Domino], chain: &[Domino]) -> ChainResult<CheckResult> {
    let check = check_chain(input, chain);
    if !check.is_correct() {
        return Ok(check);
    }

    let expected = max_chain_length(input)?;
    if chain.len() != expected {
        return Ok(CheckResult::LengthMismatch {
            expected,
            got: chain.len(),
        });
    }

    Ok(CheckResult::Correct)
}
