use fnv::FnvHashMap;
use log::{debug, trace};

use crate::{
    config::SolverConfig,
    types::{ChainError, ChainResult, Domino},
};

/// Longest chain that can be laid from `input`, using the default config.
pub fn max_chain(input: &[Domino]) -> ChainResult<Vec<Domino>> {
    Solver::default().solve(input)
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> ChainResult<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns one maximum-length chain. Pieces may be flipped, and each input
    /// piece is placed at most once.
    pub fn solve(&self, input: &[Domino]) -> ChainResult<Vec<Domino>> {
        if input.len() > self.config.max_pieces {
            return Err(ChainError::TooManyPieces {
                pieces: input.len(),
                limit: self.config.max_pieces,
            });
        }

        let mut search = Search::new(input);
        let chain = search.reconstruct();

        debug!(
            "solved {} pieces: chain of {} ({} memo entries)",
            input.len(),
            chain.len(),
            search.memo.len()
        );

        Ok(chain)
    }
}

/// One invocation's worth of search state. The memo maps
/// `(open end, used mask)` to the number of pieces still placeable.
struct Search<'a> {
    pieces: &'a [Domino],
    memo: FnvHashMap<(u8, u64), usize>,
}

impl<'a> Search<'a> {
    fn new(pieces: &'a [Domino]) -> Self {
        Self {
            pieces,
            memo: FnvHashMap::default(),
        }
    }

    fn longest_from(&mut self, tail: u8, used: u64) -> usize {
        if let Some(&best) = self.memo.get(&(tail, used)) {
            return best;
        }

        let remaining = self.pieces.len() - used.count_ones() as usize;
        let mut best = 0;
        for (i, placed) in placements(self.pieces, Some(tail), used) {
            best = best.max(1 + self.longest_from(placed.1, used | 1 << i));
            if best == remaining {
                break;
            }
        }

        self.memo.insert((tail, used), best);
        best
    }

    /// Walks forward from the empty chain, always taking a placement that
    /// keeps the longest continuation.
    fn reconstruct(&mut self) -> Vec<Domino> {
        let mut chain = Vec::new();
        let mut tail = None;
        let mut used = 0u64;

        loop {
            let mut pick: Option<(usize, usize, Domino)> = None;
            for (i, placed) in placements(self.pieces, tail, used) {
                let score = 1 + self.longest_from(placed.1, used | 1 << i);
                if pick.map_or(true, |(top, _, _)| score > top) {
                    pick = Some((score, i, placed));
                }
            }

            match pick {
                Some((score, i, placed)) => {
                    trace!("place piece {i} as {placed:?}, {score} to go");
                    chain.push(placed);
                    used |= 1 << i;
                    tail = Some(placed.1);
                }
                None => break,
            }
        }

        chain
    }
}

/// Unused pieces that can follow `tail`, oriented so their first value meets
/// it. With no tail every unused piece qualifies. Doubles are offered once.
fn placements(pieces: &[Domino], tail: Option<u8>, used: u64) -> Vec<(usize, Domino)> {
    let mut out = Vec::new();
    for (i, &(a, b)) in pieces.iter().enumerate() {
        if used & (1 << i) != 0 {
            continue;
        }
        if tail.map_or(true, |t| t == a) {
            out.push((i, (a, b)));
        }
        if a != b && tail.map_or(true, |t| t == b) {
            out.push((i, (b, a)));
        }
    }
    out
}
