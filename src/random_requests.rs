//! Fires seeded random move requests at a board.
//!
//! Coordinates are drawn from `-1..=8`, one past each edge, so every rejection path of the engine
//! gets hit along with the accepted moves. Useful for soak testing and as a quick smoke check from
//! the terminal.

use std::collections::HashMap;

use board::Board;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use types::MoveResult;

use crate::session::MoveRequest;

pub struct RequestStream {
    rng: ChaCha8Rng,
    low: i32,
    high: i32,
}

impl RequestStream {
    /// Coordinates anywhere in `-1..=8`
    pub fn new(seed: u64) -> Self {
        Self::with_range(seed, -1, 8)
    }

    /// Coordinates on the board only, which gives far more accepted moves
    pub fn on_board(seed: u64) -> Self {
        Self::with_range(seed, 0, 7)
    }

    fn with_range(seed: u64, low: i32, high: i32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            low,
            high,
        }
    }

    #[inline(always)]
    fn coordinate(&mut self) -> i32 {
        self.rng.gen_range(self.low..=self.high)
    }
}

impl Iterator for RequestStream {
    type Item = MoveRequest;

    fn next(&mut self) -> Option<MoveRequest> {
        Some(MoveRequest::new(
            self.coordinate(),
            self.coordinate(),
            self.coordinate(),
            self.coordinate(),
        ))
    }
}

/// How many requests ended with each result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<MoveResult, usize>,
}

impl Tally {
    pub fn record(&mut self, result: MoveResult) {
        *self.counts.entry(result).or_insert(0) += 1;
    }

    pub fn count(&self, result: MoveResult) -> usize {
        self.counts.get(&result).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn accepted(&self) -> usize {
        self.count(MoveResult::Ok)
    }

    /// Results in code order, zero counts skipped
    pub fn iter(&self) -> impl Iterator<Item = (MoveResult, usize)> + '_ {
        MoveResult::ALL
            .iter()
            .map(|&result| (result, self.count(result)))
            .filter(|&(_, n)| n > 0)
    }
}

/// Plays `n` requests from [`RequestStream::new`] on `board`, in place.
///
/// Both sides' pieces may move, the board does not keep turns.
pub fn play_random_requests(board: &mut Board, seed: u64, n: usize) -> Tally {
    play_requests(board, RequestStream::new(seed).take(n))
}

pub fn play_requests(board: &mut Board, requests: impl IntoIterator<Item = MoveRequest>) -> Tally {
    let mut tally = Tally::default();
    for MoveRequest { x1, y1, x2, y2 } in requests {
        let result = board.request_move(x1, y1, x2, y2);
        tally.record(result);
    }
    debug!(
        "played {} random requests, {} accepted",
        tally.total(),
        tally.accepted()
    );
    tally
}
