//! Searchers for the HTTP header terminator `"\r\n\r\n"`.
//!
//! Every searcher returns the index of the first terminator in the haystack.
//! The word-based scanners (`d1`, `d2`, `d3`, `qd`) only look for the
//! terminator; `fjs` and `bmh` are general substring searchers built for it.

mod fjs;
mod horspool;
mod pairs;
mod quad;

pub use fjs::FjsSearcher;
pub use horspool::HorspoolSearcher;
pub use pairs::{find_pairs, find_pairs_carry, find_pairs_skip};
pub use quad::find_quads;

use crate::errors::BenchError;
use std::fmt;
use std::str::FromStr;

/// The four bytes that end an HTTP header block.
pub const TERMINATOR: &[u8; 4] = b"\r\n\r\n";

/// A prepared searcher. Construction cost (shift tables) is paid once.
pub trait Search {
    fn find(&self, hay: &[u8]) -> Option<usize>;
}

struct FnSearch(fn(&[u8]) -> Option<usize>);

impl Search for FnSearch {
    fn find(&self, hay: &[u8]) -> Option<usize> {
        (self.0)(hay)
    }
}

/// Byte-window scan; the `strstr` baseline every other searcher must agree with.
pub fn find_naive(hay: &[u8]) -> Option<usize> {
    hay.windows(TERMINATOR.len()).position(|w| w == TERMINATOR)
}

/// Standard library substring search on UTF-8 input.
pub fn find_std(hay: &[u8]) -> Option<usize> {
    match std::str::from_utf8(hay) {
        Ok(s) => s.find("\r\n\r\n"),
        Err(_) => find_naive(hay),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Pairs,
    PairsSkip,
    PairsCarry,
    Quads,
    Fjs,
    Horspool,
    Naive,
    StdFind,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Pairs,
        Algorithm::PairsSkip,
        Algorithm::PairsCarry,
        Algorithm::Quads,
        Algorithm::Fjs,
        Algorithm::Horspool,
        Algorithm::Naive,
        Algorithm::StdFind,
    ];

    /// Short label used in benchmark names and chart legends.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Pairs => "d1",
            Algorithm::PairsSkip => "d2",
            Algorithm::PairsCarry => "d3",
            Algorithm::Quads => "qd",
            Algorithm::Fjs => "fjs",
            Algorithm::Horspool => "bmh",
            Algorithm::Naive => "naive",
            Algorithm::StdFind => "find",
        }
    }

    pub fn driver(self) -> &'static str {
        match self {
            Algorithm::Pairs | Algorithm::PairsSkip | Algorithm::PairsCarry | Algorithm::Quads => {
                "BM_crlf"
            }
            Algorithm::Fjs => "BM_fjs",
            Algorithm::Horspool => "BM_bmh",
            Algorithm::Naive => "BM_naive",
            Algorithm::StdFind => "BM_find",
        }
    }

    /// Haystack offsets worth measuring: every alignment the scanner reads at.
    pub fn offsets(self) -> &'static [u8] {
        match self {
            Algorithm::Quads => &[0, 1, 2, 3],
            Algorithm::Pairs | Algorithm::PairsSkip | Algorithm::PairsCarry | Algorithm::Naive => {
                &[0, 1]
            }
            Algorithm::Fjs | Algorithm::Horspool | Algorithm::StdFind => &[0],
        }
    }

    pub fn build(self) -> Box<dyn Search> {
        match self {
            Algorithm::Pairs => Box::new(FnSearch(find_pairs)),
            Algorithm::PairsSkip => Box::new(FnSearch(find_pairs_skip)),
            Algorithm::PairsCarry => Box::new(FnSearch(find_pairs_carry)),
            Algorithm::Quads => Box::new(FnSearch(find_quads)),
            Algorithm::Fjs => Box::new(FjsSearcher::new(TERMINATOR)),
            Algorithm::Horspool => Box::new(HorspoolSearcher::new(TERMINATOR)),
            Algorithm::Naive => Box::new(FnSearch(find_naive)),
            Algorithm::StdFind => Box::new(FnSearch(find_std)),
        }
    }

    /// One-shot search; prefer `build` when searching repeatedly.
    pub fn find(self, hay: &[u8]) -> Option<usize> {
        self.build().find(hay)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BenchError::UnknownAlgorithm(s.to_string()))
    }
}
