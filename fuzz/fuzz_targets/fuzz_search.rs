#![no_main]
use arbitrary::Arbitrary;
use crlfbench::search::{Algorithm, FjsSearcher, Search, find_naive};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    pad: u8,
    needle: &'a [u8],
    hay: &'a [u8],
}

fuzz_target!(|input: Input| {
    let pad = usize::from(input.pad % 4).min(input.hay.len());
    let hay = &input.hay[pad..];
    let want = find_naive(hay);
    for algo in Algorithm::ALL {
        assert_eq!(algo.find(hay), want, "{algo}");
    }
    if !input.needle.is_empty() && input.needle.len() <= 16 {
        let want = hay.windows(input.needle.len()).position(|w| w == input.needle);
        assert_eq!(FjsSearcher::new(input.needle).find(hay), want);
    }
});
