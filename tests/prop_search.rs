use crlfbench::search::{Algorithm, FjsSearcher, HorspoolSearcher, Search, find_naive};
use proptest::prelude::*;

fn crlf_heavy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'\r', b'\n', b'x']), 0..96)
}

proptest! {
    #[test]
    fn prop_all_algorithms_agree_with_naive(hay in crlf_heavy(), pad in 0usize..4) {
        // shift the slice start so the word scanners see every alignment
        let mut buf = vec![b'.'; pad];
        buf.extend_from_slice(&hay);
        let slice = &buf[pad..];
        let want = find_naive(slice);
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.find(slice), want, "{}", algo);
        }
    }

    #[test]
    fn prop_arbitrary_bytes(hay in prop::collection::vec(any::<u8>(), 0..128)) {
        let want = find_naive(&hay);
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.find(&hay), want, "{}", algo);
        }
    }

    #[test]
    fn prop_general_searchers_match_window_scan(
        hay in prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..64),
        needle in prop::collection::vec(prop::sample::select(vec![b'a', b'b']), 1..6),
    ) {
        let want = hay.windows(needle.len()).position(|w| w == needle.as_slice());
        prop_assert_eq!(FjsSearcher::new(&needle).find(&hay), want);
        prop_assert_eq!(HorspoolSearcher::new(&needle).find(&hay), want);
    }
}
