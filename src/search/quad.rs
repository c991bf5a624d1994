//! Four-byte word scanner driven by a small state machine.

use super::TERMINATOR;

const TERM: u32 = u32::from_le_bytes(*TERMINATOR);
const LF_CR_LF: u32 = u32::from_le_bytes([b'\n', b'\r', b'\n', 0]);
const CRLF: u32 = u32::from_le_bytes([b'\r', b'\n', 0, 0]);
const LF: u32 = b'\n' as u32;

/// Longest suffix of the bytes read so far that is also a proper prefix of
/// the terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    Empty,
    Cr,
    CrLf,
    CrLfCr,
}

impl Tail {
    fn of(bytes: &[u8]) -> Tail {
        if bytes.ends_with(b"\r\n\r") {
            Tail::CrLfCr
        } else if bytes.ends_with(b"\r\n") {
            Tail::CrLf
        } else if bytes.ends_with(b"\r") {
            Tail::Cr
        } else {
            Tail::Empty
        }
    }

    fn len(self) -> usize {
        match self {
            Tail::Empty => 0,
            Tail::Cr => 1,
            Tail::CrLf => 2,
            Tail::CrLfCr => 3,
        }
    }

    /// Whether `next` starts with the part of the terminator still missing.
    fn completed_by(self, next: &[u8]) -> bool {
        self != Tail::Empty && next.starts_with(&TERMINATOR[self.len()..])
    }
}

/// `qd`: read four-byte aligned words, remembering how much of a terminator
/// the previous word ended with.
pub fn find_quads(hay: &[u8]) -> Option<usize> {
    let head = ((4 - (hay.as_ptr() as usize & 3)) & 3).min(hay.len());
    let (lead, body) = hay.split_at(head);
    let mut tail = Tail::of(lead);
    let mut base = head;
    let mut chunks = body.chunks_exact(4);
    for chunk in &mut chunks {
        let curr = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let straddle = match tail {
            Tail::Empty => None,
            Tail::Cr => ((curr & 0x00FF_FFFF) == LF_CR_LF).then(|| base - 1),
            Tail::CrLf => ((curr & 0xFFFF) == CRLF).then(|| base - 2),
            Tail::CrLfCr => ((curr & 0xFF) == LF).then(|| base - 3),
        };
        if straddle.is_some() {
            return straddle;
        }
        if curr == TERM {
            return Some(base);
        }
        tail = Tail::of(chunk);
        base += 4;
    }
    if tail.completed_by(chunks.remainder()) {
        return Some(base - tail.len());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_tracks_longest_prefix() {
        assert_eq!(Tail::of(b"ab\r\n\r"), Tail::CrLfCr);
        assert_eq!(Tail::of(b"\n\r\n"), Tail::CrLf);
        assert_eq!(Tail::of(b"\r\r"), Tail::Cr);
        assert_eq!(Tail::of(b"\r\n\r\n"), Tail::CrLf);
        assert_eq!(Tail::of(b""), Tail::Empty);
    }

    #[test]
    fn aligned_match_after_partial_tail() {
        // a word ending in `\r` followed by a full terminator word
        let mut buf = vec![b'.'; 3];
        buf.extend_from_slice(b"\r\r\n\r\n");
        for start in 0..4 {
            let hay = &buf[start..];
            assert_eq!(find_quads(hay), super::super::find_naive(hay));
        }
    }

    #[test]
    fn match_in_trailing_bytes() {
        let hay = b"0123456789\r\n\r\n";
        for start in 0..4 {
            assert_eq!(find_quads(&hay[start..]), Some(10 - start));
        }
    }
}
