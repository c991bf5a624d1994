//! Scanners that read the haystack one two-byte word at a time.
//!
//! Reads start at the first two-byte aligned address, so a terminator can sit
//! on an even or an odd word boundary. An even one shows up as two `\r\n`
//! words in a row; an odd one as a `\n\r` word with `\r` before and `\n` after.

const CRLF: u16 = u16::from_le_bytes(*b"\r\n");
const LFCR: u16 = u16::from_le_bytes(*b"\n\r");
const CR: u16 = b'\r' as u16;
const LF: u16 = b'\n' as u16;

#[inline]
fn word(hay: &[u8], i: usize) -> Option<u16> {
    match hay.get(i..i + 2) {
        Some(&[a, b]) => Some(u16::from_le_bytes([a, b])),
        _ => None,
    }
}

/// Bytes to step over so that word reads are two-byte aligned.
#[inline]
fn phase(hay: &[u8]) -> usize {
    (hay.as_ptr() as usize & 1).min(hay.len())
}

/// `d1`: check every word.
pub fn find_pairs(hay: &[u8]) -> Option<usize> {
    let mut i = phase(hay);
    while let Some(w) = word(hay, i) {
        match w {
            CRLF if word(hay, i + 2) == Some(CRLF) => return Some(i),
            LFCR if i > 0 && hay[i - 1] == b'\r' && hay.get(i + 2) == Some(&b'\n') => {
                return Some(i - 1);
            }
            _ => {}
        }
        i += 2;
    }
    None
}

/// `d2`: like `d1`, but steps over the following word when it cannot take
/// part in a match.
pub fn find_pairs_skip(hay: &[u8]) -> Option<usize> {
    let mut i = phase(hay);
    while let Some(w) = word(hay, i) {
        match w {
            CRLF => {
                if word(hay, i + 2) == Some(CRLF) {
                    return Some(i);
                }
                // next word is not `\r\n` and its first byte follows a `\n`
                i += 4;
                continue;
            }
            LFCR if hay.get(i + 2) == Some(&b'\n') => {
                if i > 0 && hay[i - 1] == b'\r' {
                    return Some(i - 1);
                }
                if hay.get(i + 3) != Some(&b'\r') {
                    i += 4;
                    continue;
                }
            }
            _ => {}
        }
        i += 2;
    }
    None
}

/// `d3`: like `d2`, but keeps the previous word around instead of reading
/// the byte before the current word again.
pub fn find_pairs_carry(hay: &[u8]) -> Option<usize> {
    let start = phase(hay);
    // high byte of `prev` is the byte just before the current word
    let mut prev: u16 = if start == 1 { u16::from_le_bytes([0, hay[0]]) } else { 0 };
    let mut i = start;
    while let Some(curr) = word(hay, i) {
        match curr {
            CRLF => {
                let next = word(hay, i + 2)?;
                if next == CRLF {
                    return Some(i);
                }
                prev = next;
                i += 4;
                continue;
            }
            LFCR => match word(hay, i + 2) {
                Some(next) if (next & 0xFF) == LF => {
                    if prev >> 8 == CR {
                        return Some(i - 1);
                    }
                    if next >> 8 != CR {
                        prev = next;
                        i += 4;
                        continue;
                    }
                }
                None if hay.get(i + 2) == Some(&b'\n') && prev >> 8 == CR => {
                    return Some(i - 1);
                }
                _ => {}
            },
            _ => {}
        }
        prev = curr;
        i += 2;
    }
    None
}
