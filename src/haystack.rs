//! Haystack generators for the three input classes. Each buffer holds exactly
//! one terminator, in its last four bytes.

use crate::types::InputClass;

/// Text lines of growing length (10, 11, 12, ...) made of printable ASCII.
pub fn regular(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + 7);
    let mut line = 10usize;
    let mut c = b' ';
    while out.len() < size {
        if c > b'~' {
            c = b' ';
        }
        out.push(c);
        c += 1;
        if out.len() % line == 0 {
            out.extend_from_slice(b"\r\n");
            line += 1;
        }
    }
    if out.last() == Some(&b'\n') {
        out.extend_from_slice(b"\r\n");
    } else {
        out.extend_from_slice(b"\r\n\r\n");
    }
    out
}

/// `\r\r\r\n` repeated: every word looks like the start of a terminator.
pub fn worst(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + 7);
    while out.len() < size {
        out.extend_from_slice(b"\r\r\r\n");
    }
    out.extend_from_slice(b"\n\r\n\r\n");
    out
}

/// Filler without a single `\r` or `\n` before the terminator.
pub fn best(size: usize) -> Vec<u8> {
    let mut out = vec![b'.'; size];
    out.extend_from_slice(b"\r\n\r\n");
    out
}

pub fn generate(input: InputClass, size: usize) -> Vec<u8> {
    match input {
        InputClass::Regular => regular(size),
        InputClass::Worst => worst(size),
        InputClass::Best => best(size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_naive;

    #[test]
    fn terminator_is_last_and_only() {
        for size in [0usize, 1, 9, 10, 16, 21, 100, 1024] {
            for input in InputClass::ALL {
                let hay = generate(input, size);
                assert!(hay.len() >= size + 4, "{input} {size}");
                assert_eq!(find_naive(&hay), Some(hay.len() - 4), "{input} {size}");
            }
        }
    }

    #[test]
    fn regular_breaks_lines_with_growing_length() {
        let hay = regular(40);
        let text = String::from_utf8(hay).unwrap();
        let lines: Vec<&str> = text.split("\r\n").collect();
        assert_eq!(lines[0].len(), 10);
        // the second break comes when the total length (CRLF included) reaches a multiple of 11
        assert_eq!(lines[1].len(), 10);
        assert!(lines[0].starts_with(" !\"#"));
    }

    #[test]
    fn best_is_dots() {
        assert_eq!(best(3), b"...\r\n\r\n");
    }
}
