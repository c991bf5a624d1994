use super::Search;

/// Boyer-Moore-Horspool: compare the last byte of each window first, shift by
/// the bad-character distance of that byte.
#[derive(Debug, Clone)]
pub struct HorspoolSearcher {
    needle: Vec<u8>,
    shift: [usize; 256],
}

impl HorspoolSearcher {
    pub fn new(needle: &[u8]) -> Self {
        let m = needle.len();
        let mut shift = [m.max(1); 256];
        if m > 0 {
            for (i, &c) in needle[..m - 1].iter().enumerate() {
                shift[usize::from(c)] = m - 1 - i;
            }
        }
        Self { needle: needle.to_vec(), shift }
    }
}

impl Search for HorspoolSearcher {
    fn find(&self, hay: &[u8]) -> Option<usize> {
        let m = self.needle.len();
        if m == 0 {
            return Some(0);
        }
        let last = self.needle[m - 1];
        let mut pos = 0usize;
        while pos + m <= hay.len() {
            let end = hay[pos + m - 1];
            if end == last && hay[pos..pos + m] == self.needle[..] {
                return Some(pos);
            }
            pos += self.shift[usize::from(end)];
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_table_ignores_last_byte() {
        let s = HorspoolSearcher::new(b"\r\n\r\n");
        assert_eq!(s.shift[usize::from(b'\r')], 1);
        assert_eq!(s.shift[usize::from(b'\n')], 2);
        assert_eq!(s.shift[usize::from(b'.')], 4);
    }

    #[test]
    fn finds_first_occurrence() {
        let s = HorspoolSearcher::new(b"abab");
        assert_eq!(s.find(b"aabababab"), Some(1));
        assert_eq!(s.find(b"aba"), None);
    }
}
