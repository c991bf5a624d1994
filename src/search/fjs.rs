//! Franek-Jennings-Smyth substring search: a Sunday-style skip loop to find a
//! window whose last byte matches, then KMP to verify and to carry partial
//! matches forward.

use super::Search;

#[derive(Debug, Clone)]
pub struct FjsSearcher {
    needle: Vec<u8>,
    /// Sunday shift keyed by the byte just past the current window.
    delta: [usize; 256],
    /// KMP failure table; `-1` means restart one byte further on.
    betap: Vec<isize>,
}

impl FjsSearcher {
    pub fn new(needle: &[u8]) -> Self {
        let m = needle.len();
        let mut betap = vec![0isize; m + 1];
        betap[0] = -1;
        let mut j: isize = -1;
        let mut i = 0usize;
        while i < m {
            while j > -1 && needle[i] != needle[j as usize] {
                j = betap[j as usize];
            }
            i += 1;
            j += 1;
            betap[i] =
                if i < m && needle[i] == needle[j as usize] { betap[j as usize] } else { j };
        }

        let mut delta = [m + 1; 256];
        for (i, &c) in needle.iter().enumerate() {
            delta[usize::from(c)] = m - i;
        }
        Self { needle: needle.to_vec(), delta, betap }
    }
}

impl Search for FjsSearcher {
    fn find(&self, hay: &[u8]) -> Option<usize> {
        let p = self.needle.as_slice();
        let m = p.len();
        let n = hay.len();
        if m == 0 {
            return Some(0);
        }
        let mp = m - 1;
        let mut ip = mp;
        let mut i = 0usize;
        let mut j: isize = 0;
        while ip < n {
            if j <= 0 {
                while p[mp] != hay[ip] {
                    ip += self.delta[usize::from(*hay.get(ip + 1)?)];
                    if ip >= n {
                        return None;
                    }
                }
                j = 0;
                i = ip - mp;
                while (j as usize) < mp && hay[i] == p[j as usize] {
                    i += 1;
                    j += 1;
                }
                if j as usize == mp {
                    return Some(i - mp);
                }
                if j == 0 {
                    i += 1;
                } else {
                    j = self.betap[j as usize];
                }
            }
            if j >= 0 {
                while (j as usize) < m && i < n && hay[i] == p[j as usize] {
                    i += 1;
                    j += 1;
                }
                if j as usize == m {
                    return Some(i - m);
                }
                j = self.betap[j as usize];
            }
            ip = (i as isize + mp as isize - j) as usize;
        }
        None
    }
}
