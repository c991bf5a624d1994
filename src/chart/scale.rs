/// Base-10 logarithmic axis spanning whole decades `10^lo ..= 10^hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogScale {
    pub lo: i32,
    pub hi: i32,
}

impl Default for LogScale {
    fn default() -> Self {
        Self { lo: 0, hi: 1 }
    }
}

/// Whether a value can be placed on a log axis.
pub fn plottable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl LogScale {
    /// Smallest decade range covering every plottable value, or `None` if
    /// there are none.
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Option<LogScale> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| plottable(*v)) {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() {
            return None;
        }
        let lo = min.log10().floor() as i32;
        let mut hi = max.log10().ceil() as i32;
        if hi <= lo {
            hi = lo + 1;
        }
        Some(LogScale { lo, hi })
    }

    /// Map `v` onto the pixel interval `[start, end]` (either direction).
    pub fn project(&self, v: f64, start: f64, end: f64) -> f64 {
        let t = (v.log10() - f64::from(self.lo)) / f64::from(self.hi - self.lo);
        start + t * (end - start)
    }

    pub fn decades(&self) -> impl Iterator<Item = i32> {
        self.lo..=self.hi
    }
}
