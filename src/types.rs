use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::BenchError;

/// `cpu_time` preamble note for tables whose CPU column holds wall-clock time.
pub const CPU_TIME_IS_WALL: &str = "wall clock per iteration";

/// Shape of the haystack a benchmark searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputClass {
    Regular,
    Worst,
    Best,
}

impl InputClass {
    pub const ALL: [InputClass; 3] = [InputClass::Regular, InputClass::Worst, InputClass::Best];

    pub fn as_str(self) -> &'static str {
        match self {
            InputClass::Regular => "regular",
            InputClass::Worst => "worst",
            InputClass::Best => "best",
        }
    }

    /// Capitalized name used in panel titles.
    pub fn title(self) -> &'static str {
        match self {
            InputClass::Regular => "Regular",
            InputClass::Worst => "Worst",
            InputClass::Best => "Best",
        }
    }
}

impl fmt::Display for InputClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputClass {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(InputClass::Regular),
            "worst" => Ok(InputClass::Worst),
            "best" => Ok(InputClass::Best),
            other => Err(BenchError::UnknownInput(other.to_string())),
        }
    }
}

/// Which timing column is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Cpu,
    Real,
}

impl Metric {
    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU time, ns",
            Metric::Real => "Real time, ns",
        }
    }

    /// Axis label given the table's `cpu_time` note, if any.
    pub fn axis_label_for(self, cpu_clock: Option<&str>) -> String {
        match (self, cpu_clock) {
            (Metric::Cpu, Some(CPU_TIME_IS_WALL)) => "CPU time (wall clock), ns".to_string(),
            _ => self.axis_label().to_string(),
        }
    }
}

impl FromStr for Metric {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" | "cpu_time" => Ok(Metric::Cpu),
            "real" | "real_time" => Ok(Metric::Real),
            other => Err(BenchError::Parse { row: 0, message: format!("unknown metric: {other}") }),
        }
    }
}

/// Time unit of the `real_time`/`cpu_time` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Ns,
    Us,
    Ms,
    S,
}

impl TimeUnit {
    pub fn to_nanos(self, value: f64) -> f64 {
        match self {
            TimeUnit::Ns => value,
            TimeUnit::Us => value * 1e3,
            TimeUnit::Ms => value * 1e6,
            TimeUnit::S => value * 1e9,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "ns" => Ok(TimeUnit::Ns),
            "us" => Ok(TimeUnit::Us),
            "ms" => Ok(TimeUnit::Ms),
            "s" => Ok(TimeUnit::S),
            other => Err(BenchError::Parse { row: 0, message: format!("unknown time unit: {other}") }),
        }
    }
}

/// One row of benchmark output. Times are nanoseconds per iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub driver: String,
    pub input: InputClass,
    pub algo: String,
    pub offset: u8,
    pub chars: u32,
    pub iterations: u64,
    pub real_time: f64,
    pub cpu_time: f64,
}

impl BenchRecord {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu_time,
            Metric::Real => self.real_time,
        }
    }

    /// Benchmark name in the `driver/input/algo/ofs=N/chars` form.
    pub fn name(&self) -> String {
        format!("{}/{}/{}/ofs={}/{}", self.driver, self.input, self.algo, self.offset, self.chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_class_round_trips_through_display() {
        for class in InputClass::ALL {
            assert_eq!(class.to_string().parse::<InputClass>().unwrap(), class);
        }
        assert!(matches!("Regular".parse::<InputClass>(), Err(BenchError::UnknownInput(_))));
    }

    #[test]
    fn time_units_normalize_to_nanos() {
        assert_eq!("us".parse::<TimeUnit>().unwrap().to_nanos(2.5), 2500.0);
        assert_eq!("".parse::<TimeUnit>().unwrap(), TimeUnit::Ns);
        assert!("h".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn cpu_axis_names_a_wall_clock_table() {
        assert_eq!(Metric::Cpu.axis_label_for(Some(CPU_TIME_IS_WALL)), "CPU time (wall clock), ns");
        assert_eq!(Metric::Cpu.axis_label_for(None), "CPU time, ns");
        assert_eq!(Metric::Cpu.axis_label_for(Some("process")), "CPU time, ns");
        assert_eq!(Metric::Real.axis_label_for(Some(CPU_TIME_IS_WALL)), "Real time, ns");
    }

    #[test]
    fn record_name_uses_offset_segment() {
        let r = BenchRecord {
            driver: "BM_crlf".into(),
            input: InputClass::Worst,
            algo: "qd".into(),
            offset: 3,
            chars: 1024,
            iterations: 10,
            real_time: 1.0,
            cpu_time: 1.0,
        };
        assert_eq!(r.name(), "BM_crlf/worst/qd/ofs=3/1024");
    }
}
