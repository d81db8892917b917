//! ISO-8601 durations
//!
//! Graph exchanges durations such as `PT1M30.5S` or `P1DT2H`. Calendar
//! components (years, months) are kept as-is rather than normalized, since
//! their length depends on the anchor date.

use crate::serialization::SerializationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(-)?P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:[.,](\d{1,9}))?S)?)?$",
    )
    .expect("duration pattern is valid")
});

/// An ISO-8601 duration value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub nanoseconds: u32,
}

impl IsoDuration {
    /// Duration of whole seconds
    pub fn from_seconds(seconds: u32) -> Self {
        Self {
            seconds,
            ..Self::default()
        }
    }

    /// Duration with a time part only
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            ..Self::default()
        }
    }

    pub fn with_nanoseconds(mut self, nanoseconds: u32) -> Self {
        self.nanoseconds = nanoseconds;
        self
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanoseconds == 0
    }

    /// Convert to a fixed-length duration.
    ///
    /// Returns `None` when years or months are set.
    pub fn to_chrono(&self) -> Option<chrono::Duration> {
        if self.years != 0 || self.months != 0 {
            return None;
        }
        let total = chrono::Duration::weeks(i64::from(self.weeks))
            + chrono::Duration::days(i64::from(self.days))
            + chrono::Duration::hours(i64::from(self.hours))
            + chrono::Duration::minutes(i64::from(self.minutes))
            + chrono::Duration::seconds(i64::from(self.seconds))
            + chrono::Duration::nanoseconds(i64::from(self.nanoseconds));
        Some(if self.negative { -total } else { total })
    }

    /// Build from a fixed-length duration using days, hours, minutes and seconds
    pub fn from_chrono(duration: chrono::Duration) -> Result<Self, SerializationError> {
        let negative = duration < chrono::Duration::zero();
        let duration = if negative { -duration } else { duration };
        let out_of_range = || SerializationError::InvalidValue {
            kind: "duration",
            value: duration.to_string(),
        };

        let total_seconds = duration.num_seconds();
        let nanoseconds = (duration - chrono::Duration::seconds(total_seconds))
            .num_nanoseconds()
            .ok_or_else(out_of_range)?;
        let days = u32::try_from(total_seconds / 86_400).map_err(|_| out_of_range())?;
        let rem = total_seconds % 86_400;

        Ok(Self {
            negative,
            days,
            hours: (rem / 3_600) as u32,
            minutes: (rem % 3_600 / 60) as u32,
            seconds: (rem % 60) as u32,
            nanoseconds: nanoseconds as u32,
            ..Self::default()
        })
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        for (value, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{unit}")?;
            }
        }
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.nanoseconds == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.seconds != 0 || self.nanoseconds != 0 {
            write!(f, "{}", self.seconds)?;
            if self.nanoseconds != 0 {
                let fraction = format!("{:09}", self.nanoseconds);
                write!(f, ".{}", fraction.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        }
        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SerializationError::InvalidValue {
            kind: "duration",
            value: s.to_string(),
        };

        let trimmed = s.trim();
        // "P" and "PT" alone, or a dangling "T", carry no components.
        if trimmed.ends_with('P') || trimmed.ends_with('T') {
            return Err(invalid());
        }
        let captures = DURATION_PATTERN.captures(trimmed).ok_or_else(invalid)?;

        let number = |index: usize| -> Result<u32, SerializationError> {
            captures
                .get(index)
                .map(|m| m.as_str().parse::<u32>().map_err(|_| invalid()))
                .unwrap_or(Ok(0))
        };

        let nanoseconds = match captures.get(9) {
            Some(m) => format!("{:0<9}", m.as_str())
                .parse::<u32>()
                .map_err(|_| invalid())?,
            None => 0,
        };

        Ok(Self {
            negative: captures.get(1).is_some(),
            years: number(2)?,
            months: number(3)?,
            weeks: number(4)?,
            days: number(5)?,
            hours: number(6)?,
            minutes: number(7)?,
            seconds: number(8)?,
            nanoseconds,
        })
    }
}
