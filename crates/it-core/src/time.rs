//! Wall-clock time model.
//!
//! # Design
//!
//! A `ClockTime` is a naive local time of day stored as whole minutes since
//! midnight, range `[0, 1440)`.  There is no date and no timezone.  Two text
//! forms are supported and round-trip losslessly:
//!
//! ```text
//! 24-hour   "HH:MM"                       00:00 .. 23:59
//! 12-hour   { period, hour, minute }      12:00 AM .. 11:59 PM
//!
//! hour24 == 0   <->  12 AM
//! hour24 == 12  <->  12 PM
//! 1..=11 AM     <->  hour24 = hour
//! 1..=11 PM     <->  hour24 = hour + 12
//! ```
//!
//! Ordering is plain minute ordering (`Less`/`Equal`/`Greater` read as
//! before/equal/after).  `add_minutes` wraps modulo one day; callers that
//! must not wrap use `checked_add_minutes`.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Minutes in one day.  Every `ClockTime` is strictly below this.
pub const MINUTES_PER_DAY: u16 = 1_440;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A time of day, in minutes since local midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Unchecked constructor for in-crate literals known to be `< 1440`.
    pub(crate) const fn raw(minutes: u16) -> ClockTime {
        ClockTime(minutes)
    }

    /// Build from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> CoreResult<ClockTime> {
        if minutes >= MINUTES_PER_DAY {
            return Err(CoreError::InvalidComponent(format!(
                "{minutes} minutes is past the end of the day"
            )));
        }
        Ok(ClockTime(minutes))
    }

    /// Build from a 24-hour `hour` and `minute`.
    pub fn from_hm(hour: u8, minute: u8) -> CoreResult<ClockTime> {
        if hour > 23 {
            return Err(CoreError::InvalidComponent(format!("hour {hour} not in 0..=23")));
        }
        if minute > 59 {
            return Err(CoreError::InvalidComponent(format!("minute {minute} not in 0..=59")));
        }
        Ok(ClockTime(hour as u16 * 60 + minute as u16))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// 24-hour hour component.
    #[inline]
    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    #[inline]
    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Shift by `delta` minutes (negative allowed), wrapping modulo one day.
    ///
    /// No carry is reported; `23:50 + 20` is `00:10`.
    pub fn add_minutes(self, delta: i32) -> ClockTime {
        let day = MINUTES_PER_DAY as i32;
        ClockTime((self.0 as i32 + delta).rem_euclid(day) as u16)
    }

    /// Shift by `delta` minutes, or `None` if the result leaves the day.
    pub fn checked_add_minutes(self, delta: i64) -> Option<ClockTime> {
        let total = self.0 as i64 + delta;
        if (0..MINUTES_PER_DAY as i64).contains(&total) {
            Some(ClockTime(total as u16))
        } else {
            None
        }
    }

    /// Minutes from `self` forward to `later`, or `None` if `later` is earlier.
    pub fn minutes_until(self, later: ClockTime) -> Option<u16> {
        later.0.checked_sub(self.0)
    }

    // ── 12-hour form ──────────────────────────────────────────────────────

    pub fn to_twelve_hour(self) -> TwelveHour {
        let hour24 = self.hour();
        let period = if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        TwelveHour { period, hour, minute: self.minute() }
    }

    /// Build from 12-hour components, validating each one.
    pub fn from_twelve_hour(period: Meridiem, hour: u8, minute: u8) -> CoreResult<ClockTime> {
        TwelveHour::new(period, hour, minute).map(ClockTime::from)
    }

    /// The 24 on-the-hour choices offered by a start/end time dropdown.
    pub fn hourly_options() -> impl Iterator<Item = ClockTime> {
        (0..24u16).map(|h| ClockTime(h * 60))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    /// Accepts exactly `HH:MM` with two digits on each side of the colon.
    fn from_str(s: &str) -> CoreResult<ClockTime> {
        let bad = || CoreError::InvalidFormat(s.to_owned());

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(bad());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(bad());
        }
        let [h1, h0, m1, m0] = digits.map(|b| b - b'0');
        let hour = h1 * 10 + h0;
        let minute = m1 * 10 + m0;
        if hour > 23 || minute > 59 {
            return Err(bad());
        }
        Ok(ClockTime(hour as u16 * 60 + minute as u16))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<ClockTime> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}

// ── Meridiem ──────────────────────────────────────────────────────────────────

/// Morning / afternoon half of a 12-hour clock.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        })
    }
}

impl FromStr for Meridiem {
    type Err = CoreError;

    /// `AM`/`PM` in any case, or the Korean picker labels `오전`/`오후`.
    fn from_str(s: &str) -> CoreResult<Meridiem> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("am") || s == "오전" {
            Ok(Meridiem::Am)
        } else if s.eq_ignore_ascii_case("pm") || s == "오후" {
            Ok(Meridiem::Pm)
        } else {
            Err(CoreError::InvalidComponent(format!("unrecognised period {s:?}")))
        }
    }
}

// ── TwelveHour ────────────────────────────────────────────────────────────────

/// A validated 12-hour clock reading.  `hour` is in `1..=12`, `minute` in
/// `0..=59`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TwelveHour {
    period: Meridiem,
    hour:   u8,
    minute: u8,
}

impl TwelveHour {
    pub fn new(period: Meridiem, hour: u8, minute: u8) -> CoreResult<TwelveHour> {
        if !(1..=12).contains(&hour) {
            return Err(CoreError::InvalidComponent(format!("12-hour hour {hour} not in 1..=12")));
        }
        if minute > 59 {
            return Err(CoreError::InvalidComponent(format!("minute {minute} not in 0..=59")));
        }
        Ok(TwelveHour { period, hour, minute })
    }

    /// Build from the raw strings a dropdown reports, e.g. `("PM", "12", "05")`.
    pub fn parse_parts(period: &str, hour: &str, minute: &str) -> CoreResult<TwelveHour> {
        let period: Meridiem = period.parse()?;
        let hour: u8 = hour
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidComponent(format!("hour {hour:?} is not a number")))?;
        let minute: u8 = minute
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidComponent(format!("minute {minute:?} is not a number")))?;
        TwelveHour::new(period, hour, minute)
    }

    #[inline]
    pub fn period(self) -> Meridiem {
        self.period
    }

    /// Hour in `1..=12`.
    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Hour values a 12-hour dropdown lists, in order.
    pub fn hour_options() -> impl Iterator<Item = u8> {
        1..=12
    }

    /// Minute values a dropdown lists, in order.
    pub fn minute_options() -> impl Iterator<Item = u8> {
        0..60
    }
}

impl From<TwelveHour> for ClockTime {
    fn from(t: TwelveHour) -> ClockTime {
        let hour24 = match (t.period, t.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        ClockTime(hour24 as u16 * 60 + t.minute as u16)
    }
}

impl fmt::Display for TwelveHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, self.period)
    }
}
