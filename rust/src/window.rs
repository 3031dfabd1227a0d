//! Rolling windows of period slugs around an anchor time.
//!
//! A window of `n` periods starts `n / 2` intervals before the anchor, so the
//! anchor's own slug sits at index `n / 2`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::mnemonic::Wordlist;
use crate::slug::{Mode, SlugError, derive};

/// Rotation interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
        }
    }

    /// Case-insensitive. The empty string means `day`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => Some(Self::Second),
            "m" | "minute" | "minutes" => Some(Self::Minute),
            "h" | "hour" | "hours" => Some(Self::Hour),
            "" | "d" | "day" | "days" => Some(Self::Day),
            "w" | "week" | "weeks" => Some(Self::Week),
            _ => None,
        }
    }

    pub fn step(self) -> TimeDelta {
        match self {
            Self::Second => TimeDelta::seconds(1),
            Self::Minute => TimeDelta::minutes(1),
            Self::Hour => TimeDelta::hours(1),
            Self::Day => TimeDelta::days(1),
            Self::Week => TimeDelta::weeks(1),
        }
    }

    /// Period label for the interval containing `at`.
    ///
    /// Week labels carry the day of the month after `W`, not the ISO week
    /// number; existing deployments key their HMAC on that form.
    pub fn label(self, at: NaiveDateTime) -> String {
        let format = match self {
            Self::Second => "%Y-%m-%dT%H:%M:%S",
            Self::Minute => "%Y-%m-%dT%H:%M",
            Self::Hour => "%Y-%m-%dT%H",
            Self::Day => "%Y-%m-%d",
            Self::Week => "%Y-W%d",
        };
        at.format(format).to_string()
    }
}

impl FromStr for Interval {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SlugError::InvalidInterval(s.to_string()))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ANCHOR_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse an anchor time.
///
/// RFC 3339 inputs keep the wall-clock time of their own offset.
pub fn parse_anchor(s: &str) -> Result<NaiveDateTime, SlugError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for format in ANCHOR_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    // Hour precision: chrono will not build a datetime without minutes.
    if s.len() == 13
        && let Ok(dt) = NaiveDateTime::parse_from_str(&format!("{s}:00"), "%Y-%m-%dT%H:%M")
    {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| SlugError::InvalidAnchor(s.to_string()))
}

/// One entry of a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSlug {
    pub slug: String,
    pub period: String,
    pub hash: String,
}

/// Slugs for `window` consecutive periods centred on `anchor`.
pub fn generate(
    seed: &str,
    anchor: &str,
    length: usize,
    window: usize,
    interval: Interval,
    mode: Mode,
    wordlist: Option<&Wordlist>,
) -> Result<Vec<PeriodSlug>, SlugError> {
    let anchor_time = parse_anchor(anchor)?;
    let start = i32::try_from(window / 2).map_err(|_| SlugError::InvalidWindow(window))?;
    tracing::debug!(anchor, window, %interval, %mode, "generating window");

    (0..window)
        .map(|i| {
            let shift = i32::try_from(i)
                .ok()
                .and_then(|i| interval.step().checked_mul(i - start))
                .and_then(|delta| anchor_time.checked_add_signed(delta))
                .ok_or(SlugError::InvalidWindow(window))?;
            let period = interval.label(shift);
            let derived = derive(seed, &period, length, mode, wordlist)?;
            Ok(PeriodSlug {
                slug: derived.slug,
                period,
                hash: derived.hash,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(slugs: &[PeriodSlug]) -> Vec<&str> {
        slugs.iter().map(|s| s.period.as_str()).collect()
    }

    #[test]
    fn test_window_centred_on_anchor() {
        let slugs = generate(
            "seedphrase",
            "2026-02-03",
            16,
            3,
            Interval::Day,
            Mode::Synthetic,
            None,
        )
        .unwrap();
        assert_eq!(periods(&slugs), ["2026-02-02", "2026-02-03", "2026-02-04"]);
        assert_eq!(slugs[0].slug, "goflux-zenci");
        assert_eq!(slugs[1].slug, "trybeambold8");
        assert_eq!(slugs[1].hash, "5d3bf0d55db67ea2");
        assert_eq!(slugs[2].slug, "brightbeamvivar");
    }

    #[test]
    fn test_even_window_and_month_boundary() {
        let slugs = generate(
            "seed",
            "2026-03-01",
            3,
            4,
            Interval::Day,
            Mode::Mnemonic,
            Some(Wordlist::english()),
        )
        .unwrap();
        assert_eq!(
            periods(&slugs),
            ["2026-02-27", "2026-02-28", "2026-03-01", "2026-03-02"]
        );
    }

    #[test]
    fn test_interval_labels() {
        let gen_periods = |interval| {
            let slugs = generate(
                "seed",
                "2026-02-03T15:04:05",
                8,
                3,
                interval,
                Mode::Synthetic,
                None,
            )
            .unwrap();
            slugs.into_iter().map(|s| s.period).collect::<Vec<_>>()
        };
        assert_eq!(
            gen_periods(Interval::Second),
            ["2026-02-03T15:04:04", "2026-02-03T15:04:05", "2026-02-03T15:04:06"]
        );
        assert_eq!(
            gen_periods(Interval::Minute),
            ["2026-02-03T15:03", "2026-02-03T15:04", "2026-02-03T15:05"]
        );
        assert_eq!(
            gen_periods(Interval::Hour),
            ["2026-02-03T14", "2026-02-03T15", "2026-02-03T16"]
        );
        assert_eq!(gen_periods(Interval::Week), ["2026-W27", "2026-W03", "2026-W10"]);
    }

    #[test]
    fn test_week_label_is_day_of_month() {
        let at = parse_anchor("2026-12-31").unwrap();
        assert_eq!(Interval::Week.label(at), "2026-W31");
        let at = parse_anchor("2027-01-01").unwrap();
        assert_eq!(Interval::Week.label(at), "2027-W01");
    }

    #[test]
    fn test_empty_window() {
        let slugs = generate("s", "2026-02-03", 3, 0, Interval::Day, Mode::Synthetic, None);
        assert_eq!(slugs, Ok(Vec::new()));
    }

    #[test]
    fn test_generate_errors() {
        assert!(matches!(
            generate("s", "invalid", 3, 3, Interval::Day, Mode::Synthetic, None),
            Err(SlugError::InvalidAnchor(_))
        ));
        assert!(matches!(
            generate("s", "2026-02-03", 3, 3, Interval::Day, Mode::Mnemonic, None),
            Err(SlugError::MissingWordlist)
        ));
        assert!(matches!(
            generate("s", "2026-02-03", 0, 3, Interval::Day, Mode::Synthetic, None),
            Err(SlugError::InvalidLength)
        ));
    }

    #[test]
    fn test_parse_anchor_formats() {
        let valid = [
            "2026-02-03",
            "2026-02-03T15",
            "2026-02-03T15:04",
            "2026-02-03T15:04:05",
            "2026-02-03T15:04:05Z",
        ];
        for s in valid {
            assert!(parse_anchor(s).is_ok(), "parse_anchor({s})");
        }
        for s in ["invalid", "02-03-2026", ""] {
            assert!(
                matches!(parse_anchor(s), Err(SlugError::InvalidAnchor(_))),
                "parse_anchor({s}) should fail"
            );
        }
        assert_eq!(
            parse_anchor("2026-02-03T15").unwrap(),
            parse_anchor("2026-02-03T15:00:00").unwrap()
        );
    }

    #[test]
    fn test_rfc3339_keeps_local_wall_clock() {
        let at = parse_anchor("2026-02-03T23:30:00+02:00").unwrap();
        assert_eq!(Interval::Day.label(at), "2026-02-03");
        assert_eq!(Interval::Hour.label(at), "2026-02-03T23");
    }

    #[test]
    fn test_interval_parse() {
        for s in ["s", "second", "m", "minute", "h", "hour", "d", "day", "", "w", "week"] {
            assert!(Interval::parse(s).is_some(), "Interval::parse({s})");
        }
        assert_eq!(Interval::parse("HOURS"), Some(Interval::Hour));
        assert_eq!(
            "fortnight".parse::<Interval>(),
            Err(SlugError::InvalidInterval("fortnight".to_string()))
        );
        assert_eq!(Interval::Week.to_string(), "week");
    }
}
