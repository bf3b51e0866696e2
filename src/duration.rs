//! Duration argument parsing (`2`, `2h`, `30`, `30m`, `1.5h`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LogTimeError;

static INTEGER_DURATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)([hm])?$").expect("invalid integer duration regex"));
static DECIMAL_DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]*\.?[0-9]+)([hm])?$").expect("invalid decimal duration regex")
});

/// Unit-less amounts up to this value are hours, larger ones are minutes.
pub const MAX_IMPLICIT_HOURS: f64 = 8.0;

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationUnit {
    Hours,
    Minutes,
    Unspecified,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurationSpec {
    pub amount: f64,
    pub unit: DurationUnit,
}

impl DurationSpec {
    /// Unit after applying the implicit hours/minutes rule.
    pub fn resolved_unit(&self) -> DurationUnit {
        match self.unit {
            DurationUnit::Unspecified if self.amount <= MAX_IMPLICIT_HOURS => DurationUnit::Hours,
            DurationUnit::Unspecified => DurationUnit::Minutes,
            unit => unit,
        }
    }

    /// Whole seconds, rounded to the nearest second for fractional amounts.
    pub fn seconds(&self) -> u64 {
        let factor = match self.resolved_unit() {
            DurationUnit::Hours => SECONDS_PER_HOUR,
            _ => SECONDS_PER_MINUTE,
        };
        (self.amount * factor).round() as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    pub allow_decimal: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_decimal: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DurationParser {
    options: ParserOptions,
}

impl DurationParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn parse(&self, input: &str) -> Result<DurationSpec, LogTimeError> {
        let regex = if self.options.allow_decimal {
            &*DECIMAL_DURATION_REGEX
        } else {
            &*INTEGER_DURATION_REGEX
        };

        let invalid = || LogTimeError::InvalidDurationFormat {
            input: input.to_string(),
        };
        let captures = regex.captures(input).ok_or_else(invalid)?;
        let amount = captures[1].parse::<f64>().map_err(|_| invalid())?;
        let unit = match captures.get(2).map(|m| m.as_str()) {
            Some("h") => DurationUnit::Hours,
            Some("m") => DurationUnit::Minutes,
            _ => DurationUnit::Unspecified,
        };

        Ok(DurationSpec { amount, unit })
    }

    pub fn parse_seconds(&self, input: &str) -> Result<u64, LogTimeError> {
        self.parse(input).map(|spec| spec.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(input: &str) -> Result<u64, LogTimeError> {
        DurationParser::default().parse_seconds(input)
    }

    fn integer_only() -> DurationParser {
        DurationParser::new(ParserOptions {
            allow_decimal: false,
        })
    }

    #[test]
    fn bare_small_numbers_are_hours() {
        assert_eq!(seconds("2").unwrap(), 7200);
        assert_eq!(seconds("1").unwrap(), 3600);
    }

    #[test]
    fn bare_large_numbers_are_minutes() {
        assert_eq!(seconds("9").unwrap(), 540);
        assert_eq!(seconds("45").unwrap(), 2700);
    }

    #[test]
    fn eight_is_still_hours() {
        assert_eq!(seconds("8").unwrap(), 28800);
        assert_eq!(seconds("8.0").unwrap(), 28800);
        assert_eq!(seconds("8.5").unwrap(), 510);
    }

    #[test]
    fn explicit_units_override_heuristic() {
        assert_eq!(seconds("2h").unwrap(), 7200);
        assert_eq!(seconds("30m").unwrap(), 1800);
        assert_eq!(seconds("12h").unwrap(), 43200);
        assert_eq!(seconds("5m").unwrap(), 300);
    }

    #[test]
    fn decimal_amounts_round_to_whole_seconds() {
        assert_eq!(seconds("1.5").unwrap(), 5400);
        assert_eq!(seconds(".5h").unwrap(), 1800);
        assert_eq!(seconds("0.01m").unwrap(), 1);
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(seconds("0").unwrap(), 0);
        assert_eq!(seconds("0m").unwrap(), 0);
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["abc", "", "2x", "-2", "+2", "2 h", " 2", "1.", "1.2.3", "h", "2hm", "2H"] {
            assert!(
                matches!(seconds(input), Err(LogTimeError::InvalidDurationFormat { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn integer_mode_rejects_decimals() {
        let parser = integer_only();
        assert_eq!(parser.parse_seconds("30m").unwrap(), 1800);
        assert!(parser.parse_seconds("1.5").is_err());
        assert!(parser.parse_seconds(".5h").is_err());
    }

    #[test]
    fn parse_reports_unit_and_resolution() {
        let spec = DurationParser::default().parse("9").unwrap();
        assert_eq!(spec.unit, DurationUnit::Unspecified);
        assert_eq!(spec.resolved_unit(), DurationUnit::Minutes);

        let spec = DurationParser::default().parse("9h").unwrap();
        assert_eq!(spec.resolved_unit(), DurationUnit::Hours);
    }

    #[test]
    fn error_message_names_accepted_format() {
        let err = seconds("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid time format. Time should be a number optionally followed by 'm' or 'h'."
        );
    }
}
