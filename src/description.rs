use once_cell::sync::Lazy;
use regex::Regex;

static DAY_OFFSET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("invalid day offset regex"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDescription {
    /// Days subtracted from "now" when computing the start time.
    pub days_offset: i64,
    pub comment: String,
}

/// Splits the optional third argument into a day offset or a free-text
/// comment. A purely numeric argument `n` yields an offset of `-n` and no
/// comment; anything else is the comment, untouched.
pub fn parse_description(input: &str) -> ParsedDescription {
    if DAY_OFFSET_REGEX.is_match(input) {
        if let Some(days) = input.parse::<i64>().ok().and_then(i64::checked_neg) {
            return ParsedDescription {
                days_offset: days,
                comment: String::new(),
            };
        }
    }

    ParsedDescription {
        days_offset: 0,
        comment: input.to_string(),
    }
}
