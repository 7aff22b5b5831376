//! Date-range extraction from free-text remarks.
//!
//! Remarks are human-typed, bilingual, and error-prone. The extractor
//! finds every date-shaped token (`DD/MM/YYYY` with `/`, `-`, or `.`
//! separators, 1-2 digit day and month, 2-4 digit year) and pairs tokens
//! strictly by scan order: token 1 with token 2, token 3 with token 4,
//! and so on. Tokens are never reordered or matched by proximity.
//!
//! That positional pairing is a deliberate simplicity tradeoff carried
//! over from the historical reconciliation behavior: a remark listing
//! multiple ranges must write them start/end/start/end, and out-of-order
//! or narrative-interleaved multi-range remarks will misparse. Monthly
//! totals depend on this exact policy, so it is preserved rather than
//! patched; see DESIGN.md.

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{EngineError, EngineResult};
use crate::models::VacationRange;

/// Date-shaped token: 1-2 digit day, 1-2 digit month, 2-4 digit year.
const DATE_TOKEN_PATTERN: &str = r"(\d{1,2})[./-](\d{1,2})[./-](\d{2,4})";

/// A classification of why a remark's date tokens could not all be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateProblem {
    /// Exactly one date token was found; no end date to pair it with.
    SingleDate,
    /// An odd number of tokens (> 1) left a trailing token unpaired.
    UnpairedDates,
}

impl std::fmt::Display for DateProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateProblem::SingleDate => write!(f, "Single date found (missing end date)"),
            DateProblem::UnpairedDates => write!(f, "Unpaired dates detected"),
        }
    }
}

/// The outcome of scanning one remark.
#[derive(Debug, Clone, Default)]
pub struct DateExtraction {
    /// Every paired, valid date range, in scan order.
    pub ranges: Vec<VacationRange>,
    /// Problems detected; at most one per remark under the current policy.
    pub problems: Vec<DateProblem>,
}

/// Scans free-text remarks for vacation date ranges.
///
/// The token pattern is compiled once at construction.
///
/// # Example
///
/// ```
/// use roster_audit::extraction::DateRangeExtractor;
///
/// let extractor = DateRangeExtractor::new().unwrap();
/// let result = extractor.extract("Vacation 05/03/2025-10/03/2025");
/// assert_eq!(result.ranges.len(), 1);
/// assert_eq!(result.ranges[0].duration, 6);
/// assert!(result.problems.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DateRangeExtractor {
    pattern: Regex,
}

impl DateRangeExtractor {
    /// Creates an extractor with the standard date-token pattern.
    pub fn new() -> EngineResult<Self> {
        let pattern = Regex::new(DATE_TOKEN_PATTERN).map_err(|e| EngineError::InvalidConfig {
            message: format!("date token pattern failed to compile: {e}"),
        })?;
        Ok(Self { pattern })
    }

    /// Extracts date ranges and problems from one remark.
    ///
    /// Classification by token count:
    /// - 0 tokens: no ranges, no problems (the remark has no leave dates)
    /// - 1 token: zero ranges, one [`DateProblem::SingleDate`]
    /// - even count >= 2: every pair becomes a range, no problems
    /// - odd count > 1: every complete pair becomes a range, plus one
    ///   [`DateProblem::UnpairedDates`] for the trailing token
    ///
    /// Within a pair, a chronologically reversed pair is swapped and the
    /// duration is inclusive. A pair containing a calendar-invalid token
    /// (e.g. day 32) yields no range but still counts toward the token
    /// arithmetic above. Implausible but valid pairs (dates years apart)
    /// are not rejected here; plausibility is a human-review concern.
    pub fn extract(&self, text: &str) -> DateExtraction {
        let tokens: Vec<(&str, Option<NaiveDate>)> = self
            .pattern
            .captures_iter(text)
            .map(|caps| {
                let raw = caps.get(0).map_or("", |m| m.as_str());
                (raw, parse_token(&caps))
            })
            .collect();

        let mut extraction = DateExtraction::default();
        if tokens.is_empty() {
            return extraction;
        }

        for pair in tokens.chunks_exact(2) {
            let ((start_raw, start), (end_raw, end)) = (&pair[0], &pair[1]);
            if let (Some(start), Some(end)) = (start, end) {
                let (start, end) = if end < start {
                    (*end, *start)
                } else {
                    (*start, *end)
                };
                extraction.ranges.push(VacationRange {
                    start_date: start,
                    end_date: end,
                    duration: (end - start).num_days() + 1,
                    original_text: format!("{start_raw} - {end_raw}"),
                });
            }
        }

        if tokens.len() == 1 {
            extraction.problems.push(DateProblem::SingleDate);
        } else if tokens.len() % 2 != 0 {
            extraction.problems.push(DateProblem::UnpairedDates);
        }

        extraction
    }
}

/// Parses one captured token into a calendar date.
///
/// Years below 100 are assumed to be 2000s. Calendar-invalid components
/// parse to `None`.
fn parse_token(caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let mut year: i32 = caps.get(3)?.as_str().parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
