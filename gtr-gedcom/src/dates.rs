//! GEDCOM date values
//!
//! Date payloads form a small sublanguage of their own: a calendar date
//! (`[day] [month-name] year [era]`) optionally wrapped in one of the
//! GEDCOM qualifier keywords (`ABT`, `BEF`, `BET .. AND ..`,
//! `FROM .. TO ..`, ...) or a parenthesised free-text phrase.
//!
//! The qualifiers are modeled as a closed sum type, [`DateValue`], so that
//! downstream formatting is an exhaustive match: a new qualifier cannot be
//! added without the compiler pointing at every consumer.
//!
//! Parsing never fails. A payload that does not scan as a date value falls
//! back to [`DateValue::Phrase`] carrying the raw text, mirroring how
//! permissive real-world GEDCOM consumers have to be.

use logos::Logos;

/// One calendar date
///
/// A negative `year` encodes a BC date. `month` is 1-12, resolved from the
/// GEDCOM month names. `day` is only meaningful when `month` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl CalendarDate {
    pub fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Self {
        CalendarDate { year, month, day }
    }
}

/// A GEDCOM date value: a calendar date under one of the date qualifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// A plain date with no qualifier
    Simple(CalendarDate),
    /// `FROM x TO y`
    Period { from: CalendarDate, to: CalendarDate },
    /// `BET x AND y`
    Range { from: CalendarDate, to: CalendarDate },
    /// `FROM x` with no closing date
    From(CalendarDate),
    /// `TO x` with no opening date
    To(CalendarDate),
    /// `BEF x`
    Before(CalendarDate),
    /// `AFT x`
    After(CalendarDate),
    /// `ABT x`
    About(CalendarDate),
    /// `CAL x`
    Calculated(CalendarDate),
    /// `EST x`
    Estimated(CalendarDate),
    /// `INT x (phrase)`
    Interpreted { date: CalendarDate, phrase: String },
    /// `(phrase)` alone, or any payload that does not scan as a date
    Phrase(String),
}

impl DateValue {
    /// Parse a GEDCOM date payload
    pub fn parse(input: &str) -> DateValue {
        parse_tokens(input.trim())
            .unwrap_or_else(|| DateValue::Phrase(input.trim().to_string()))
    }
}

fn month_number(name: &str) -> u32 {
    match name {
        "JAN" => 1,
        "FEB" => 2,
        "MAR" => 3,
        "APR" => 4,
        "MAY" => 5,
        "JUN" => 6,
        "JUL" => 7,
        "AUG" => 8,
        "SEP" => 9,
        "OCT" => 10,
        "NOV" => 11,
        _ => 12,
    }
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
enum DateToken {
    #[token("FROM")]
    From,
    #[token("TO")]
    To,
    #[token("BET")]
    #[token("BETWEEN")]
    Between,
    #[token("AND")]
    And,
    #[token("BEF")]
    #[token("BEFORE")]
    Before,
    #[token("AFT")]
    #[token("AFTER")]
    After,
    #[token("ABT")]
    #[token("ABOUT")]
    About,
    #[token("CAL")]
    #[token("CALCULATED")]
    Calculated,
    #[token("EST")]
    #[token("ESTIMATED")]
    Estimated,
    #[token("INT")]
    #[token("INTERPRETED")]
    Interpreted,
    #[token("BC")]
    #[token("B.C.")]
    #[token("BCE")]
    Era,
    #[regex("JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC", |lex| month_number(lex.slice()))]
    Month(u32),
    // Dual years ("1719/20") keep the first year.
    #[regex(r"[0-9]+(?:/[0-9]+)?", |lex| lex.slice().split('/').next().and_then(|y| y.parse().ok()))]
    Number(i32),
    #[regex(r"\([^)]*\)", |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Phrase(String),
}

fn parse_tokens(input: &str) -> Option<DateValue> {
    let mut tokens = Vec::new();
    for token in DateToken::lexer(input) {
        tokens.push(token.ok()?);
    }
    let mut iter = tokens.iter().peekable();

    let value = match iter.peek()? {
        DateToken::From => {
            iter.next();
            let from = parse_date(&mut iter)?;
            if matches!(iter.peek(), Some(DateToken::To)) {
                iter.next();
                let to = parse_date(&mut iter)?;
                DateValue::Period { from, to }
            } else {
                DateValue::From(from)
            }
        }
        DateToken::To => {
            iter.next();
            DateValue::To(parse_date(&mut iter)?)
        }
        DateToken::Between => {
            iter.next();
            let from = parse_date(&mut iter)?;
            match iter.next()? {
                DateToken::And => {}
                _ => return None,
            }
            let to = parse_date(&mut iter)?;
            DateValue::Range { from, to }
        }
        DateToken::Before => {
            iter.next();
            DateValue::Before(parse_date(&mut iter)?)
        }
        DateToken::After => {
            iter.next();
            DateValue::After(parse_date(&mut iter)?)
        }
        DateToken::About => {
            iter.next();
            DateValue::About(parse_date(&mut iter)?)
        }
        DateToken::Calculated => {
            iter.next();
            DateValue::Calculated(parse_date(&mut iter)?)
        }
        DateToken::Estimated => {
            iter.next();
            DateValue::Estimated(parse_date(&mut iter)?)
        }
        DateToken::Interpreted => {
            iter.next();
            let date = parse_date(&mut iter)?;
            let phrase = match iter.peek() {
                Some(DateToken::Phrase(text)) => {
                    let text = text.clone();
                    iter.next();
                    text
                }
                _ => String::new(),
            };
            DateValue::Interpreted { date, phrase }
        }
        DateToken::Phrase(text) => {
            let text = text.clone();
            iter.next();
            DateValue::Phrase(text)
        }
        _ => DateValue::Simple(parse_date(&mut iter)?),
    };

    // Trailing tokens mean we misread the payload; let the caller fall
    // back to a phrase rather than silently dropping them.
    if iter.next().is_some() {
        return None;
    }
    Some(value)
}

fn parse_date<'a, I>(iter: &mut std::iter::Peekable<I>) -> Option<CalendarDate>
where
    I: Iterator<Item = &'a DateToken>,
{
    let (mut year, month, day) = match iter.next()? {
        DateToken::Number(first) => {
            if let Some(DateToken::Month(month)) = iter.peek() {
                let month = *month;
                iter.next();
                let year = match iter.next()? {
                    DateToken::Number(year) => *year,
                    _ => return None,
                };
                (year, Some(month), Some(*first as u32))
            } else {
                (*first, None, None)
            }
        }
        DateToken::Month(month) => {
            let year = match iter.next()? {
                DateToken::Number(year) => *year,
                _ => return None,
            };
            (year, Some(*month), None)
        }
        _ => return None,
    };
    if matches!(iter.peek(), Some(DateToken::Era)) {
        iter.next();
        year = -year;
    }
    Some(CalendarDate::new(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: Option<u32>, day: Option<u32>) -> CalendarDate {
        CalendarDate::new(year, month, day)
    }

    #[test]
    fn test_simple_full_date() {
        assert_eq!(
            DateValue::parse("1 JAN 1900"),
            DateValue::Simple(date(1900, Some(1), Some(1)))
        );
    }

    #[test]
    fn test_simple_month_and_year() {
        assert_eq!(
            DateValue::parse("DEC 1895"),
            DateValue::Simple(date(1895, Some(12), None))
        );
    }

    #[test]
    fn test_simple_year_only() {
        assert_eq!(DateValue::parse("1900"), DateValue::Simple(date(1900, None, None)));
    }

    #[test]
    fn test_bc_year_is_negative() {
        assert_eq!(DateValue::parse("44 BC"), DateValue::Simple(date(-44, None, None)));
        assert_eq!(
            DateValue::parse("15 MAR 44 B.C."),
            DateValue::Simple(date(-44, Some(3), Some(15)))
        );
    }

    #[test]
    fn test_dual_year_keeps_first() {
        assert_eq!(
            DateValue::parse("1719/20"),
            DateValue::Simple(date(1719, None, None))
        );
    }

    #[test]
    fn test_period() {
        assert_eq!(
            DateValue::parse("FROM 1900 TO 1910"),
            DateValue::Period {
                from: date(1900, None, None),
                to: date(1910, None, None),
            }
        );
    }

    #[test]
    fn test_open_ended_from_and_to() {
        assert_eq!(DateValue::parse("FROM 1900"), DateValue::From(date(1900, None, None)));
        assert_eq!(DateValue::parse("TO 1910"), DateValue::To(date(1910, None, None)));
    }

    #[test]
    fn test_range() {
        assert_eq!(
            DateValue::parse("BET 1900 AND 1910"),
            DateValue::Range {
                from: date(1900, None, None),
                to: date(1910, None, None),
            }
        );
    }

    #[test]
    fn test_before_and_after() {
        assert_eq!(
            DateValue::parse("BEF 1 JAN 1900"),
            DateValue::Before(date(1900, Some(1), Some(1)))
        );
        assert_eq!(DateValue::parse("AFT 1900"), DateValue::After(date(1900, None, None)));
    }

    #[test]
    fn test_uncertainty_qualifiers() {
        assert_eq!(DateValue::parse("ABT 1900"), DateValue::About(date(1900, None, None)));
        assert_eq!(
            DateValue::parse("CAL 1900"),
            DateValue::Calculated(date(1900, None, None))
        );
        assert_eq!(
            DateValue::parse("EST 1900"),
            DateValue::Estimated(date(1900, None, None))
        );
    }

    #[test]
    fn test_interpreted_keeps_phrase() {
        assert_eq!(
            DateValue::parse("INT 1900 (about the turn of the century)"),
            DateValue::Interpreted {
                date: date(1900, None, None),
                phrase: "about the turn of the century".to_string(),
            }
        );
    }

    #[test]
    fn test_phrase_only() {
        assert_eq!(
            DateValue::parse("(before the war)"),
            DateValue::Phrase("before the war".to_string())
        );
    }

    #[test]
    fn test_unparseable_payload_falls_back_to_phrase() {
        assert_eq!(
            DateValue::parse("Stillborn"),
            DateValue::Phrase("Stillborn".to_string())
        );
        // A date with trailing garbage is a phrase, not a truncated date.
        assert_eq!(
            DateValue::parse("1900 1901 1902 oops"),
            DateValue::Phrase("1900 1901 1902 oops".to_string())
        );
    }
}
