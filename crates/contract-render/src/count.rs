//! Count phrases for the deliverables clauses
//!
//! A count of three videos reads "One (1) / Two (2) / Three (3)": the
//! phrase enumerates every number up to the count, not just the last one.

use crate::error::InputError;
use crate::input::ContentCount;

/// Phrase used when no count was supplied
pub const DEFAULT_COUNT_PHRASE: &str = "one (1)";

/// Largest count with an enumerated phrase
pub const MAX_ENUMERATED: i64 = 10;

const NUMBER_WORDS: [&str; MAX_ENUMERATED as usize] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
];

/// Enumerated phrase for `1..=n`, or the plain number outside `1..=10`
#[must_use]
pub fn count_phrase(n: i64) -> String {
    if !(1..=MAX_ENUMERATED).contains(&n) {
        return n.to_string();
    }
    NUMBER_WORDS
        .iter()
        .zip(1..=n)
        .map(|(word, i)| format!("{word} ({i})"))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Phrase for an optional raw count
///
/// # Errors
/// `InputError::InvalidCount` if the count is non-numeric text
pub fn resolve_count(count: Option<&ContentCount>) -> Result<String, InputError> {
    match count {
        None => Ok(DEFAULT_COUNT_PHRASE.to_string()),
        Some(raw) => Ok(raw
            .value()?
            .map_or_else(|| DEFAULT_COUNT_PHRASE.to_string(), count_phrase)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one() {
        assert_eq!(count_phrase(1), "One (1)");
    }

    #[test]
    fn three() {
        assert_eq!(count_phrase(3), "One (1) / Two (2) / Three (3)");
    }

    #[test]
    fn ten_enumerates_all() {
        assert_eq!(
            count_phrase(10),
            "One (1) / Two (2) / Three (3) / Four (4) / Five (5) / Six (6) / \
             Seven (7) / Eight (8) / Nine (9) / Ten (10)"
        );
    }

    #[test]
    fn out_of_range_falls_back_to_number() {
        assert_eq!(count_phrase(0), "0");
        assert_eq!(count_phrase(11), "11");
        assert_eq!(count_phrase(-4), "-4");
    }

    #[test]
    fn resolve_defaults() {
        assert_eq!(resolve_count(None).unwrap(), "one (1)");
        assert_eq!(
            resolve_count(Some(&ContentCount::Integer(0))).unwrap(),
            "one (1)"
        );
        assert_eq!(
            resolve_count(Some(&ContentCount::Text(String::new()))).unwrap(),
            "one (1)"
        );
    }

    #[test]
    fn resolve_supplied() {
        assert_eq!(
            resolve_count(Some(&ContentCount::Text("2".into()))).unwrap(),
            "One (1) / Two (2)"
        );
        assert_eq!(resolve_count(Some(&ContentCount::Integer(25))).unwrap(), "25");
    }

    #[test]
    fn half_renders_zero_for_number_and_text() {
        assert_eq!(resolve_count(Some(&ContentCount::Float(0.5))).unwrap(), "0");
        assert_eq!(resolve_count(Some(&ContentCount::Text("0.5".into()))).unwrap(), "0");
    }

    #[test]
    fn resolve_rejects_words() {
        assert!(resolve_count(Some(&ContentCount::Text("three".into()))).is_err());
    }

    proptest! {
        #[test]
        fn enumerates_every_number_up_to_n(n in 1i64..=10) {
            let phrase = count_phrase(n);
            let parts: Vec<&str> = phrase.split(" / ").collect();
            prop_assert_eq!(parts.len() as i64, n);
            for (i, part) in parts.iter().enumerate() {
                let expected = format!("{} ({})", NUMBER_WORDS[i], i + 1);
                prop_assert_eq!(*part, expected.as_str());
            }
        }

        #[test]
        fn outside_range_is_decimal(n in prop_oneof![i64::MIN..1i64, 11i64..i64::MAX]) {
            prop_assert_eq!(count_phrase(n), n.to_string());
        }
    }
}
