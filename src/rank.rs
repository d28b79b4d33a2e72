//! Ordering of bundle comparisons by regression significance

use crate::report::BundleComparison;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Order two comparisons so the most significant change comes first
///
/// Keys, in order:
/// 1. magnitude of the parsed size change, descending
/// 2. magnitude of the gzip size change, descending
/// 3. label, ascending by [`locale_compare`]
/// 4. bundle identifier, ascending
pub fn compare_significance(a: &BundleComparison, b: &BundleComparison) -> Ordering {
    b.parsed
        .absolute_diff
        .unsigned_abs()
        .cmp(&a.parsed.absolute_diff.unsigned_abs())
        .then_with(|| {
            b.gzip
                .absolute_diff
                .unsigned_abs()
                .cmp(&a.gzip.absolute_diff.unsigned_abs())
        })
        .then_with(|| locale_compare(&a.label, &b.label))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort comparisons in place by [`compare_significance`]
pub fn rank(entries: &mut [BundleComparison]) {
    entries.sort_by(compare_significance);
}

/// Human-oriented string ordering
///
/// Follows the Unicode root collation order that browsers use for `localeCompare`,
/// level by level over the whole string:
/// 1. base characters: whitespace, then punctuation and symbols in root order, then
///    digits, then letters compared case-insensitively
/// 2. accents, unaccented first
/// 3. case, lowercase first
///
/// Strings still equal after that compare by code point.
///
/// # Examples
///
/// ```
/// use size_comparison::rank::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// assert_eq!(locale_compare("_app", "Button"), Ordering::Less);
/// assert_eq!(locale_compare("éclair", "fig"), Ordering::Less);
/// ```
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let left = collation_elements(a);
    let right = collation_elements(b);

    left.iter()
        .map(CollationElement::primary)
        .cmp(right.iter().map(CollationElement::primary))
        .then_with(|| {
            left.iter()
                .map(|e| e.marks.as_slice())
                .cmp(right.iter().map(|e| e.marks.as_slice()))
        })
        .then_with(|| {
            left.iter()
                .map(|e| e.base.is_uppercase())
                .cmp(right.iter().map(|e| e.base.is_uppercase()))
        })
        .then_with(|| a.cmp(b))
}

// Root collation order of ASCII punctuation and symbols.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

struct CollationElement {
    base: char,
    marks: Vec<char>,
}

impl CollationElement {
    fn primary(&self) -> (u8, u32) {
        let c = self.base;
        if c.is_whitespace() {
            (0, u32::from(c))
        } else if let Some(position) = PUNCTUATION_ORDER.find(c) {
            (1, position as u32)
        } else if let Some(digit) = c.to_digit(10) {
            (2, digit)
        } else if c.is_numeric() {
            (2, u32::from(c))
        } else if c.is_alphabetic() {
            (3, u32::from(c.to_lowercase().next().unwrap_or(c)))
        } else {
            (1, 0x100 + u32::from(c))
        }
    }
}

// Canonical decomposition splits accented letters into a base and its marks.
fn collation_elements(s: &str) -> Vec<CollationElement> {
    let mut elements: Vec<CollationElement> = Vec::new();
    for c in s.nfd() {
        match elements.last_mut() {
            Some(last) if is_combining_mark(c) => last.marks.push(c),
            _ => elements.push(CollationElement {
                base: c,
                marks: Vec::new(),
            }),
        }
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use crate::delta::DeltaRecord;

    fn entry(label: &str, parsed_diff: i64, gzip_diff: i64) -> BundleComparison {
        BundleComparison {
            id: label.to_string(),
            label: label.to_string(),
            category: Category::Main,
            preview_url: None,
            parsed: DeltaRecord::between(1000, (1000 + parsed_diff) as u64),
            gzip: DeltaRecord::between(1000, (1000 + gzip_diff) as u64),
        }
    }

    fn labels(entries: &[BundleComparison]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_equal_magnitudes_break_ties_by_label() {
        let mut entries = vec![entry("b", 50, 0), entry("a", 50, 0), entry("c", 10, 0)];

        rank(&mut entries);

        assert_eq!(labels(&entries), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_magnitude_ignores_sign() {
        let mut entries = vec![entry("grew", 10, 0), entry("shrank", -300, 0)];

        rank(&mut entries);

        assert_eq!(labels(&entries), vec!["shrank", "grew"]);
    }

    #[test]
    fn test_gzip_breaks_parsed_ties() {
        let mut entries = vec![entry("a", 100, 5), entry("b", -100, -40)];

        rank(&mut entries);

        assert_eq!(labels(&entries), vec!["b", "a"]);
    }

    #[test]
    fn test_label_only_used_when_both_diffs_tie() {
        let mut entries = vec![entry("a", 100, 1), entry("z", 100, 2)];

        rank(&mut entries);

        assert_eq!(labels(&entries), vec!["z", "a"]);
    }

    #[test]
    fn test_identical_labels_fall_back_to_identifier() {
        let mut first = entry("Button", 0, 0);
        first.id = "@lib/core/Button.esm".to_string();
        let mut second = entry("Button", 0, 0);
        second.id = "@lib/core/Button".to_string();

        let mut entries = vec![first, second];
        rank(&mut entries);

        assert_eq!(entries[0].id, "@lib/core/Button");
        assert_eq!(entries[1].id, "@lib/core/Button.esm");
    }

    #[test]
    fn test_rank_is_independent_of_input_order() {
        let forward = vec![
            entry("Chip", 10, 3),
            entry("alert", 10, 3),
            entry("Badge", -10, 3),
            entry("zoom", 0, 0),
        ];
        let mut reversed: Vec<_> = forward.iter().rev().cloned().collect();
        let mut forward = forward;

        rank(&mut forward);
        rank(&mut reversed);

        assert_eq!(labels(&forward), labels(&reversed));
        assert_eq!(labels(&forward), vec!["alert", "Badge", "Chip", "zoom"]);
    }

    #[test]
    fn test_label_ties_follow_collation_order() {
        let mut entries = vec![
            entry("fig", 20, 0),
            entry("a-b", 20, 0),
            entry("éclair", 20, 0),
            entry("a_b", 20, 0),
        ];

        rank(&mut entries);

        assert_eq!(labels(&entries), vec!["a_b", "a-b", "éclair", "fig"]);
    }

    #[test]
    fn test_locale_compare_is_case_insensitive_first() {
        assert_eq!(locale_compare("badge", "Button"), Ordering::Less);
        assert_eq!(locale_compare("Zoom", "alert"), Ordering::Greater);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_orders_punctuation_digits_letters() {
        assert_eq!(locale_compare("/", "1"), Ordering::Less);
        assert_eq!(locale_compare("1", "a"), Ordering::Less);
        assert_eq!(locale_compare("~x", "a"), Ordering::Less);
        assert_eq!(locale_compare("/about", "/about/team"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_uses_root_punctuation_order() {
        assert_eq!(locale_compare("a-b", "a_b"), Ordering::Greater);
        assert_eq!(locale_compare("a.b", "a-b"), Ordering::Greater);
        assert_eq!(locale_compare("a/b", "a.b"), Ordering::Greater);
        assert_eq!(locale_compare("a$b", "a~b"), Ordering::Greater);
        assert_eq!(locale_compare("$", "0"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_folds_accents_before_comparing_them() {
        assert_eq!(locale_compare("éclair", "fig"), Ordering::Less);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "resumes"), Ordering::Less);
        assert_eq!(locale_compare("Resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_treats_composed_and_decomposed_alike() {
        assert_eq!(locale_compare("e\u{301}x", "\u{e9}y"), Ordering::Less);
        assert_eq!(locale_compare("\u{e9}x", "e\u{301}y"), Ordering::Less);
    }

    use proptest::prelude::*;

    proptest! {
        /// Property: the comparator is antisymmetric and only ties identical entries
        #[test]
        fn prop_comparator_is_total(
            a in ("[a-zA-Z/]{0,6}", -500i64..500, -500i64..500),
            b in ("[a-zA-Z/]{0,6}", -500i64..500, -500i64..500),
        ) {
            let left = entry(&a.0, a.1, a.2);
            let right = entry(&b.0, b.1, b.2);

            let forward = compare_significance(&left, &right);
            let backward = compare_significance(&right, &left);
            prop_assert_eq!(forward, backward.reverse());

            if forward == Ordering::Equal {
                prop_assert_eq!(&left.label, &right.label);
            }
        }

        /// Property: ranked output never places a smaller parsed change first
        #[test]
        fn prop_rank_orders_by_parsed_magnitude(
            diffs in prop::collection::vec(-1000i64..1000, 0..30)
        ) {
            let mut entries: Vec<_> = diffs
                .iter()
                .enumerate()
                .map(|(i, d)| entry(&format!("b{i}"), *d, 0))
                .collect();

            rank(&mut entries);

            for pair in entries.windows(2) {
                prop_assert!(
                    pair[0].parsed.absolute_diff.unsigned_abs()
                        >= pair[1].parsed.absolute_diff.unsigned_abs()
                );
            }
        }
    }
}
