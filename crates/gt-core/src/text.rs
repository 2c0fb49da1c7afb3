//! Small text helpers used by the content generator and page audits.

use crate::slug::capitalize_first;

/// Lowercase a name then capitalize the first letter of each space-separated
/// word: `NORTH CAROLINA` → `North Carolina`.
pub fn title_case(name: &str) -> String {
    name.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-separated words. Blank text has zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_upper_input() {
        assert_eq!(title_case("NORTH CAROLINA"), "North Carolina");
        assert_eq!(title_case("texas"), "Texas");
        assert_eq!(title_case("wEST vIRGINIA"), "West Virginia");
    }

    #[test]
    fn word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  one two\n three\tfour  "), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }
}
