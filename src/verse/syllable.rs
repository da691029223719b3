//! Syllable segmentation.

/// tsheg
const TSHEG: char = '\u{0F0B}';
/// non-breaking tsheg
const TSHEG_NB: char = '\u{0F0C}';

/// Checks if `c` separates two syllables.
#[inline]
pub fn is_syllable_separator(c: char) -> bool {
    c == TSHEG || c == TSHEG_NB
}

/// Checks if `c` is a head mark or a clause/sentence terminator.
///
/// Covers `༄` to `༊` (head marks) and `།` to `༔` (shad family and gter tsheg).
#[inline]
pub fn is_delimiter(c: char) -> bool {
    matches!(c, '\u{0F04}'..='\u{0F0A}' | '\u{0F0D}'..='\u{0F14}')
}

/// Returns the syllables of a line, after removing delimiters.
///
/// Empty tokens (doubled or trailing tsheg) are dropped.
pub fn syllables(line: &str) -> Vec<String> {
    let stripped: String = line.chars().filter(|c| !is_delimiter(*c)).collect();
    stripped
        .split(is_syllable_separator)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Number of syllables in a line, or [None] if there is none.
pub fn count_syllables(line: &str) -> Option<usize> {
    match syllables(line).len() {
        0 => None,
        n => Some(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_line() {
        assert_eq!(syllables("ཀ་ཁ་ག་ངས"), vec!["ཀ", "ཁ", "ག", "ངས"]);
        assert_eq!(count_syllables("ཀ་ཁ་ག་ངས"), Some(4));
    }

    #[test]
    fn trailing_tsheg_and_shad() {
        assert_eq!(count_syllables("བཀྲ་ཤིས་བདེ་ལེགས།"), Some(4));
        assert_eq!(count_syllables("བཀྲ་ཤིས་་བདེ་ལེགས་།།"), Some(4));
    }

    #[test]
    fn head_marks() {
        assert_eq!(count_syllables("༄༅།།སྙན་ངག"), Some(2));
    }

    #[test]
    fn non_breaking_tsheg() {
        assert_eq!(count_syllables("ང༌ཁ"), Some(2));
    }

    #[test]
    fn delimiters_only() {
        assert_eq!(count_syllables("།།"), None);
        assert_eq!(count_syllables("་་"), None);
        assert_eq!(count_syllables(""), None);
    }

    #[test]
    fn delimiter_ranges() {
        assert!(is_delimiter('།'));
        assert!(is_delimiter('༎'));
        assert!(is_delimiter('༑'));
        assert!(is_delimiter('༄'));
        assert!(!is_delimiter('་'));
        assert!(!is_delimiter('ཀ'));
        assert!(is_syllable_separator('་'));
        assert!(!is_syllable_separator('།'));
    }
}
