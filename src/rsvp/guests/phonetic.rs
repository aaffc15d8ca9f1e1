//! Metaphone keys used for fuzzy guest lookup.
//!
//! The encoder follows the classic metaphone rules as shipped by the Python
//! `jellyfish` package, without a code length cap, so keys stay comparable with
//! lookups computed by that library.

use unicode_normalization::UnicodeNormalization;

/// Initial letter pairs whose first letter is silent.
const SILENT_FIRST_PREFIXES: [&str; 5] = ["kn", "gn", "pn", "wr", "ae"];

fn is_vowel(c: Option<char>) -> bool {
    matches!(c, Some('a' | 'e' | 'i' | 'o' | 'u'))
}

fn is_one_of(c: Option<char>, set: &str) -> bool {
    c.is_some_and(|c| set.contains(c))
}

/// Encodes a word with the classic metaphone algorithm.
pub fn metaphone(word: &str) -> String {
    let normalized: String = word.nfkd().collect::<String>().to_lowercase();
    let mut chars: Vec<char> = normalized.chars().collect();
    if SILENT_FIRST_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
    {
        chars.remove(0);
    }

    let mut code = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let after_next = chars.get(i + 2).copied();

        if Some(c) == next && c != 'c' {
            i += 1;
            continue;
        }

        match c {
            'a' | 'e' | 'i' | 'o' | 'u' => {
                if prev.is_none() || prev == Some(' ') {
                    code.push(c);
                }
            }
            'b' => code.push('b'),
            'c' => {
                if (next == Some('i') && after_next == Some('a')) || next == Some('h') {
                    code.push('x');
                    i += 1;
                } else if is_one_of(next, "iey") {
                    code.push('s');
                    i += 1;
                } else {
                    code.push('k');
                }
            }
            'd' => {
                if next == Some('g') && is_one_of(after_next, "iey") {
                    code.push('j');
                    i += 2;
                } else {
                    code.push('t');
                }
            }
            'f' | 'j' | 'l' | 'm' | 'n' | 'r' => code.push(c),
            'g' => {
                if is_one_of(next, "iey") {
                    code.push('j');
                } else if next == Some('h') && !is_vowel(after_next) {
                    i += 1;
                } else {
                    code.push('k');
                }
            }
            'h' => {
                if prev.is_none() || is_vowel(next) || !is_vowel(prev) {
                    code.push('h');
                }
            }
            'k' => {
                if prev != Some('c') {
                    code.push('k');
                }
            }
            'p' => {
                if next == Some('h') {
                    code.push('f');
                    i += 1;
                } else {
                    code.push('p');
                }
            }
            'q' => code.push('k'),
            's' => {
                if next == Some('h') {
                    code.push('x');
                    i += 1;
                } else if next == Some('i') && is_one_of(after_next, "oa") {
                    code.push('x');
                    i += 2;
                } else {
                    code.push('s');
                }
            }
            't' => {
                if next == Some('i') && is_one_of(after_next, "oa") {
                    code.push('x');
                } else if next == Some('h') {
                    code.push('0');
                    i += 1;
                } else if !(next == Some('c') && after_next == Some('h')) {
                    code.push('t');
                }
            }
            'v' => code.push('f'),
            'w' => {
                if prev.is_none() && next == Some('h') {
                    code.push('w');
                    i += 1;
                } else if is_vowel(next) {
                    code.push('w');
                }
            }
            'x' => {
                if prev.is_none() {
                    if next == Some('h') || (next == Some('i') && is_one_of(after_next, "oa")) {
                        code.push('x');
                    } else {
                        code.push('s');
                    }
                } else {
                    code.push_str("ks");
                }
            }
            'y' => {
                if is_vowel(next) {
                    code.push('y');
                }
            }
            'z' => code.push('s'),
            ' ' => {
                if !code.is_empty() && !code.ends_with(' ') {
                    code.push(' ');
                }
            }
            _ => {}
        }
        i += 1;
    }

    code.to_uppercase()
}

/// Metaphone keys for the first and last whitespace-separated tokens of a name.
///
/// Single-token names get an empty last-name key; blank names get two empty
/// keys.
pub fn name_keys(name: &str) -> (String, String) {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.as_slice() {
        [] => (String::new(), String::new()),
        [only] => (metaphone(only), String::new()),
        [first, .., last] => (metaphone(first), metaphone(last)),
    }
}
