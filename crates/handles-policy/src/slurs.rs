/// Slurs rejected in any candidate local name, lower-case canonical forms.
/// Matching is exact on words and on the separator-collapsed candidate;
/// entries of five letters or more also match as substrings.
const EXPLICIT_SLURS: &[&str] = &[
    "chink", "coon", "darkie", "faggot", "gook", "kike", "nigga", "nigger", "spic", "tranny",
    "wetback",
];

/// Common character substitutions used to obfuscate slurs
fn decode_leet(c: char) -> char {
    match c {
        '0' => 'o',
        '1' | '!' => 'i',
        '3' => 'e',
        '4' | '@' => 'a',
        '5' | '$' => 's',
        '7' => 't',
        '8' => 'b',
        _ => c,
    }
}

fn contains_slur(candidate: &str) -> bool {
    let collapsed: String = candidate.chars().filter(|c| c.is_ascii_alphabetic()).collect();

    for slur in EXPLICIT_SLURS {
        if collapsed == *slur {
            return true;
        }
        // Longer slurs are unambiguous enough to match inside other words
        if slur.len() >= 5 && collapsed.contains(slur) {
            return true;
        }
    }

    candidate
        .split(|c: char| !c.is_ascii_alphabetic())
        .any(|word| EXPLICIT_SLURS.contains(&word))
}

/// Check whether a candidate local name contains an explicit slur, in plain
/// form or behind common leetspeak/separator obfuscation.
pub fn has_explicit_slur(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    if contains_slur(&lower) {
        return true;
    }
    let decoded: String = lower.chars().map(decode_leet).collect();
    contains_slur(&decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_slur_detected() {
        assert!(has_explicit_slur("kike"));
        assert!(has_explicit_slur("faggot"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_explicit_slur("KiKe"));
    }

    #[test]
    fn test_leet_obfuscation_detected() {
        assert!(has_explicit_slur("f4ggot"));
        assert!(has_explicit_slur("k1k3"));
    }

    #[test]
    fn test_separator_obfuscation_detected() {
        assert!(has_explicit_slur("f.a.g.g.o.t"));
        assert!(has_explicit_slur("k-i-k-e"));
    }

    #[test]
    fn test_long_slur_matches_inside_word() {
        assert!(has_explicit_slur("faggotry"));
    }

    #[test]
    fn test_short_slur_does_not_match_inside_word() {
        // "coon" must not fire on raccoon or tycoon
        assert!(!has_explicit_slur("raccoon"));
        assert!(!has_explicit_slur("tycoon"));
        assert!(has_explicit_slur("coon"));
    }

    #[test]
    fn test_clean_names_pass() {
        assert!(!has_explicit_slur("alice"));
        assert!(!has_explicit_slur("charles_leclerc"));
        assert!(!has_explicit_slur("analyst"));
    }
}
