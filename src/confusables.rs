//! Hand-rolled Unicode script-range tables used for homograph detection.
//!
//! The crate pack has no `unicode-script`-style dependency, so script
//! membership is approximated with the same kind of manual `char` range
//! checks the teacher pack uses elsewhere (see
//! `other_examples/144e6d00_zeroclaw-labs-zeroclaw__src-security-phishing_guard.rs.rs`,
//! `contains_homograph`). The ranges below are widened slightly past that
//! reference (covering Latin-lookalike blocks bucket by bucket) so the
//! heuristic catches the common confusable alphabets, not just Cyrillic and
//! Greek.

/// A coarse script bucket. Mixing two of these within a single label is the
/// homograph signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
    Armenian,
    Hebrew,
    Arabic,
    Other,
}

pub fn classify(c: char) -> Script {
    match c {
        'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '.' => Script::Latin,
        '\u{00C0}'..='\u{024F}' => Script::Latin, // Latin extended
        '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}' => Script::Cyrillic,
        '\u{0370}'..='\u{03FF}' => Script::Greek,
        '\u{0530}'..='\u{058F}' => Script::Armenian,
        '\u{0590}'..='\u{05FF}' => Script::Hebrew,
        '\u{0600}'..='\u{06FF}' => Script::Arabic,
        _ => Script::Other,
    }
}

/// True if a label mixes two or more "meaningful" scripts (digits, hyphens
/// and dots are script-neutral and never count). A single foreign script
/// used consistently (a legitimate IDN) is not flagged; mixing Latin with
/// a lookalike script inside one label is the phishing tell.
pub fn has_mixed_scripts(label: &str) -> bool {
    let mut seen = std::collections::HashSet::new();
    for c in label.chars() {
        match classify(c) {
            Script::Latin if c.is_ascii_digit() || c == '-' || c == '.' => continue,
            script => {
                seen.insert(format!("{:?}", script));
            }
        }
    }
    seen.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_cyrillic_o_in_latin_label() {
        assert!(has_mixed_scripts("g\u{043E}\u{043E}gle"));
    }

    #[test]
    fn pure_latin_label_is_not_mixed() {
        assert!(!has_mixed_scripts("google"));
    }

    #[test]
    fn pure_cyrillic_label_is_not_mixed() {
        // A consistent non-Latin IDN is not itself a homograph signal.
        assert!(!has_mixed_scripts("\u{043C}\u{043E}\u{0441}\u{043A}\u{0432}\u{0430}"));
    }
}
