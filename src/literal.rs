use regex_syntax::{hir::literal::Extractor, parse};

/// Extract literal prefixes from a regex pattern for use as an ASCII
/// case-insensitive Aho-Corasick prefilter, ASCII-lowercased.
///
/// Every match of the pattern starts with one of the returned literals. When
/// that cannot be guaranteed (unparsable pattern, infinite literal set, a
/// literal shorter than `min_len`, or a non-ASCII literal the automaton cannot
/// case-fold) the result is empty and the caller must always try the pattern.
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let literals = match seq.literals() {
        Some(lits) => lits,
        None => return Vec::new(),
    };

    // Dropping one short literal would lose every match it stands for.
    if literals.iter().any(|lit| lit.as_bytes().len() < min_len) {
        return Vec::new();
    }

    let mut out: Vec<String> = Vec::with_capacity(literals.len());
    for lit in literals {
        match std::str::from_utf8(lit.as_bytes()) {
            Ok(s) if s.is_ascii() => out.push(s.to_ascii_lowercase()),
            _ => return Vec::new(),
        }
    }
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_literal() {
        let lits = extract_literals("Firefox", 3);
        assert_eq!(lits, vec!["firefox"]);
    }

    #[test]
    fn alternation() {
        let lits = extract_literals("Firefox|Chrome", 3);
        assert!(lits.contains(&"firefox".to_string()));
        assert!(lits.contains(&"chrome".to_string()));
    }

    #[test]
    fn too_short_returns_empty() {
        let lits = extract_literals(r"\d+\.\d+", 3);
        assert!(lits.is_empty());
    }

    #[test]
    fn one_short_branch_disables_the_prefilter() {
        let lits = extract_literals("iPad|Tb", 3);
        assert!(lits.is_empty());
    }

    #[test]
    fn non_ascii_literal_disables_the_prefilter() {
        assert!(extract_literals("ÄRCHOS ?Tab", 3).is_empty());
        assert!(extract_literals("Archos|ÄRCHOS", 3).is_empty());
    }

    #[test]
    fn unparsable_returns_empty() {
        let lits = extract_literals(r"Tablet(?! PC)", 3);
        assert!(lits.is_empty());
    }
}
