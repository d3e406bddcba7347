//! Spanish primary-strength collation.
//!
//! Option names are ordered case- and accent-insensitively for display.

/// Folding key for primary-strength comparison.
pub fn collation_key(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

/// Sort names ascending by collation key.
pub fn sort_collated(names: &mut [String]) {
    names.sort_by_cached_key(|name| collation_key(name));
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_folds_case_and_accents() {
        assert_eq!(collation_key("México"), "mexico");
        assert_eq!(collation_key("Perú"), "peru");
        assert_eq!(collation_key("ESPAÑA"), "espana");
    }

    #[test]
    fn test_sort_is_accent_insensitive() {
        let mut names = vec![
            "Perú".to_string(),
            "Panamá".to_string(),
            "Paraguay".to_string(),
        ];
        sort_collated(&mut names);
        assert_eq!(names, vec!["Panamá", "Paraguay", "Perú"]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut names = vec!["chile".to_string(), "Bolivia".to_string()];
        sort_collated(&mut names);
        assert_eq!(names, vec!["Bolivia", "chile"]);
    }
}
