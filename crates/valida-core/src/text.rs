//! Text folding helpers shared by header matching, labels and slugs.

use std::sync::LazyLock;

use deunicode::{deunicode, deunicode_char};
use regex::Regex;

/// Runs of anything that is not a lower-case ASCII letter or digit.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Trims, lower-cases and strips diacritics from letters.
///
/// Symbols such as `°` are left alone so that header tokens like `n°` survive
/// folding.
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_ascii() || !c.is_alphabetic() {
            out.push(c);
        } else {
            match deunicode_char(c) {
                Some(ascii) => out.push_str(ascii),
                None => out.push(c),
            }
        }
    }
    out
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        // Multi-char upper forms ("ß" -> "SS") keep only their head upper-case.
        let mut upper = first.to_uppercase();
        upper
            .next()
            .into_iter()
            .chain(upper.flat_map(char::to_lowercase))
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Display form of a table header: `"NOMBRE"` becomes `"Nombre"`.
pub fn format_header(header: &str) -> String {
    capitalize(header.trim())
}

/// Identifier-safe form of a label: ASCII, lower-case, hyphen separated.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text).to_lowercase();
    RE_NON_ALNUM
        .replace_all(&ascii, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_accents_and_case() {
        assert_eq!(fold("  Clasificación "), "clasificacion");
        assert_eq!(fold("PRÁCTICA"), "practica");
        assert_eq!(fold("Número"), "numero");
    }

    #[test]
    fn fold_keeps_degree_sign() {
        assert_eq!(fold("N°"), "n°");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("ÑANDÚ"), "Ñandú");
        assert_eq!(capitalize("ßx"), "Ssx");
        assert_eq!(capitalize("ﬁnal"), "Final");
        assert_eq!(capitalize(&capitalize("ßx")), "Ssx");
    }

    #[test]
    fn format_header_lowercases_tail() {
        assert_eq!(format_header("MEJOR TM"), "Mejor tm");
        assert_eq!(format_header("N°"), "N°");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("125cc Final"), "125cc-final");
        assert_eq!(slugify("MX Máster - Carrera 1"), "mx-master-carrera-1");
        assert_eq!(slugify("--Femenina A y B--"), "femenina-a-y-b");
    }
}
