//! Session kinds as a closed enumeration over export file labels.

use std::fmt;

use crate::text::fold;

/// Competition phase a result table belongs to.
///
/// Variant order is also the display order within a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionKind {
    /// The official standings ("Final", or a category's only table).
    Primary,
    /// Qualifying or practice session.
    Qualifying,
    /// First race ("1 Carrera").
    Race1,
    /// Second race ("2 Carrera").
    Race2,
    /// Any other session, keeping its formatted label.
    Other(String),
}

impl SessionKind {
    /// Classifies a raw session label taken from a file name.
    ///
    /// Returns `None` when the label names no known session; callers decide
    /// how to build the `Other` label.
    pub fn recognize(label: &str) -> Option<Self> {
        let folded = fold(label);
        if folded.contains("final") {
            Some(Self::Primary)
        } else if folded.contains("clasificatoria")
            || folded.contains("clasificacion")
            || folded.contains("practica")
        {
            Some(Self::Qualifying)
        } else if folded.contains("1 carrera") {
            Some(Self::Race1)
        } else if folded.contains("2 carrera") {
            Some(Self::Race2)
        } else {
            None
        }
    }

    /// Sort position within a category.
    #[must_use]
    pub const fn order_key(&self) -> u8 {
        match self {
            Self::Primary => 0,
            Self::Qualifying => 1,
            Self::Race1 => 2,
            Self::Race2 => 3,
            Self::Other(_) => 4,
        }
    }

    /// Heading shown for tables of this kind.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Primary => "Final",
            Self::Qualifying => "Clasificatoria",
            Self::Race1 => "Carrera 1",
            Self::Race2 => "Carrera 2",
            Self::Other(label) => label,
        }
    }

    #[must_use]
    pub const fn is_race(&self) -> bool {
        matches!(self, Self::Race1 | Self::Race2)
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_labels() {
        assert_eq!(SessionKind::recognize("FINAL"), Some(SessionKind::Primary));
        assert_eq!(
            SessionKind::recognize("Clasificación"),
            Some(SessionKind::Qualifying)
        );
        assert_eq!(
            SessionKind::recognize("Práctica libre"),
            Some(SessionKind::Qualifying)
        );
        assert_eq!(SessionKind::recognize("1 Carrera"), Some(SessionKind::Race1));
        assert_eq!(SessionKind::recognize("2 CARRERA"), Some(SessionKind::Race2));
        assert_eq!(SessionKind::recognize("Superpole"), None);
    }

    #[test]
    fn order_keys_follow_display_order() {
        let kinds = [
            SessionKind::Primary,
            SessionKind::Qualifying,
            SessionKind::Race1,
            SessionKind::Race2,
            SessionKind::Other("Superpole".to_string()),
        ];
        let keys: Vec<u8> = kinds.iter().map(SessionKind::order_key).collect();
        assert_eq!(keys, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn other_displays_its_label() {
        let kind = SessionKind::Other("Superpole".to_string());
        assert_eq!(kind.to_string(), "Superpole");
        assert_eq!(SessionKind::Race1.to_string(), "Carrera 1");
        assert!(SessionKind::Race2.is_race());
        assert!(!kind.is_race());
    }
}
