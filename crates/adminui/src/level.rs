//! Setup level: how much of the configuration form the administrator sees.

use crate::classify::TabCategory;

/// Value of the "Setup Level" select on the module edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl SetupLevel {
    /// Parse the raw select value. Unknown values show everything, so a
    /// host markup change degrades to a fully visible form, never a broken one.
    pub fn parse(value: &str) -> SetupLevel {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => SetupLevel::Basic,
            "intermediate" => SetupLevel::Intermediate,
            _ => SetupLevel::Advanced,
        }
    }

    /// Tab categories hidden at this level. General/Other tabs never hide.
    pub fn hidden_categories(self) -> &'static [TabCategory] {
        match self {
            SetupLevel::Basic => &[TabCategory::Intermediate, TabCategory::Advanced],
            SetupLevel::Intermediate => &[TabCategory::Advanced],
            SetupLevel::Advanced => &[],
        }
    }

    pub fn hides(self, category: TabCategory) -> bool {
        self.hidden_categories().contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(SetupLevel::parse("basic"), SetupLevel::Basic);
        assert_eq!(SetupLevel::parse("intermediate"), SetupLevel::Intermediate);
        assert_eq!(SetupLevel::parse("advanced"), SetupLevel::Advanced);
        assert_eq!(SetupLevel::parse(" Basic "), SetupLevel::Basic);
        assert_eq!(SetupLevel::parse("INTERMEDIATE"), SetupLevel::Intermediate);
    }

    #[test]
    fn test_parse_unknown_shows_everything() {
        assert_eq!(SetupLevel::parse(""), SetupLevel::Advanced);
        assert_eq!(SetupLevel::parse("expert"), SetupLevel::Advanced);
    }

    #[test]
    fn test_hidden_categories() {
        assert_eq!(
            SetupLevel::Basic.hidden_categories(),
            &[TabCategory::Intermediate, TabCategory::Advanced]
        );
        assert_eq!(
            SetupLevel::Intermediate.hidden_categories(),
            &[TabCategory::Advanced]
        );
        assert!(SetupLevel::Advanced.hidden_categories().is_empty());
    }

    #[test]
    fn test_general_never_hidden() {
        for level in [
            SetupLevel::Basic,
            SetupLevel::Intermediate,
            SetupLevel::Advanced,
        ] {
            assert!(!level.hides(TabCategory::General));
            assert!(!level.hides(TabCategory::Other));
        }
    }
}
