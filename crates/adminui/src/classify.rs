//! Tab classification.
//!
//! A tab control is recognized by the identifier of its target pane first
//! (the host framework generates stable `params_*` ids), and only when the
//! id says nothing by its normalized visible label. The label tables carry
//! the English and German variants seen across host markup versions; adding
//! a locale means extending a table, not the logic.

/// Classification of a tab control on the module edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCategory {
    General,
    Intermediate,
    Advanced,
    Other,
}

/// Label variants per category, pre-normalized (lowercase, single spaces).
const GENERAL_LABELS: &[&str] = &[
    "general",
    "module",
    "basic",
    "basic settings",
    "allgemein",
    "modul",
    "grundeinstellungen",
];

const INTERMEDIATE_LABELS: &[&str] = &[
    "intermediate",
    "intermediate settings",
    "fortgeschritten",
    "fortgeschrittene einstellungen",
];

const ADVANCED_LABELS: &[&str] = &[
    "advanced",
    "advanced settings",
    "erweitert",
    "erweiterte einstellungen",
];

/// Lowercase and collapse runs of whitespace to single spaces.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Classify by the target pane identifier alone.
///
/// Matches `...-intermediate` / `..._intermediate` suffixes as well as the
/// older `params_intermediate` / `params-intermediate` segments, case
/// insensitively (same for `advanced` and `general`).
fn id_category(target_id: &str) -> Option<TabCategory> {
    let id = target_id.to_ascii_lowercase();
    let pairs = [
        ("intermediate", TabCategory::Intermediate),
        ("advanced", TabCategory::Advanced),
        ("general", TabCategory::General),
    ];
    for (needle, category) in pairs {
        if id == needle
            || id.ends_with(&format!("-{}", needle))
            || id.ends_with(&format!("_{}", needle))
            || id.contains(&format!("params_{}", needle))
            || id.contains(&format!("params-{}", needle))
        {
            return Some(category);
        }
    }
    None
}

/// Classify by the visible tab label.
fn label_category(label: &str) -> Option<TabCategory> {
    let normalized = normalize_label(label);
    let tables = [
        (INTERMEDIATE_LABELS, TabCategory::Intermediate),
        (ADVANCED_LABELS, TabCategory::Advanced),
        (GENERAL_LABELS, TabCategory::General),
    ];
    for (labels, category) in tables {
        if labels.contains(&normalized.as_str()) {
            return Some(category);
        }
    }
    None
}

/// Classify a tab control: id match first, label match as the fallback.
pub fn classify(target_id: &str, label: &str) -> TabCategory {
    if let Some(category) = id_category(target_id) {
        return category;
    }
    if let Some(category) = label_category(label) {
        return category;
    }
    TabCategory::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Advanced   Settings "), "advanced settings");
        assert_eq!(normalize_label("Erweitert"), "erweitert");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_classify_by_id() {
        assert_eq!(
            classify("attrib-params_intermediate", ""),
            TabCategory::Intermediate
        );
        assert_eq!(classify("params-advanced", ""), TabCategory::Advanced);
        assert_eq!(classify("attrib-params-advanced", ""), TabCategory::Advanced);
        assert_eq!(classify("general", ""), TabCategory::General);
        assert_eq!(classify("PARAMS_ADVANCED", ""), TabCategory::Advanced);
    }

    #[test]
    fn test_classify_by_label_fallback() {
        assert_eq!(classify("tab-3", "Advanced Settings"), TabCategory::Advanced);
        assert_eq!(classify("tab-3", "advanced settings"), TabCategory::Advanced);
        assert_eq!(classify("tab-2", "Fortgeschritten"), TabCategory::Intermediate);
        assert_eq!(classify("tab-1", "Allgemein"), TabCategory::General);
    }

    #[test]
    fn test_id_wins_over_label() {
        // Host markup with a stable id keeps that id authoritative even if
        // the visible label says something else.
        assert_eq!(
            classify("attrib-params_advanced", "Fortgeschritten"),
            TabCategory::Advanced
        );
    }

    #[test]
    fn test_unrecognized_is_other() {
        assert_eq!(classify("attrib-assignment", "Menu Assignment"), TabCategory::Other);
        assert_eq!(classify("", ""), TabCategory::Other);
    }
}
