//! Pure visibility planning, independent of the DOM.
//!
//! Given the classified tab controls and the selected level, decide which
//! controls to hide and whether the active control must be re-targeted.
//! Keeping this DOM-free makes the rules unit-testable on the native target.

use crate::classify::TabCategory;
use crate::level::SetupLevel;

/// Outcome of a planning pass: one hide flag per tab control, plus an
/// optional index to activate when the currently active control goes hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityPlan {
    pub hidden: Vec<bool>,
    pub activate: Option<usize>,
}

/// Compute the plan for `level` over `categories`, where `active` is the
/// index of the currently active tab control, if any.
pub fn plan(
    level: SetupLevel,
    categories: &[TabCategory],
    active: Option<usize>,
) -> VisibilityPlan {
    let hidden: Vec<bool> = categories.iter().map(|&c| level.hides(c)).collect();

    let activate = match active {
        Some(i) if hidden.get(i).copied().unwrap_or(false) => {
            pick_fallback(categories, &hidden)
        }
        _ => None,
    };

    VisibilityPlan { hidden, activate }
}

/// First visible control, preferring the General category.
fn pick_fallback(categories: &[TabCategory], hidden: &[bool]) -> Option<usize> {
    let general = categories
        .iter()
        .enumerate()
        .find(|&(i, &c)| !hidden[i] && c == TabCategory::General)
        .map(|(i, _)| i);

    general.or_else(|| hidden.iter().position(|&h| !h))
}
