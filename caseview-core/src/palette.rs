//! Deterministic colour and icon assignment.
//!
//! New shapes take the next colour in a fixed six-colour cycle keyed by the
//! number of shapes already saved, so colours stay collision-free and
//! reproducible regardless of drawing history. POIs additionally get an
//! icon, preferring a category lookup and falling back to the same
//! modulo-cycle policy.

/// Shared colour cycle for triangles, circles, polygons and POIs.
pub const AOI_COLORS: [&str; 6] = [
    "#4CBACB", // teal (default)
    "#E74C3C", // red
    "#F39C12", // orange
    "#27AE60", // green
    "#8E44AD", // purple
    "#3498DB", // blue
];

/// Marker icons cycled through for uncategorised POIs.
pub const POI_ICONS: [&str; 10] = [
    "marker",
    "flag",
    "star",
    "home",
    "building",
    "camera",
    "shopping-bag",
    "coffee",
    "car",
    "plane",
];

/// Recognised POI categories.
pub const POI_CATEGORIES: [&str; 10] = [
    "general",
    "business",
    "transportation",
    "entertainment",
    "food",
    "shopping",
    "government",
    "emergency",
    "education",
    "healthcare",
];

/// Colour for the next shape given how many already exist.
///
/// # Examples
/// ```
/// use caseview_core::palette::assign_color;
///
/// assert_eq!(assign_color(0), "#4CBACB");
/// assert_eq!(assign_color(6), "#4CBACB");
/// ```
#[must_use]
pub fn assign_color(existing_count: usize) -> &'static str {
    cycle_pick(&AOI_COLORS, existing_count)
}

/// Icon for the next POI.
///
/// A recognised category decides the icon directly; otherwise the icon
/// table is cycled by `existing_count`.
#[must_use]
pub fn assign_icon(category: Option<&str>, existing_count: usize) -> &'static str {
    category
        .and_then(category_icon)
        .unwrap_or_else(|| cycle_pick(&POI_ICONS, existing_count))
}

/// Icon associated with a known category, if any.
#[must_use]
pub fn category_icon(category: &str) -> Option<&'static str> {
    match category {
        "general" => Some("marker"),
        "business" => Some("building"),
        "transportation" => Some("car"),
        "entertainment" => Some("star"),
        "food" => Some("coffee"),
        "shopping" => Some("shopping-bag"),
        "government" => Some("flag"),
        "emergency" => Some("plus"),
        "education" => Some("graduation-cap"),
        "healthcare" => Some("heart"),
        _ => None,
    }
}

fn cycle_pick(table: &[&'static str], count: usize) -> &'static str {
    table.iter().cycle().nth(count).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "#4CBACB")]
    #[case(1, "#E74C3C")]
    #[case(5, "#3498DB")]
    #[case(6, "#4CBACB")]
    #[case(13, "#E74C3C")]
    fn colors_cycle_modulo_palette_length(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(assign_color(count), expected);
    }

    #[rstest]
    fn category_wins_over_cycling() {
        assert_eq!(assign_icon(Some("healthcare"), 3), "heart");
    }

    #[rstest]
    fn unknown_category_falls_back_to_cycle() {
        assert_eq!(assign_icon(Some("unheard-of"), 1), "flag");
        assert_eq!(assign_icon(None, 10), "marker");
    }
}
