//! Tourism category codes attached to imported listings.
//!
//! Codes follow the national tourism data service classification
//! (e.g. `B02010100` for tourist hotels). The API filters on the raw code
//! and reports a display label next to it.

/// Category value the client sends for "every category".
pub const ALL_CATEGORIES: &str = "전체";

/// Label reported for listings imported without a category.
pub const UNCATEGORIZED_LABEL: &str = "기타";

const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("B02010100", "호텔"),
    ("B02010500", "리조트"),
    ("B02010600", "유스호스텔"),
    ("B02010700", "펜션"),
    ("B02010900", "모텔"),
    ("B02011000", "호스텔"),
    ("B02011100", "게스트하우스"),
    ("B02011200", "민박"),
    ("B02011300", "휴양콘도"),
    ("B02011600", "한옥"),
    ("A02030100", "캠핑"),
    ("A02010400", "관광지"),
    ("A02020200", "문화시설"),
];

/// Whether a requested category means "no category filter".
pub fn is_all_categories(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == ALL_CATEGORIES || value.eq_ignore_ascii_case("all")
}

/// Display label for a category code, or the code itself when unknown.
pub fn category_label(code: &str) -> &str {
    CATEGORY_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}
