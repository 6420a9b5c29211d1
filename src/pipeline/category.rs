/// Canonical category labels in page display order.
pub const CATEGORY_ORDER: [&str; 9] = [
    "発注者",
    "コンサル",
    "設計監理",
    "別途業者",
    "施工図",
    "躯体工事",
    "仕上げ工事",
    "その他業者",
    "職員",
];

/// Containment triggers, checked in priority order. First hit wins.
const RULES: &[(&[&str], &str)] = &[
    (&["発注者"], "発注者"),
    (&["コンサル"], "コンサル"),
    (&["設計監理"], "設計監理"),
    (&["施工図"], "施工図"),
    (&["躯体", "クタイ"], "躯体工事"),
    (&["仕上げ", "仕上", "シア"], "仕上げ工事"),
    // "他" alone also matches unrelated text such as "他社応援"; kept for
    // compatibility with pages already published.
    (&["その他", "他"], "その他業者"),
    (&["職員"], "職員"),
    (&["別途"], "別途業者"),
];

/// Map a raw category cell to a canonical label, or return it trimmed.
pub fn normalize_category(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }
    RULES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| s.contains(t)))
        .map(|&(_, label)| label.to_string())
        .unwrap_or_else(|| s.to_string())
}

/// Position in the display order, or None for fallback labels.
pub fn canonical_rank(label: &str) -> Option<usize> {
    CATEGORY_ORDER.iter().position(|&c| c == label)
}

// ── Tests ──
