//! Leadership style selector

/// Returned for any style outside the known set
pub const DEFAULT_STRATEGY: &str = "default strategy";

/// Style used when the caller does not name one
pub const DEFAULT_STYLE: &str = "Reed";

const PATTERNS: [(&str, &str); 4] = [
    (
        "Reed",
        "Invest heavily in emerging technologies and innovation.",
    ),
    (
        "Harris",
        "Take a conservative approach with emphasis on steady growth.",
    ),
    (
        "Vale",
        "Prioritize customer experience and loyalty above all.",
    ),
    (
        "Sloan",
        "Focus on design and simplicity to stand out in the market.",
    ),
];

/// Decision pattern for a leadership style (exact, case-sensitive match)
pub fn select(style: &str) -> &'static str {
    PATTERNS
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, pattern)| *pattern)
        .unwrap_or(DEFAULT_STRATEGY)
}

/// Known style names in table order
pub fn styles() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|(name, _)| *name)
}
