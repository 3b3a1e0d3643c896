//! Canned strategic advice keyed by topic

/// Returned when the topic is not in the advice table
pub const FALLBACK_ADVICE: &str = "Let's explore this topic in more detail.";

// Keys are stored lower-case; lookups fold the query to match.
const ADVICE: [(&str, &str); 5] = [
    (
        "growth",
        "Consider improving customer experience to foster organic growth.",
    ),
    (
        "cost-reduction",
        "Automate routine tasks to reduce operational expenses.",
    ),
    (
        "expansion",
        "Conduct thorough market research before entering new regions.",
    ),
    (
        "innovation",
        "Invest in R&D to stay ahead of competitors and drive long-term growth.",
    ),
    (
        "customer loyalty",
        "Build a loyalty program to enhance customer retention and engagement.",
    ),
];

/// Advice for `topic`, matched case-insensitively
pub fn advise(topic: &str) -> &'static str {
    let topic = topic.to_lowercase();
    ADVICE
        .iter()
        .find(|(key, _)| *key == topic)
        .map(|(_, advice)| *advice)
        .unwrap_or(FALLBACK_ADVICE)
}

/// Known topics in table order
pub fn topics() -> impl Iterator<Item = &'static str> {
    ADVICE.iter().map(|(topic, _)| *topic)
}
