//! Shared helper functions for CLI commands

/// Format a monetary amount for display
pub fn format_eur(amount: f64) -> String {
    format!("€ {:.2}", amount)
}

/// Format a per-km rate for display
pub fn format_eur_per_km(rate: f64) -> String {
    format!("€ {:.3}/km", rate)
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output. Counts chars
/// rather than bytes: route labels carry accented place names and arrows,
/// and a byte cut could land inside a multibyte character.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
