//! Universe helpers for the Ronda CLI.

/// Default symbol universe used when none is given on the command line.
pub(crate) const DEFAULT_UNIVERSE: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "TSLA", "AVGO", "JPM", "V", "MA", "UNH",
    "HD", "PG", "KO", "XOM", "CVX", "WMT", "CAT", "DIS",
];

/// Resolve the universe: explicit symbols if given, the default otherwise.
/// Symbols are upper-cased and deduplicated, preserving order.
pub(crate) fn resolve_universe(symbols: &[String]) -> Vec<String> {
    let raw: Vec<String> = if symbols.is_empty() {
        DEFAULT_UNIVERSE.iter().map(|s| s.to_string()).collect()
    } else {
        symbols.iter().map(|s| s.trim().to_uppercase()).collect()
    };

    let mut seen = std::collections::HashSet::new();
    raw.into_iter()
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_universe_when_empty() {
        let universe = resolve_universe(&[]);
        assert_eq!(universe.len(), DEFAULT_UNIVERSE.len());
        assert_eq!(universe[0], "AAPL");
    }

    #[test]
    fn test_explicit_symbols_uppercased() {
        let universe = resolve_universe(&["aapl".to_string(), " msft ".to_string()]);
        assert_eq!(universe, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_duplicates_removed_order_kept() {
        let universe = resolve_universe(&[
            "MSFT".to_string(),
            "AAPL".to_string(),
            "msft".to_string(),
        ]);
        assert_eq!(universe, vec!["MSFT", "AAPL"]);
    }
}
