//! Benchmark utilities for kurus.

/// Builds a synthetic compact series of `tokens` tokens, cycling through
/// the three lexical shapes the way real payloads mix them.
#[must_use]
pub fn synthetic_series(tokens: usize) -> String {
    let mut parts = Vec::with_capacity(tokens);
    for i in 0..tokens {
        let kurus = 20_000 + (i * 37) % 60_000;
        match i % 3 {
            0 => parts.push(format!("{kurus}n{}", 1 + i % 13)),
            1 => parts.push(format!("{kurus}{}", ".".repeat(1 + i % 3))),
            _ => parts.push(kurus.to_string()),
        }
    }
    parts.join(",")
}

/// Builds a synthetic pair payload with one pair per day starting at the
/// given epoch second.
#[must_use]
pub fn synthetic_pairs(pairs: usize, start_epoch: i64) -> String {
    let items: Vec<String> = (0..pairs)
        .map(|i| {
            let ts = start_epoch + (i as i64) * 86_400;
            let price = 400.0 + (i % 50) as f64;
            format!("[{ts}, {price:.1}]")
        })
        .collect();
    format!("[{}]", items.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_series_decodes() {
        let raw = synthetic_series(100);
        assert!(kurus_decode::expand_kurus(&raw).is_ok());
    }

    #[test]
    fn test_synthetic_pairs_decode() {
        let raw = synthetic_pairs(10, 1_700_000_000);
        let points =
            kurus_decode::decode_pairs(&raw, kurus_types::DedupMode::KeepAll).unwrap();
        assert_eq!(points.len(), 10);
    }
}
