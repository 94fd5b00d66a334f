//! Chart CDN URL construction.

/// Base URL for the chart data CDN.
pub const BASE_URL: &str = "https://akakce-g.akamaized.net";

/// Chart widget version observed upstream.
pub const DEFAULT_VERSION: &str = "17.2";

/// Builds the URL for a product's price history series.
///
/// URL format: `{BASE_URL}/{product_id}:{price_kurus}:{version}:s`
///
/// The second segment is the product's current list price in kuruş and
/// the third is the chart widget version. The trailing `:s` selects the
/// series payload.
///
/// # Example
///
/// ```
/// use kurus_fetch::url::{DEFAULT_VERSION, history_url};
///
/// let url = history_url(416312584, 29677, DEFAULT_VERSION);
/// assert_eq!(url, "https://akakce-g.akamaized.net/416312584:29677:17.2:s");
/// ```
#[must_use]
pub fn history_url(product_id: u64, price_kurus: u64, version: &str) -> String {
    format!("{BASE_URL}/{product_id}:{price_kurus}:{version}:s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_url() {
        let url = history_url(416312584, 29677, DEFAULT_VERSION);
        assert_eq!(url, "https://akakce-g.akamaized.net/416312584:29677:17.2:s");
    }

    #[test]
    fn test_history_url_custom_version() {
        let url = history_url(1, 100, "18.0");
        assert!(url.ends_with("/1:100:18.0:s"));
    }
}
