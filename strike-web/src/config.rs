//! Build-time configuration for the booking endpoint.

/// Hosted booking endpoint used when `STRIKE_API_URL` is not set at compile time.
pub const DEFAULT_API_URL: &str = "https://h5jbtjv6if.execute-api.eu-north-1.amazonaws.com";

/// Base URL of the booking endpoint.
#[must_use]
pub fn api_base() -> String {
    api_base_with(option_env!("STRIKE_API_URL"))
}

fn api_base_with(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_hosted_endpoint() {
        assert_eq!(api_base_with(None), DEFAULT_API_URL);
        assert_eq!(api_base_with(Some("  ")), DEFAULT_API_URL);
    }

    #[test]
    fn trims_configured_endpoint() {
        assert_eq!(
            api_base_with(Some(" http://localhost:8787/ ")),
            "http://localhost:8787"
        );
    }
}
