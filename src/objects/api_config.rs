use url::Url;

/// Where the backend lives.
///
/// `base_url` comes from the `API_URL` build-time variable; without it every path is resolved
/// against the page's own origin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .and_then(|url| match Url::parse(url) {
                Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {
                    Some(url.to_string())
                }
                _ => {
                    log::warn!("ignoring invalid API_URL \"{}\"", url);
                    None
                }
            });

        Self { base_url }
    }

    pub fn from_build_env() -> Self {
        Self::new(option_env!("API_URL"))
    }

    /// Full URL for an API path; absolute URLs pass through untouched.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let path = match path.starts_with('/') {
            true => path.to_string(),
            false => format!("/{}", path),
        };

        match &self.base_url {
            Some(base) => format!("{}{}", base, path),
            None => path,
        }
    }

    /// Public podcast feed URL for a channel.
    ///
    /// The URL is handed to podcast apps, so a relative result is prefixed with `origin`.
    pub fn feed_url(&self, channel_id: &str, origin: Option<&str>) -> String {
        let url = self.endpoint(&format!("/feed/{}", channel_id));

        match (&self.base_url, origin) {
            (None, Some(origin)) => format!("{}{}", origin.trim_end_matches('/'), url),
            _ => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_without_base() {
        let config = ApiConfig::new(None);

        assert_eq!(config.endpoint("/api/channels"), "/api/channels");
        assert_eq!(config.endpoint("api/channels"), "/api/channels");
    }

    #[test]
    fn prefixes_base_url() {
        let config = ApiConfig::new(Some("https://feeds.example.com/"));

        assert_eq!(
            config.endpoint("/api/channels/42"),
            "https://feeds.example.com/api/channels/42"
        );
        assert_eq!(
            config.endpoint("http://other.example/x"),
            "http://other.example/x"
        );
    }

    #[test]
    fn empty_or_invalid_base_is_unset() {
        assert_eq!(ApiConfig::new(Some("  ")).base_url, None);
        assert_eq!(ApiConfig::new(Some("not a url")).base_url, None);
        assert_eq!(ApiConfig::new(Some("ftp://example.com")).base_url, None);
    }

    #[test]
    fn feed_url_uses_base_or_origin() {
        assert_eq!(
            ApiConfig::new(Some("https://feeds.example.com"))
                .feed_url("abc", Some("http://localhost:8080")),
            "https://feeds.example.com/feed/abc"
        );
        assert_eq!(
            ApiConfig::new(None).feed_url("abc", Some("http://localhost:8080/")),
            "http://localhost:8080/feed/abc"
        );
        assert_eq!(ApiConfig::new(None).feed_url("abc", None), "/feed/abc");
    }
}
