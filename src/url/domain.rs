use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (e.g. `mailto:` or `data:` URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use keyword_ripple::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the key a search hit is clustered under
///
/// The key is the URL's host. When the string does not parse as an absolute
/// URL, or parses without a host, the literal string is the key.
///
/// # Examples
///
/// ```
/// use keyword_ripple::url::domain_key;
///
/// assert_eq!(domain_key("https://a.com/1"), "a.com");
/// assert_eq!(domain_key("/url?q=relative"), "/url?q=relative");
/// ```
pub fn domain_key(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| extract_domain(&parsed))
        .unwrap_or_else(|| url.to_string())
}
