//! Pool listing endpoint and file URL validation
//!
//! Builds the request URL for a page of a pool, and checks that a file
//! URL returned by the API is safe to hand to downstream tooling.

use crate::error::{Error, Result};
use crate::types::{PageNumber, PoolId};
use url::Url;

/// Default pool listing endpoint
pub const DEFAULT_ENDPOINT: &str = "https://e621.net/pool/show.json";

/// Scheme prefix every file URL must carry
const SECURE_PREFIX: &str = "https://";

/// The pool listing endpoint of the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEndpoint {
    base: Url,
}

impl PoolEndpoint {
    /// Create an endpoint from a base URL string
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(Error::config(format!("endpoint '{base}' cannot carry a query")));
        }
        Ok(Self { base })
    }

    /// The base URL without query parameters
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL of one page of a pool's listing.
    ///
    /// The pool id is not checked against the server; an unknown pool is
    /// only discovered through the response.
    pub fn page_url(&self, pool: PoolId, page: PageNumber) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("id", &pool.to_string())
            .append_pair("page", &page.to_string());
        url
    }
}

/// Check that a file URL uses `https://` and parses as a URL.
///
/// The URL parser silently strips tabs and newlines and rewrites
/// backslashes, so those are rejected up front along with any other
/// whitespace or control character. The candidate is forwarded verbatim,
/// so it must be exactly what was checked.
pub fn validate_file_url(candidate: &str) -> Result<()> {
    let Some(rest) = candidate.strip_prefix(SECURE_PREFIX) else {
        return Err(Error::malformed_url(candidate));
    };
    if rest.starts_with('/')
        || candidate
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '\\')
    {
        return Err(Error::malformed_url(candidate));
    }
    match Url::parse(candidate) {
        Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => Ok(()),
        _ => Err(Error::malformed_url(candidate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use test_case::test_case;

    #[test]
    fn test_default_endpoint_page_url() {
        let endpoint = PoolEndpoint::new(DEFAULT_ENDPOINT).unwrap();
        let url = endpoint.page_url(PoolId::new(123), PageNumber::new(4));
        assert_eq!(
            url.as_str(),
            "https://e621.net/pool/show.json?id=123&page=4"
        );
    }

    #[test]
    fn test_custom_endpoint_keeps_path() {
        let endpoint = PoolEndpoint::new("http://127.0.0.1:8080/pool/show.json").unwrap();
        let url = endpoint.page_url(PoolId::new(7), PageNumber::FIRST);
        assert_eq!(url.path(), "/pool/show.json");
        assert_eq!(url.query(), Some("id=7&page=1"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = PoolEndpoint::new("not a url").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = PoolEndpoint::new("mailto:someone@example.com").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test_case("https://e621.net/data/x.jpg" ; "https file")]
    #[test_case("https://static1.e621.net/data/ab/cd/abcd.png?x=1" ; "with query")]
    fn test_validate_file_url_valid(input: &str) {
        assert!(validate_file_url(input).is_ok());
    }

    #[test_case("http://e621.net/x.jpg" ; "wrong scheme")]
    #[test_case("not a url" ; "not a url")]
    #[test_case("https://" ; "empty host")]
    #[test_case("HTTPS://e621.net/x.jpg" ; "uppercase scheme")]
    #[test_case("" ; "empty")]
    #[test_case("https://e621.net/x\nhttp://evil/y" ; "embedded newline")]
    #[test_case("https://e621.net/a b.jpg" ; "raw space")]
    #[test_case("https://e621.net/\tx" ; "embedded tab")]
    #[test_case("https:///x.jpg" ; "empty authority")]
    #[test_case("https://e621.net\\data\\x.jpg" ; "backslashes")]
    #[test_case("https://e621.net/x.jpg\r" ; "trailing carriage return")]
    fn test_validate_file_url_malformed(input: &str) {
        let err = validate_file_url(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedUrl);
    }
}
