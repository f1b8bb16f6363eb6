use url::Url;

/// Errors raised while deriving the push endpoint from the page address.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// The configured page address is not a valid URL.
    #[error("invalid page url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The page is served over something other than HTTP(S).
    #[error("unsupported page scheme `{0}`")]
    UnsupportedScheme(String),
    /// The page address has no host to connect to.
    #[error("page url has no host")]
    MissingHost,
}

/// Builds the push endpoint for a page served at `page_url`.
///
/// The endpoint keeps the page's host and port, mirrors its security level
/// (`http` -> `ws`, `https` -> `wss`) and uses the fixed `path`. The page's
/// own path, query, and fragment are discarded.
pub fn derive_endpoint(page_url: &str, path: &str) -> Result<Url, EndpointError> {
    let page = Url::parse(page_url)?;
    let scheme = match page.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(EndpointError::UnsupportedScheme(other.to_owned())),
    };
    let host = page.host_str().ok_or(EndpointError::MissingHost)?;

    let authority = match page.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    };
    let path = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };

    Ok(Url::parse(&format!("{scheme}://{authority}{path}"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "/ws/notifications/";

    #[test]
    fn secure_page_uses_wss() {
        let endpoint = derive_endpoint("https://panel.example.edu/admin/core/?q=1", PATH).unwrap();
        assert_eq!(endpoint.as_str(), "wss://panel.example.edu/ws/notifications/");
    }

    #[test]
    fn plain_page_keeps_port() {
        let endpoint = derive_endpoint("http://localhost:8000/panel/", PATH).unwrap();
        assert_eq!(endpoint.as_str(), "ws://localhost:8000/ws/notifications/");
    }

    #[test]
    fn path_without_leading_slash() {
        let endpoint = derive_endpoint("https://example.org", "ws/notifications/").unwrap();
        assert_eq!(endpoint.as_str(), "wss://example.org/ws/notifications/");
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(matches!(
            derive_endpoint("ftp://example.org/", PATH),
            Err(EndpointError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
        assert!(matches!(
            derive_endpoint("not a url", PATH),
            Err(EndpointError::InvalidUrl(_))
        ));
    }
}
