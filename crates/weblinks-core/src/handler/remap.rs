//! Loopback remapping for proxied workspaces.
//!
//! A workspace served at `https://3000-workspace123.example.dev` exposes
//! its local port 5173 at `https://5173-workspace123.example.dev`. Links to
//! `localhost:5173` printed inside that workspace are rewritten accordingly.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::errors::InvocationError;

/// Hostnames treated as "this machine".
pub const LOOPBACK_HOSTNAMES: [&str; 3] = ["0.0.0.0", "localhost", "127.0.0.1"];

static PORT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,5}-").expect("port prefix regex is valid"));

pub fn is_loopback(uri: &Url) -> bool {
    uri.host_str()
        .is_some_and(|host| LOOPBACK_HOSTNAMES.contains(&host))
}

/// The page's hostname without its leading `<port>-` label.
pub fn public_host(location: &Url) -> Option<String> {
    let host = location.host_str()?;
    Some(PORT_PREFIX.replace(host, "").into_owned())
}

/// Rewrite a loopback URI to `https://<port>-<public host>`, keeping path,
/// query, and fragment. A URI without an explicit port uses its scheme's
/// default port for the label.
pub fn rewrite_loopback(uri: &Url, location: &Url) -> Result<Url, InvocationError> {
    let rewrite_failed = |message: &str| InvocationError::RewriteFailed {
        uri: uri.to_string(),
        message: message.to_string(),
    };

    let host = public_host(location).ok_or_else(|| rewrite_failed("page location has no host"))?;
    let port = uri
        .port_or_known_default()
        .ok_or_else(|| rewrite_failed("link has no port"))?;

    let mut rewritten = uri.clone();
    rewritten
        .set_port(None)
        .map_err(|()| rewrite_failed("cannot clear port"))?;
    rewritten
        .set_scheme("https")
        .map_err(|()| rewrite_failed("cannot switch scheme to https"))?;
    rewritten
        .set_host(Some(&format!("{port}-{host}")))
        .map_err(|e| rewrite_failed(&e.to_string()))?;

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_loopback_aliases() {
        assert!(is_loopback(&url("http://localhost:3000")));
        assert!(is_loopback(&url("http://127.0.0.1:3000")));
        assert!(is_loopback(&url("http://0.0.0.0:8080/x")));
        assert!(is_loopback(&url("http://LOCALHOST:1")));
        assert!(!is_loopback(&url("http://example.org")));
        assert!(!is_loopback(&url("http://127.0.0.2")));
    }

    #[test]
    fn test_public_host_strips_port_label() {
        let location = url("https://3000-workspace123.example.dev/");
        assert_eq!(
            public_host(&location).as_deref(),
            Some("workspace123.example.dev")
        );
    }

    #[test]
    fn test_public_host_only_strips_leading_label() {
        let location = url("https://workspace-8080-x.example.dev/");
        assert_eq!(
            public_host(&location).as_deref(),
            Some("workspace-8080-x.example.dev")
        );
    }

    #[test]
    fn test_rewrite_loopback() {
        let rewritten = rewrite_loopback(
            &url("http://127.0.0.1:3000"),
            &url("https://3000-workspace123.example.dev/"),
        )
        .unwrap();
        assert_eq!(rewritten.as_str(), "https://3000-workspace123.example.dev/");
        assert_eq!(rewritten.port(), None);
    }

    #[test]
    fn test_rewrite_keeps_path_query_fragment() {
        let rewritten = rewrite_loopback(
            &url("http://localhost:5173/app/index.html?debug=1#main"),
            &url("https://3000-ws.example.dev/terminal"),
        )
        .unwrap();
        assert_eq!(
            rewritten.as_str(),
            "https://5173-ws.example.dev/app/index.html?debug=1#main"
        );
    }

    #[test]
    fn test_rewrite_without_explicit_port_uses_default() {
        let rewritten =
            rewrite_loopback(&url("http://localhost/"), &url("https://3000-ws.example.dev/"))
                .unwrap();
        assert_eq!(rewritten.as_str(), "https://80-ws.example.dev/");
    }
}
