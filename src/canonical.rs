use url::Url;

use crate::error::{AvatarError, Result};

/// Canonical form of an email address: the whole string lowercased.
///
/// Each character is mapped on its own with `char::to_lowercase`, so there is
/// no locale or context sensitivity (a final `Σ` still becomes `σ`). No
/// trimming or syntax checking.
pub fn canonicalize_email(email: &str) -> String {
    email.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercases ASCII letters of a host, leaving `%XX` escapes as written.
fn lowercase_host(host: &str) -> String {
    let mut lowered = String::with_capacity(host.len());
    let mut escape_digits = 0;
    for c in host.chars() {
        if escape_digits > 0 {
            escape_digits -= 1;
            lowered.push(c);
        } else if c == '%' {
            escape_digits = 2;
            lowered.push(c);
        } else {
            lowered.push(c.to_ascii_lowercase());
        }
    }
    lowered
}

/// Canonical form of an OpenID URL: scheme and host lowercased, everything
/// else kept, serialized the way [`Url`] serializes it.
pub fn canonicalize_openid(openid: &str) -> Result<String> {
    let malformed = |source| AvatarError::MalformedIdentity {
        identity: openid.to_string(),
        source,
    };

    // The parser lowercases the scheme, and the host of special schemes.
    let mut url = Url::parse(openid).map_err(malformed)?;
    let lowered_host = url
        .host_str()
        .map(lowercase_host)
        .filter(|lowered| Some(lowered.as_str()) != url.host_str());
    if let Some(host) = lowered_host {
        url.set_host(Some(&host)).map_err(malformed)?;
    }
    Ok(url.into())
}
