use std::fmt::Write;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::error::{AvatarError, Result};
use crate::options::AvatarOptions;

/// Everything except the RFC 3986 unreserved characters.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Query parameters for a lookup, in the order they are emitted.
pub fn query_pairs(options: &AvatarOptions) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(2);
    if let Some(size) = options.size() {
        pairs.push(("s", size.to_string()));
    }
    if let Some(default_image) = options.default_image() {
        pairs.push(("d", default_image.to_string()));
    }
    pairs
}

/// Builds `base + hash[?query]`.
///
/// The base URI is used verbatim, so it must already end with `/` if the
/// hash is meant to be a separate path segment.
pub fn assemble(hash: &str, options: &AvatarOptions) -> Result<Url> {
    let mut uri = format!("{}{hash}", options.base_uri());
    for (i, (key, value)) in query_pairs(options).iter().enumerate() {
        let separator = if i == 0 { '?' } else { '&' };
        let value = utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET);
        // Writing into a String cannot fail.
        let _ = write!(uri, "{separator}{key}={value}");
    }
    Url::parse(&uri).map_err(|source| AvatarError::InvalidUri { uri, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HASH: &str = "55502f40dc8b7c769880b10874abc9d0";

    #[test]
    fn no_query_without_parameters() {
        let uri = assemble(HASH, &AvatarOptions::default()).unwrap();
        assert_eq!(
            uri.as_str(),
            "http://cdn.libravatar.org/avatar/55502f40dc8b7c769880b10874abc9d0"
        );
        assert_eq!(uri.query(), None);
    }

    #[test]
    fn size_precedes_default_image() {
        let options = AvatarOptions::builder()
            .default_image("identicon")
            .size(128)
            .build();
        assert_eq!(
            query_pairs(&options),
            vec![("s", "128".to_string()), ("d", "identicon".to_string())]
        );
        assert_eq!(
            assemble(HASH, &options).unwrap().query(),
            Some("s=128&d=identicon")
        );
    }

    #[test]
    fn both_parameters_in_full_uri() {
        let options = AvatarOptions::builder()
            .prefer_https(true)
            .size(512)
            .default_image("https://example.com/a b.png")
            .build();
        assert_eq!(
            assemble(HASH, &options).unwrap().as_str(),
            "https://seccdn.libravatar.org/avatar/55502f40dc8b7c769880b10874abc9d0\
             ?s=512&d=https%3A%2F%2Fexample.com%2Fa%20b.png"
        );
    }

    #[rstest]
    #[case(0, None)]
    #[case(1, Some("s=1"))]
    #[case(512, Some("s=512"))]
    #[case(513, None)]
    fn size_boundaries(#[case] pixels: i32, #[case] expected: Option<&str>) {
        let options = AvatarOptions::builder().size(pixels).build();
        assert_eq!(assemble(HASH, &options).unwrap().query(), expected);
    }

    #[rstest]
    #[case("http://example.com/a b.png", "d=http%3A%2F%2Fexample.com%2Fa%20b.png")]
    #[case("x&y=z", "d=x%26y%3Dz")]
    #[case("a+b~c_d-e.f", "d=a%2Bb~c_d-e.f")]
    #[case("ü", "d=%C3%BC")]
    fn default_image_is_percent_encoded(#[case] image: &str, #[case] expected: &str) {
        let options = AvatarOptions::builder().default_image(image).build();
        assert_eq!(assemble(HASH, &options).unwrap().query(), Some(expected));
    }

    #[test]
    fn base_uri_is_concatenated_verbatim() {
        let options = AvatarOptions::builder()
            .unsecure_base_uri("http://avatars.example.org/a")
            .build();
        assert_eq!(
            assemble(HASH, &options).unwrap().as_str(),
            "http://avatars.example.org/a55502f40dc8b7c769880b10874abc9d0"
        );
    }

    #[rstest]
    #[case("avatar/")]
    #[case("http://exa mple.org/avatar/")]
    #[case("")]
    fn invalid_base_uri(#[case] base_uri: &str) {
        let options = AvatarOptions::builder()
            .prefer_https(true)
            .secure_base_uri(base_uri)
            .build();
        let expected_uri = format!("{base_uri}{HASH}");
        let err = assemble(HASH, &options).unwrap_err();
        assert!(
            matches!(&err, AvatarError::InvalidUri { uri, .. } if *uri == expected_uri),
            "{err:?}"
        );
    }
}
