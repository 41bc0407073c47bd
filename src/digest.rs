use std::fmt;

use md5::Md5;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::options::AvatarOptions;
use crate::types::IdentityKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestAlgorithm {
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// Length of the hex-encoded digest.
    pub fn hex_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 32,
            DigestAlgorithm::Sha256 => 64,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha256 => "sha256",
        })
    }
}

/// Email lookups hash with MD5 unless SHA-256 was requested; OpenID lookups
/// always hash with SHA-256.
pub fn select_algorithm(kind: IdentityKind, options: &AvatarOptions) -> DigestAlgorithm {
    match kind {
        IdentityKind::Email if options.use_sha256() => DigestAlgorithm::Sha256,
        IdentityKind::Email => DigestAlgorithm::Md5,
        IdentityKind::OpenId => DigestAlgorithm::Sha256,
    }
}

/// Lowercase hex digest of the UTF-8 bytes of `canonical`.
pub fn digest(canonical: &str, algorithm: DigestAlgorithm) -> String {
    match algorithm {
        DigestAlgorithm::Md5 => hex::encode(Md5::digest(canonical)),
        DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(canonical)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("test@example.com", DigestAlgorithm::Md5, "55502f40dc8b7c769880b10874abc9d0")]
    #[case(
        "test@example.com",
        DigestAlgorithm::Sha256,
        "973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b"
    )]
    #[case("", DigestAlgorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e")]
    #[case(
        "",
        DigestAlgorithm::Sha256,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    )]
    fn known_digests(
        #[case] canonical: &str,
        #[case] algorithm: DigestAlgorithm,
        #[case] expected: &str,
    ) {
        let hash = digest(canonical, algorithm);
        assert_eq!(hash, expected);
        assert_eq!(hash.len(), algorithm.hex_len());
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(
            digest("ünïcødé@example.com", DigestAlgorithm::Sha256),
            digest("ünïcødé@example.com", DigestAlgorithm::Sha256)
        );
    }

    #[rstest]
    #[case(IdentityKind::Email, false, DigestAlgorithm::Md5)]
    #[case(IdentityKind::Email, true, DigestAlgorithm::Sha256)]
    #[case(IdentityKind::OpenId, false, DigestAlgorithm::Sha256)]
    #[case(IdentityKind::OpenId, true, DigestAlgorithm::Sha256)]
    fn algorithm_selection(
        #[case] kind: IdentityKind,
        #[case] use_sha256: bool,
        #[case] expected: DigestAlgorithm,
    ) {
        let options = AvatarOptions::builder().use_sha256(use_sha256).build();
        assert_eq!(select_algorithm(kind, &options), expected);
    }
}
