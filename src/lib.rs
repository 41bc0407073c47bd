//! Libravatar avatar URIs for email addresses and OpenID URLs.
//!
//! An identity is canonicalized, hashed (MD5 or SHA-256) and appended to an
//! avatar server's base URI, optionally followed by size and default-image
//! query parameters. Nothing here touches the network.

#![forbid(unsafe_code)]

mod avatar;
mod canonical;
mod digest;
mod error;
mod options;
mod types;
mod uri;

pub use avatar::{
    from_email, from_email_with_options, from_openid, from_openid_with_options, lookup_hash,
};
pub use canonical::{canonicalize_email, canonicalize_openid};
pub use digest::{digest, select_algorithm, DigestAlgorithm};
pub use error::{AvatarError, Result};
pub use options::{
    AvatarOptions, AvatarOptionsBuilder, AvatarSize, DefaultImage, DEFAULT_SECURE_BASE_URI,
    DEFAULT_UNSECURE_BASE_URI,
};
pub use types::IdentityKind;
pub use uri::{assemble, query_pairs};
pub use url::Url;
