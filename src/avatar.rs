use url::Url;

use crate::canonical::{canonicalize_email, canonicalize_openid};
use crate::digest::{digest, select_algorithm};
use crate::error::Result;
use crate::options::AvatarOptions;
use crate::types::IdentityKind;
use crate::uri::assemble;

/// Hex digest that identifies `identity` on an avatar server.
pub fn lookup_hash(
    kind: IdentityKind,
    identity: &str,
    options: &AvatarOptions,
) -> Result<String> {
    let canonical = match kind {
        IdentityKind::Email => canonicalize_email(identity),
        IdentityKind::OpenId => canonicalize_openid(identity)?,
    };
    Ok(digest(&canonical, select_algorithm(kind, options)))
}

fn avatar_uri(kind: IdentityKind, identity: &str, options: &AvatarOptions) -> Result<Url> {
    let hash = lookup_hash(kind, identity, options)?;
    let uri = assemble(&hash, options)?;
    tracing::debug!(
        "{kind:?} avatar lookup: algorithm={} uri={uri}",
        select_algorithm(kind, options)
    );
    Ok(uri)
}

pub fn from_email(email: &str) -> Result<Url> {
    from_email_with_options(email, &AvatarOptions::default())
}

pub fn from_email_with_options(email: &str, options: &AvatarOptions) -> Result<Url> {
    avatar_uri(IdentityKind::Email, email, options)
}

pub fn from_openid(openid: &str) -> Result<Url> {
    from_openid_with_options(openid, &AvatarOptions::default())
}

/// `options.use_sha256()` is ignored: OpenID lookups always use SHA-256.
pub fn from_openid_with_options(openid: &str, options: &AvatarOptions) -> Result<Url> {
    avatar_uri(IdentityKind::OpenId, openid, options)
}
