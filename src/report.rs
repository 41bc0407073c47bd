use serde::Serialize;

use libravatar::{DigestAlgorithm, IdentityKind};

/// Machine-readable description of one lookup, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    pub identity_kind: IdentityKind,
    pub algorithm: DigestAlgorithm,
    pub hash: &'a str,
    pub uri: &'a str,
}
