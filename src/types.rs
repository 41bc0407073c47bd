use serde::Serialize;

/// Which kind of identity an avatar lookup was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    Email,
    OpenId,
}
