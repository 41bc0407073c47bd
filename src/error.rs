use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("malformed OpenID identity {identity:?}")]
    MalformedIdentity {
        identity: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid avatar URI {uri:?}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T, E = AvatarError> = std::result::Result<T, E>;
