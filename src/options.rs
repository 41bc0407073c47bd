use std::fmt;

pub const DEFAULT_UNSECURE_BASE_URI: &str = "http://cdn.libravatar.org/avatar/";
pub const DEFAULT_SECURE_BASE_URI: &str = "https://seccdn.libravatar.org/avatar/";

/// Requested avatar edge length in pixels.
///
/// Only values the server accepts can be represented; anything outside
/// `MIN..=MAX` is treated as "let the server decide".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AvatarSize(u16);

impl AvatarSize {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 512;
    /// What the server renders when no size is sent.
    pub const SERVER_DEFAULT: i32 = 80;

    pub fn new(pixels: i32) -> Option<AvatarSize> {
        if (Self::MIN..=Self::MAX).contains(&pixels) {
            u16::try_from(pixels).ok().map(AvatarSize)
        } else {
            None
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Image the server falls back to when it has no avatar for a hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefaultImage {
    /// Respond with a 404 instead of an image.
    NotFound,
    /// Generic silhouette ("mystery man").
    MysteryMan,
    Identicon,
    MonsterId,
    Wavatar,
    Retro,
    /// Any other value, normally the URI of an image.
    Custom(String),
}

impl DefaultImage {
    pub fn as_str(&self) -> &str {
        match self {
            DefaultImage::NotFound => "404",
            DefaultImage::MysteryMan => "mm",
            DefaultImage::Identicon => "identicon",
            DefaultImage::MonsterId => "monsterid",
            DefaultImage::Wavatar => "wavatar",
            DefaultImage::Retro => "retro",
            DefaultImage::Custom(value) => value,
        }
    }
}

impl From<&str> for DefaultImage {
    fn from(value: &str) -> Self {
        match value {
            "404" => DefaultImage::NotFound,
            "mm" => DefaultImage::MysteryMan,
            "identicon" => DefaultImage::Identicon,
            "monsterid" => DefaultImage::MonsterId,
            "wavatar" => DefaultImage::Wavatar,
            "retro" => DefaultImage::Retro,
            _ => DefaultImage::Custom(value.to_string()),
        }
    }
}

impl From<String> for DefaultImage {
    fn from(value: String) -> Self {
        match DefaultImage::from(value.as_str()) {
            DefaultImage::Custom(_) => DefaultImage::Custom(value),
            magic => magic,
        }
    }
}

impl fmt::Display for DefaultImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarOptions {
    prefer_https: bool,
    use_sha256: bool,
    default_image: Option<DefaultImage>,
    size: Option<AvatarSize>,
    unsecure_base_uri: String,
    secure_base_uri: String,
}

impl AvatarOptions {
    pub fn builder() -> AvatarOptionsBuilder {
        AvatarOptionsBuilder::default()
    }

    pub fn prefer_https(&self) -> bool {
        self.prefer_https
    }

    /// Only consulted for email lookups; OpenID lookups always use SHA-256.
    pub fn use_sha256(&self) -> bool {
        self.use_sha256
    }

    pub fn default_image(&self) -> Option<&DefaultImage> {
        self.default_image.as_ref()
    }

    pub fn size(&self) -> Option<AvatarSize> {
        self.size
    }

    pub fn unsecure_base_uri(&self) -> &str {
        &self.unsecure_base_uri
    }

    pub fn secure_base_uri(&self) -> &str {
        &self.secure_base_uri
    }

    pub fn base_uri(&self) -> &str {
        if self.prefer_https {
            &self.secure_base_uri
        } else {
            &self.unsecure_base_uri
        }
    }
}

impl Default for AvatarOptions {
    fn default() -> Self {
        AvatarOptions::builder().build()
    }
}

#[derive(Clone, Debug)]
pub struct AvatarOptionsBuilder {
    prefer_https: bool,
    use_sha256: bool,
    default_image: Option<DefaultImage>,
    size: Option<AvatarSize>,
    unsecure_base_uri: String,
    secure_base_uri: String,
}

impl Default for AvatarOptionsBuilder {
    fn default() -> Self {
        AvatarOptionsBuilder {
            prefer_https: false,
            use_sha256: false,
            default_image: None,
            size: None,
            unsecure_base_uri: DEFAULT_UNSECURE_BASE_URI.to_string(),
            secure_base_uri: DEFAULT_SECURE_BASE_URI.to_string(),
        }
    }
}

impl AvatarOptionsBuilder {
    pub fn prefer_https(mut self, prefer_https: bool) -> Self {
        self.prefer_https = prefer_https;
        self
    }

    pub fn use_sha256(mut self, use_sha256: bool) -> Self {
        self.use_sha256 = use_sha256;
        self
    }

    pub fn default_image(mut self, default_image: impl Into<DefaultImage>) -> Self {
        self.default_image = Some(default_image.into());
        self
    }

    pub fn no_default_image(mut self) -> Self {
        self.default_image = None;
        self
    }

    /// Sizes outside [`AvatarSize::MIN`]..=[`AvatarSize::MAX`] leave the size unset.
    pub fn size(mut self, pixels: i32) -> Self {
        self.size = AvatarSize::new(pixels);
        if self.size.is_none() {
            tracing::debug!("ignoring out-of-range avatar size {pixels}");
        }
        self
    }

    pub fn no_size(mut self) -> Self {
        self.size = None;
        self
    }

    pub fn unsecure_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.unsecure_base_uri = base_uri.into();
        self
    }

    pub fn secure_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.secure_base_uri = base_uri.into();
        self
    }

    pub fn build(self) -> AvatarOptions {
        AvatarOptions {
            prefer_https: self.prefer_https,
            use_sha256: self.use_sha256,
            default_image: self.default_image,
            size: self.size,
            unsecure_base_uri: self.unsecure_base_uri,
            secure_base_uri: self.secure_base_uri,
        }
    }
}
