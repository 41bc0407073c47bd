use anyhow::{Context, Error, Result};
use configparser::ini::Ini;

use libravatar::AvatarOptionsBuilder;

const SECTION: &str = "avatar";

/// Settings read from the `[avatar]` section of an INI file. Every key is
/// optional; command-line flags take precedence.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub prefer_https: Option<bool>,
    pub use_sha256: Option<bool>,
    pub default_image: Option<String>,
    pub size: Option<i32>,
    pub unsecure_base_uri: Option<String>,
    pub secure_base_uri: Option<String>,
}

impl FileConfig {
    pub fn load(config_file: &str) -> Result<FileConfig> {
        let mut config = Ini::new();
        config.load(config_file).map_err(Error::msg)?;
        FileConfig::from_ini(&config)
    }

    #[cfg(test)]
    pub fn parse(contents: &str) -> Result<FileConfig> {
        let mut config = Ini::new();
        config.read(contents.to_string()).map_err(Error::msg)?;
        FileConfig::from_ini(&config)
    }

    fn from_ini(config: &Ini) -> Result<FileConfig> {
        let size = config
            .getint(SECTION, "size")
            .map_err(Error::msg)
            .with_context(|| "invalid size")?
            .map(|size| i32::try_from(size).unwrap_or(i32::MAX));
        Ok(FileConfig {
            prefer_https: config
                .getboolcoerce(SECTION, "prefer_https")
                .map_err(Error::msg)
                .with_context(|| "invalid prefer_https")?,
            use_sha256: config
                .getboolcoerce(SECTION, "use_sha256")
                .map_err(Error::msg)
                .with_context(|| "invalid use_sha256")?,
            default_image: config.get(SECTION, "default_image"),
            size,
            unsecure_base_uri: config.get(SECTION, "unsecure_base_uri"),
            secure_base_uri: config.get(SECTION, "secure_base_uri"),
        })
    }

    pub fn apply(self, mut builder: AvatarOptionsBuilder) -> AvatarOptionsBuilder {
        if let Some(prefer_https) = self.prefer_https {
            builder = builder.prefer_https(prefer_https);
        }
        if let Some(use_sha256) = self.use_sha256 {
            builder = builder.use_sha256(use_sha256);
        }
        if let Some(default_image) = self.default_image {
            builder = builder.default_image(default_image);
        }
        if let Some(size) = self.size {
            builder = builder.size(size);
        }
        if let Some(base_uri) = self.unsecure_base_uri {
            builder = builder.unsecure_base_uri(base_uri);
        }
        if let Some(base_uri) = self.secure_base_uri {
            builder = builder.secure_base_uri(base_uri);
        }
        builder
    }
}
