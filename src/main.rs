#![forbid(unsafe_code)]

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use libravatar::{lookup_hash, select_algorithm, AvatarOptions, IdentityKind};

use crate::config::FileConfig;
use crate::report::LookupReport;

#[derive(Parser)]
#[command(about = "Print the Libravatar URI for an email address or OpenID URL")]
struct Cli {
    #[command(subcommand)]
    identity: Identity,
    /// INI file with an [avatar] section
    #[arg(long, global = true)]
    config: Option<String>,
    #[arg(long, global = true)]
    https: bool,
    /// Hash email addresses with SHA-256 instead of MD5
    #[arg(long, global = true)]
    sha256: bool,
    /// Avatar size in pixels (1-512)
    #[arg(long, global = true, allow_negative_numbers = true)]
    size: Option<i32>,
    /// Default image URI, or one of 404, mm, identicon, monsterid, wavatar, retro
    #[arg(long = "default", global = true)]
    default_image: Option<String>,
    #[arg(long, global = true)]
    base_uri: Option<String>,
    #[arg(long, global = true)]
    secure_base_uri: Option<String>,
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Identity {
    Email { address: String },
    Openid { url: String },
}

impl Cli {
    fn options(&self) -> Result<AvatarOptions> {
        let mut builder = AvatarOptions::builder();
        if let Some(config_file) = &self.config {
            builder = FileConfig::load(config_file)
                .with_context(|| format!("failed to load config from {config_file}"))?
                .apply(builder);
        }
        if self.https {
            builder = builder.prefer_https(true);
        }
        if self.sha256 {
            builder = builder.use_sha256(true);
        }
        if let Some(size) = self.size {
            builder = builder.size(size);
        }
        if let Some(default_image) = &self.default_image {
            builder = builder.default_image(default_image.as_str());
        }
        if let Some(base_uri) = &self.base_uri {
            builder = builder.unsecure_base_uri(base_uri);
        }
        if let Some(base_uri) = &self.secure_base_uri {
            builder = builder.secure_base_uri(base_uri);
        }
        Ok(builder.build())
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = args.options()?;
    let (kind, identity) = match &args.identity {
        Identity::Email { address } => (IdentityKind::Email, address.as_str()),
        Identity::Openid { url } => (IdentityKind::OpenId, url.as_str()),
    };

    let hash = lookup_hash(kind, identity, &options)
        .with_context(|| format!("failed to hash {kind:?} identity"))?;
    let uri = libravatar::assemble(&hash, &options)
        .with_context(|| "failed to build avatar URI")?;

    if args.json {
        let report = LookupReport {
            identity_kind: kind,
            algorithm: select_algorithm(kind, &options),
            hash: &hash,
            uri: uri.as_str(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{uri}");
    }
    Ok(())
}
