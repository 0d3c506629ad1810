//! `runbook://kubernetes/<slug>` resource identifiers.

use runbooks_core::Error;
use url::Url;

pub const SCHEME: &str = "runbook";
pub const AUTHORITY: &str = "kubernetes";

/// A validated runbook resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunbookUri {
    pub slug: String,
}

impl RunbookUri {
    /// Parse and validate a resource URI.
    ///
    /// The scheme must be `runbook`, the authority `kubernetes`, and the path
    /// must name a slug.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let url = Url::parse(input).map_err(|e| Error::InvalidUri(format!("{}: {}", input, e)))?;

        if url.scheme() != SCHEME {
            return Err(Error::InvalidUri(format!("Unsupported URI scheme: {}", url.scheme())));
        }

        if url.host_str() != Some(AUTHORITY) {
            return Err(Error::InvalidUri(format!("expected {} host: {}", AUTHORITY, input)));
        }

        let slug = url.path().trim_start_matches('/');
        if slug.is_empty() {
            return Err(Error::InvalidUri(format!("no slug provided: {}", input)));
        }

        Ok(Self { slug: slug.to_string() })
    }

    /// URI for a slug, as advertised in resource listings.
    pub fn format(slug: &str) -> String {
        format!("{}://{}/{}", SCHEME, AUTHORITY, slug)
    }
}
