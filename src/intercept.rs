//! Download interception helpers.
//!
//! Decides whether a browser download is an RIS citation file from a target
//! publisher, and checks the fetched payload before it is converted. The
//! browser glue itself (cancelling the download, fetching the URL, showing
//! the result) stays with the caller.
//!
//! # Example
//!
//! ```
//! use ris2bib::intercept::{Download, Interceptor};
//!
//! let download = Download::new("https://www.nature.com/articles/s41586-024-00000-0.ris")
//!     .with_filename("s41586-024-00000-0.ris");
//!
//! let interceptor = Interceptor::new();
//! assert!(interceptor.should_intercept(&download));
//!
//! let bibtex = interceptor
//!     .convert_payload(b"AU  - Smith, John\nPY  - 2021\nTI  - A Study\n".to_vec())
//!     .unwrap();
//! assert!(bibtex.starts_with("@article{Smith2021Study,"));
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bibtex::BibtexConverter;
use crate::{Error, Result};

/// MIME type publishers use for RIS downloads.
pub const RIS_MIME: &str = "application/x-research-info-systems";

/// Byte order mark some publishers prepend to exports.
const BOM: char = '\u{feff}';

/// Default publisher domains whose downloads are intercepted.
const DEFAULT_DOMAINS: &[&str] = &["nature.com", "springer.com"];

/// Default domains accepted in the referrer of a download.
const DEFAULT_REFERRER_DOMAINS: &[&str] = &["nature.com"];

/// Metadata of a browser download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub url: String,
    pub referrer: String,
    pub filename: String,
    pub mime: String,
}

impl Download {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_referrer(mut self, referrer: &str) -> Self {
        self.referrer = referrer.to_string();
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }

    #[must_use]
    pub fn with_mime(mut self, mime: &str) -> Self {
        self.mime = mime.to_string();
        self
    }

    /// Check if the download looks like an RIS file, by extension, MIME type
    /// or a `format=refman` export URL.
    pub fn is_ris(&self) -> bool {
        self.filename.ends_with(".ris")
            || self.mime == RIS_MIME
            || self.url.contains("format=refman")
    }
}

/// Configuration for download interception.
///
/// # Examples
///
/// ```
/// use ris2bib::intercept::InterceptConfig;
///
/// let mut config = InterceptConfig::new();
/// config.set_domains(vec!["nature.com".to_string(), "biomedcentral.com".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptConfig {
    /// Domains matched against the download URL
    domains: Vec<String>,
    /// Domains matched against the download referrer
    referrer_domains: Vec<String>,
}

impl Default for InterceptConfig {
    fn default() -> Self {
        Self {
            domains: DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect(),
            referrer_domains: DEFAULT_REFERRER_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl InterceptConfig {
    /// Creates a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the domains matched against the download URL
    pub fn set_domains(&mut self, domains: Vec<String>) -> &mut Self {
        self.domains = domains;
        self
    }

    /// Sets the domains matched against the download referrer
    pub fn set_referrer_domains(&mut self, domains: Vec<String>) -> &mut Self {
        self.referrer_domains = domains;
        self
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn referrer_domains(&self) -> &[String] {
        &self.referrer_domains
    }
}

/// Classifies downloads and converts accepted payloads.
#[derive(Debug, Clone, Default)]
pub struct Interceptor {
    config: InterceptConfig,
    converter: BibtexConverter,
}

impl Interceptor {
    /// Creates a new interceptor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: InterceptConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_converter(mut self, converter: BibtexConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Check if the download comes from one of the configured publishers.
    pub fn is_target_domain(&self, download: &Download) -> bool {
        self.config
            .domains
            .iter()
            .any(|domain| download.url.contains(domain.as_str()))
            || self
                .config
                .referrer_domains
                .iter()
                .any(|domain| download.referrer.contains(domain.as_str()))
    }

    /// Check if the download should be cancelled and converted instead.
    pub fn should_intercept(&self, download: &Download) -> bool {
        let intercept = self.is_target_domain(download) && download.is_ris();
        debug!("download '{}' intercepted: {intercept}", download.url);
        intercept
    }

    /// Decode a fetched payload, rejecting anything that is not RIS text.
    ///
    /// A leading byte order mark is dropped. Blank payloads are rejected
    /// instead of being converted into an entry with only a fallback key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] for invalid UTF-8, [`Error::EmptyPayload`]
    /// for blank payloads and [`Error::HtmlPayload`] for HTML pages such as
    /// login walls.
    pub fn accept_payload(&self, bytes: Vec<u8>) -> Result<String> {
        let mut text = String::from_utf8(bytes)?;
        if text.starts_with(BOM) {
            text.drain(..BOM.len_utf8());
        }
        if text.trim().is_empty() {
            return Err(Error::EmptyPayload);
        }
        if looks_like_html(&text) {
            return Err(Error::HtmlPayload);
        }
        Ok(text)
    }

    /// Decode a fetched payload and convert it to BibTeX.
    ///
    /// # Errors
    ///
    /// See [`Interceptor::accept_payload`].
    pub fn convert_payload(&self, bytes: Vec<u8>) -> Result<String> {
        let text = self.accept_payload(bytes)?;
        Ok(self.converter.convert(&text))
    }
}

/// Check if a payload is an HTML page rather than citation data.
pub fn looks_like_html(text: &str) -> bool {
    text.trim().starts_with("<!DOCTYPE") || text.contains("<html")
}
