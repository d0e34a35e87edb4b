//! Deterministic short alias derivation.
//!
//! A short URL is the configured base URL followed by the first
//! `code_length` characters of the URL-safe, unpadded base64 encoding of the
//! SHA-256 digest of the original URL. The same input always yields the same
//! alias; different inputs may collide, which is accepted.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Default base URL prepended to every derived code.
pub const DEFAULT_BASE_URL: &str = "https://myservicedomain.de/";

/// Default number of characters kept from the encoded digest.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Length of a SHA-256 digest encoded as unpadded base64.
pub const MAX_CODE_LENGTH: usize = 43;

/// Settings for alias derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConfig {
    pub base_url: String,
    pub code_length: usize,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

/// Derives short URLs from original URLs.
///
/// # Examples
///
/// ```
/// use url_directory::utils::alias::{AliasConfig, AliasGenerator};
///
/// let generator = AliasGenerator::new(AliasConfig::default());
/// assert_eq!(
///     generator.short_url("https://www.google.com"),
///     "https://myservicedomain.de/rGu2ae"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AliasGenerator {
    config: AliasConfig,
}

impl AliasGenerator {
    /// Creates a generator.
    ///
    /// `code_length` is clamped to [`MAX_CODE_LENGTH`]; out-of-range values are
    /// rejected earlier by [`crate::config::Config::validate`].
    pub fn new(config: AliasConfig) -> Self {
        Self { config }
    }

    /// Returns the short code for `original_url`, without the base URL.
    pub fn code(&self, original_url: &str) -> String {
        let digest = Sha256::digest(original_url.as_bytes());
        let mut encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);
        encoded.truncate(self.config.code_length.min(MAX_CODE_LENGTH));
        encoded
    }

    /// Returns the full short URL for `original_url`.
    pub fn short_url(&self, original_url: &str) -> String {
        format!("{}{}", self.config.base_url, self.code(original_url))
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self::new(AliasConfig::default())
    }
}
