//! Domain and web generators
//!
//! This module provides generators for:
//! - Domain names and domain suffixes
//! - Websites with an optional `www.` prefix
//! - URLs with lowercase path segments
//! - HTTP methods
//!
//! Words come from the supplied [`Lexicon`], so custom word lists change the
//! output without touching the recipes.

use fauxgen::{
    CharPool, Generator, IntRange, Lexicon, LexiconCategory, RandomSource, Result, padded_number,
    random_choice, random_int, random_word,
};

/// Prefixes a website picks from with equal odds
pub const WEB_PREFIXES: &[&str] = &["www.", ""];
/// URL schemes, picked with equal odds
pub const URL_SCHEMES: &[&str] = &["http", "https"];
/// Fewest path segments in a URL
pub const URL_MIN_SEGMENTS: i64 = 1;
/// Most path segments in a URL
pub const URL_MAX_SEGMENTS: i64 = 4;

/// Start of the numeric part of a domain name, inclusive
const DOMAIN_NUMBER_START: i64 = 10;
/// End of the numeric part of a domain name, exclusive
const DOMAIN_NUMBER_END: i64 = 3000;
const DOMAIN_NUMBER_WIDTH: usize = 4;

// ============================================================================
// Domain Suffix Generator
// ============================================================================

/// Generator for top level domain suffixes such as `com` or `org`
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainSuffixGenerator;

impl Generator<String> for DomainSuffixGenerator {
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<String> {
        random_word(source, lexicon, &LexiconCategory::DOMAIN_SUFFIX)
    }
}

// ============================================================================
// Domain Name Generator
// ============================================================================

/// Generator for domain names such as `Emma0412.net`.
///
/// A first name, a number in `[10, 3000)` zero-padded to four digits, a dot
/// and a domain suffix, drawn in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainNameGenerator;

impl Generator<String> for DomainNameGenerator {
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<String> {
        let name = random_word(source, lexicon, &LexiconCategory::FIRST_NAME)?;
        let number = padded_number(
            source,
            IntRange::half_open(DOMAIN_NUMBER_START, DOMAIN_NUMBER_END)?,
            DOMAIN_NUMBER_WIDTH,
        );
        let suffix = DomainSuffixGenerator.generate(source, lexicon)?;
        Ok(format!("{}{}.{}", name, number, suffix))
    }
}

// ============================================================================
// Website Generator
// ============================================================================

/// Generator for websites: a domain name, half of the time behind `www.`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSiteGenerator;

impl Generator<String> for WebSiteGenerator {
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<String> {
        let prefix = random_choice(source, &CharPool::from_tokens(WEB_PREFIXES))?;
        let domain = DomainNameGenerator.generate(source, lexicon)?;
        Ok(format!("{}{}", prefix, domain))
    }
}

// ============================================================================
// URL Generator
// ============================================================================

/// Generator for URLs such as `https://www.Liam0098.org/leverage/e-markets`.
///
/// Path segments are words from the `company.bs` category, lowercased. The
/// segment count is uniform in `[1, 4]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlGenerator;

impl UrlGenerator {
    /// Turn a lexicon word into a lowercase path segment.
    ///
    /// Whitespace and `/` become `-` so a multi-word entry stays one segment.
    pub fn path_segment(word: &str) -> String {
        word.chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c.is_whitespace() || c == '/' { '-' } else { c })
            .collect()
    }
}

impl Generator<String> for UrlGenerator {
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<String> {
        let scheme = random_choice(source, &CharPool::from_tokens(URL_SCHEMES))?;
        let website = WebSiteGenerator.generate(source, lexicon)?;

        let count = random_int(source, URL_MIN_SEGMENTS, URL_MAX_SEGMENTS)?;
        let mut segments = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let word = random_word(source, lexicon, &LexiconCategory::BS)?;
            segments.push(Self::path_segment(&word));
        }

        Ok(format!("{}://{}/{}", scheme, website, segments.join("/")))
    }
}

// ============================================================================
// HTTP Method Generator
// ============================================================================

/// Generator for HTTP request methods
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpMethodGenerator;

impl Generator<String> for HttpMethodGenerator {
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<String> {
        random_word(source, lexicon, &LexiconCategory::HTTP_METHOD)
    }
}
