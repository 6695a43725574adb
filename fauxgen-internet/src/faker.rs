//! Call surface for the internet generators.
//!
//! [`Faker`] binds a random source and a lexicon once and exposes one method
//! per generator. The free functions at the bottom of this module use the
//! thread-local RNG with the builtin lexicon for one-off values.

use fauxgen::{
    BuiltinLexicon, GeneratorConfig, Generator, LayeredLexicon, Lexicon, MapLexicon, RandomSource,
    Result, RngSource,
};
use rand::rngs::StdRng;

use crate::generators::domain::{
    DomainNameGenerator, DomainSuffixGenerator, HttpMethodGenerator, UrlGenerator,
    WebSiteGenerator,
};
use crate::generators::hardware::{MacAddressGenerator, MeidGenerator};
use crate::generators::network::IpAddressGenerator;
use crate::generators::text::{PasswordGenerator, UserNameGenerator};

/// A random source paired with a lexicon
#[derive(Debug, Clone)]
pub struct Faker<S = RngSource<StdRng>, L = BuiltinLexicon> {
    source: S,
    lexicon: L,
}

impl Faker {
    /// Reproducible faker over the builtin lexicon
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed), BuiltinLexicon)
    }

    /// Faker seeded from OS entropy over the builtin lexicon
    pub fn from_entropy() -> Self {
        Self::new(RngSource::from_entropy(), BuiltinLexicon)
    }
}

impl Faker<RngSource<StdRng>, LayeredLexicon<MapLexicon, BuiltinLexicon>> {
    /// Build source and lexicon from configuration.
    ///
    /// Fails if the configuration is invalid or the lexicon file cannot be
    /// loaded.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.source(), config.lexicon()?))
    }
}

impl<S: RandomSource, L: Lexicon> Faker<S, L> {
    /// Pair an explicit source with a lexicon
    pub fn new(source: S, lexicon: L) -> Self {
        Self { source, lexicon }
    }

    /// The lexicon words are resolved through
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Mutable access to the random source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Run any generator against this faker's source and lexicon
    pub fn generate<T, G>(&mut self, generator: &G) -> Result<T>
    where
        G: Generator<T> + ?Sized,
    {
        generator.generate(&mut self.source, &self.lexicon)
    }

    /// A domain name such as `Emma0412.net`
    pub fn domain_name(&mut self) -> Result<String> {
        self.generate(&DomainNameGenerator)
    }

    /// A domain suffix such as `org`
    pub fn domain_suffix(&mut self) -> Result<String> {
        self.generate(&DomainSuffixGenerator)
    }

    /// A domain name, half of the time prefixed with `www.`
    pub fn web_site(&mut self) -> Result<String> {
        self.generate(&WebSiteGenerator)
    }

    /// A URL with one to four lowercase path segments
    pub fn url(&mut self) -> Result<String> {
        self.generate(&UrlGenerator)
    }

    /// An HTTP method such as `GET`
    pub fn http_method(&mut self) -> Result<String> {
        self.generate(&HttpMethodGenerator)
    }

    /// A dotted-quad IPv4 address
    pub fn ipv4_address(&mut self) -> Result<String> {
        self.generate(&IpAddressGenerator::V4)
    }

    /// An IPv6 address under `2001:cafe:`
    pub fn ipv6_address(&mut self) -> Result<String> {
        self.generate(&IpAddressGenerator::V6)
    }

    /// A MAC address with the given separator and case
    pub fn mac_address(&mut self, separator: &str, uppercase: bool) -> Result<String> {
        self.generate(&MacAddressGenerator::new(separator, uppercase))
    }

    /// A MAC address with random separator and case
    pub fn random_mac_address(&mut self) -> Result<String> {
        self.generate(&MacAddressGenerator::random())
    }

    /// A 14-digit MEID
    pub fn meid(&mut self, uppercase: bool) -> Result<String> {
        self.generate(&MeidGenerator::new(uppercase))
    }

    /// A 14-digit MEID in random case
    pub fn random_meid(&mut self) -> Result<String> {
        self.generate(&MeidGenerator::random())
    }

    /// A username such as `Walker4821`
    pub fn user_name(&mut self) -> Result<String> {
        self.generate(&UserNameGenerator)
    }

    /// A password of `length` characters from the selected classes
    pub fn password(
        &mut self,
        lower: bool,
        upper: bool,
        numeric: bool,
        special: bool,
        space: bool,
        length: usize,
    ) -> Result<String> {
        self.generate(&PasswordGenerator::new(
            lower, upper, numeric, special, space, length,
        ))
    }
}

// ============================================================================
// Free functions
// ============================================================================

fn with_thread_rng<G: Generator<String>>(generator: G) -> Result<String> {
    let mut source = RngSource::new(rand::thread_rng());
    generator.generate(&mut source, &BuiltinLexicon)
}

/// A domain name such as `Emma0412.net`
pub fn domain_name() -> Result<String> {
    with_thread_rng(DomainNameGenerator)
}

/// A domain suffix such as `org`
pub fn domain_suffix() -> Result<String> {
    with_thread_rng(DomainSuffixGenerator)
}

/// A domain name, half of the time prefixed with `www.`
pub fn web_site() -> Result<String> {
    with_thread_rng(WebSiteGenerator)
}

/// A URL with one to four lowercase path segments
pub fn url() -> Result<String> {
    with_thread_rng(UrlGenerator)
}

/// An HTTP method such as `GET`
pub fn http_method() -> Result<String> {
    with_thread_rng(HttpMethodGenerator)
}

/// A dotted-quad IPv4 address, each octet in `[2, 255]`
pub fn ipv4_address() -> Result<String> {
    with_thread_rng(IpAddressGenerator::V4)
}

/// An IPv6 address under `2001:cafe:`
pub fn ipv6_address() -> Result<String> {
    with_thread_rng(IpAddressGenerator::V6)
}

/// A MAC address with the given separator and case
pub fn mac_address(separator: &str, uppercase: bool) -> Result<String> {
    with_thread_rng(MacAddressGenerator::new(separator, uppercase))
}

/// A MAC address with random separator and case
pub fn random_mac_address() -> Result<String> {
    with_thread_rng(MacAddressGenerator::random())
}

/// A 14-digit MEID; `uppercase` selects `A-F` over `a-f`
pub fn meid(uppercase: bool) -> Result<String> {
    with_thread_rng(MeidGenerator::new(uppercase))
}

/// A 14-digit MEID in random case
pub fn random_meid() -> Result<String> {
    with_thread_rng(MeidGenerator::random())
}

/// A username such as `Walker4821`
pub fn user_name() -> Result<String> {
    with_thread_rng(UserNameGenerator)
}

/// A password of `length` characters; no selected class means lowercase and digits
pub fn password(
    lower: bool,
    upper: bool,
    numeric: bool,
    special: bool,
    space: bool,
    length: usize,
) -> Result<String> {
    with_thread_rng(PasswordGenerator::new(
        lower, upper, numeric, special, space, length,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxgen::{LexiconCategory, SequenceSource};
    use std::io::Write;

    #[test]
    fn test_seeded_faker_is_reproducible() {
        let mut left = Faker::seeded(21);
        let mut right = Faker::seeded(21);

        assert_eq!(left.url().unwrap(), right.url().unwrap());
        assert_eq!(
            left.random_mac_address().unwrap(),
            right.random_mac_address().unwrap()
        );
        assert_eq!(left.user_name().unwrap(), right.user_name().unwrap());
        assert_eq!(
            left.password(true, true, true, true, false, 16).unwrap(),
            right.password(true, true, true, true, false, 16).unwrap()
        );
    }

    #[test]
    fn test_faker_with_sequence_source() {
        let mut faker = Faker::new(SequenceSource::new(vec![0, 253, 8, 1]), BuiltinLexicon);
        assert_eq!(faker.ipv4_address().unwrap(), "2.255.10.3");
        assert_eq!(faker.source_mut().draws(), 4);
    }

    #[test]
    fn test_faker_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "person": {{ "lastname": ["Nakamura"] }} }}"#).unwrap();

        let config = GeneratorConfig {
            seed: Some(3),
            lexicon_path: Some(file.path().to_path_buf()),
            ..GeneratorConfig::default()
        };
        let mut faker = Faker::from_config(&config).unwrap();

        assert!(faker.user_name().unwrap().starts_with("Nakamura"));
        assert!(
            faker
                .lexicon()
                .entries(&LexiconCategory::DOMAIN_SUFFIX)
                .is_some()
        );
        assert!(faker.domain_name().is_ok());
    }

    #[test]
    fn test_faker_from_config_missing_file() {
        let config = GeneratorConfig {
            lexicon_path: Some("/nonexistent/lexicon.json".into()),
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            Faker::from_config(&config),
            Err(fauxgen::FauxError::LexiconIo { .. })
        ));
    }

    #[test]
    fn test_free_functions() {
        assert!(domain_name().unwrap().contains('.'));
        assert!(!domain_suffix().unwrap().is_empty());
        assert!(web_site().unwrap().contains('.'));
        assert!(url().unwrap().contains("://"));
        assert!(!http_method().unwrap().is_empty());
        assert_eq!(ipv4_address().unwrap().split('.').count(), 4);
        assert!(ipv6_address().unwrap().starts_with("2001:cafe:"));
        assert_eq!(mac_address("-", true).unwrap().len(), 17);
        assert_eq!(random_mac_address().unwrap().len(), 17);
        assert_eq!(meid(true).unwrap().len(), 14);
        assert_eq!(random_meid().unwrap().len(), 14);
        assert!(!user_name().unwrap().is_empty());
        assert_eq!(password(false, false, false, false, false, 8).unwrap().len(), 8);
    }
}
