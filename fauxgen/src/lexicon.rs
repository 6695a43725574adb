//! Named word pools keyed by `(namespace, key)`.
//!
//! Generators never embed word lists themselves. They name a
//! [`LexiconCategory`] and resolve it through whatever [`Lexicon`] the caller
//! supplies: the embedded [`BuiltinLexicon`], a [`MapLexicon`] loaded from
//! JSON, or a [`LayeredLexicon`] combining the two.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FauxError, Result};
use crate::pool::CharPool;

/// A `(namespace, key)` pair naming a lexicon pool
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LexiconCategory {
    namespace: Cow<'static, str>,
    key: Cow<'static, str>,
}

impl LexiconCategory {
    /// Person first names
    pub const FIRST_NAME: Self = Self::from_static("person", "firstname");
    /// Person last names
    pub const LAST_NAME: Self = Self::from_static("person", "lastname");
    /// Top level domain suffixes
    pub const DOMAIN_SUFFIX: Self = Self::from_static("internet", "domain_suffix");
    /// HTTP request methods
    pub const HTTP_METHOD: Self = Self::from_static("internet", "http_method");
    /// Business buzzword tokens, used for URL path segments
    pub const BS: Self = Self::from_static("company", "bs");

    /// Category from static strings
    pub const fn from_static(namespace: &'static str, key: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            key: Cow::Borrowed(key),
        }
    }

    /// Category from arbitrary strings
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: Cow::Owned(namespace.into()),
            key: Cow::Owned(key.into()),
        }
    }

    /// Category namespace, e.g. `person`
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Category key, e.g. `firstname`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Error reporting this category as unknown
    pub fn unknown(&self) -> FauxError {
        FauxError::unknown_category(self.namespace(), self.key())
    }
}

impl fmt::Display for LexiconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.key)
    }
}

/// Source of named word pools
pub trait Lexicon {
    /// Resolve a category to its pool, or `None` if the lexicon lacks it
    fn entries(&self, category: &LexiconCategory) -> Option<CharPool<'_>>;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn entries(&self, category: &LexiconCategory) -> Option<CharPool<'_>> {
        (**self).entries(category)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Box<L> {
    fn entries(&self, category: &LexiconCategory) -> Option<CharPool<'_>> {
        (**self).entries(category)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Arc<L> {
    fn entries(&self, category: &LexiconCategory) -> Option<CharPool<'_>> {
        (**self).entries(category)
    }
}

// ============================================================================
// Builtin Lexicon
// ============================================================================

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Abigail", "Adam", "Alexander", "Alice", "Amelia", "Andrew", "Anna", "Benjamin",
    "Brandon", "Caleb", "Charlotte", "Chloe", "Christopher", "Daniel", "David", "Dylan", "Elijah",
    "Elizabeth", "Emily", "Emma", "Ethan", "Evelyn", "Gabriel", "Grace", "Hannah", "Harper",
    "Henry", "Isaac", "Isabella", "Jack", "Jacob", "James", "Jayden", "John", "Joseph", "Joshua",
    "Julia", "Leah", "Liam", "Logan", "Lucas", "Madison", "Mason", "Matthew", "Mia", "Michael",
    "Natalie", "Noah", "Oliver", "Olivia", "Ryan", "Samuel", "Sarah", "Sophia", "Thomas", "Tyler",
    "Victoria", "William", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Anderson", "Baker", "Bennett", "Brooks", "Brown", "Campbell", "Carter",
    "Clark", "Collins", "Cook", "Cooper", "Davis", "Edwards", "Evans", "Fisher", "Foster",
    "Garcia", "Gray", "Green", "Hall", "Harris", "Hayes", "Hill", "Howard", "Hughes", "Jackson",
    "Johnson", "Jones", "Kelly", "King", "Lee", "Lewis", "Long", "Martin", "Miller", "Mitchell",
    "Moore", "Morgan", "Morris", "Murphy", "Nelson", "Parker", "Perry", "Phillips", "Powell",
    "Price", "Reed", "Roberts", "Rogers", "Ross", "Sanders", "Scott", "Smith", "Stewart",
    "Taylor", "Thompson", "Turner", "Walker", "Ward", "Watson", "White", "Williams", "Wilson",
    "Wood", "Wright", "Young",
];

const DOMAIN_SUFFIXES: &[&str] = &[
    "com", "biz", "info", "name", "net", "org", "io", "co", "dev", "app",
];

const HTTP_METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
];

const BS_TOKENS: &[&str] = &[
    "aggregate", "architect", "benchmark", "brand", "cultivate", "deliver", "deploy", "drive",
    "e-enable", "embrace", "empower", "engage", "engineer", "enhance", "evolve", "expedite",
    "facilitate", "generate", "grow", "harness", "implement", "incentivize", "incubate",
    "innovate", "integrate", "iterate", "leverage", "maximize", "mesh", "monetize", "optimize",
    "orchestrate", "productize", "redefine", "reinvent", "repurpose", "scale", "streamline",
    "strategize", "synergize", "syndicate", "target", "transform", "unleash", "utilize",
    "visualize", "whiteboard", "b2b", "b2c", "back-end", "best-of-breed", "bleeding-edge",
    "bricks-and-clicks", "clicks-and-mortar", "collaborative", "compelling", "cross-platform",
    "cutting-edge", "distributed", "dynamic", "end-to-end", "enterprise", "extensible",
    "frictionless", "front-end", "global", "granular", "holistic", "impactful", "interactive",
    "intuitive", "killer", "mission-critical", "next-generation", "one-to-one", "open-source",
    "real-time", "robust", "scalable", "seamless", "sexy", "sticky", "strategic", "turn-key",
    "user-centric", "viral", "virtual", "web-enabled", "action-items", "applications",
    "architectures", "bandwidth", "channels", "communities", "content", "convergence",
    "deliverables", "e-business", "e-commerce", "e-markets", "e-services", "experiences",
    "eyeballs", "functionalities", "infomediaries", "infrastructures", "initiatives",
    "interfaces", "markets", "methodologies", "metrics", "mindshare", "models", "networks",
    "niches", "paradigms", "partnerships", "platforms", "portals", "relationships", "roi",
    "schemas", "solutions", "supply-chains", "synergies", "systems", "technologies", "users",
    "vortals", "web-readiness", "web-services",
];

/// Embedded English word lists for every well-known category
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLexicon;

impl BuiltinLexicon {
    /// Create the builtin lexicon
    pub fn new() -> Self {
        Self
    }

    /// Categories this lexicon resolves
    pub fn categories() -> [LexiconCategory; 5] {
        [
            LexiconCategory::FIRST_NAME,
            LexiconCategory::LAST_NAME,
            LexiconCategory::DOMAIN_SUFFIX,
            LexiconCategory::HTTP_METHOD,
            LexiconCategory::BS,
        ]
    }
}

impl Lexicon for BuiltinLexicon {
    fn entries(&self, category: &LexiconCategory) -> Option<CharPool<'_>> {
        let tokens = match (category.namespace(), category.key()) {
            ("person", "firstname") => FIRST_NAMES,
            ("person", "lastname") => LAST_NAMES,
            ("internet", "domain_suffix") => DOMAIN_SUFFIXES,
            ("internet", "http_method") => HTTP_METHODS,
            ("company", "bs") => BS_TOKENS,
            _ => return None,
        };
        Some(CharPool::from_tokens(tokens))
    }
}

// ============================================================================
// Map Lexicon
// ============================================================================

/// Owned lexicon loaded from data.
///
/// The JSON shape nests keys under namespaces:
///
/// ```json
/// { "person": { "firstname": ["Ada", "Grace"] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapLexicon {
    namespaces: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl MapLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the word list of a category
    pub fn insert<I, S>(&mut self, category: &LexiconCategory, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces
            .entry(category.namespace().to_string())
            .or_default()
            .insert(
                category.key().to_string(),
                words.into_iter().map(Into::into).collect(),
            );
    }

    /// Builder form of [`MapLexicon::insert`]
    pub fn with<I, S>(mut self, category: &LexiconCategory, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, words);
        self
    }

    /// Number of categories carried
    pub fn len(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }

    /// Whether the lexicon carries no categories
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a lexicon from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lexicon: Self = serde_json::from_str(json)?;
        lexicon.validated()
    }

    /// Parse a lexicon from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let lexicon: Self = serde_json::from_reader(reader)?;
        lexicon.validated()
    }

    /// Load a lexicon from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| FauxError::LexiconIo {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            categories = lexicon.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    fn validated(self) -> Result<Self> {
        for (namespace, keys) in &self.namespaces {
            for (key, words) in keys {
                if words.is_empty() {
                    return Err(FauxError::empty_pool(format!(
                        "lexicon category {}.{}",
                        namespace, key
                    )));
                }
            }
        }
        Ok(self)
    }
}

impl Lexicon for MapLexicon {
    fn entries(&self, category: &LexiconCategory) -> Option<CharPool<'_>> {
        let words = self
            .namespaces
            .get(category.namespace())?
            .get(category.key())?;
        Some(CharPool::from_vec(words.iter().map(String::as_str).collect()))
    }
}

// ============================================================================
// Layered Lexicon
// ============================================================================

/// Lexicon consulting an override first and falling back to a base
#[derive(Debug, Clone, Default)]
pub struct LayeredLexicon<O, B> {
    overrides: O,
    base: B,
}

impl<O: Lexicon, B: Lexicon> LayeredLexicon<O, B> {
    /// Layer `overrides` over `base`
    pub fn new(overrides: O, base: B) -> Self {
        Self { overrides, base }
    }
}

impl<O: Lexicon, B: Lexicon> Lexicon for LayeredLexicon<O, B> {
    fn entries(&self, category: &LexiconCategory) -> Option<CharPool<'_>> {
        self.overrides
            .entries(category)
            .or_else(|| self.base.entries(category))
    }
}
