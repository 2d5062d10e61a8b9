//! Laggard pattern matching.
//!
//! A laggard is a browser version stale enough that its users should be
//! nudged towards something newer. Each one is recognised by a tight,
//! anchored regular expression over the full user-agent string.

use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{LaggardError, Result};

/// A pattern that identifies one stale browser version.
#[derive(Debug, Clone)]
pub struct LaggardPattern {
    /// Unique identifier, e.g. `IE9` or `FF36`.
    pub id: String,
    /// Regex matched against the whole user-agent string.
    pub pattern: Regex,
}

impl LaggardPattern {
    /// Compile a pattern from its source.
    pub fn new(id: &str, source: &str) -> Result<Self> {
        let pattern = Regex::new(source).map_err(|source| LaggardError::InvalidPattern {
            id: id.to_string(),
            source,
        })?;

        Ok(Self {
            id: id.to_string(),
            pattern,
        })
    }

    /// Check whether this pattern matches the user-agent.
    pub fn is_match(&self, ua: &str) -> bool {
        self.pattern.is_match(ua)
    }
}

impl Serialize for LaggardPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LaggardPattern", 2)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("pattern", self.pattern.as_str())?;
        state.end()
    }
}

/// Built-in laggard patterns.
///
/// Each tuple contains (id, regex_pattern). Old Internet Explorer first, then
/// the Firefox and Chrome releases that fell behind their rapid-release
/// successors.
pub const BUILTIN_LAGGARDS: &[(&str, &str)] = &[
    (
        "IE9",
        r"^Mozilla/5\.0 \(compatible; MSIE 9\.0; Windows NT \d\.\d(.*)\)$",
    ),
    (
        "IE8",
        r"^Mozilla/4\.0 \(compatible; MSIE 8\.0; Windows NT \d\.\d(.*)\)$",
    ),
    // TODO: tighten IE7/IE6 to the Trident token once sample UAs with it are collected.
    (
        "IE7",
        r"^Mozilla/4\.0 \(compatible; MSIE 7\.0; Windows NT \d\.\d(.*)\)$",
    ),
    (
        "IE6",
        r"^Mozilla/4\.0 \(compatible; MSIE 6\.0; Windows NT \d\.\d(.*)\)$",
    ),
    (
        "FF36",
        r"^Mozilla/5\.0 \((Windows|Windows NT( \d+\.\d+)?|Macintosh); U;(.*)rv:1\.9\.2.(\d{1,2})\)( Gecko/(\d{8}))? Firefox/3\.6(\.\d{1,2})?( \(.+\))?$",
    ),
    (
        "CR18",
        r"^Mozilla/5\.0 \((Windows NT|Macintosh)(;)?( .*)\) AppleWebKit/535\.19 \(KHTML, like Gecko\) Chrome/18\.0\.\d{4}\.\d{1,3} Safari/535\.19$",
    ),
    (
        "CR17",
        r"^Mozilla/5\.0 \((Windows NT|Macintosh)(;)?( .*)\) AppleWebKit/535\.11 \(KHTML, like Gecko\) Chrome/17\.0\.\d{3}\.\d{1,2} Safari/535\.11$",
    ),
    (
        "FF10",
        r"^Mozilla/5\.0 \((Windows NT( \d+\.\d+)?|Macintosh); (.*)rv:10\.0(\.\d{1,2})?\) Gecko/\d{8} Firefox/10\.0(\.\d{1,2})?$",
    ),
    (
        "FF11",
        r"^Mozilla/5\.0 \((Windows NT( \d+\.\d+)?|Macintosh); (.*)rv:11\.0(\.\d{1,2})?\) Gecko/\d{8} Firefox/11\.0(\.\d{1,2})?$",
    ),
];

/// An ordered set of laggard patterns with unique identifiers.
///
/// # Example
///
/// ```
/// use laggard::LaggardSet;
///
/// let laggards = LaggardSet::with_builtins();
///
/// assert!(laggards.is_match("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1;)"));
/// assert!(!laggards.is_match("Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0"));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LaggardSet {
    patterns: Vec<LaggardPattern>,
}

impl LaggardSet {
    /// Create a set with the built-in patterns.
    pub fn with_builtins() -> Self {
        Self::from_sources(BUILTIN_LAGGARDS).expect("built-in laggard patterns are valid")
    }

    /// Create an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from already-compiled patterns.
    pub fn new(patterns: Vec<LaggardPattern>) -> Result<Self> {
        let mut set = Self::empty();
        for pattern in patterns {
            set.add_pattern(pattern)?;
        }
        Ok(set)
    }

    /// Compile a set from (id, regex) pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use laggard::LaggardSet;
    ///
    /// let set = LaggardSet::from_sources(&[("OPERA12", r"^Opera/9\.80 .* Version/12\.")]).unwrap();
    /// assert_eq!(set.ids().collect::<Vec<_>>(), vec!["OPERA12"]);
    ///
    /// assert!(LaggardSet::from_sources(&[("BAD", "(")]).is_err());
    /// ```
    pub fn from_sources(sources: &[(&str, &str)]) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|(id, source)| LaggardPattern::new(id, source))
            .collect::<Result<Vec<_>>>()?;

        Self::new(patterns)
    }

    /// Add a pattern, rejecting a duplicate identifier.
    pub fn add_pattern(&mut self, pattern: LaggardPattern) -> Result<()> {
        if self.contains(&pattern.id) {
            return Err(LaggardError::DuplicateLaggard { id: pattern.id });
        }
        self.patterns.push(pattern);
        Ok(())
    }

    /// The first pattern, in definition order, that matches the user-agent.
    pub fn find(&self, ua: &str) -> Option<&LaggardPattern> {
        self.patterns.iter().find(|p| {
            let matched = p.is_match(ua);
            tracing::trace!(laggard = %p.id, matched, "scanned pattern");
            matched
        })
    }

    /// Check if the user-agent matches any pattern.
    pub fn is_match(&self, ua: &str) -> bool {
        self.find(ua).is_some()
    }

    /// Identifiers in definition order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.id.as_str())
    }

    /// Whether a pattern with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.patterns.iter().any(|p| p.id == id)
    }

    /// Get a pattern by identifier.
    pub fn get(&self, id: &str) -> Option<&LaggardPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Get the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
