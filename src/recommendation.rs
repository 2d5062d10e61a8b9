//! Recommended alternatives per laggard and operating system.
//!
//! The table is keyed first by laggard identifier, then by [`Platform`].
//! Each entry is an ordered list of [`Browser`]s, most recommended first.
//! Entries are only as complete as they were authored: a laggard or platform
//! with no entry has no recommendation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::browser::Browser;
use crate::platform::Platform;

/// Per-platform recommendations for one laggard.
pub type PlatformOptions = BTreeMap<Platform, Vec<Browser>>;

/// Laggards whose advice does not depend on which engine fell behind.
///
/// Every member receives the same per-platform list, see
/// [`RecommendationTable::derive_portable`].
pub const PORTABLE_GROUP: &[&str] = &["FF36", "CR18", "CR17", "FF10", "FF11"];

/// Mapping from laggard identifier to per-platform recommendations.
///
/// # Example
///
/// ```
/// use laggard::{Browser, RecommendationTable};
///
/// let table = RecommendationTable::with_builtins();
///
/// assert_eq!(
///     table.get("IE6", "xp"),
///     Some(&[Browser::Chrome, Browser::Ff, Browser::Gcf, Browser::Opera][..])
/// );
/// assert_eq!(table.get("IE6", "win7"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationTable {
    entries: BTreeMap<String, PlatformOptions>,
}

impl RecommendationTable {
    /// Create a table with the built-in entries.
    pub fn with_builtins() -> Self {
        use Browser::{Chrome, Ff, Gcf, Ie, Opera};
        use Platform::{Osx, Vista, Win7, Xp};

        let mut table = Self::empty();

        // IE itself is only offered where a newer IE installs on that system.
        table
            .insert("IE9", Vista, vec![Chrome, Ff, Gcf, Opera])
            .insert("IE9", Win7, vec![Ie, Chrome, Ff, Gcf, Opera]);
        table
            .insert("IE8", Xp, vec![Chrome, Ff, Gcf, Opera])
            .insert("IE8", Vista, vec![Ie, Chrome, Ff, Gcf, Opera])
            .insert("IE8", Win7, vec![Ie, Chrome, Ff, Gcf, Opera]);
        table
            .insert("IE7", Xp, vec![Chrome, Ff, Gcf, Opera])
            .insert("IE7", Vista, vec![Ie, Chrome, Ff, Gcf, Opera]);
        table.insert("IE6", Xp, vec![Chrome, Ff, Gcf, Opera]);

        let portable: PlatformOptions = [
            (Xp, vec![Chrome, Ff, Opera]),
            (Vista, vec![Ie, Chrome, Ff, Opera]),
            (Win7, vec![Ie, Chrome, Ff, Opera]),
            (Osx, vec![Chrome, Ff, Opera]),
        ]
        .into_iter()
        .collect();
        table.derive_portable(PORTABLE_GROUP, &portable);

        tracing::debug!(laggards = table.len(), "built recommendation table");
        table
    }

    /// Create an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the recommendation for one (laggard, platform) pair.
    pub fn insert(&mut self, laggard: &str, platform: Platform, browsers: Vec<Browser>) -> &mut Self {
        self.entries
            .entry(laggard.to_string())
            .or_default()
            .insert(platform, browsers);
        self
    }

    /// Stamp the same per-platform options onto every laggard in `ids`.
    ///
    /// Existing entries for those laggards are replaced.
    pub fn derive_portable(&mut self, ids: &[&str], options: &PlatformOptions) -> &mut Self {
        for id in ids {
            self.entries.insert(id.to_string(), options.clone());
        }
        self
    }

    /// Look up the recommendation for a laggard and OS identifier.
    ///
    /// Returns `None` when the laggard is unknown, the OS identifier is not a
    /// known [`Platform`], or the laggard has no entry for that platform.
    pub fn get(&self, laggard: &str, os: &str) -> Option<&[Browser]> {
        self.get_for(laggard, Platform::from_id(os)?)
    }

    /// Look up the recommendation for a laggard on a typed platform.
    pub fn get_for(&self, laggard: &str, platform: Platform) -> Option<&[Browser]> {
        self.entries
            .get(laggard)?
            .get(&platform)
            .map(Vec::as_slice)
            .filter(|browsers| !browsers.is_empty())
    }

    /// All per-platform options for a laggard.
    pub fn platforms(&self, laggard: &str) -> Option<&PlatformOptions> {
        self.entries.get(laggard)
    }

    /// Laggard identifiers with at least one entry, in sorted order.
    pub fn laggard_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Whether the table has an entry for this laggard.
    pub fn contains(&self, laggard: &str) -> bool {
        self.entries.contains_key(laggard)
    }

    /// Number of laggards with entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
