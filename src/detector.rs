//! The laggard detector.
//!
//! [`Detector`] pairs a [`LaggardSet`] with a [`RecommendationTable`]. Both
//! are immutable once the detector is built, so a single detector can be
//! shared freely across threads. [`Detector::builtin`] returns a process-wide
//! instance built from the built-in tables on first use.

use std::sync::LazyLock;

use serde::Serialize;
use serde_json::Value;

use crate::browser::Browser;
use crate::laggard::LaggardSet;
use crate::platform::Platform;
use crate::recommendation::RecommendationTable;

static BUILTIN: LazyLock<Detector> = LazyLock::new(Detector::with_builtins);

/// Outcome of classifying one user-agent string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// Whether the browser is a laggard.
    pub behind: bool,
    /// Identifier of the matched laggard pattern.
    pub laggard: Option<String>,
    /// Platform inferred from the user-agent.
    pub platform: Option<Platform>,
    /// Recommended alternatives for the (laggard, platform) pair.
    pub recommendations: Option<Vec<Browser>>,
}

impl Verdict {
    /// A verdict for a browser that is not behind.
    pub fn current(platform: Option<Platform>) -> Self {
        Self {
            behind: false,
            laggard: None,
            platform,
            recommendations: None,
        }
    }
}

/// A mismatch between the pattern set and the recommendation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoverageGap {
    /// The table recommends alternatives for a laggard nothing detects.
    MissingPattern { laggard: String },
    /// A laggard is detected but has no recommendation entry.
    MissingRecommendation { laggard: String },
}

impl std::fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverageGap::MissingPattern { laggard } => {
                write!(f, "{} has recommendations but no pattern", laggard)
            }
            CoverageGap::MissingRecommendation { laggard } => {
                write!(f, "{} has a pattern but no recommendations", laggard)
            }
        }
    }
}

/// Classifies user-agent strings against a set of laggard patterns.
///
/// # Example
///
/// ```
/// use laggard::{Browser, Detector};
///
/// let detector = Detector::builtin();
///
/// assert!(detector.is_behind("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1;)"));
/// assert_eq!(
///     detector.options("IE6", "xp"),
///     Some(&[Browser::Chrome, Browser::Ff, Browser::Gcf, Browser::Opera][..])
/// );
/// assert_eq!(detector.options("IE6", "win7"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Detector {
    laggards: LaggardSet,
    recommendations: RecommendationTable,
}

impl Detector {
    /// Create a detector from the given tables.
    ///
    /// Coverage gaps between the two tables are logged, not rejected.
    pub fn new(laggards: LaggardSet, recommendations: RecommendationTable) -> Self {
        let detector = Self {
            laggards,
            recommendations,
        };

        for gap in detector.coverage_gaps() {
            tracing::warn!("laggard table coverage gap: {}", gap);
        }

        detector
    }

    /// Create a detector with the built-in tables.
    pub fn with_builtins() -> Self {
        let detector = Self::new(
            LaggardSet::with_builtins(),
            RecommendationTable::with_builtins(),
        );
        tracing::debug!(
            laggards = detector.laggards.len(),
            "built-in detector ready"
        );
        detector
    }

    /// The shared detector built from the built-in tables.
    pub fn builtin() -> &'static Detector {
        &BUILTIN
    }

    /// Check whether the user-agent belongs to a laggard.
    ///
    /// Patterns are tried in definition order and the first match wins.
    /// Matching is stateless, so repeated calls always agree.
    pub fn is_behind(&self, ua: &str) -> bool {
        self.find_laggard(ua).is_some()
    }

    /// Like [`is_behind`](Self::is_behind), treating absent input as current.
    pub fn is_behind_opt(&self, ua: Option<&str>) -> bool {
        ua.is_some_and(|ua| self.is_behind(ua))
    }

    /// Like [`is_behind`](Self::is_behind) for untyped input.
    ///
    /// Only a JSON string is classified; numbers, objects, arrays, booleans
    /// and null are never behind.
    ///
    /// ```
    /// use laggard::Detector;
    /// use serde_json::json;
    ///
    /// let detector = Detector::builtin();
    /// assert!(!detector.is_behind_value(&json!(42)));
    /// assert!(!detector.is_behind_value(&json!(null)));
    /// assert!(detector.is_behind_value(&json!(
    ///     "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1)"
    /// )));
    /// ```
    pub fn is_behind_value(&self, ua: &Value) -> bool {
        match ua {
            Value::String(ua) => self.is_behind(ua),
            _ => false,
        }
    }

    /// Identifier of the first laggard pattern matching the user-agent.
    pub fn find_laggard(&self, ua: &str) -> Option<&str> {
        let found = self.laggards.find(ua).map(|p| p.id.as_str());
        if let Some(id) = found {
            tracing::debug!(laggard = id, "user-agent matched laggard");
        }
        found
    }

    /// Recommended alternatives for a laggard on an OS identifier.
    pub fn options(&self, laggard: &str, os: &str) -> Option<&[Browser]> {
        self.recommendations.get(laggard, os)
    }

    /// Configured laggard identifiers, in definition order.
    pub fn laggard_ids(&self) -> impl Iterator<Item = &str> {
        self.laggards.ids()
    }

    /// The laggard pattern set.
    pub fn laggards(&self) -> &LaggardSet {
        &self.laggards
    }

    /// The recommendation table.
    pub fn recommendations(&self) -> &RecommendationTable {
        &self.recommendations
    }

    /// Classify a user-agent: laggard, inferred platform and recommendation.
    ///
    /// ```
    /// use laggard::{Browser, Detector, Platform};
    ///
    /// let verdict = Detector::builtin()
    ///     .classify("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 5.1; Trident/4.0)");
    ///
    /// assert!(verdict.behind);
    /// assert_eq!(verdict.laggard.as_deref(), Some("IE8"));
    /// assert_eq!(verdict.platform, Some(Platform::Xp));
    /// assert_eq!(
    ///     verdict.recommendations,
    ///     Some(vec![Browser::Chrome, Browser::Ff, Browser::Gcf, Browser::Opera])
    /// );
    /// ```
    pub fn classify(&self, ua: &str) -> Verdict {
        let platform = Platform::from_user_agent(ua);

        let Some(laggard) = self.find_laggard(ua) else {
            return Verdict::current(platform);
        };

        let recommendations = platform
            .and_then(|p| self.recommendations.get_for(laggard, p))
            .map(<[Browser]>::to_vec);

        Verdict {
            behind: true,
            laggard: Some(laggard.to_string()),
            platform,
            recommendations,
        }
    }

    /// Mismatches between the pattern set and the recommendation table.
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let missing_patterns = self
            .recommendations
            .laggard_ids()
            .filter(|id| !self.laggards.contains(id))
            .map(|id| CoverageGap::MissingPattern {
                laggard: id.to_string(),
            });

        let missing_recommendations = self
            .laggards
            .ids()
            .filter(|id| !self.recommendations.contains(id))
            .map(|id| CoverageGap::MissingRecommendation {
                laggard: id.to_string(),
            });

        missing_patterns.chain(missing_recommendations).collect()
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::with_builtins()
    }
}
