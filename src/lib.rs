//! Laggard - detect stale browsers from their user-agent string.
//!
//! A small, hand-curated list of obsolete browser versions ("laggards") is
//! matched against a user-agent string. Each laggard, cross-referenced with
//! the visitor's operating system, maps to an ordered list of recommended
//! alternative browsers.
//!
//! # Modules
//!
//! - [`browser`] - Browsers that can be recommended
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detector`] - Classification over the two tables
//! - [`error`] - Error types and result aliases
//! - [`laggard`] - Laggard patterns
//! - [`platform`] - Operating system identifiers and inference
//! - [`recommendation`] - Recommendations per laggard and platform
//!
//! # Example
//!
//! ```
//! use laggard::{Browser, Detector};
//!
//! let detector = Detector::builtin();
//!
//! assert!(detector.is_behind("Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)"));
//! assert_eq!(
//!     detector.options("IE9", "vista"),
//!     Some(&[Browser::Chrome, Browser::Ff, Browser::Gcf, Browser::Opera][..])
//! );
//! ```

pub mod browser;
pub mod cli;
pub mod detector;
pub mod error;
pub mod laggard;
pub mod platform;
pub mod recommendation;

pub use browser::Browser;
pub use detector::{CoverageGap, Detector, Verdict};
pub use error::{LaggardError, Result};
pub use laggard::{LaggardPattern, LaggardSet, BUILTIN_LAGGARDS};
pub use platform::Platform;
pub use recommendation::{PlatformOptions, RecommendationTable, PORTABLE_GROUP};
