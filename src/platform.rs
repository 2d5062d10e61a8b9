//! Operating system identifiers.
//!
//! Recommendations vary by the operating system the laggard runs on, since
//! older systems cannot install every alternative. [`Platform`] is the set of
//! systems the recommendation table knows about, and
//! [`Platform::from_user_agent`] infers one from the platform token of a
//! user-agent string.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// An operating system a recommendation can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows XP (NT 5.1, and the 64-bit NT 5.2 build).
    Xp,
    /// Windows Vista (NT 6.0).
    Vista,
    /// Windows 7 (NT 6.1).
    Win7,
    /// Mac OS X.
    Osx,
}

static WINDOWS_NT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Windows NT (\d+)\.(\d+)").unwrap());

static MAC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Macintosh|Mac OS X").unwrap());

impl Platform {
    /// Every known platform.
    pub const ALL: [Platform; 4] = [
        Platform::Xp,
        Platform::Vista,
        Platform::Win7,
        Platform::Osx,
    ];

    /// The lower-case identifier, e.g. `"win7"`.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Xp => "xp",
            Platform::Vista => "vista",
            Platform::Win7 => "win7",
            Platform::Osx => "osx",
        }
    }

    /// Look up a platform by identifier.
    ///
    /// Unknown identifiers (`"linux"`, `""`) yield `None` rather than an
    /// error, so a lookup keyed on them simply finds nothing.
    pub fn from_id(id: &str) -> Option<Self> {
        Platform::ALL.iter().copied().find(|p| p.id() == id)
    }

    /// Infer the platform from a user-agent string.
    ///
    /// # Example
    ///
    /// ```
    /// use laggard::Platform;
    ///
    /// let ua = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.0; Trident/4.0)";
    /// assert_eq!(Platform::from_user_agent(ua), Some(Platform::Vista));
    /// assert_eq!(Platform::from_user_agent("curl/8.0"), None);
    /// ```
    pub fn from_user_agent(ua: &str) -> Option<Self> {
        if let Some(caps) = WINDOWS_NT.captures(ua) {
            return match (&caps[1], &caps[2]) {
                ("5", "1") | ("5", "2") => Some(Platform::Xp),
                ("6", "0") => Some(Platform::Vista),
                ("6", "1") => Some(Platform::Win7),
                _ => None,
            };
        }

        if MAC.is_match(ua) {
            return Some(Platform::Osx);
        }

        None
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
