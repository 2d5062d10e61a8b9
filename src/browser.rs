//! Browsers that can be recommended as alternatives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LaggardError;

/// A browser that may be offered in place of a laggard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Browser {
    /// Google Chrome.
    Chrome,
    /// Google Chrome Frame, the IE plugin.
    Gcf,
    /// Mozilla Firefox.
    Ff,
    /// Apple Safari.
    Safari,
    /// Microsoft Internet Explorer.
    Ie,
    /// Opera.
    Opera,
}

impl Browser {
    /// Every known browser, in declaration order.
    pub const ALL: [Browser; 6] = [
        Browser::Chrome,
        Browser::Gcf,
        Browser::Ff,
        Browser::Safari,
        Browser::Ie,
        Browser::Opera,
    ];

    /// The upper-case identifier, e.g. `"CHROME"`.
    pub fn id(&self) -> &'static str {
        match self {
            Browser::Chrome => "CHROME",
            Browser::Gcf => "GCF",
            Browser::Ff => "FF",
            Browser::Safari => "SAFARI",
            Browser::Ie => "IE",
            Browser::Opera => "OPERA",
        }
    }

    /// Human-readable product name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Browser::Chrome => "Google Chrome",
            Browser::Gcf => "Google Chrome Frame",
            Browser::Ff => "Mozilla Firefox",
            Browser::Safari => "Safari",
            Browser::Ie => "Internet Explorer",
            Browser::Opera => "Opera",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Browser {
    type Err = LaggardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Browser::ALL
            .iter()
            .copied()
            .find(|b| b.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| LaggardError::UnknownBrowser {
                name: s.to_string(),
            })
    }
}

/// Join a recommendation list into `"CHROME, FF, OPERA"`.
pub fn join(browsers: &[Browser]) -> String {
    browsers
        .iter()
        .map(Browser::id)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifiers_case_insensitively() {
        assert_eq!("CHROME".parse::<Browser>().unwrap(), Browser::Chrome);
        assert_eq!("gcf".parse::<Browser>().unwrap(), Browser::Gcf);
        assert_eq!("Opera".parse::<Browser>().unwrap(), Browser::Opera);
    }

    #[test]
    fn rejects_unknown_browser() {
        let err = "netscape".parse::<Browser>().unwrap_err();
        assert!(matches!(err, LaggardError::UnknownBrowser { .. }));
    }

    #[test]
    fn display_uses_identifier() {
        assert_eq!(Browser::Ff.to_string(), "FF");
        assert_eq!(Browser::Ie.to_string(), "IE");
    }

    #[test]
    fn serializes_as_uppercase_identifier() {
        let json = serde_json::to_string(&vec![Browser::Chrome, Browser::Gcf]).unwrap();
        assert_eq!(json, r#"["CHROME","GCF"]"#);

        let back: Vec<Browser> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Browser::Chrome, Browser::Gcf]);
    }

    #[test]
    fn id_round_trips_through_parse() {
        for browser in Browser::ALL {
            assert_eq!(browser.id().parse::<Browser>().unwrap(), browser);
        }
    }

    #[test]
    fn join_preserves_order() {
        assert_eq!(
            join(&[Browser::Ie, Browser::Chrome, Browser::Opera]),
            "IE, CHROME, OPERA"
        );
        assert_eq!(join(&[]), "");
    }
}
