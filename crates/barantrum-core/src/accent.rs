//! Affiliation accent colors.
//!
//! Every organization in the archive has a signature color. Names are matched
//! by substring against an ordered table and the first hit wins, so a longer
//! affiliation string that happens to contain two keys resolves to whichever
//! key is listed first. Unknown names fall back to the archive gold.

/// An accent color token (`#RRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentToken(&'static str);

impl AccentToken {
    pub const ARCHIVE_GOLD: AccentToken = AccentToken("#FCEE0A");
    pub const RED: AccentToken = AccentToken("#FF4444");
    pub const GOLD: AccentToken = AccentToken("#FFD700");
    pub const WHITE: AccentToken = AccentToken("#FFFFFF");
    pub const LIGHT_GRAY: AccentToken = AccentToken("#E0E0E0");
    pub const MATRIX_GREEN: AccentToken = AccentToken("#00FF41");
    pub const ORANGE: AccentToken = AccentToken("#FFA500");
    pub const FUCHSIA: AccentToken = AccentToken("#D946EF");
    pub const BLUE: AccentToken = AccentToken("#0096FF");
    pub const BURLYWOOD: AccentToken = AccentToken("#DEB887");
    pub const GRAY: AccentToken = AccentToken("#A0A0A0");
    pub const YELLOW_GREEN: AccentToken = AccentToken("#9ACD32");
    pub const MIDNIGHT_BLUE: AccentToken = AccentToken("#191970");
    pub const TURQUOISE: AccentToken = AccentToken("#40E0D0");
    pub const DARK_BLUE: AccentToken = AccentToken("#00008B");
    pub const PAPER: AccentToken = AccentToken("#F0F0F0");
    pub const INK: AccentToken = AccentToken("#000000");

    /// Fallback for names that match nothing.
    pub const DEFAULT: AccentToken = AccentToken::ARCHIVE_GOLD;

    /// Tokens too pale to read on the paper-colored dossier.
    const LIGHT: [AccentToken; 3] = [AccentToken::WHITE, AccentToken::LIGHT_GRAY, AccentToken::PAPER];

    /// The CSS hex value.
    pub fn hex(&self) -> &'static str {
        self.0
    }

    /// Whether this token would vanish on a light background.
    pub fn is_light(&self) -> bool {
        Self::LIGHT
            .iter()
            .any(|light| light.0.eq_ignore_ascii_case(self.0))
    }

    /// Text color to use on a light background: ink for light tokens,
    /// the token itself otherwise.
    pub fn text_on_light(&self) -> AccentToken {
        if self.is_light() {
            AccentToken::INK
        } else {
            *self
        }
    }

    /// `#RRGGBBAA` variant with the given two-digit hex alpha (e.g. `"1A"`).
    pub fn tint(&self, alpha: &str) -> String {
        format!("{}{}", self.0, alpha)
    }
}

impl std::fmt::Display for AccentToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Substring keys in priority order.
pub const AFFILIATION_ACCENTS: &[(&str, AccentToken)] = &[
    ("데이갈", AccentToken::RED),
    ("듀르", AccentToken::GOLD),
    ("세르다", AccentToken::WHITE),
    ("나드", AccentToken::LIGHT_GRAY),
    ("다세오", AccentToken::MATRIX_GREEN),
    ("여실", AccentToken::ORANGE),
    ("차르일", AccentToken::FUCHSIA),
    ("여달", AccentToken::BLUE),
    ("나홈", AccentToken::BURLYWOOD),
    ("티아슬", AccentToken::GRAY),
    ("미끼먹이", AccentToken::YELLOW_GREEN),
    ("알레", AccentToken::MIDNIGHT_BLUE),
    ("나겔", AccentToken::TURQUOISE),
    ("아테나이에", AccentToken::DARK_BLUE),
    ("무소속", AccentToken::WHITE),
];

/// Resolve the accent for an affiliation name. Never fails.
pub fn accent_for(name: &str) -> AccentToken {
    AFFILIATION_ACCENTS
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, token)| *token)
        .unwrap_or(AccentToken::DEFAULT)
}
