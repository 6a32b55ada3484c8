//! Border glyph sets for banner boxes.
//!
//! Each [`BorderStyle`] maps to one constant [`BorderSet`].

/// Glyphs used to draw a banner box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub t_left: char,  // ├
    pub t_right: char, // ┤
}

/// Standard single-line borders
pub const BORDER_SIMPLE: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    t_left: '├',
    t_right: '┤',
};

/// Double-line borders
pub const BORDER_DOUBLE: BorderSet = BorderSet {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
    t_left: '╠',
    t_right: '╣',
};

/// Heavy borders
pub const BORDER_BOLD: BorderSet = BorderSet {
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    horizontal: '━',
    vertical: '┃',
    t_left: '┣',
    t_right: '┫',
};

/// Rounded corners, single-line edges
pub const BORDER_ROUND: BorderSet = BorderSet {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
    t_left: '├',
    t_right: '┤',
};

/// Plain ASCII for terminals without box-drawing glyphs
pub const BORDER_ASCII: BorderSet = BorderSet {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
    t_left: '+',
    t_right: '+',
};

/// Available border styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Single-line box drawing (default)
    #[default]
    Simple,
    /// Double-line box drawing
    Double,
    /// Heavy box drawing
    Bold,
    /// Rounded corners
    Round,
    /// `+`, `-` and `|` only
    Ascii,
}

impl BorderStyle {
    /// Parse a style name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "simple" | "single" => Some(Self::Simple),
            "double" => Some(Self::Double),
            "bold" | "heavy" => Some(Self::Bold),
            "round" | "rounded" => Some(Self::Round),
            "ascii" | "plain" => Some(Self::Ascii),
            _ => None,
        }
    }

    /// Glyph set for this style.
    pub fn borders(&self) -> BorderSet {
        match self {
            Self::Simple => BORDER_SIMPLE,
            Self::Double => BORDER_DOUBLE,
            Self::Bold => BORDER_BOLD,
            Self::Round => BORDER_ROUND,
            Self::Ascii => BORDER_ASCII,
        }
    }

    /// Canonical names of every style.
    pub fn available() -> &'static [&'static str] {
        &["simple", "double", "bold", "round", "ascii"]
    }
}

impl std::fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Double => write!(f, "double"),
            Self::Bold => write!(f, "bold"),
            Self::Round => write!(f, "round"),
            Self::Ascii => write!(f, "ascii"),
        }
    }
}
