use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Colors the view needs for one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub background: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
}

const LIGHT: Palette = Palette {
    text: "#11181C",
    background: "#FFFFFF",
    muted: "gray",
    border: "gray",
};

const DARK: Palette = Palette {
    text: "#ECEDEE",
    background: "#151718",
    muted: "gray",
    border: "gray",
};

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown color scheme `{0}`, expected `light` or `dark`")]
pub struct UnknownScheme(String);

impl FromStr for ColorScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert_eq!(ColorScheme::default().toggled().toggled(), ColorScheme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ColorScheme>().ok(), Some(ColorScheme::Dark));
        assert_eq!(" light ".parse::<ColorScheme>().ok(), Some(ColorScheme::Light));
        assert!("sepia".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ColorScheme::Light.palette(), ColorScheme::Dark.palette());
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
    }
}
