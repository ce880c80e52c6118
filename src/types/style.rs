use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::errors::StyleError;

/// Font family offered for subtitle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontFamily {
    Poppins,
    #[serde(rename = "Noto Serif")]
    NotoSerif,
    Lobster,
    Caveat,
}

impl FontFamily {
    /// All families, in menu order.
    pub const ALL: [FontFamily; 4] = [
        FontFamily::Poppins,
        FontFamily::NotoSerif,
        FontFamily::Lobster,
        FontFamily::Caveat,
    ];

    /// Value carried by the selection control.
    pub fn wire_value(self) -> &'static str {
        match self {
            FontFamily::Poppins => "Poppins",
            FontFamily::NotoSerif => "Noto Serif",
            FontFamily::Lobster => "Lobster",
            FontFamily::Caveat => "Caveat",
        }
    }

    pub fn label(self) -> &'static str {
        self.wire_value()
    }

    /// Concrete CSS font stack.
    pub fn font_stack(self) -> &'static str {
        match self {
            FontFamily::Poppins => "\"Poppins\", sans-serif",
            FontFamily::NotoSerif => "\"Noto Serif\", serif",
            FontFamily::Lobster => "\"Lobster\", cursive",
            FontFamily::Caveat => "\"Caveat\", cursive",
        }
    }
}

/// Relative size step for subtitle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontSize {
    #[serde(rename = "1")]
    Half,
    #[serde(rename = "2")]
    ThreeQuarters,
    #[serde(rename = "3")]
    Full,
    #[serde(rename = "4")]
    Double,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [
        FontSize::Half,
        FontSize::ThreeQuarters,
        FontSize::Full,
        FontSize::Double,
    ];

    /// Single-digit size code, also used inside rule identifiers.
    pub fn wire_value(self) -> &'static str {
        match self {
            FontSize::Half => "1",
            FontSize::ThreeQuarters => "2",
            FontSize::Full => "3",
            FontSize::Double => "4",
        }
    }

    pub fn label(self) -> &'static str {
        self.percentage()
    }

    pub fn percentage(self) -> &'static str {
        match self {
            FontSize::Half => "50%",
            FontSize::ThreeQuarters => "75%",
            FontSize::Full => "100%",
            FontSize::Double => "200%",
        }
    }
}

/// Subtitle text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontColor {
    White,
    Black,
    Yellow,
    Red,
}

impl FontColor {
    pub const ALL: [FontColor; 4] = [
        FontColor::White,
        FontColor::Black,
        FontColor::Yellow,
        FontColor::Red,
    ];

    /// CSS color keyword; doubles as the wire value.
    pub fn wire_value(self) -> &'static str {
        match self {
            FontColor::White => "white",
            FontColor::Black => "black",
            FontColor::Yellow => "yellow",
            FontColor::Red => "red",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontColor::White => "White",
            FontColor::Black => "Black",
            FontColor::Yellow => "Yellow",
            FontColor::Red => "Red",
        }
    }
}

/// Background color painted behind cue text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    Black,
    White,
    Cyan,
    Magenta,
}

impl BackgroundColor {
    pub const ALL: [BackgroundColor; 4] = [
        BackgroundColor::Black,
        BackgroundColor::White,
        BackgroundColor::Cyan,
        BackgroundColor::Magenta,
    ];

    pub fn wire_value(self) -> &'static str {
        match self {
            BackgroundColor::Black => "black",
            BackgroundColor::White => "white",
            BackgroundColor::Cyan => "cyan",
            BackgroundColor::Magenta => "magenta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackgroundColor::Black => "Black",
            BackgroundColor::White => "White",
            BackgroundColor::Cyan => "Cyan",
            BackgroundColor::Magenta => "Magenta",
        }
    }
}

macro_rules! impl_wire_parse {
    ($ty:ident, $field:expr) => {
        impl FromStr for $ty {
            type Err = StyleError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|v| v.wire_value() == value)
                    .ok_or_else(|| StyleError::UnknownOption {
                        field: $field.to_string(),
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

impl_wire_parse!(FontFamily, "font_family");
impl_wire_parse!(FontSize, "font_size");
impl_wire_parse!(FontColor, "font_color");
impl_wire_parse!(BackgroundColor, "background_color");

/// The four user-chosen subtitle style fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleSelection {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: FontColor,
    pub background_color: BackgroundColor,
}

impl Default for StyleSelection {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Poppins,
            font_size: FontSize::Full,
            font_color: FontColor::White,
            background_color: BackgroundColor::Black,
        }
    }
}

impl StyleSelection {
    /// Every selection the controls can produce.
    pub fn all() -> impl Iterator<Item = StyleSelection> {
        FontFamily::ALL.into_iter().flat_map(|font_family| {
            FontSize::ALL.into_iter().flat_map(move |font_size| {
                FontColor::ALL.into_iter().flat_map(move |font_color| {
                    BackgroundColor::ALL
                        .into_iter()
                        .map(move |background_color| StyleSelection {
                            font_family,
                            font_size,
                            font_color,
                            background_color,
                        })
                })
            })
        })
    }

    /// Returns the selection with `change` applied.
    pub fn with(self, change: SelectionChange) -> Self {
        let mut next = self;
        match change {
            SelectionChange::FontFamily(v) => next.font_family = v,
            SelectionChange::FontSize(v) => next.font_size = v,
            SelectionChange::FontColor(v) => next.font_color = v,
            SelectionChange::BackgroundColor(v) => next.background_color = v,
        }
        next
    }
}

/// One selection event from a styling control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    FontFamily(FontFamily),
    FontSize(FontSize),
    FontColor(FontColor),
    BackgroundColor(BackgroundColor),
}

impl SelectionChange {
    /// Parses a `(field, value)` pair as posted by the page.
    pub fn parse(field: &str, value: &str) -> Result<Self, StyleError> {
        match field {
            "font_family" => Ok(SelectionChange::FontFamily(value.parse()?)),
            "font_size" => Ok(SelectionChange::FontSize(value.parse()?)),
            "font_color" => Ok(SelectionChange::FontColor(value.parse()?)),
            "background_color" => Ok(SelectionChange::BackgroundColor(value.parse()?)),
            other => Err(StyleError::UnknownField(other.to_string())),
        }
    }
}

/// A generated rule: the identifier and the CSS that targets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStyleRule {
    pub id: String,
    pub css: String,
}
