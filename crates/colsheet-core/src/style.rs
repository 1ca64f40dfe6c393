use serde::{Deserialize, Serialize};
use std::fmt;

/// ARGB color, serialized as `{"argb": "FFRRGGBB"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ArgbRepr", into = "ArgbRepr")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Serialize, Deserialize)]
struct ArgbRepr {
    argb: String,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { a: 255, r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    /// Convert to an `AARRGGBB` hex string
    pub fn to_argb_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Parse from `AARRGGBB` or `RRGGBB` (alpha defaults to opaque)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_argb_hex())
    }
}

impl TryFrom<ArgbRepr> for Color {
    type Error = String;

    fn try_from(repr: ArgbRepr) -> Result<Self, Self::Error> {
        Color::from_hex(&repr.argb).ok_or_else(|| format!("invalid argb color: {}", repr.argb))
    }
}

impl From<Color> for ArgbRepr {
    fn from(color: Color) -> Self {
        ArgbRepr {
            argb: color.to_argb_hex(),
        }
    }
}

/// Font formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Builder pattern: set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Builder pattern: set font name and size
    pub fn with_face(mut self, name: impl Into<String>, size: f64) -> Self {
        self.name = Some(name.into());
        self.size = Some(size);
        self
    }

    /// Builder pattern: set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
    Distributed,
    Justify,
}

/// Alignment formatting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlign>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub wrap_text: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<u8>,
    /// Degrees in `-90..=90`, or 255 for vertical stacked text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_rotation: Option<i16>,
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    Thin,
    Dotted,
    Hair,
    Medium,
    Double,
    Thick,
    DashDot,
    DashDotDot,
    SlantDashDot,
    MediumDashed,
    MediumDashDot,
    MediumDashDotDot,
}

/// One side of a cell border
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderEdge {
    pub style: BorderStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl BorderEdge {
    pub fn new(style: BorderStyle) -> Self {
        Self { style, color: None }
    }
}

/// Border formatting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderEdge>,
}

impl Border {
    /// The same edge on all four sides
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            top: Some(edge.clone()),
            left: Some(edge.clone()),
            bottom: Some(edge.clone()),
            right: Some(edge),
        }
    }
}

/// Pattern used by a pattern fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternType {
    None,
    Solid,
    DarkGray,
    MediumGray,
    LightGray,
    Gray125,
    Gray0625,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
}

/// Color stop of a gradient fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Offset in `0.0..=1.0`
    pub position: f64,
    pub color: Color,
}

/// Background fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Fill {
    #[serde(rename_all = "camelCase")]
    Pattern {
        pattern: PatternType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fg_color: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bg_color: Option<Color>,
    },
    #[serde(rename_all = "camelCase")]
    Gradient {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        degree: Option<f64>,
        stops: Vec<GradientStop>,
    },
}

impl Fill {
    /// Solid pattern fill with the given foreground color
    pub fn solid(color: Color) -> Self {
        Fill::Pattern {
            pattern: PatternType::Solid,
            fg_color: Some(color),
            bg_color: None,
        }
    }
}

/// Names of the style slots a column propagates to its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSlot {
    NumFmt,
    Font,
    Alignment,
    Border,
    Fill,
}

impl StyleSlot {
    pub const ALL: [StyleSlot; 5] = [
        StyleSlot::NumFmt,
        StyleSlot::Font,
        StyleSlot::Alignment,
        StyleSlot::Border,
        StyleSlot::Fill,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StyleSlot::NumFmt => "numFmt",
            StyleSlot::Font => "font",
            StyleSlot::Alignment => "alignment",
            StyleSlot::Border => "border",
            StyleSlot::Fill => "fill",
        }
    }
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a single style slot
#[derive(Debug, Clone, PartialEq)]
pub enum StyleAttribute {
    NumFmt(String),
    Font(Font),
    Alignment(Alignment),
    Border(Border),
    Fill(Fill),
}

impl StyleAttribute {
    pub fn slot(&self) -> StyleSlot {
        match self {
            StyleAttribute::NumFmt(_) => StyleSlot::NumFmt,
            StyleAttribute::Font(_) => StyleSlot::Font,
            StyleAttribute::Alignment(_) => StyleSlot::Alignment,
            StyleAttribute::Border(_) => StyleSlot::Border,
            StyleAttribute::Fill(_) => StyleSlot::Fill,
        }
    }
}

/// Style bag shared by columns and cells
///
/// An unset slot means "inherit"; `Style::default()` is the explicit empty bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_fmt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one slot
    pub fn get(&self, slot: StyleSlot) -> Option<StyleAttribute> {
        match slot {
            StyleSlot::NumFmt => self.num_fmt.clone().map(StyleAttribute::NumFmt),
            StyleSlot::Font => self.font.clone().map(StyleAttribute::Font),
            StyleSlot::Alignment => self.alignment.clone().map(StyleAttribute::Alignment),
            StyleSlot::Border => self.border.clone().map(StyleAttribute::Border),
            StyleSlot::Fill => self.fill.clone().map(StyleAttribute::Fill),
        }
    }

    /// Check whether a slot carries an override; an empty number format does not
    pub fn has(&self, slot: StyleSlot) -> bool {
        match slot {
            StyleSlot::NumFmt => self.num_fmt.as_deref().is_some_and(|f| !f.is_empty()),
            StyleSlot::Font => self.font.is_some(),
            StyleSlot::Alignment => self.alignment.is_some(),
            StyleSlot::Border => self.border.is_some(),
            StyleSlot::Fill => self.fill.is_some(),
        }
    }

    /// Overwrite the slot the attribute belongs to
    pub fn set(&mut self, attribute: StyleAttribute) {
        match attribute {
            StyleAttribute::NumFmt(v) => self.num_fmt = Some(v),
            StyleAttribute::Font(v) => self.font = Some(v),
            StyleAttribute::Alignment(v) => self.alignment = Some(v),
            StyleAttribute::Border(v) => self.border = Some(v),
            StyleAttribute::Fill(v) => self.fill = Some(v),
        }
    }

    /// Unset a slot
    pub fn clear(&mut self, slot: StyleSlot) {
        match slot {
            StyleSlot::NumFmt => self.num_fmt = None,
            StyleSlot::Font => self.font = None,
            StyleSlot::Alignment => self.alignment = None,
            StyleSlot::Border => self.border = None,
            StyleSlot::Fill => self.fill = None,
        }
    }

    /// True when no slot carries an override
    pub fn is_plain(&self) -> bool {
        StyleSlot::ALL.iter().all(|slot| !self.has(*slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_color_hex() {
        let color = Color::rgb(255, 128, 64);
        assert_eq!(color.to_argb_hex(), "FFFF8040");
        assert_eq!(Color::from_hex("#ff8040"), Some(color));
        assert_eq!(Color::from_hex("80FF8040"), Some(Color::argb(128, 255, 128, 64)));
        assert_eq!(Color::from_hex("xyz"), None);
    }

    #[test]
    fn test_color_serde_shape() {
        let value = serde_json::to_value(Color::RED).unwrap();
        assert_eq!(value, json!({ "argb": "FFFF0000" }));
        let back: Color = serde_json::from_value(value).unwrap();
        assert_eq!(back, Color::RED);
        assert!(serde_json::from_value::<Color>(json!({ "argb": "nope" })).is_err());
    }

    #[test]
    fn test_fill_json_shape() {
        let fill: Fill = serde_json::from_value(json!({
            "type": "pattern",
            "pattern": "solid",
            "fgColor": { "argb": "FFFFFF00" }
        }))
        .unwrap();
        assert_eq!(fill, Fill::solid(Color::YELLOW));

        let gradient: Fill = serde_json::from_value(json!({
            "type": "gradient",
            "degree": 90.0,
            "stops": [
                { "position": 0.0, "color": { "argb": "FF000000" } },
                { "position": 1.0, "color": { "argb": "FFFFFFFF" } }
            ]
        }))
        .unwrap();
        assert!(matches!(gradient, Fill::Gradient { ref stops, .. } if stops.len() == 2));
    }

    #[test]
    fn test_slot_set_get_clear() {
        let mut style = Style::new();
        assert!(style.is_plain());

        style.set(StyleAttribute::Font(Font::new().with_bold(true)));
        style.set(StyleAttribute::NumFmt("0.00%".to_string()));
        assert!(!style.is_plain());
        assert!(style.has(StyleSlot::Font));
        assert_eq!(
            style.get(StyleSlot::NumFmt),
            Some(StyleAttribute::NumFmt("0.00%".to_string()))
        );
        assert_eq!(style.get(StyleSlot::Fill), None);

        style.clear(StyleSlot::Font);
        style.clear(StyleSlot::NumFmt);
        assert!(style.is_plain());
    }

    #[test]
    fn test_empty_num_fmt_is_plain() {
        let style = Style {
            num_fmt: Some(String::new()),
            ..Style::default()
        };
        assert!(!style.has(StyleSlot::NumFmt));
        assert!(style.is_plain());
    }

    #[test]
    fn test_empty_style_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(Style::new()).unwrap(), json!({}));
        let style: Style = serde_json::from_value(json!({ "font": { "bold": true } })).unwrap();
        assert_eq!(style.font, Some(Font::new().with_bold(true)));
    }
}
