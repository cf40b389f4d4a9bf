// src/models.rs
use crate::errors::DesignError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color, serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Near-black text used by the fixed harmony schemes.
    pub const INK: Color = Color::rgb(0x21, 0x21, 0x21);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from integer channels, clamping each to `[0, 255]`.
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Self::rgb(clamp(r), clamp(g), clamp(b))
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DesignError::InvalidColor(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| DesignError::InvalidColor(s.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Dashboard,
    Ecommerce,
    Blog,
    Survey,
    #[default]
    General,
    Other,
}

impl ProjectType {
    /// Key used by the curated tables; anything unrecognized reads as `General`.
    pub fn table_key(self) -> ProjectType {
        match self {
            ProjectType::Other => ProjectType::General,
            other => other,
        }
    }
}

/// Exact tag match; any other string, including other casings, is `Other`.
impl From<&str> for ProjectType {
    fn from(s: &str) -> Self {
        match s {
            "dashboard" => ProjectType::Dashboard,
            "ecommerce" => ProjectType::Ecommerce,
            "blog" => ProjectType::Blog,
            "survey" => ProjectType::Survey,
            "general" => ProjectType::General,
            _ => ProjectType::Other,
        }
    }
}

/// Reads an explicit JSON `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl<'de> Deserialize<'de> for ProjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ProjectType::from(raw.as_str()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(alias = "dx", default)]
    pub x: f64,
    #[serde(alias = "dy", default)]
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Widget {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: HashMap<String, Value>,
}

impl Widget {
    pub const DEFAULT_WIDTH: f64 = 100.0;
    pub const DEFAULT_HEIGHT: f64 = 50.0;

    pub fn x(&self) -> f64 {
        self.position.map(|p| p.x).unwrap_or(0.0)
    }

    pub fn y(&self) -> f64 {
        self.position.map(|p| p.y).unwrap_or(0.0)
    }

    /// Declared size, then `properties.width`/`height`, then 100x50.
    pub fn width(&self) -> f64 {
        self.size
            .map(|s| s.width)
            .or_else(|| self.number_property("width"))
            .unwrap_or(Self::DEFAULT_WIDTH)
    }

    pub fn height(&self) -> f64 {
        self.size
            .map(|s| s.height)
            .or_else(|| self.number_property("height"))
            .unwrap_or(Self::DEFAULT_HEIGHT)
    }

    pub fn font_size(&self) -> Option<f64> {
        self.number_property("fontSize")
    }

    pub fn is_text(&self) -> bool {
        self.kind.eq_ignore_ascii_case("text")
    }

    fn number_property(&self, key: &str) -> Option<f64> {
        self.properties.get(key).and_then(Value::as_f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilityRating {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "needs-improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Neutral,
    Warm,
    Cool,
    Fresh,
    Balanced,
    Vibrant,
    Harmonious,
    Minimalist,
    Professional,
    Modern,
}

/// Brightness variants derived from a single base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorVariations {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub light: Color,
    pub dark: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
    pub description: String,
    pub accessibility_rating: AccessibilityRating,
    pub mood: Mood,
    pub is_dynamic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<ColorVariations>,
}

/// Caller-supplied partial scheme plus an optional brightness bias.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingColors {
    #[serde(default)]
    pub primary: Option<Color>,
    #[serde(default)]
    pub secondary: Option<Color>,
    #[serde(default)]
    pub accent: Option<Color>,
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default)]
    pub text: Option<Color>,
    #[serde(default)]
    pub brightness: Option<f64>,
}

impl ExistingColors {
    pub fn brightness_bias(&self) -> f64 {
        self.brightness.filter(|b| b.is_finite()).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentAnalysis {
    pub score: f64,
    pub aligned_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingAnalysis {
    pub consistency: f64,
    pub average: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyAnalysis {
    pub clarity: f64,
    pub has_headings: bool,
    pub has_body: bool,
    pub heading_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAnalysis {
    pub score: f64,
    pub left_weight: usize,
    pub right_weight: usize,
    pub is_balanced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAnalysis {
    pub widget_count: usize,
    pub density: f64,
    pub alignment: AlignmentAnalysis,
    pub spacing: SpacingAnalysis,
    pub hierarchy: HierarchyAnalysis,
    pub balance: BalanceAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Density,
    Alignment,
    Spacing,
    Hierarchy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub description: String,
    pub action: String,
    pub impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Grid,
    List,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    pub name: String,
    pub description: String,
    pub positions: Vec<Placement>,
    pub suitability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSuggestions {
    pub layout_analysis: LayoutAnalysis,
    pub suggestions: Vec<Suggestion>,
    pub auto_layouts: Vec<AutoLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeAccessibility {
    pub scheme_name: String,
    pub score: f64,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSchemeAnalysis {
    pub has_primary: bool,
    pub has_secondary: bool,
    pub has_accent: bool,
    pub consistency: f64,
    pub mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSchemeSuggestions {
    pub recommended_schemes: Vec<ColorScheme>,
    pub accessibility_score: Vec<SchemeAccessibility>,
    pub current_scheme: CurrentSchemeAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontPairing {
    pub name: String,
    pub heading: String,
    pub body: String,
    pub description: String,
    pub characteristics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
    pub recommended: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingRecommendations {
    pub heading: SizeRange,
    pub subheading: SizeRange,
    pub body: SizeRange,
    pub caption: SizeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySuggestions {
    pub font_pairings: Vec<FontPairing>,
    pub sizing_recommendations: SizingRecommendations,
    pub readability_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    pub ratio: f64,
    pub rating: AccessibilityRating,
}
