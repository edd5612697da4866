//! The card model - one greeting card's editable content and styling.
//!
//! Every styling field is drawn from a closed option set, so an invalid
//! font, size or color cannot be represented. [`CardData`] is a value type:
//! edits go through the `with_*` / `toggled_*` builders, which return a new
//! card and leave the receiver untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CardError, CardResult};

/// Height of a card relative to its width.
pub const CARD_ASPECT_RATIO: f32 = 1.4;

/// Horizontal inset of the photo inside the card, in pixels.
pub const PHOTO_INSET: f32 = 40.0;

/// Photo height relative to photo width.
pub const PHOTO_ASPECT_RATIO: f32 = 0.75;

/// Lowercase and drop separators so "courier-new" matches "Courier New".
fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Card background color, limited to the composer palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BackgroundColor {
    /// `#FFFFFF`, the color every new card starts with.
    #[default]
    White,
    /// `#FFB6C1`
    LightPink,
    /// `#87CEEB`
    SkyBlue,
    /// `#98FB98`
    PaleGreen,
    /// `#DDA0DD`
    Plum,
    /// `#F0E68C`
    Khaki,
}

impl BackgroundColor {
    /// Every selectable background, in display order.
    pub const PALETTE: [Self; 6] = [
        Self::White,
        Self::LightPink,
        Self::SkyBlue,
        Self::PaleGreen,
        Self::Plum,
        Self::Khaki,
    ];

    /// Hex code of the color, `#RRGGBB`.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::White => "#FFFFFF",
            Self::LightPink => "#FFB6C1",
            Self::SkyBlue => "#87CEEB",
            Self::PaleGreen => "#98FB98",
            Self::Plum => "#DDA0DD",
            Self::Khaki => "#F0E68C",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::LightPink => "light pink",
            Self::SkyBlue => "sky blue",
            Self::PaleGreen => "pale green",
            Self::Plum => "plum",
            Self::Khaki => "khaki",
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl FromStr for BackgroundColor {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        let wanted = normalize(s);
        Self::PALETTE
            .into_iter()
            .find(|c| normalize(c.name()) == wanted || normalize(c.hex()) == wanted)
            .ok_or_else(|| CardError::unknown("background color", s))
    }
}

impl From<BackgroundColor> for String {
    fn from(color: BackgroundColor) -> Self {
        color.hex().to_string()
    }
}

impl TryFrom<String> for BackgroundColor {
    type Error = CardError;

    fn try_from(value: String) -> CardResult<Self> {
        value.parse()
    }
}

/// Message font family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FontFamily {
    /// Arial (default).
    #[default]
    Arial,
    /// Courier New.
    CourierNew,
    /// Georgia.
    Georgia,
    /// Times New Roman.
    TimesNewRoman,
    /// Verdana.
    Verdana,
}

impl FontFamily {
    /// Every selectable family, in display order.
    pub const ALL: [Self; 5] = [
        Self::Arial,
        Self::CourierNew,
        Self::Georgia,
        Self::TimesNewRoman,
        Self::Verdana,
    ];

    /// Family name as a font stack would spell it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::CourierNew => "Courier New",
            Self::Georgia => "Georgia",
            Self::TimesNewRoman => "Times New Roman",
            Self::Verdana => "Verdana",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|f| normalize(f.name()) == wanted)
            .ok_or_else(|| CardError::unknown("font family", s))
    }
}

impl From<FontFamily> for String {
    fn from(family: FontFamily) -> Self {
        family.name().to_string()
    }
}

impl TryFrom<String> for FontFamily {
    type Error = CardError;

    fn try_from(value: String) -> CardResult<Self> {
        value.parse()
    }
}

/// Message font size in points, one of [`FontSize::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct FontSize(u8);

impl FontSize {
    /// Every selectable size, ascending.
    pub const ALL: [Self; 7] = [
        Self(12),
        Self(14),
        Self(16),
        Self(18),
        Self(20),
        Self(24),
        Self(28),
    ];

    /// Size in points.
    #[must_use]
    pub const fn points(self) -> u8 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(16)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

impl TryFrom<u8> for FontSize {
    type Error = CardError;

    fn try_from(points: u8) -> CardResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.0 == points)
            .ok_or_else(|| CardError::unknown("font size", points.to_string()))
    }
}

impl From<FontSize> for u8 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

impl FromStr for FontSize {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        let digits = s.trim().trim_end_matches("pt");
        let points: u8 = digits
            .parse()
            .map_err(|_| CardError::unknown("font size", s))?;
        Self::try_from(points)
    }
}

/// Bold / italic / underline toggles. All three are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct TextStyle {
    /// Bold weight.
    #[serde(rename = "isBold")]
    pub bold: bool,
    /// Italic slant.
    #[serde(rename = "isItalic")]
    pub italic: bool,
    /// Underline decoration.
    #[serde(rename = "isUnderline")]
    pub underline: bool,
}

/// A symbol that can be stamped onto the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Decoration {
    /// 🎉
    PartyPopper,
    /// 🎂
    Cake,
    /// 🎈
    Balloon,
    /// 🎁
    Gift,
    /// ✨
    Sparkles,
}

impl Decoration {
    /// Every decoration offered by the composer, in display order.
    pub const ALL: [Self; 5] = [
        Self::PartyPopper,
        Self::Cake,
        Self::Balloon,
        Self::Gift,
        Self::Sparkles,
    ];

    /// The emoji drawn on the card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::PartyPopper => "🎉",
            Self::Cake => "🎂",
            Self::Balloon => "🎈",
            Self::Gift => "🎁",
            Self::Sparkles => "✨",
        }
    }

    /// ASCII name, for hosts without emoji input.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PartyPopper => "party",
            Self::Cake => "cake",
            Self::Balloon => "balloon",
            Self::Gift => "gift",
            Self::Sparkles => "sparkles",
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Decoration {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        let trimmed = s.trim();
        let wanted = normalize(trimmed);
        Self::ALL
            .into_iter()
            .find(|d| d.symbol() == trimmed || d.name() == wanted)
            .ok_or_else(|| CardError::unknown("decoration", s))
    }
}

impl From<Decoration> for String {
    fn from(decoration: Decoration) -> Self {
        decoration.symbol().to_string()
    }
}

impl TryFrom<String> for Decoration {
    type Error = CardError;

    fn try_from(value: String) -> CardResult<Self> {
        value.parse()
    }
}

/// Supported photo formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
    /// WebP image.
    WebP,
    /// GIF image.
    Gif,
    /// HEIC image (camera roll default on many phones).
    Heic,
}

impl ImageFormat {
    /// Guess the format from a file extension, case-insensitively.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            "gif" => Some(Self::Gif),
            "heic" | "heif" => Some(Self::Heic),
            _ => None,
        }
    }
}

/// A photo on the local device, as handed back by the image picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalImage {
    /// Resource URI (e.g. `file:///...`).
    pub uri: String,
    /// Image format.
    pub format: ImageFormat,
}

impl LocalImage {
    /// Create a new local image reference.
    #[must_use]
    pub fn new(uri: impl Into<String>, format: ImageFormat) -> Self {
        Self {
            uri: uri.into(),
            format,
        }
    }
}

/// The card photo: either absent or a local resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<LocalImage>", into = "Option<LocalImage>")]
pub enum ImageRef {
    /// No photo attached.
    #[default]
    Absent,
    /// A photo picked from the device library.
    Local(LocalImage),
}

impl ImageRef {
    /// Borrow the local image, if any.
    #[must_use]
    pub fn as_local(&self) -> Option<&LocalImage> {
        match self {
            Self::Absent => None,
            Self::Local(image) => Some(image),
        }
    }

    /// Check if no photo is attached.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<LocalImage>> for ImageRef {
    fn from(image: Option<LocalImage>) -> Self {
        image.map_or(Self::Absent, Self::Local)
    }
}

impl From<ImageRef> for Option<LocalImage> {
    fn from(image: ImageRef) -> Self {
        match image {
            ImageRef::Absent => None,
            ImageRef::Local(local) => Some(local),
        }
    }
}

/// One card's editable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    recipient_name: String,
    message: String,
    background_color: BackgroundColor,
    font_family: FontFamily,
    font_size: FontSize,
    #[serde(flatten)]
    style: TextStyle,
    image: ImageRef,
    decorations: Vec<Decoration>,
}

impl CardData {
    /// Create a blank card with default styling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipient's name.
    #[must_use]
    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    /// Card message; may span several lines.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Background color.
    #[must_use]
    pub const fn background_color(&self) -> BackgroundColor {
        self.background_color
    }

    /// Message font family.
    #[must_use]
    pub const fn font_family(&self) -> FontFamily {
        self.font_family
    }

    /// Message font size.
    #[must_use]
    pub const fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Bold / italic / underline state.
    #[must_use]
    pub const fn style(&self) -> TextStyle {
        self.style
    }

    /// Whether the message is bold.
    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.style.bold
    }

    /// Whether the message is italic.
    #[must_use]
    pub const fn is_italic(&self) -> bool {
        self.style.italic
    }

    /// Whether the message is underlined.
    #[must_use]
    pub const fn is_underline(&self) -> bool {
        self.style.underline
    }

    /// Attached photo.
    #[must_use]
    pub const fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Decorations in the order they were added.
    #[must_use]
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Copy with a new recipient name.
    #[must_use]
    pub fn with_recipient_name(&self, name: impl Into<String>) -> Self {
        Self {
            recipient_name: name.into(),
            ..self.clone()
        }
    }

    /// Copy with a new message.
    #[must_use]
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self.clone()
        }
    }

    /// Copy with a new background color.
    #[must_use]
    pub fn with_background(&self, color: BackgroundColor) -> Self {
        Self {
            background_color: color,
            ..self.clone()
        }
    }

    /// Copy with a new font family.
    #[must_use]
    pub fn with_font_family(&self, family: FontFamily) -> Self {
        Self {
            font_family: family,
            ..self.clone()
        }
    }

    /// Copy with a new font size.
    #[must_use]
    pub fn with_font_size(&self, size: FontSize) -> Self {
        Self {
            font_size: size,
            ..self.clone()
        }
    }

    /// Copy with bold flipped.
    #[must_use]
    pub fn toggled_bold(&self) -> Self {
        let mut style = self.style;
        style.bold = !style.bold;
        self.with_style(style)
    }

    /// Copy with italic flipped.
    #[must_use]
    pub fn toggled_italic(&self) -> Self {
        let mut style = self.style;
        style.italic = !style.italic;
        self.with_style(style)
    }

    /// Copy with underline flipped.
    #[must_use]
    pub fn toggled_underline(&self) -> Self {
        let mut style = self.style;
        style.underline = !style.underline;
        self.with_style(style)
    }

    fn with_style(&self, style: TextStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    /// Copy with one more decoration at the end. Duplicates are kept.
    #[must_use]
    pub fn with_decoration(&self, decoration: Decoration) -> Self {
        let mut decorations = self.decorations.clone();
        decorations.push(decoration);
        Self {
            decorations,
            ..self.clone()
        }
    }

    /// Copy with a new photo.
    #[must_use]
    pub fn with_image(&self, image: ImageRef) -> Self {
        Self {
            image,
            ..self.clone()
        }
    }

    /// Serialize the card to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CardResult<String> {
        serde_json::to_string_pretty(self).map_err(CardError::Serialization)
    }

    /// Deserialize a card from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an option outside
    /// its option set.
    pub fn from_json(json: &str) -> CardResult<Self> {
        serde_json::from_str(json).map_err(CardError::Serialization)
    }
}

/// Card height for a given width.
#[must_use]
pub fn card_height(width: f32) -> f32 {
    width * CARD_ASPECT_RATIO
}

/// Photo size `(width, height)` inside a card of the given width.
#[must_use]
pub fn photo_size(card_width: f32) -> (f32, f32) {
    let width = (card_width - PHOTO_INSET).max(0.0);
    (width, width * PHOTO_ASPECT_RATIO)
}
