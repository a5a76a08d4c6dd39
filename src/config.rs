//! Tooltip styling configuration.
//!
//! `TooltipConfig` is a plain value: callers build one (usually from
//! `Default`), tweak fields, and hand it to an attachment. The only
//! transform is [`TooltipConfig::with_side`]. Configs can also be stored as
//! JSON, which the demo binary reads from `~/.config/arrow-tooltip/tooltip.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use iced::{Color, Padding};
use serde::{Deserialize, Serialize};

use crate::widget::TooltipSide;
use crate::{Error, Result};

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arrow-tooltip")
        .join("tooltip.json")
}

/// Visual and behavioral parameters of one tooltip attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub side: TooltipSide,
    pub margin_x: f32,
    pub margin_y: f32,

    #[serde(with = "rgba")]
    pub background_color: Color,
    pub border_radius: f32,
    pub border_width: f32,
    #[serde(with = "rgba")]
    pub border_color: Color,

    pub content_padding_left: f32,
    pub content_padding_right: f32,
    pub content_padding_top: f32,
    pub content_padding_bottom: f32,

    pub show_arrow: bool,
    pub arrow_width: f32,
    pub arrow_height: f32,

    pub enable_animation: bool,
    /// Nudge distance along the main axis.
    pub animation_offset: f32,
    /// Seconds between nudges.
    pub animation_time: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            side: TooltipSide::Bottom,
            margin_x: 8.0,
            margin_y: 8.0,
            background_color: Color::WHITE,
            border_radius: 8.0,
            border_width: 2.0,
            border_color: Color::BLACK,
            content_padding_left: 8.0,
            content_padding_right: 8.0,
            content_padding_top: 4.0,
            content_padding_bottom: 4.0,
            show_arrow: true,
            arrow_width: 12.0,
            arrow_height: 6.0,
            enable_animation: false,
            animation_offset: 10.0,
            animation_time: 1.0,
        }
    }
}

impl TooltipConfig {
    /// Copy of this config with only `side` replaced.
    pub fn with_side(&self, side: TooltipSide) -> Self {
        Self { side, ..self.clone() }
    }

    /// Content insets as an iced padding.
    pub fn padding(&self) -> Padding {
        Padding {
            top: self.content_padding_top,
            right: self.content_padding_right,
            bottom: self.content_padding_bottom,
            left: self.content_padding_left,
        }
    }

    /// Space the arrow takes between anchor and bubble (0 when hidden).
    pub fn actual_arrow_height(&self) -> f32 {
        if self.show_arrow { self.arrow_height } else { 0.0 }
    }

    /// Nudge period as a `Duration`. Invalid times map to zero.
    pub fn animation_period(&self) -> Duration {
        Duration::try_from_secs_f64(self.animation_time).unwrap_or(Duration::ZERO)
    }

    /// Border stroke color; a zero-width border is drawn fully transparent.
    pub fn stroke_color(&self) -> Color {
        if self.border_width == 0.0 { Color::TRANSPARENT } else { self.border_color }
    }

    /// Reject negative or non-finite lengths.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("margin_x", self.margin_x),
            ("margin_y", self.margin_y),
            ("border_radius", self.border_radius),
            ("border_width", self.border_width),
            ("content_padding_left", self.content_padding_left),
            ("content_padding_right", self.content_padding_right),
            ("content_padding_top", self.content_padding_top),
            ("content_padding_bottom", self.content_padding_bottom),
            ("arrow_width", self.arrow_width),
            ("arrow_height", self.arrow_height),
            ("animation_offset", self.animation_offset),
        ];
        for (field, value) in lengths {
            check_length(field, f64::from(value))?;
        }
        check_length("animation_time", self.animation_time)
    }

    /// Load and validate a config from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded tooltip config from {}", path.display());
        Ok(config)
    }

    /// Write this config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn check_length(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidLength { field, value })
    }
}

/// Colors are stored as `[r, g, b, a]` arrays.
mod rgba {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, s: S) -> Result<S::Ok, S::Error> {
        [color.r, color.g, color.b, color.a].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Color, D::Error> {
        let [r, g, b, a] = <[f32; 4]>::deserialize(d)?;
        Ok(Color::from_rgba(r, g, b, a))
    }
}
