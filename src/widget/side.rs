//! Tooltip sides: where the bubble sits relative to its anchor.

use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

/// Position of the tooltip bubble relative to the anchor.
///
/// Corner variants are named main-axis first: `LeadingTop` sits to the
/// leading side of the anchor and above it, with the arrow on its bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TooltipSide {
    Center,
    Top,
    #[default]
    Bottom,
    Leading,
    Trailing,
    LeadingTop,
    LeadingBottom,
    TrailingTop,
    TrailingBottom,
}

impl TooltipSide {
    /// Every side, in reading order of a 3x3 grid.
    pub const ALL: [TooltipSide; 9] = [
        Self::LeadingTop,
        Self::Top,
        Self::TrailingTop,
        Self::Leading,
        Self::Center,
        Self::Trailing,
        Self::LeadingBottom,
        Self::Bottom,
        Self::TrailingBottom,
    ];

    /// Parse a side name. Accepts `leadingTop`, `leading-top` and `LEADING_TOP`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "center" => Some(Self::Center),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "leading" => Some(Self::Leading),
            "trailing" => Some(Self::Trailing),
            "leadingtop" => Some(Self::LeadingTop),
            "leadingbottom" => Some(Self::LeadingBottom),
            "trailingtop" => Some(Self::TrailingTop),
            "trailingbottom" => Some(Self::TrailingBottom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::LeadingTop => "leading-top",
            Self::LeadingBottom => "leading-bottom",
            Self::TrailingTop => "trailing-top",
            Self::TrailingBottom => "trailing-bottom",
        }
    }

    pub fn is_leading(&self) -> bool {
        matches!(self, Self::Leading | Self::LeadingTop | Self::LeadingBottom)
    }

    pub fn is_trailing(&self) -> bool {
        matches!(self, Self::Trailing | Self::TrailingTop | Self::TrailingBottom)
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Self::Top | Self::LeadingTop | Self::TrailingTop)
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self, Self::Bottom | Self::LeadingBottom | Self::TrailingBottom)
    }

    /// True for the four two-word sides.
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Self::LeadingTop | Self::LeadingBottom | Self::TrailingTop | Self::TrailingBottom
        )
    }

    /// Arrow rotation in units of π/4.
    ///
    /// Corner variants share the rotation of their vertical edge so the arrow
    /// keeps pointing at the anchor. `Center` has no arrow and reports -1.
    pub fn rotation_class(&self) -> i8 {
        match self {
            Self::Bottom | Self::LeadingBottom | Self::TrailingBottom => 0,
            Self::Leading => 2,
            Self::Top | Self::LeadingTop | Self::TrailingTop => 4,
            Self::Trailing => 6,
            Self::Center => -1,
        }
    }

    /// Arrow rotation in radians, always one of 0, π/2, π or 3π/2.
    pub fn arrow_rotation(&self) -> f32 {
        match self {
            Self::Center => 0.0,
            side => f32::from(side.rotation_class()) * FRAC_PI_4,
        }
    }

    /// One-pixel nudge applied to the arrow fill so it overlaps the body fill
    /// and no anti-aliasing seam shows between them.
    pub fn arrow_background_offset(&self) -> (f32, f32) {
        let dx = if self.is_leading() {
            -1.0
        } else if self.is_trailing() {
            1.0
        } else {
            0.0
        };
        let dy = if self.is_top() {
            -1.0
        } else if self.is_bottom() {
            1.0
        } else {
            0.0
        };
        (dx, dy)
    }
}

impl std::fmt::Display for TooltipSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
