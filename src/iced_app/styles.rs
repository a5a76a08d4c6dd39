//! Demo styling.

use iced::widget::{button, container};
use iced::{Border, Theme};

pub mod palette {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.93, 0.93, 0.95);
    pub const ANCHOR_BG: Color = Color::from_rgb(0.20, 0.36, 0.62);
    pub const ANCHOR_BORDER: Color = Color::from_rgb(0.12, 0.22, 0.40);
    pub const TEXT_LIGHT: Color = Color::from_rgb(0.96, 0.96, 0.98);
    pub const TEXT_DARK: Color = Color::from_rgb(0.10, 0.10, 0.12);
    pub const TOGGLE_BG: Color = Color::from_rgb(0.85, 0.65, 0.13);
    pub const TOGGLE_HOVER: Color = Color::from_rgb(0.95, 0.75, 0.20);
}

/// Style for the anchor boxes the tooltips attach to.
pub fn anchor_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::ANCHOR_BG)),
        text_color: Some(palette::TEXT_LIGHT),
        border: Border {
            color: palette::ANCHOR_BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the show/hide button.
pub fn toggle_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => palette::TOGGLE_HOVER,
        button::Status::Active | button::Status::Disabled => palette::TOGGLE_BG,
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color: palette::TEXT_DARK,
        border: Border {
            color: palette::ANCHOR_BORDER,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}
