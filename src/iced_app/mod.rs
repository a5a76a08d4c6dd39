//! Iced integration: the tooltip widget plus a demo application.
//!
//! This module is split into several submodules:
//! - `tooltip`: the `Tooltip` widget and its overlay
//! - `bubble`: canvas drawing of the bubble chrome
//! - `app`: demo App struct and initialization
//! - `view`: App::view() and subscription
//! - `update`: App::update() and message handling
//! - `styles`: demo styling and color palette

mod app;
mod bubble;
mod styles;
pub mod tooltip;
mod update;
mod view;

use std::time::Instant;

use iced::Size;

pub use app::{App, DemoOptions};
pub use bubble::{draw_bubble, paint_bubble};
pub use styles::palette;
pub use tooltip::{tooltip, Tooltip};

/// Demo application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show or hide every tooltip.
    TogglePresented,
    /// Animation frame tick.
    Tick(Instant),
    /// Tooltip `index` laid out its content at this size.
    Measured(usize, Size),
}

/// Run the demo window.
pub fn run_demo(options: DemoOptions) -> Result<(), Box<dyn std::error::Error>> {
    iced::application(move || App::boot(options.clone()), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()?;

    Ok(())
}
