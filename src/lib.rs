//! Arrow Tooltip
//!
//! A tooltip overlay for iced: a rounded bubble with a directional arrow,
//! placed on one of nine sides of an anchor element, with an optional
//! looping nudge animation.

pub mod animation;
pub mod attach;
pub mod config;
pub mod controller;
pub mod error;
pub mod iced_app;
pub mod layout;
pub mod masking;
pub mod widget;

pub use attach::{resolve_config, Attachment};
pub use config::TooltipConfig;
pub use controller::TooltipController;
pub use error::{Error, Result};
pub use iced_app::{tooltip, Tooltip};
pub use layout::BubbleLayout;
pub use widget::TooltipSide;
