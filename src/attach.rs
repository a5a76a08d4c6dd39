//! Attachment options: which config and side a tooltip uses.
//!
//! Callers may give a config, a side, both or neither. An explicit side always
//! wins over the side stored in a supplied config, and a missing config means
//! [`TooltipConfig::default`].

use crate::config::TooltipConfig;
use crate::controller::TooltipController;
use crate::widget::TooltipSide;

/// Resolve the effective config for an attachment.
pub fn resolve_config(config: Option<TooltipConfig>, side: Option<TooltipSide>) -> TooltipConfig {
    let config = config.unwrap_or_default();
    match side {
        Some(side) => config.with_side(side),
        None => config,
    }
}

/// Builder for the state behind one attached tooltip.
#[derive(Debug, Clone, Default)]
pub struct Attachment {
    config: Option<TooltipConfig>,
    side: Option<TooltipSide>,
}

impl Attachment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: TooltipConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn side(mut self, side: TooltipSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn resolve(&self) -> TooltipConfig {
        resolve_config(self.config.clone(), self.side)
    }

    /// Controller for this attachment, initially hidden.
    pub fn controller(&self) -> TooltipController {
        TooltipController::new(self.resolve())
    }
}
