//! App struct definition and core initialization.

use std::time::Instant;

use iced::Task;

use super::Message;
use crate::attach::Attachment;
use crate::config::TooltipConfig;
use crate::controller::TooltipController;
use crate::widget::TooltipSide;

/// Startup options for the demo, usually from the command line.
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Base config for every anchor.
    pub config: Option<TooltipConfig>,
    /// Show a single anchor on this side instead of the full grid.
    pub side: Option<TooltipSide>,
    /// Start with the tooltips hidden.
    pub start_hidden: bool,
}

/// One anchor in the demo and its tooltip state.
pub struct DemoTooltip {
    pub side: TooltipSide,
    pub controller: TooltipController,
}

/// Application state.
pub struct App {
    pub(crate) tooltips: Vec<DemoTooltip>,
    pub(crate) presented: bool,
}

impl App {
    pub fn new(options: DemoOptions) -> Self {
        let sides: Vec<TooltipSide> = match options.side {
            Some(side) => vec![side],
            None => TooltipSide::ALL.to_vec(),
        };

        let tooltips = sides
            .into_iter()
            .map(|side| {
                let mut attachment = Attachment::new().side(side);
                if let Some(config) = &options.config {
                    attachment = attachment.config(config.clone());
                }
                DemoTooltip { side, controller: attachment.controller() }
            })
            .collect();

        let mut app = Self { tooltips, presented: false };
        app.set_presented(!options.start_hidden, Instant::now());
        app
    }

    pub fn boot(options: DemoOptions) -> (Self, Task<Message>) {
        (Self::new(options), Task::none())
    }

    pub fn title(&self) -> String {
        let state = if self.presented { "shown" } else { "hidden" };
        format!("Arrow Tooltip Demo  [{} tooltips {}]", self.tooltips.len(), state)
    }

    pub(crate) fn set_presented(&mut self, presented: bool, now: Instant) {
        self.presented = presented;
        for t in &mut self.tooltips {
            t.controller.set_presented(presented, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_every_side() {
        let app = App::new(DemoOptions::default());
        let sides: Vec<_> = app.tooltips.iter().map(|t| t.side).collect();
        assert_eq!(sides, TooltipSide::ALL.to_vec());
        assert!(app.presented);
        assert!(app.tooltips.iter().all(|t| t.controller.is_presented()));
    }

    #[test]
    fn test_single_side_overrides_config_side() {
        let options = DemoOptions {
            config: Some(TooltipConfig::default().with_side(TooltipSide::Top)),
            side: Some(TooltipSide::Trailing),
            start_hidden: true,
        };
        let app = App::new(options);
        assert_eq!(app.tooltips.len(), 1);
        assert_eq!(app.tooltips[0].controller.config().side, TooltipSide::Trailing);
        assert!(!app.tooltips[0].controller.is_presented());
    }
}
