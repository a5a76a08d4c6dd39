//! App::update() and message handling.

use std::time::Instant;

use iced::Task;

use super::app::App;
use super::Message;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TogglePresented => {
                self.set_presented(!self.presented, Instant::now());
            }
            Message::Tick(now) => {
                for t in &mut self.tooltips {
                    t.controller.tick(now);
                }
            }
            Message::Measured(index, size) => {
                if let Some(t) = self.tooltips.get_mut(index) {
                    t.controller.record_measurement(size);
                } else {
                    tracing::warn!("Measurement for unknown tooltip {}", index);
                }
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iced_app::DemoOptions;
    use iced::Size;

    #[test]
    fn test_toggle_hides_and_shows_all() {
        let mut app = App::new(DemoOptions::default());
        let _ = app.update(Message::TogglePresented);
        assert!(!app.presented);
        assert!(app.tooltips.iter().all(|t| !t.controller.is_mounted()));

        let _ = app.update(Message::TogglePresented);
        assert!(app.tooltips.iter().all(|t| t.controller.is_mounted()));
    }

    #[test]
    fn test_measured_routes_to_one_tooltip() {
        let mut app = App::new(DemoOptions::default());
        let _ = app.update(Message::Measured(3, Size::new(120.0, 24.0)));
        assert_eq!(app.tooltips[3].controller.measured_size(), Size::new(120.0, 24.0));
        assert_eq!(app.tooltips[4].controller.measured_size(), crate::controller::PLACEHOLDER_SIZE);

        // Out of range is ignored.
        let _ = app.update(Message::Measured(42, Size::new(1.0, 1.0)));
    }
}
