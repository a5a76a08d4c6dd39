//! App::view() and subscription methods.

use iced::widget::{button, center, column, container, text, Column, Row};
use iced::{Element, Length, Subscription};

use super::app::{App, DemoTooltip};
use super::styles::{anchor_style, palette, toggle_button_style};
use super::tooltip::tooltip;
use super::Message;

/// Gap between anchors, wide enough that neighbouring bubbles don't overlap.
const GRID_SPACING: f32 = 150.0;
const ANCHOR_WIDTH: f32 = 120.0;
const ANCHOR_HEIGHT: f32 = 40.0;

impl App {
    fn build_anchor(index: usize, t: &DemoTooltip) -> Element<'_, Message> {
        let anchor = container(text(t.side.as_str()).size(14))
            .center_x(ANCHOR_WIDTH)
            .center_y(ANCHOR_HEIGHT)
            .style(anchor_style);

        let content = text(format!("Tooltip on the {} side", t.side)).size(13).color(palette::TEXT_DARK);

        tooltip(anchor, content, &t.controller)
            .on_measure(move |size| Message::Measured(index, size))
            .into()
    }

    /// Anchors in rows of three (a single row when only one side is shown).
    fn build_grid(&self) -> Element<'_, Message> {
        let anchors: Vec<Element<'_, Message>> = self
            .tooltips
            .iter()
            .enumerate()
            .map(|(i, t)| Self::build_anchor(i, t))
            .collect();

        let mut rows = Column::new().spacing(GRID_SPACING);
        let mut anchors = anchors.into_iter().peekable();
        while anchors.peek().is_some() {
            let row = Row::with_children(anchors.by_ref().take(3)).spacing(GRID_SPACING);
            rows = rows.push(row);
        }
        rows.into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let label = if self.presented { "Hide tooltips" } else { "Show tooltips" };
        let toggle = button(text(label).size(14))
            .on_press(Message::TogglePresented)
            .padding([6, 12])
            .style(toggle_button_style);

        let main_column = column![toggle, center(self.build_grid())].spacing(10).padding(10);

        container(main_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(iced::Background::Color(palette::BG_DARK)),
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(self.tooltips.iter().map(|t| t.controller.subscription())).map(Message::Tick)
    }
}
