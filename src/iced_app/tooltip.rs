//! Tooltip widget: an anchor element with a floating bubble overlay.
//!
//! The widget lays out and draws only the anchor. While the controller is
//! presented it contributes an overlay that lays out the padded tooltip
//! content (reporting its size back through `on_measure`), draws the bubble
//! chrome around it and then the content on top.

use iced::advanced::layout::{self, Layout};
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::container;
use iced::{mouse, Element, Event, Length, Rectangle, Renderer, Size, Theme, Vector};

use crate::controller::TooltipController;

/// Attach `content` as a tooltip to `anchor`, styled and placed by `controller`.
pub fn tooltip<'a, Message: 'a>(
    anchor: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    controller: &'a TooltipController,
) -> Tooltip<'a, Message> {
    Tooltip::new(anchor, content, controller)
}

pub struct Tooltip<'a, Message> {
    anchor: Element<'a, Message>,
    content: Element<'a, Message>,
    controller: &'a TooltipController,
    on_measure: Option<Box<dyn Fn(Size) -> Message + 'a>>,
}

impl<'a, Message: 'a> Tooltip<'a, Message> {
    pub fn new(
        anchor: impl Into<Element<'a, Message>>,
        content: impl Into<Element<'a, Message>>,
        controller: &'a TooltipController,
    ) -> Self {
        let padded = container(content).padding(controller.config().padding());
        Self {
            anchor: anchor.into(),
            content: padded.into(),
            controller,
            on_measure: None,
        }
    }

    /// Message to emit when the padded content lays out at a size different
    /// from the controller's measured size.
    pub fn on_measure(mut self, f: impl Fn(Size) -> Message + 'a) -> Self {
        self.on_measure = Some(Box::new(f));
        self
    }
}

impl<'a, Message> Widget<Message, Theme, Renderer> for Tooltip<'a, Message> {
    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.anchor), Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[self.anchor.as_widget(), self.content.as_widget()]);
    }

    fn size(&self) -> Size<Length> {
        self.anchor.as_widget().size()
    }

    fn layout(&mut self, tree: &mut Tree, renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        self.anchor.as_widget_mut().layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.anchor.as_widget().draw(&tree.children[0], renderer, theme, style, layout, cursor, viewport);
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.anchor.as_widget_mut().operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.anchor.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.anchor.as_widget().mouse_interaction(&tree.children[0], layout, cursor, viewport, renderer)
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let mut children = tree.children.iter_mut();
        let anchor_tree = children.next()?;
        let content_tree = children.next()?;

        let anchor_overlay = self.anchor.as_widget_mut().overlay(
            anchor_tree,
            layout,
            renderer,
            viewport,
            translation,
        );

        let bubble = if self.controller.is_presented() {
            Some(overlay::Element::new(Box::new(Bubble {
                content: &mut self.content,
                tree: content_tree,
                anchor: layout.bounds() + translation,
                controller: self.controller,
                on_measure: self.on_measure.as_deref(),
            })))
        } else {
            None
        };

        if anchor_overlay.is_none() && bubble.is_none() {
            return None;
        }
        Some(overlay::Group::with_children(anchor_overlay.into_iter().chain(bubble).collect()).overlay())
    }
}

impl<'a, Message: 'a> From<Tooltip<'a, Message>> for Element<'a, Message> {
    fn from(tooltip: Tooltip<'a, Message>) -> Self {
        Element::new(tooltip)
    }
}

/// The floating part: bubble chrome plus the padded content.
struct Bubble<'a, 'b, Message> {
    content: &'b mut Element<'a, Message>,
    tree: &'b mut Tree,
    /// Anchor bounds in overlay (screen) space.
    anchor: Rectangle,
    controller: &'b TooltipController,
    on_measure: Option<&'b (dyn Fn(Size) -> Message + 'a)>,
}

impl<Message> overlay::Overlay<Message, Theme, Renderer> for Bubble<'_, '_, Message> {
    fn layout(&mut self, renderer: &Renderer, bounds: Size) -> layout::Node {
        let limits = layout::Limits::new(Size::ZERO, bounds);
        let node = self.content.as_widget_mut().layout(self.tree, renderer, &limits);
        let body = self.controller.layout(self.anchor.size()).body;
        node.move_to(self.anchor.position() + Vector::new(body.x, body.y))
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        let bubble = self
            .controller
            .layout(self.anchor.size())
            .translate(Vector::new(self.anchor.x, self.anchor.y));
        super::bubble::draw_bubble(renderer, &bubble);

        self.content
            .as_widget()
            .draw(self.tree, renderer, theme, style, layout, cursor, &layout.bounds());
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) {
        let measured = layout.bounds().size();
        if let Some(on_measure) = self.on_measure
            && measured != self.controller.measured_size()
        {
            shell.publish(on_measure(measured));
        }

        self.content.as_widget_mut().update(
            self.tree,
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            &layout.bounds(),
        );
    }
}
