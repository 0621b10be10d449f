// SPDX-License-Identifier: MPL-2.0
//! A clipping frame that shows only the left part of an image.
//!
//! The inner image keeps its full size and stays anchored at the frame's
//! top-left corner; the frame is laid out at the crop size and everything
//! outside it is clipped.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::widget::image;
use iced::{ContentFit, Element, Length, Rectangle, Size};
use std::path::Path;

/// Clipped view over a full-size child.
pub struct CroppedImage<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    crop: Size,
}

impl<'a, Message, Theme, Renderer> CroppedImage<'a, Message, Theme, Renderer> {
    /// Wraps `content`, showing only its top-left `crop_width` × `crop_height`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        crop_width: f32,
        crop_height: f32,
    ) -> Self {
        Self {
            content: content.into(),
            crop: Size::new(sanitize(crop_width), sanitize(crop_height)),
        }
    }

    /// Size of the clip frame after sanitizing.
    pub fn crop_size(&self) -> Size {
        self.crop
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for CroppedImage<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(
            Length::Fixed(self.crop.width),
            Length::Fixed(self.crop.height),
        )
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        _limits: &layout::Limits,
    ) -> layout::Node {
        // The child is measured on its own so the frame cannot squash it
        let child_limits = layout::Limits::new(Size::ZERO, Size::INFINITE);
        let child = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &child_limits);

        layout::Node::with_children(self.crop, vec![child])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        let Some(child_layout) = layout.children().next() else {
            return;
        };

        renderer.with_layer(bounds, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        });
    }
}

impl<'a, Message, Theme, Renderer> From<CroppedImage<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(cropped: CroppedImage<'a, Message, Theme, Renderer>) -> Self {
        Self::new(cropped)
    }
}

/// Builds a cropped view of the image file at `path`.
///
/// The image is drawn at `width` × `height` with cover fitting, and only the
/// `crop_width` × `crop_height` region from its top-left corner is visible.
pub fn cropped_image<'a, Message: 'a>(
    path: &Path,
    crop_width: f32,
    crop_height: f32,
    width: f32,
    height: f32,
) -> CroppedImage<'a, Message, iced::Theme, iced::Renderer> {
    let picture = image(image::Handle::from_path(path))
        .width(Length::Fixed(sanitize(width)))
        .height(Length::Fixed(sanitize(height)))
        .content_fit(ContentFit::Cover);

    CroppedImage::new(picture, crop_width, crop_height)
}

/// Negative or non-finite sizes collapse to zero.
fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::Space;

    #[test]
    fn sanitize_keeps_positive_values() {
        assert_eq!(sanitize(151.5), 151.5);
    }

    #[test]
    fn sanitize_zeroes_invalid_values() {
        assert_eq!(sanitize(-3.0), 0.0);
        assert_eq!(sanitize(f32::NAN), 0.0);
        assert_eq!(sanitize(f32::INFINITY), 0.0);
    }

    #[test]
    fn crop_size_is_sanitized() {
        let cropped: CroppedImage<'_, (), iced::Theme, iced::Renderer> =
            cropped_image(Path::new("missing.png"), f32::NAN, 400.0, 300.0, 400.0);
        assert_eq!(cropped.crop_size(), Size::new(0.0, 400.0));
    }

    #[test]
    fn frame_takes_crop_size_while_child_keeps_full_size() {
        let child = Space::new()
            .width(Length::Fixed(300.0))
            .height(Length::Fixed(400.0));
        let mut element: Element<'_, (), iced::Theme, ()> =
            CroppedImage::new(child, 151.5, 400.0).into();
        let mut tree = widget::Tree::new(&element);

        let node = element.as_widget_mut().layout(
            &mut tree,
            &(),
            &layout::Limits::new(Size::ZERO, Size::new(151.5, 400.0)),
        );

        assert_eq!(node.size(), Size::new(151.5, 400.0));
        assert_eq!(node.children().len(), 1);
        let inner = &node.children()[0];
        assert_eq!(inner.size(), Size::new(300.0, 400.0));
        assert_eq!(inner.bounds().x, 0.0);
        assert_eq!(inner.bounds().y, 0.0);
    }
}
