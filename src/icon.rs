// SPDX-License-Identifier: MPL-2.0
//! Window icon and title-bar logo, rasterized from the embedded branding SVG.

use iced::widget::image;
use iced::window::{icon, Icon};
use resvg::usvg;

const LOGO_SVG: &[u8] = include_bytes!("../assets/branding/iced_gallery.svg");

/// Window icon edge length in pixels.
const ICON_SIZE: u32 = 128;

/// Renders the logo into a square RGBA buffer. `None` if the SVG does not parse.
fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(LOGO_SVG, &usvg::Options::default()).ok()?;
    let orig = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / orig.width(),
        size as f32 / orig.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

/// Icon shown by the window manager and taskbar.
pub fn load_window_icon() -> Option<Icon> {
    let pixels = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixels, ICON_SIZE, ICON_SIZE).ok()
}

/// Handle for the small logo drawn in the custom title bar.
pub fn logo_handle(size: u32) -> Option<image::Handle> {
    rasterize(size).map(|pixels| image::Handle::from_rgba(size, size, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_requested_size() {
        let pixels = rasterize(32).expect("embedded logo should render");
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn window_icon_is_available() {
        assert!(load_window_icon().is_some());
    }
}
