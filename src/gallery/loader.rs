// SPDX-License-Identifier: MPL-2.0
//! Decoding files into tile content.
//!
//! GIFs with more than one frame become an [`Animation`]; every other
//! supported file decodes into a single [`StillImage`].

use super::tile::{Animation, AnimationFrame, StillImage, TileContent};
use crate::config::defaults::DEFAULT_FRAME_DELAY_MS;
use crate::error::{Error, Result};
use image_rs::codecs::gif::GifDecoder;
use image_rs::AnimationDecoder;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

/// Extensions accepted by file dialogs and external drops.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp"];

/// Checks the extension only (case-insensitive).
#[must_use]
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

fn is_gif(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
}

/// Reads and decodes `path`.
pub fn load_tile_content<P: AsRef<Path>>(path: P) -> Result<TileContent> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    if is_gif(path) {
        if let Some(animation) = decode_animation(&bytes)? {
            tracing::debug!(
                path = %path.display(),
                frames = animation.frame_count(),
                "loaded animation"
            );
            return Ok(TileContent::Animated(animation));
        }
    }

    let still = decode_still(&bytes)?;
    tracing::debug!(path = %path.display(), width = still.width, height = still.height, "loaded image");
    Ok(TileContent::Still(still))
}

/// Decodes any supported encoded image into RGBA.
pub fn decode_still(bytes: &[u8]) -> Result<StillImage> {
    let img = image_rs::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(StillImage::from_rgba(width, height, rgba.into_vec()))
}

/// Returns `None` for single-frame GIFs.
fn decode_animation(bytes: &[u8]) -> Result<Option<Animation>> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| Error::Image(e.to_string()))?;

    if frames.len() < 2 {
        return Ok(None);
    }

    let frames = frames
        .into_iter()
        .map(|frame| {
            let delay = Duration::from(frame.delay());
            let buffer = frame.into_buffer();
            let (width, height) = buffer.dimensions();
            AnimationFrame {
                image: StillImage::from_rgba(width, height, buffer.into_vec()),
                delay: if delay.is_zero() {
                    Duration::from_millis(DEFAULT_FRAME_DELAY_MS)
                } else {
                    delay
                },
            }
        })
        .collect();

    Ok(Animation::new(frames))
}

/// Wraps clipboard pixels into tile content.
#[must_use]
pub fn from_clipboard(width: usize, height: usize, pixels: Vec<u8>) -> Option<TileContent> {
    let width = u32::try_from(width).ok()?;
    let height = u32::try_from(height).ok()?;
    if pixels.len() != (width as usize) * (height as usize) * 4 {
        return None;
    }
    Some(TileContent::Still(StillImage::from_rgba(width, height, pixels)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::codecs::gif::GifEncoder;
    use image_rs::{Delay, Frame, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_gif(path: &Path, frame_count: usize, delay_ms: u32) {
        let file = fs::File::create(path).expect("create gif");
        let mut encoder = GifEncoder::new(file);
        let frames = (0..frame_count).map(|i| {
            let shade = (i * 60) as u8;
            let buffer = RgbaImage::from_pixel(4, 2, Rgba([shade, 0, 0, 255]));
            Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
        });
        encoder.encode_frames(frames).expect("encode gif");
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image("photo.JPG"));
        assert!(is_supported_image("/a/b/anim.gif"));
        assert!(is_supported_image("x.WebP"));
        assert!(!is_supported_image("clip.mp4"));
        assert!(!is_supported_image("no_extension"));
    }

    #[test]
    fn png_loads_as_still() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tile.png");
        RgbaImage::from_pixel(3, 5, Rgba([1, 2, 3, 255]))
            .save(&path)
            .expect("save png");

        let content = load_tile_content(&path).expect("load png");
        assert!(!content.is_animated());
        assert_eq!(content.dimensions(), (3, 5));
    }

    #[test]
    fn multi_frame_gif_loads_as_animation() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("anim.gif");
        write_gif(&path, 3, 40);

        match load_tile_content(&path).expect("load gif") {
            TileContent::Animated(animation) => {
                assert_eq!(animation.frame_count(), 3);
                assert_eq!(animation.dimensions(), (4, 2));
            }
            TileContent::Still(_) => panic!("expected animation"),
        }
    }

    #[test]
    fn single_frame_gif_loads_as_still() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("still.gif");
        write_gif(&path, 1, 0);

        assert!(!load_tile_content(&path).expect("load gif").is_animated());
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("write");

        assert!(matches!(load_tile_content(&path), Err(Error::Image(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_tile_content("/nonexistent/iced_gallery.png"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn clipboard_pixels_must_match_dimensions() {
        assert!(from_clipboard(2, 2, vec![0; 16]).is_some());
        assert!(from_clipboard(2, 2, vec![0; 15]).is_none());
    }
}
