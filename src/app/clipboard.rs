// SPDX-License-Identifier: MPL-2.0
//! System clipboard access for pasting and copying tile images.

use crate::error::{Error, Result};
use crate::gallery::loader::from_clipboard;
use crate::gallery::{StillImage, TileContent};
use std::borrow::Cow;

/// Reads an image from the clipboard. `Ok(None)` when it holds no image.
pub fn paste() -> Result<Option<TileContent>> {
    let mut clipboard = arboard::Clipboard::new()?;
    match clipboard.get_image() {
        Ok(image) => {
            let content = from_clipboard(image.width, image.height, image.bytes.into_owned());
            if content.is_none() {
                return Err(Error::Clipboard("malformed clipboard image".into()));
            }
            Ok(content)
        }
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn copy(image: &StillImage) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_image(arboard::ImageData {
        width: image.width as usize,
        height: image.height as usize,
        bytes: Cow::Borrowed(image.rgba_bytes()),
    })?;
    tracing::debug!(width = image.width, height = image.height, "image copied");
    Ok(())
}
