// SPDX-License-Identifier: MPL-2.0
//! The modal dialog currently shown over the gallery, if any.

use crate::gallery::TileId;
use crate::ui::dialogs::settings;

#[derive(Debug, Clone)]
pub enum Dialog {
    Settings(settings::State),
    Theme,
    About,
    Feedback,
    ConfirmExit,
    ImageInfo(TileId),
}
