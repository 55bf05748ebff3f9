//! Native image picker
//!
//! Opens the platform file dialog off the UI thread and stages the chosen
//! file as an upload-ready [`StagedImage`].

use gupshup_core::{ChatError, ChatResult, StagedImage};
use rfd::FileDialog;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Let the user pick an image.
///
/// `None` means the dialog was cancelled. Oversized or non-image files come
/// back as [`ChatError::InvalidImage`] carrying a displayable reason.
pub async fn pick_image(title: &'static str, max_bytes: usize) -> Option<ChatResult<StagedImage>> {
    let picked = tokio::task::spawn_blocking(move || {
        let path = FileDialog::new()
            .add_filter("images", IMAGE_EXTENSIONS)
            .set_title(title)
            .pick_file()?;
        Some(StagedImage::from_path(&path, max_bytes))
    })
    .await;

    match picked {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "File picker task failed");
            Some(Err(ChatError::InvalidImage(
                "Could not open the file picker".to_string(),
            )))
        }
    }
}
