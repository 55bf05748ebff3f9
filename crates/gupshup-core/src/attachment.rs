//! Locally staged images
//!
//! A file the user picked but has not uploaded yet. Validated on staging so
//! the composer never holds something the image host would refuse.

use std::path::Path;

use base64::Engine;
use image::ImageFormat;

use crate::error::{ChatError, ChatResult};

/// Upper bound for chat attachments.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
/// Upper bound for profile photos.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone, PartialEq, Eq)]
pub struct StagedImage {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for StagedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagedImage")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl StagedImage {
    /// Read and validate an image file.
    pub fn from_path(path: impl AsRef<Path>, max_bytes: usize) -> ChatResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        Self::from_bytes(file_name, bytes, max_bytes)
    }

    /// Validate raw bytes: size limit first, then format sniffing.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>, max_bytes: usize) -> ChatResult<Self> {
        if bytes.len() > max_bytes {
            return Err(ChatError::InvalidImage(format!(
                "Image must be less than {}MB",
                max_bytes / (1024 * 1024)
            )));
        }

        let format = image::guess_format(&bytes)
            .map_err(|_| ChatError::InvalidImage("Please select an image file".to_string()))?;

        Ok(Self {
            file_name: file_name.into(),
            mime: mime_for(format).to_string(),
            bytes,
        })
    }

    /// `data:` URI for showing the image before it is uploaded.
    pub fn preview_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime, encoded)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mime_for(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Ico => "image/x-icon",
        ImageFormat::Tiff => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// Smallest valid PNG signature + IHDR start; enough for format sniffing.
    pub(crate) const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R',
    ];

    #[test]
    fn test_png_bytes_accepted() {
        let img = StagedImage::from_bytes("cat.png", PNG_HEADER.to_vec(), MAX_IMAGE_BYTES).unwrap();
        assert_eq!(img.mime, "image/png");
        assert!(img.preview_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_non_image_rejected() {
        let err = StagedImage::from_bytes("notes.txt", b"hello world".to_vec(), MAX_IMAGE_BYTES)
            .unwrap_err();
        assert_eq!(err.user_message(), "Please select an image file");
    }

    #[test]
    fn test_oversized_rejected_before_sniffing() {
        let mut bytes = PNG_HEADER.to_vec();
        bytes.resize(MAX_AVATAR_BYTES + 1, 0);
        let err = StagedImage::from_bytes("big.png", bytes, MAX_AVATAR_BYTES).unwrap_err();
        assert_eq!(err.user_message(), "Image must be less than 2MB");
    }

    #[test]
    fn test_from_path_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(PNG_HEADER).unwrap();

        let img = StagedImage::from_path(&path, MAX_AVATAR_BYTES).unwrap();
        assert_eq!(img.file_name, "avatar.png");
        assert_eq!(img.len(), PNG_HEADER.len());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = StagedImage::from_path("/definitely/not/here.png", MAX_IMAGE_BYTES).unwrap_err();
        assert!(matches!(err, ChatError::Io(_)));
    }
}
