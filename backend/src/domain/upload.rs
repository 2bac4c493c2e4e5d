//! Uploaded image formats and naming rules.

use std::fmt;

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Public URL prefix under which stored images are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Format for a declared MIME type; parameters after `;` are ignored.
    ///
    /// # Examples
    /// ```
    /// use coaching_site::domain::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_content_type("image/PNG"), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::from_content_type("application/pdf"), None);
    /// ```
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/gif" => Some(Self::Gif),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Format for a stored file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Canonical file extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }

    /// MIME type used when serving the file.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_type())
    }
}

/// Format of a stored image name, or `None` when the name could escape the
/// upload directory or carries an unknown extension.
///
/// Accepted names are a single path segment of ASCII alphanumerics, `-` and
/// `_`, followed by one known extension.
///
/// # Examples
/// ```
/// use coaching_site::domain::{stored_image_format, ImageFormat};
///
/// assert_eq!(stored_image_format("3f2a.webp"), Some(ImageFormat::Webp));
/// assert_eq!(stored_image_format("../secret.png"), None);
/// ```
pub fn stored_image_format(name: &str) -> Option<ImageFormat> {
    let (stem, extension) = name.rsplit_once('.')?;
    let stem_ok = !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !stem_ok {
        return None;
    }
    ImageFormat::from_extension(extension)
}

/// Public URL of a stored image.
pub fn image_url(name: &str) -> String {
    format!("{UPLOADS_URL_PREFIX}/{name}")
}
