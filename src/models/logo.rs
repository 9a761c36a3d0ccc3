use derive_getters::Getters;
use derive_new::new;
use strum_macros::Display;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Logo {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum LogoFormat {
    #[strum(serialize = "PNG")]
    Png,
    #[strum(serialize = "JPEG")]
    Jpeg,
    #[strum(serialize = "GIF")]
    Gif,
    #[strum(serialize = "SVG")]
    Svg,
    #[strum(serialize = "unknown")]
    Unknown,
}

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

impl Logo {
    /// Guesses the image format from the leading bytes, falling back to the
    /// declared content type.
    pub fn format(&self) -> LogoFormat {
        let bytes = self.bytes.as_slice();
        if bytes.starts_with(PNG_MAGIC) {
            return LogoFormat::Png;
        }
        if bytes.starts_with(JPEG_MAGIC) {
            return LogoFormat::Jpeg;
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return LogoFormat::Gif;
        }

        let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
        let head = head.trim_start();
        if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
            return LogoFormat::Svg;
        }

        match self.content_type.as_deref() {
            Some(ct) if ct.starts_with("image/png") => LogoFormat::Png,
            Some(ct) if ct.starts_with("image/jpeg") => LogoFormat::Jpeg,
            Some(ct) if ct.starts_with("image/gif") => LogoFormat::Gif,
            Some(ct) if ct.starts_with("image/svg") => LogoFormat::Svg,
            _ => LogoFormat::Unknown,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
