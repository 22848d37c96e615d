use crate::error::ScanError;
use image::{RgbaImage, imageops};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Raw bytes of the photo picked for a scan, ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Read an image from disk, refusing unsupported types and files above `max_bytes`.
    pub fn from_path(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_for(path).ok_or_else(|| ScanError::UnsupportedImage(file_name.clone()))?;

        let io_err = |source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        };
        check_size(fs::metadata(path).map_err(io_err)?.len(), max_bytes)?;
        // Metadata can lag the content (growing or special files); bound the read itself.
        let mut bytes = Vec::new();
        File::open(path)
            .map_err(io_err)?
            .take(max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(io_err)?;
        check_size(bytes.len() as u64, max_bytes)?;

        tracing::debug!("loaded image {} ({} bytes)", path.display(), bytes.len());
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    pub fn from_bytes(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        max_bytes: u64,
    ) -> Result<Self, ScanError> {
        let file_name = file_name.into();
        let mime = mime_for(Path::new(&file_name))
            .ok_or_else(|| ScanError::UnsupportedImage(file_name.clone()))?;
        check_size(bytes.len() as u64, max_bytes)?;
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode into a thumbnail no larger than `max_side` on either axis.
    pub fn preview(&self, max_side: u32) -> Result<RgbaImage, ScanError> {
        let img = image::load_from_memory(&self.bytes)?;
        Ok(imageops::thumbnail(&img, max_side, max_side))
    }
}

fn check_size(size: u64, limit: u64) -> Result<(), ScanError> {
    if size > limit {
        return Err(ScanError::ImageTooLarge { size, limit });
    }
    Ok(())
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension().and_then(|s| s.to_str())?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
