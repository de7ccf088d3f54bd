use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;

/// Why a single asset could not be used.
#[derive(Debug)]
pub enum AssetError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The bytes are not a decodable raster image.
    Decode { name: String, source: image::ImageError },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => {
                write!(f, "failed to read asset {}: {source}", path.display())
            }
            AssetError::Decode { name, source } => {
                write!(f, "failed to decode asset {name}: {source}")
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::Decode { source, .. } => Some(source),
        }
    }
}

/// An encoded image supplied by the user, not yet decoded.
#[derive(Debug, Clone)]
pub struct AssetSource {
    name: String,
    bytes: Vec<u8>,
}

impl AssetSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }

    /// Reads the whole file into memory. The file name becomes the asset name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decodes to straight-alpha RGBA8, sniffing the format from the bytes.
    pub fn decode(&self) -> Result<RgbaImage, AssetError> {
        image::load_from_memory(&self.bytes)
            .map(|img| img.to_rgba8())
            .map_err(|source| AssetError::Decode {
                name: self.name.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AssetSource::from_path("/definitely/not/here/horse.png").unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("horse.png"));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let src = AssetSource::new("junk.png", b"not an image".to_vec());
        let err = src.decode().unwrap_err();
        assert!(matches!(err, AssetError::Decode { ref name, .. } if name == "junk.png"));
    }
}
