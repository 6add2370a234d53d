//! Assets
//!
//! Locating and decoding the home screen background image.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Background image, relative to the assets directory
pub const HOME_IMAGE: &str = "sprites/home_screen1.png";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    pub fn path(&self) -> &Path {
        match self {
            AssetError::NotFound { path } | AssetError::Decode { path, .. } => path,
        }
    }
}

/// Full path of the home screen background under `assets_dir`.
pub fn home_image_path(assets_dir: &Path) -> PathBuf {
    assets_dir.join(HOME_IMAGE)
}

/// A decoded image, ready for upload.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pub path: PathBuf,
    pub pixels: image::RgbaImage,
}

impl BackgroundImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Load and decode an image file to RGBA8.
///
/// A missing file is [`AssetError::NotFound`]; a file that exists but
/// cannot be decoded is [`AssetError::Decode`].
pub fn load_background(path: &Path) -> Result<BackgroundImage, AssetError> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(image::ImageError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AssetError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(AssetError::Decode {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let pixels = img.to_rgba8();
    tracing::info!(
        width = pixels.width(),
        height = pixels.height(),
        path = %path.display(),
        "loaded background image"
    );

    Ok(BackgroundImage {
        path: path.to_path_buf(),
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_image_path() {
        let path = home_image_path(Path::new("assets"));
        assert_eq!(path, Path::new("assets/sprites/home_screen1.png"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_background(Path::new("no/such/dir/home_screen1.png")).unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
        assert_eq!(err.path(), Path::new("no/such/dir/home_screen1.png"));
    }
}
