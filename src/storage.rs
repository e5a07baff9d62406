use crate::bing::ImageInfo;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the fetched bytes to `<folder>/<id>.jpg`, overwriting any previous
/// download of the same image. The folder is created here, not earlier, so a
/// failed fetch leaves the filesystem untouched.
pub fn save_image(folder: &Path, info: &ImageInfo, bytes: &[u8]) -> Result<PathBuf> {
    if !folder.exists() {
        fs::create_dir_all(folder)?;
    }

    let path = folder.join(format!("{}.jpg", info.id));
    fs::write(&path, bytes)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn info(id: &str) -> ImageInfo {
        ImageInfo {
            id: id.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            url_base: format!("/th?id={id}"),
            title: "Test Title".to_string(),
        }
    }

    #[test]
    fn writes_under_id_with_jpg_extension() {
        let dir = TempDir::new().unwrap();
        let path = save_image(dir.path(), &info("OHR.Foo_EN-US1234567890"), b"bytes").unwrap();

        assert_eq!(path, dir.path().join("OHR.Foo_EN-US1234567890.jpg"));
        assert_eq!(fs::read(&path).unwrap(), b"bytes");
    }

    #[test]
    fn creates_missing_folder() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("wallpapers").join("bing");

        let path = save_image(&nested, &info("OHR.X"), b"bytes").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn second_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let first = save_image(dir.path(), &info("OHR.X"), b"old").unwrap();
        let second = save_image(dir.path(), &info("OHR.X"), b"new").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&second).unwrap(), b"new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
