use crate::Result;
use std::path::Path;
use std::process::Command;

pub mod macos;

/// Sets the desktop background of one display. The download pipeline only
/// depends on this trait, never on a concrete backend.
pub trait WallpaperSetter {
    /// `display` is 1-based, matching how desktops number their monitors.
    fn set_wallpaper(&self, display: u32, path: &Path) -> Result<()>;
}

pub fn get_wallpaper_setter() -> Result<Box<dyn WallpaperSetter>> {
    if cfg!(target_os = "macos") && macos::MacosSetter::is_available() {
        return Ok(Box::new(macos::MacosSetter::new()));
    }

    Err(crate::Error::DesktopEnv(
        "no supported desktop environment found".to_string(),
    ))
}

pub(crate) fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
