use super::{command_exists, WallpaperSetter};
use crate::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Display index and picture path arrive through `argv` so the file path is
/// never spliced into the script text.
const SET_PICTURE_SCRIPT: &str = r#"
on run argv
    set displayIndex to (item 1 of argv) as integer
    set picturePath to item 2 of argv
    tell application "System Events"
        set allDesktops to a reference to every desktop
        set picture of item displayIndex of allDesktops to picturePath
    end tell
end run
"#;

pub struct MacosSetter;

impl MacosSetter {
    pub fn new() -> Self {
        Self
    }

    pub fn is_available() -> bool {
        command_exists("osascript")
    }
}

impl WallpaperSetter for MacosSetter {
    fn set_wallpaper(&self, display: u32, path: &Path) -> Result<()> {
        debug!("Setting wallpaper of display {} to {}", display, path.display());

        let output = Command::new("osascript")
            .arg("-e")
            .arg(SET_PICTURE_SCRIPT)
            .arg(display.to_string())
            .arg(path)
            .output()
            .map_err(|e| Error::DesktopEnv(format!("failed to run osascript: {e}")))?;

        if !output.status.success() {
            return Err(Error::DesktopEnv(format!(
                "Failed to set wallpaper: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        Ok(())
    }
}
