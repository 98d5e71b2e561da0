use std::path::{Path, PathBuf};

pub const BASE_IMAGE_FILE: &str = "img_base.png";
pub const FONT_FILE: &str = "consolasb.ttf";
pub const OUTPUT_FILE: &str = "final_status.jpg";

/// Filesystem locations used by one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePaths {
    pub base_image: PathBuf,
    pub font: PathBuf,
    pub output: PathBuf,
}

impl ResourcePaths {
    /// The default file names, all inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            base_image: dir.join(BASE_IMAGE_FILE),
            font: dir.join(FONT_FILE),
            output: dir.join(OUTPUT_FILE),
        }
    }

    /// The default file names next to the running executable.
    pub fn install_default() -> Self {
        Self::in_dir(install_dir())
    }

    pub fn with_base_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_image = path.into();
        self
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }
}

/// Directory containing the running executable, or `.` if it cannot be determined.
pub fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
