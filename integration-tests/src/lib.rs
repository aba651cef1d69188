use icongen_core::{IconGenerator, Layout};
use image::{ImageFormat, Rgb, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};

/// A throwaway project tree for running the generator against.
pub struct Workdir {
    dir: tempfile::TempDir,
}

impl Workdir {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::TempDir::new()?;
        Ok(Self { dir })
    }

    /// Writes an opaque `width` x `height` JPEG logo with a colour gradient.
    pub fn with_logo(self, width: u32, height: u32) -> image::ImageResult<Self> {
        let logo = RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                160,
            ])
        });
        self.create_parent(&self.layout().source())?;
        logo.save_with_format(self.layout().source(), ImageFormat::Jpeg)?;
        Ok(self)
    }

    pub fn with_file(self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> std::io::Result<Self> {
        let path = self.path().join(path);
        self.create_parent(&path)?;
        std::fs::write(path, contents)?;
        Ok(self)
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> std::io::Result<Self> {
        std::fs::create_dir_all(self.path().join(path))?;
        Ok(self)
    }

    fn create_parent(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.path())
    }

    pub fn generator(&self) -> IconGenerator {
        IconGenerator::new(self.layout())
    }

    pub fn output(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path().join(relative)
    }

    pub fn read_icon(&self, relative: impl AsRef<Path>) -> image::ImageResult<RgbaImage> {
        Ok(image::open(self.output(relative))?.into_rgba8())
    }

    /// All regular files below `web/`, relative to the project root.
    pub fn written_files(&self) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let web = self.output("web");
        if web.exists() {
            collect_files(self.path(), &web, &mut files)?;
        }
        files.sort();
        Ok(files)
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            files.push(relative.to_owned());
        }
    }
    Ok(())
}
