use crate::{
    error::{Error, Result},
    icon::{web_icons, IconSpec, Premultiplied},
    layout::Layout,
    png,
};
use image::{ImageReader, RgbaImage};
use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
};

/// An icon that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub size: u32,
}

#[derive(Debug)]
pub struct IconGenerator {
    layout: Layout,
    specs: Vec<IconSpec>,
}

impl IconGenerator {
    pub fn new(layout: Layout) -> Self {
        Self::with_specs(layout, web_icons().to_vec())
    }

    pub fn with_specs(layout: Layout, specs: Vec<IconSpec>) -> Self {
        IconGenerator { layout, specs }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Renders every icon from the project logo, calling `on_written` after
    /// each file is written. Stops at the first error; icons written before
    /// it are left in place.
    pub fn convert(&self, mut on_written: impl FnMut(&WrittenIcon)) -> Result<Vec<WrittenIcon>> {
        let source = Premultiplied::new(&load_source(&self.layout.source())?);

        let mut written = Vec::with_capacity(self.specs.len());
        for spec in &self.specs {
            let path = self.layout.resolve(spec.path());
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }

            tracing::debug!(
                size = spec.size(),
                maskable = spec.is_maskable(),
                "rendering {}",
                spec.path().display()
            );
            let icon = spec.render(&source);
            png::write(&icon, &path)?;
            tracing::info!("wrote {}", path.display());

            let icon = WrittenIcon {
                path: spec.path().to_owned(),
                size: spec.size(),
            };
            on_written(&icon);
            written.push(icon);
        }

        Ok(written)
    }
}

/// Decodes the logo into RGBA8. The file is closed before this returns.
fn load_source(path: &Path) -> Result<RgbaImage> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::MissingSource(path.to_owned()))
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let image = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| Error::io(path, e))?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_owned(),
            source,
        })?;

    tracing::info!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    if !image.color().has_alpha() {
        tracing::debug!("converting {:?} source to RGBA", image.color());
    }
    Ok(image.into_rgba8())
}
