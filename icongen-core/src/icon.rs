use image::{imageops, imageops::FilterType, Rgba, Rgba32FImage, RgbaImage};
use std::path::{Path, PathBuf};

const FILTER: FilterType = FilterType::Lanczos3;

/// A single output icon: edge length and path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    size: u32,
    path: PathBuf,
    maskable: bool,
}

impl IconSpec {
    pub fn new(size: u32, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let maskable = path
            .file_name()
            .map(|name| name.to_string_lossy().contains("maskable"))
            .unwrap_or(false);
        IconSpec {
            size,
            path,
            maskable,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_maskable(&self) -> bool {
        self.maskable
    }

    pub fn render(&self, source: &Premultiplied) -> RgbaImage {
        if self.maskable {
            let area = SafeArea::for_size(self.size);
            let mut canvas = RgbaImage::new(self.size, self.size);
            let inner = source.resize(area.edge, area.edge);
            let offset = i64::from(area.offset);
            imageops::replace(&mut canvas, &inner, offset, offset);
            canvas
        } else {
            source.resize(self.size, self.size)
        }
    }
}

/// Source pixels with colour premultiplied by alpha, so resampling never
/// pulls colour out of fully transparent pixels.
#[derive(Debug, Clone)]
pub struct Premultiplied(Rgba32FImage);

impl Premultiplied {
    pub fn new(source: &RgbaImage) -> Self {
        Premultiplied(Rgba32FImage::from_fn(
            source.width(),
            source.height(),
            |x, y| {
                let Rgba([r, g, b, a]) = *source.get_pixel(x, y);
                let a = f32::from(a) / 255.0;
                let c = |v: u8| f32::from(v) / 255.0 * a;
                Rgba([c(r), c(g), c(b), a])
            },
        ))
    }

    /// Resamples to `width` x `height` and converts back to straight alpha.
    pub fn resize(&self, width: u32, height: u32) -> RgbaImage {
        let resized = imageops::resize(&self.0, width, height, FILTER);
        RgbaImage::from_fn(width, height, |x, y| {
            let Rgba([r, g, b, a]) = *resized.get_pixel(x, y);
            let a = a.clamp(0.0, 1.0);
            let alpha = (a * 255.0).round() as u8;
            if alpha == 0 {
                return Rgba([0, 0, 0, 0]);
            }
            let c = |v: f32| ((v / a).clamp(0.0, 1.0) * 255.0).round() as u8;
            Rgba([c(r), c(g), c(b), alpha])
        })
    }
}

/// The icons of a web app manifest, in the order they are written.
pub fn web_icons() -> [IconSpec; 5] {
    [
        IconSpec::new(16, "web/favicon.png"),
        IconSpec::new(192, "web/icons/Icon-192.png"),
        IconSpec::new(512, "web/icons/Icon-512.png"),
        IconSpec::new(192, "web/icons/Icon-maskable-192.png"),
        IconSpec::new(512, "web/icons/Icon-maskable-512.png"),
    ]
}

/// Centered square that stays visible under any platform mask: 80% of the
/// edge, rounded down.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SafeArea {
    pub edge: u32,
    pub offset: u32,
}

impl SafeArea {
    pub fn for_size(size: u32) -> Self {
        let edge = size - size.div_ceil(5);
        let offset = (size - edge) / 2;
        SafeArea { edge, offset }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        let range = self.offset..self.offset + self.edge;
        range.contains(&x) && range.contains(&y)
    }
}
