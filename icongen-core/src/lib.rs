pub mod error;
pub mod generator;
pub mod icon;
pub mod layout;
pub mod png;

pub use error::{Error, Result};
pub use generator::{IconGenerator, WrittenIcon};
pub use icon::{web_icons, IconSpec, Premultiplied, SafeArea};
pub use layout::{Layout, LayoutError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
