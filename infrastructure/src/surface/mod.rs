//! Text surface adapter

mod file_surface;

pub use file_surface::FileTextSurface;
