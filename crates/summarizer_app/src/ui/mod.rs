mod render;
mod templates;

pub use render::PageRenderer;
