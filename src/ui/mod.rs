pub mod console;
pub mod surface;

pub use console::ConsoleSurface;
pub use surface::{Directive, LoadToken, Opacity, PresentationSurface, RecordingSurface};
