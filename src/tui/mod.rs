//! Terminal output and interactive picking.
//!
//! `renderer` owns styled status output; `picker` owns the raw-mode theme
//! list. Both read glyphs and colors from `settings`.

mod picker;
pub mod renderer;
pub mod settings;

pub use picker::pick_from_list;
pub use renderer::Renderer;
