pub mod download;
pub mod list;
pub mod render;
mod runtime;

pub use download::run_download;
pub use list::run_list;
pub use render::run_render;
