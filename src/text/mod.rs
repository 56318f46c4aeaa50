pub mod html;
pub mod latex;

pub use html::*;
pub use latex::*;
