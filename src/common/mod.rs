pub mod logging;
pub mod progress;
pub mod types;

pub use logging::*;
pub use progress::create_spinner;
pub use types::*;
