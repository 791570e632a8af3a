pub mod error;
pub mod padding;
pub mod progress;
pub mod text;

pub use error::{Result, RopeError};
pub use padding::Padding;
pub use progress::{LinearProgressModel, ProgressState};
pub use text::TextMeasure;
