pub mod constants;
pub mod document;
pub mod gradient;
pub mod palette;
pub mod pointer;
pub mod widget;

pub use constants::*;
pub use document::*;
pub use gradient::*;
pub use palette::*;
pub use pointer::*;
pub use widget::*;
