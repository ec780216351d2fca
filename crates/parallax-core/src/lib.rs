pub mod config;
pub mod constants;
pub mod easing;
pub mod motion;
pub mod parallax;
pub mod projection;
pub mod sensor;
pub mod tilt;
pub mod view;

pub use config::*;
pub use constants::*;
pub use easing::*;
pub use motion::*;
pub use parallax::*;
pub use projection::*;
pub use sensor::*;
pub use tilt::*;
pub use view::*;
