//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod playback;
pub mod stt;
pub mod tts;

pub use playback::*;
pub use stt::*;
pub use tts::*;
