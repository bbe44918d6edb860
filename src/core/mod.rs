//! Platform-independent engine code. Nothing in here touches `web_sys`, so
//! the host tests can include these files directly.

pub mod chat;
pub mod config;
pub mod constants;
pub mod contact;
pub mod particles;
pub mod shooting;
pub mod starfield;
pub mod stimulus;
pub mod surface;

pub use config::{ConfigError, StarfieldConfig};
pub use particles::ParticleNetwork;
pub use starfield::Starfield;
pub use surface::{Glow, Rgba, Surface};
