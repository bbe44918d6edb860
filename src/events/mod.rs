pub mod pointer;
pub mod viewport;

pub use pointer::{wire_particle_pointer, wire_starfield_pointer};
pub use viewport::{wire_scroll, wire_window_resize};
