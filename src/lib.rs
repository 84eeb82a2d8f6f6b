pub mod common;
pub mod component;
pub mod entity_defs;
pub mod parse_utils;
pub mod spawner;
pub mod system;

#[cfg(target_arch = "wasm32")]
pub mod logger;
#[cfg(all(target_arch = "wasm32", not(test)))]
mod host;

/// Per-frame timing supplied by the host loop
#[derive(Clone, Copy, Debug)]
pub struct TimeData {
    /// seconds since the previous tick
    pub delta_time: f64,
}
