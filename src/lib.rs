//! flow-wall
//!
//! A small library for modelling walls built from blocks, where some blocks are
//! composites holding further blocks. The nested block tree is flattened in
//! pre-order and queried by color, by material, or counted.
//!
//! High-level modules
//! - `data_structures`: the `Block` tree and the `Structure`/`Wall` queries
//! - `traversal`: lazy pre-order flattening with a composite inclusion policy
//!

pub mod data_structures;
pub mod traversal;

// Re-exports commonly used types for convenience in downstream code.
pub use data_structures::block::Block;
pub use data_structures::structure::{Structure, Wall};
pub use traversal::{Flatten, Policy, flatten};

/// Installs the platform logger.
///
/// Native targets use `env_logger` (filter with `RUST_LOG`), wasm32 logs to the
/// browser console. Calling this twice is harmless: an already installed logger
/// is reported and kept.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Could not initialize console logger: {}", e);
        }
    }
}
