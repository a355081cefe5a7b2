//! Infrastructure: ports and the adapters that implement them.

pub mod codec;
pub mod console;
pub mod memory;
pub mod ports;
pub mod seed;
pub mod settings;
