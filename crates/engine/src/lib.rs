//! Skirmish Engine library.
//!
//! Everything outside the pure domain: ports, their adapters, and the scripted
//! combat run.
//!
//! ## Structure
//!
//! - `infrastructure/` - Port traits plus adapters (in-memory context, console
//!   narrator, JSON codec, settings, bundled roster)
//! - `use_cases/` - The combat run, written against ports only
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
