//! Tools for Orrery
//!
//! Tools are named local functions the model can request through the
//! `Action:` text protocol. Every tool takes a single string argument and
//! returns text; failures are reported as text observations, never as
//! errors, so the model can self-correct in-loop.

pub mod calculate;
pub mod planet_mass;
pub mod registry;
pub mod types;

pub use calculate::CalculateTool;
pub use planet_mass::PlanetMassTool;
pub use registry::ToolRegistry;
pub use types::Tool;
