//! Publishes the doit runtime's ABI contract to code generators.
//!
//! The data comes straight from `doit_rt`'s catalog, so the manifest, the C header and
//! the requires check always agree with the symbols the staticlib actually exports.

pub mod header;
pub mod manifest;
pub mod requires;
pub mod surface;

pub use header::render_header;
pub use manifest::{build_manifest, AbiManifest};
pub use requires::{check_requires, load_requires, AbiRequires, CheckReport};
pub use surface::{resolve_surface, SurfaceFilter, ENV_SURFACE};
