//! Shared, version-pinned ABI identifiers.
//!
//! These constants are the single source of truth for the schema/version strings that
//! appear in the machine-readable documents exchanged between the code generator and
//! the runtime tooling.

pub const DOIT_ABI_MANIFEST_SCHEMA_VERSION: &str = "doit.abi.manifest@0.1.0";
pub const DOIT_ABI_REQUIRES_SCHEMA_VERSION: &str = "doit.abi.requires@0.1.0";
pub const DOIT_ABI_CHECK_REPORT_SCHEMA_VERSION: &str = "doit.abi.check.report@0.1.0";

/// Bumped whenever an exported primitive changes name, width or signedness.
pub const ABI_MAJOR_V1: u32 = 1;

pub const RUNTIME_ID: &str = "doit.rt";

/// The one symbol generated code must define.
pub const ENTRY_SYMBOL: &str = "entry";
