use std::path::Path;

use anyhow::{Context, Result};
use doit_contracts::{
    ABI_MAJOR_V1, DOIT_ABI_CHECK_REPORT_SCHEMA_VERSION, DOIT_ABI_REQUIRES_SCHEMA_VERSION,
};
use doit_rt::Surface;
use serde::{Deserialize, Serialize};

/// Symbols and source names a generated program binds against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbiRequires {
    pub schema_version: String,
    pub abi_major: u32,
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub names: Vec<NameReq>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameReq {
    pub surface: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub schema_version: String,
    pub ok: bool,
    pub resolved: Vec<Resolved>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    pub requested: String,
    pub symbol: String,
}

pub fn load_requires(path: &Path) -> Result<AbiRequires> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read requires: {}", path.display()))?;
    let requires: AbiRequires = serde_json::from_str(&text)
        .with_context(|| format!("parse requires: {}", path.display()))?;
    Ok(requires)
}

/// Resolves every requested symbol and name against the runtime catalog.
///
/// Unknown symbols end up in `missing`; a schema or ABI major mismatch is an error.
pub fn check_requires(requires: &AbiRequires) -> Result<CheckReport> {
    if requires.schema_version != DOIT_ABI_REQUIRES_SCHEMA_VERSION {
        anyhow::bail!(
            "requires schema_version mismatch: expected {} got {}",
            DOIT_ABI_REQUIRES_SCHEMA_VERSION,
            requires.schema_version
        );
    }
    if requires.abi_major != ABI_MAJOR_V1 {
        anyhow::bail!(
            "runtime ABI mismatch: requires abi_major={}, runtime has abi_major={}",
            requires.abi_major,
            ABI_MAJOR_V1
        );
    }

    let mut resolved = Vec::new();
    let mut missing = Vec::new();

    for symbol in &requires.symbols {
        match doit_rt::lookup_symbol(symbol) {
            Some(p) => resolved.push(Resolved {
                requested: symbol.clone(),
                symbol: p.symbol.to_string(),
            }),
            None => missing.push(symbol.clone()),
        }
    }

    for req in &requires.names {
        let surface: Surface = req
            .surface
            .parse()
            .with_context(|| format!("requires name {:?}", req.name))?;
        let requested = format!("{surface}:{}", req.name);
        match doit_rt::lookup(surface, &req.name) {
            Some(p) => resolved.push(Resolved {
                requested,
                symbol: p.symbol.to_string(),
            }),
            None => missing.push(requested),
        }
    }

    Ok(CheckReport {
        schema_version: DOIT_ABI_CHECK_REPORT_SCHEMA_VERSION.to_string(),
        ok: missing.is_empty(),
        resolved,
        missing,
    })
}
