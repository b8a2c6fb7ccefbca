use doit_contracts::{ABI_MAJOR_V1, DOIT_ABI_MANIFEST_SCHEMA_VERSION, ENTRY_SYMBOL, RUNTIME_ID};
use serde::{Deserialize, Serialize};

use crate::surface::SurfaceFilter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbiManifest {
    pub schema_version: String,
    pub abi_major: u32,
    pub runtime: String,
    pub surface: SurfaceFilter,
    /// Symbols the runtime expects generated code to define.
    pub imports: Vec<String>,
    pub primitives: Vec<PrimitiveEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimitiveEntry {
    pub symbol: String,
    pub names: Vec<NameEntry>,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signedness: Option<String>,
    pub unchecked: bool,
    pub params: Vec<ParamEntry>,
    pub ret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameEntry {
    pub surface: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamEntry {
    pub name: String,
    pub c_type: String,
}

/// Describes every primitive with at least one name on `filter`, listing only the
/// names on `filter`.
pub fn build_manifest(filter: SurfaceFilter) -> AbiManifest {
    let mut primitives = Vec::new();
    for p in doit_rt::catalog() {
        let names: Vec<NameEntry> = p
            .names
            .iter()
            .filter(|(surface, _)| filter.includes(*surface))
            .map(|(surface, name)| NameEntry {
                surface: surface.as_str().to_string(),
                name: name.to_string(),
            })
            .collect();
        if names.is_empty() {
            continue;
        }
        primitives.push(PrimitiveEntry {
            symbol: p.symbol.to_string(),
            names,
            kind: p.kind.as_str().to_string(),
            signedness: p.signedness().map(|s| s.as_str().to_string()),
            unchecked: p.unchecked,
            params: p
                .signature
                .params
                .iter()
                .map(|param| ParamEntry {
                    name: param.name.to_string(),
                    c_type: param.ty.c_type().to_string(),
                })
                .collect(),
            ret: p.signature.ret.c_type().to_string(),
        });
    }

    AbiManifest {
        schema_version: DOIT_ABI_MANIFEST_SCHEMA_VERSION.to_string(),
        abi_major: ABI_MAJOR_V1,
        runtime: RUNTIME_ID.to_string(),
        surface: filter,
        imports: vec![ENTRY_SYMBOL.to_string()],
        primitives,
    }
}
