use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use clap::ValueEnum;
use doit_rt::Surface;
use serde::{Deserialize, Serialize};

pub const ENV_SURFACE: &str = "DOIT_ABI_SURFACE";

/// Which name surfaces a manifest or header covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceFilter {
    Spelled,
    Symbolic,
    #[default]
    All,
}

impl SurfaceFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceFilter::Spelled => "spelled",
            SurfaceFilter::Symbolic => "symbolic",
            SurfaceFilter::All => "all",
        }
    }

    pub fn includes(self, surface: Surface) -> bool {
        match self {
            SurfaceFilter::Spelled => surface == Surface::Spelled,
            SurfaceFilter::Symbolic => surface == Surface::Symbolic,
            SurfaceFilter::All => true,
        }
    }
}

impl fmt::Display for SurfaceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SurfaceFilterParseError {
    value: String,
}

impl fmt::Display for SurfaceFilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid surface {:?} (expected one of: spelled, symbolic, all)",
            self.value
        )
    }
}

impl std::error::Error for SurfaceFilterParseError {}

impl FromStr for SurfaceFilter {
    type Err = SurfaceFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spelled" => Ok(SurfaceFilter::Spelled),
            "symbolic" => Ok(SurfaceFilter::Symbolic),
            "all" | "" => Ok(SurfaceFilter::All),
            _ => Err(SurfaceFilterParseError {
                value: s.to_string(),
            }),
        }
    }
}

/// `--surface` wins; otherwise `DOIT_ABI_SURFACE`; otherwise all surfaces.
pub fn resolve_surface(cli: Option<SurfaceFilter>) -> anyhow::Result<SurfaceFilter> {
    resolve_surface_from(cli, std::env::var(ENV_SURFACE).ok().as_deref())
}

pub fn resolve_surface_from(
    cli: Option<SurfaceFilter>,
    env: Option<&str>,
) -> anyhow::Result<SurfaceFilter> {
    if let Some(filter) = cli {
        return Ok(filter);
    }
    let Some(raw) = env else {
        return Ok(SurfaceFilter::default());
    };
    let filter = raw
        .parse::<SurfaceFilter>()
        .with_context(|| format!("invalid environment variable {ENV_SURFACE}={raw:?}"))?;
    Ok(filter)
}
