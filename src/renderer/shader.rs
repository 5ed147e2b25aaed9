//! WGSL shader sources and validation
//!
//! Sources are checked with naga before any GPU object is created, so a bad
//! shader file surfaces as [`RenderError::ShaderCompile`] instead of a device
//! validation panic.

use std::path::{Path, PathBuf};

use crate::error::RenderError;

pub const VERTEX_FILE: &str = "pong.vert.wgsl";
pub const FRAGMENT_FILE: &str = "pong.frag.wgsl";

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

const BUILTIN_VERTEX: &str = include_str!("../../shaders/pong.vert.wgsl");
const BUILTIN_FRAGMENT: &str = include_str!("../../shaders/pong.frag.wgsl");

/// Vertex + fragment WGSL text
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ShaderSources {
    /// Copies compiled into the binary
    pub fn builtin() -> Self {
        Self {
            vertex: BUILTIN_VERTEX.to_owned(),
            fragment: BUILTIN_FRAGMENT.to_owned(),
        }
    }

    /// Read `pong.vert.wgsl` and `pong.frag.wgsl` from `dir`, or use the
    /// built-in copies when no directory is configured
    pub fn load(dir: Option<&Path>) -> Result<Self, RenderError> {
        let Some(dir) = dir else {
            log::debug!("Using built-in shaders");
            return Ok(Self::builtin());
        };

        let read = |name: &str| {
            let path: PathBuf = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| RenderError::ShaderLoad { path, source })
        };

        let sources = Self {
            vertex: read(VERTEX_FILE)?,
            fragment: read(FRAGMENT_FILE)?,
        };
        log::info!("Loaded shaders from {}", dir.display());
        Ok(sources)
    }

    /// Parse and validate both stages
    pub fn validate(&self) -> Result<(), RenderError> {
        validate_stage(&self.vertex, VERTEX_FILE, VERTEX_ENTRY, naga::ShaderStage::Vertex)?;
        validate_stage(
            &self.fragment,
            FRAGMENT_FILE,
            FRAGMENT_ENTRY,
            naga::ShaderStage::Fragment,
        )?;
        Ok(())
    }
}

fn validate_stage(
    source: &str,
    name: &str,
    entry: &str,
    stage: naga::ShaderStage,
) -> Result<(), RenderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|err| {
        let message = match err.location(source) {
            Some(loc) => format!(
                "{name}:{}:{}: {err}",
                loc.line_number, loc.line_position
            ),
            None => format!("{name}: {err}"),
        };
        RenderError::ShaderCompile { message }
    })?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    )
    .validate(&module)
    .map_err(|err| RenderError::ShaderCompile {
        message: format!("{name}: {}", err.into_inner()),
    })?;

    let has_entry = module
        .entry_points
        .iter()
        .any(|ep| ep.name == entry && ep.stage == stage);
    if !has_entry {
        return Err(RenderError::ShaderCompile {
            message: format!("{name}: missing {stage:?} entry point `{entry}`"),
        });
    }

    Ok(())
}
