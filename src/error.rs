//! Error types
//!
//! Startup failures are fatal and bubble up to `main`; steady-state play has
//! no error paths.

use std::path::PathBuf;

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

use crate::sim::Key;

/// Settings file could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("max_frame_dt must be in (0, {max}] seconds (got {got})")]
    MaxFrameDt { got: f32, max: f32 },
    #[error("disc_triangles must be at least 3 (got {0})")]
    DiscTriangles(u32),
    #[error("window size must be non-zero (got {width}x{height})")]
    WindowSize { width: u32, height: u32 },
}

/// Gameplay parameters the physics step cannot work with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("ball velocity bounds must satisfy 0 < min <= max (got {min} / {max})")]
    VelocityBounds { min: f32, max: f32 },
    #[error("serve vx range is empty ({min}..{max})")]
    ServeRange { min: f32, max: f32 },
    #[error("serve_vy_max must be >= 0 (got {0})")]
    ServeVy(f32),
    #[error("ball and paddle dimensions must be positive")]
    Dimensions,
    #[error("paddle_speed must be >= 0 (got {0})")]
    PaddleSpeed(f32),
    #[error("winning_score must be at least 1")]
    WinningScore,
    #[error("paddle {paddle} uses {key:?} for both up and down")]
    Bindings { paddle: usize, key: Key },
}

/// Mesh generation preconditions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("a disc needs at least 3 triangles (got {0})")]
    TooFewTriangles(u32),
    #[error("disc radius must be finite and positive (got {0})")]
    InvalidRadius(f32),
}

/// GPU setup failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read shader source {path}: {source}")]
    ShaderLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shader program failed to compile or link:\n{message}")]
    ShaderCompile { message: String },
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    UnsupportedSurface,
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Top-level application failure
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to create event loop: {0}")]
    EventLoop(#[source] EventLoopError),
    #[error("failed to create window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    Render(#[from] RenderError),
    #[error("GPU ran out of memory")]
    OutOfMemory,
}
