//! Global constants for the labelview core.

/// Smallest zoom factor a rescale will accept (inclusive).
pub const MIN_SCALE: f64 = 1.0;

/// Largest zoom factor a rescale will accept (exclusive).
pub const MAX_SCALE: f64 = 3.0;

/// Device-pixel multiplier applied to the backing buffers of both canvases.
/// Layout (CSS) size is never multiplied; only the buffer resolution is.
pub const UP_RES_RATIO: f64 = 2.0;

/// Edge length, in control-buffer pixels, of the square block sampled when
/// picking. 4×4 = 16 samples feed the majority vote.
pub const PICK_BLOCK: u32 = 4;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;
