/// Pointer speed (pixels/second) at which the pencil reaches its lightest shade.
pub const PENCIL_SPEED_FADE: f32 = 3000.0;

/// Maximum fraction of pencil opacity lost to speed.
pub const PENCIL_MAX_FADE: f32 = 0.5;

/// Airbrush samples scattered per pixel of radius, per draw call.
pub const AIRBRUSH_SAMPLES_PER_RADIUS: f32 = 4.0;

/// Airbrush alpha gained per second of lingering, relative to opacity.
pub const AIRBRUSH_BUILDUP_RATE: f32 = 10.0;

/// Smallest brush radius in pixels.
pub const MIN_BRUSH_RADIUS: f32 = 1.0;

/// Fully transparent black.
pub const TRANSPARENT: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
