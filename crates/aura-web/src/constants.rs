// Rendering tuning local to the web frontend. Simulation feel lives in
// aura-core; these only shape how the canvases are painted.

// Ray strokes
pub const RAY_WIDTH_LABELED: f64 = 1.75;
pub const RAY_WIDTH_PLAIN: f64 = 1.0;
pub const RAY_ALPHA_LABELED: f64 = 0.9;
pub const RAY_ALPHA_PLAIN: f64 = 0.45;
pub const CENTER_MARKER_RADIUS: f64 = 4.0; // fixed size, pointer-independent

// Labels and glyphs at ray tips
pub const LABEL_FONT: &str = "600 11px system-ui, sans-serif";
pub const GLYPH_CELL_PX: f64 = 2.0;
pub const TIP_CLEARANCE_PX: f64 = 3.0; // gap between the ray tip and glyph/text

// Particle links
pub const LINK_WIDTH: f64 = 1.0;

// Capability detection
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
