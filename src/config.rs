//! Layout and rendering configuration.
//!
//! Defaults match the browser visualizer: 80px node spacing, 100px between
//! levels, 20px node radius, one step per second, at most 20 numbers.

/// Spacing used by the tree layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of a bottom-level slot; upper levels double it per level.
    pub node_spacing: f64,
    /// Vertical distance between consecutive levels.
    pub level_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_spacing: 80.0,
            level_height: 100.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Configuration for the renderers and the playback loop.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Use Unicode block characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Length in characters of the longest bar in the bar chart.
    pub bar_width: usize,
    /// Radius of a tree node circle in the SVG output.
    pub node_radius: f64,
    /// Horizontal and bottom margin around the tree in the SVG viewBox.
    pub margin: f64,
    /// Delay between playback steps, in milliseconds. 0 = no delay.
    pub interval_ms: u64,
    /// Largest accepted number count.
    pub max_count: usize,
    pub layout: LayoutConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            bar_width: 40,
            node_radius: 20.0,
            margin: 50.0,
            interval_ms: 1000,
            max_count: 20,
            layout: LayoutConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
