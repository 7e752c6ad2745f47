//! Color definitions for charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines

/// Bar color per file in the SEL chart: [A], [B], [C], [D]
pub(super) const FILE_COLORS: [&str; 4] = [
    "#1888F8", // Vivid blue
    "#F03888", // Vivid magenta
    "#10D878", // Vivid green
    "#7840F8", // Vivid purple
];

/// Spectrum comparison series
pub(super) const COLOR_SPECTRUM_ORIGINAL: &str = "#68B4FF"; // Blue
pub(super) const COLOR_SPECTRUM_RECONSTRUCTED: &str = "#FF9440"; // Orange
