use eframe::egui;

// ---------------------------------------------------------------------------
// Explorer configuration
// ---------------------------------------------------------------------------

/// Window geometry and render parameters.
///
/// The explorer takes no flags or config files; log filtering is the only
/// runtime knob (`RUST_LOG`).
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Number of equal-width histogram bins.
    pub histogram_bins: usize,
    /// Rows shown in the dataset preview.
    pub preview_rows: usize,
    pub histogram_height: f32,
    pub scatter_height: f32,
    pub marker_radius: f32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            window_title: "Iris Dataset Explorer".to_string(),
            inner_size: [1000.0, 900.0],
            min_inner_size: [600.0, 400.0],
            histogram_bins: 20,
            preview_rows: 5,
            histogram_height: 320.0,
            scatter_height: 380.0,
            marker_radius: 4.0,
        }
    }
}

impl ExplorerConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(&self.window_title)
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size),
            ..Default::default()
        }
    }
}
