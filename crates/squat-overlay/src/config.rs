/// What the overlay draws besides the skeleton and status lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayConfig {
    show_in_frame_likelihood: bool,
    visualize_z: bool,
    rescale_z_for_visualization: bool,
}

impl OverlayConfig {
    /// Label every landmark with its in-frame likelihood.
    pub fn with_show_in_frame_likelihood(mut self, show: bool) -> Self {
        self.show_in_frame_likelihood = show;
        self
    }

    /// Shade points and lines by landmark depth.
    pub fn with_visualize_z(mut self, visualize: bool) -> Self {
        self.visualize_z = visualize;
        self
    }

    /// Stretch depth shading to the frame's own z range instead of the canvas width.
    pub fn with_rescale_z_for_visualization(mut self, rescale: bool) -> Self {
        self.rescale_z_for_visualization = rescale;
        self
    }

    // Getters
    pub fn show_in_frame_likelihood(&self) -> bool {
        self.show_in_frame_likelihood
    }

    pub fn visualize_z(&self) -> bool {
        self.visualize_z
    }

    pub fn rescale_z_for_visualization(&self) -> bool {
        self.rescale_z_for_visualization
    }
}
