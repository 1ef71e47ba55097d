//! Simulation space → screen space
//!
//! Screen coordinates follow the usual window convention: origin at the top
//! left, y growing downwards, in pixels.

use crate::configuration::config::ViewConfig;
use crate::simulation::params::AU;
use crate::simulation::states::NVec2;

/// Pixels per astronomical unit in the default view
pub const PIXELS_PER_AU: f64 = 250.0;

/// `position * scale + screen_center`, with `scale` in pixels per meter.
pub fn to_screen(position: &NVec2, scale: f64, screen_center: &NVec2) -> NVec2 {
    position * scale + screen_center
}

/// Scale and center for one window, applied to every body each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    pub scale: f64, // pixels per meter
    pub center: NVec2, // pixels
}

impl ScreenTransform {
    pub fn new(width: f64, height: f64, pixels_per_au: f64) -> Self {
        Self {
            scale: pixels_per_au / AU,
            center: NVec2::new(width / 2.0, height / 2.0),
        }
    }

    pub fn apply(&self, position: &NVec2) -> NVec2 {
        to_screen(position, self.scale, &self.center)
    }
}

impl From<&ViewConfig> for ScreenTransform {
    fn from(view: &ViewConfig) -> Self {
        Self::new(view.width, view.height, view.pixels_per_au)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_maps_to_center() {
        let t = ScreenTransform::new(1000.0, 800.0, PIXELS_PER_AU);
        assert_eq!(t.apply(&NVec2::zeros()), NVec2::new(500.0, 400.0));
    }

    #[test]
    fn one_au_is_250_pixels() {
        let t = ScreenTransform::new(1000.0, 1000.0, PIXELS_PER_AU);
        let p = t.apply(&NVec2::new(-AU, AU));
        assert_relative_eq!(p.x, 250.0, max_relative = 1e-12);
        assert_relative_eq!(p.y, 750.0, max_relative = 1e-12);
    }

    #[test]
    fn free_function_matches_transform() {
        let t = ScreenTransform::new(640.0, 480.0, 100.0);
        let p = NVec2::new(3.0e10, -7.5e10);
        assert_eq!(to_screen(&p, t.scale, &t.center), t.apply(&p));
    }
}
