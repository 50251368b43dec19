//! Screen geometry and device classification.

use serde::{Deserialize, Serialize};

/// Physical pixel extent at which a high-density (`scale >= 2`) screen
/// counts as a tablet.
const TABLET_LIMIT_HIGH_DENSITY: f64 = 1800.0;

/// Physical pixel extent at which a low-density screen counts as a tablet.
const TABLET_LIMIT_LOW_DENSITY: f64 = 960.0;

/// A snapshot of the device screen as reported by the platform layer.
///
/// `width` and `height` are logical, device-independent units; `scale` is
/// the pixel density. The platform layer delivers a fresh value on every
/// orientation change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenDimensions {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl ScreenDimensions {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Returns true when the screen is at least as wide as it is tall.
    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }

    /// Returns true when the physical pixel extent on either axis reaches
    /// the tablet threshold for this screen's density.
    pub fn is_tablet(&self) -> bool {
        let limit = if self.scale < 2.0 {
            TABLET_LIMIT_LOW_DENSITY
        } else {
            TABLET_LIMIT_HIGH_DENSITY
        };
        self.scale * self.width >= limit || self.scale * self.height >= limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_portrait_is_neither_tablet_nor_landscape() {
        let dims = ScreenDimensions::new(375.0, 667.0, 2.0);
        assert!(!dims.is_tablet());
        assert!(!dims.is_landscape());
    }

    #[test]
    fn test_phone_stays_phone_in_landscape() {
        let dims = ScreenDimensions::new(667.0, 375.0, 2.0);
        assert!(!dims.is_tablet());
        assert!(dims.is_landscape());
    }

    #[test]
    fn test_high_density_tablet_crosses_1800_limit() {
        // 1024 * 2 = 2048 physical pixels on the long axis.
        let dims = ScreenDimensions::new(768.0, 1024.0, 2.0);
        assert!(dims.is_tablet());
    }

    #[test]
    fn test_low_density_tablet_crosses_960_limit() {
        // 1.5 * 640 = 960, exactly at the low-density threshold.
        let dims = ScreenDimensions::new(640.0, 480.0, 1.5);
        assert!(dims.is_tablet());
    }

    #[test]
    fn test_classification_survives_rotation() {
        let portrait = ScreenDimensions::new(768.0, 1024.0, 2.0);
        let landscape = ScreenDimensions::new(1024.0, 768.0, 2.0);
        assert_eq!(portrait.is_tablet(), landscape.is_tablet());
        assert!(!portrait.is_landscape());
        assert!(landscape.is_landscape());
    }

    #[test]
    fn test_square_screen_counts_as_landscape() {
        let dims = ScreenDimensions::new(500.0, 500.0, 1.0);
        assert!(dims.is_landscape());
    }
}
