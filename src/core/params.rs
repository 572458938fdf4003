use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Grid and composition parameters shared by every stage.
///
/// `Default` yields the fixed production geometry. Config files may carry any
/// subset of the fields; missing ones fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Edge length of one square region, px
    pub square_size: u32,
    /// Black frame drawn around each extracted square, px
    pub border_size: u32,
    /// Gap between panels in the comic strip, px
    pub padding: u32,
    /// Number of shifted variants of the square grid
    pub num_batches: u32,
    /// Adjacent squares per batch
    pub num_squares: u32,
    /// Saturation factor for the highlight background (1.0 keeps colours)
    pub saturation: f32,
    /// Contrast factor for the highlight background (1.0 keeps contrast)
    pub contrast: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            square_size: 210,
            border_size: 10,
            padding: 30,
            num_batches: 4,
            num_squares: 3,
            saturation: 0.3,
            contrast: 0.3,
        }
    }
}

impl LayoutParams {
    /// Length the square grid occupies along the scan axis.
    pub fn grid_span(&self) -> u32 {
        self.square_size * self.num_squares
    }

    /// Edge of a square once the border is added.
    pub fn bordered_size(&self) -> u32 {
        self.square_size + 2 * self.border_size
    }

    /// Every product the stages derive from the geometry, or `None` on `u32` overflow.
    fn checked_extents(&self) -> Option<()> {
        self.square_size.checked_mul(self.num_squares)?;
        self.num_batches.checked_mul(self.num_squares)?;
        let bordered = self
            .border_size
            .checked_mul(2)?
            .checked_add(self.square_size)?;
        // comic strip extents
        bordered
            .checked_add(self.padding)?
            .checked_mul(self.num_squares)?
            .checked_add(self.padding)?;
        bordered.checked_add(self.padding.checked_mul(2)?)?;
        Some(())
    }

    pub fn validate(&self) -> Result<()> {
        let nonzero = [
            ("square_size", self.square_size),
            ("num_batches", self.num_batches),
            ("num_squares", self.num_squares),
        ];
        for (arg, value) in nonzero {
            if value == 0 {
                return Err(Error::InvalidArgument {
                    arg,
                    value: value.to_string(),
                });
            }
        }
        if self.checked_extents().is_none() {
            return Err(Error::InvalidArgument {
                arg: "geometry",
                value: format!(
                    "square_size={} border_size={} padding={} num_batches={} num_squares={} overflows",
                    self.square_size,
                    self.border_size,
                    self.padding,
                    self.num_batches,
                    self.num_squares
                ),
            });
        }
        for (arg, value) in [("saturation", self.saturation), ("contrast", self.contrast)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidArgument {
                    arg,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let params = LayoutParams::default();
        assert_eq!(params.grid_span(), 630);
        assert_eq!(params.bordered_size(), 230);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let params: LayoutParams =
            serde_json::from_str(r#"{ "square_size": 100, "num_batches": 2 }"#).unwrap();
        assert_eq!(params.square_size, 100);
        assert_eq!(params.num_batches, 2);
        assert_eq!(params.num_squares, 3);
        assert_eq!(params.border_size, 10);
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let params = LayoutParams {
            num_squares: 0,
            ..LayoutParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { arg: "num_squares", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_overflowing_geometry() {
        let params: LayoutParams =
            serde_json::from_str(r#"{ "square_size": 100000, "num_squares": 100000 }"#).unwrap();
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { arg: "geometry", .. })
        ));

        let wide_border = LayoutParams {
            border_size: u32::MAX / 2 + 1,
            ..LayoutParams::default()
        };
        assert!(wide_border.validate().is_err());

        let many_batches = LayoutParams {
            num_batches: u32::MAX,
            num_squares: 2,
            ..LayoutParams::default()
        };
        assert!(many_batches.validate().is_err());

        let huge_padding = LayoutParams {
            padding: u32::MAX - 10,
            ..LayoutParams::default()
        };
        assert!(huge_padding.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_factor() {
        let params = LayoutParams {
            contrast: -0.5,
            ..LayoutParams::default()
        };
        assert!(params.validate().is_err());
    }
}
