//! FontSizeMapper: linear map from the ratio range to the font range.

use tagcloud_core::errors::{CloudError, CloudResult};

/// Reject a font range the mapper cannot honour.
pub fn validate_font_range(min_font: u32, max_font: u32) -> CloudResult<()> {
    if min_font == 0 {
        return Err(CloudError::out_of_range("min_font_size", min_font, "(0, max_font_size]"));
    }
    if min_font > max_font {
        return Err(CloudError::out_of_range(
            "max_font_size",
            max_font,
            format!("[{min_font}, u32::MAX]"),
        ));
    }
    Ok(())
}

/// Maps ratios in `[min_ratio, max_ratio]` to fonts in `[min_font, max_font]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeMapper {
    min_ratio: f64,
    max_ratio: f64,
    min_font: u32,
    max_font: u32,
}

impl FontSizeMapper {
    pub fn new(min_ratio: f64, max_ratio: f64, min_font: u32, max_font: u32) -> CloudResult<Self> {
        validate_font_range(min_font, max_font)?;
        Ok(Self {
            min_ratio,
            max_ratio,
            min_font,
            max_font,
        })
    }

    /// Font for `ratio`, rounded up.
    ///
    /// When every ratio is the same the range collapses and every word gets
    /// `(max_font - min_font) / 2`.
    pub fn font_size(&self, ratio: f64) -> u32 {
        if self.max_ratio == self.min_ratio {
            return (self.max_font - self.min_font) / 2;
        }
        if ratio <= self.min_ratio {
            return self.min_font;
        }
        if ratio >= self.max_ratio {
            return self.max_font;
        }
        // Anchored at min_ratio so the low end carries no rounding error.
        let slope = f64::from(self.max_font - self.min_font) / (self.max_ratio - self.min_ratio);
        let font = (f64::from(self.min_font) + slope * (ratio - self.min_ratio)).ceil();
        font.clamp(f64::from(self.min_font), f64::from(self.max_font)) as u32
    }
}

/// One-shot mapping. Fails on the same font ranges [`FontSizeMapper::new`] rejects.
pub fn font_size(
    ratio: f64,
    min_ratio: f64,
    max_ratio: f64,
    min_font: u32,
    max_font: u32,
) -> CloudResult<u32> {
    Ok(FontSizeMapper::new(min_ratio, max_ratio, min_font, max_font)?.font_size(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_font_bounds() {
        let mapper = FontSizeMapper::new(0.5, 4.5, 12, 64).unwrap();
        assert_eq!(mapper.font_size(0.5), 12);
        assert_eq!(mapper.font_size(4.5), 64);
    }

    #[test]
    fn interior_values_round_up() {
        // slope = 10 / 3, intercept = 10: ratio 1 -> 13.33 -> 14
        let mapper = FontSizeMapper::new(0.0, 3.0, 10, 20).unwrap();
        assert_eq!(mapper.font_size(1.0), 14);
        assert_eq!(mapper.font_size(2.5), 19);
    }

    #[test]
    fn degenerate_range_uses_half_span() {
        let mapper = FontSizeMapper::new(2.0, 2.0, 12, 64).unwrap();
        assert_eq!(mapper.font_size(2.0), 26);
        assert_eq!(font_size(7.0, 7.0, 7.0, 10, 21).unwrap(), 5);
    }

    #[test]
    fn lowest_ratio_is_exactly_min_font() {
        // 12 + 31.2 * (r - 5/6) picks up error at r = 5/6 in slope-intercept form.
        let mapper = FontSizeMapper::new(5.0 / 6.0, 2.5, 12, 64).unwrap();
        assert_eq!(mapper.font_size(5.0 / 6.0), 12);
        assert_eq!(mapper.font_size(2.5), 64);
        assert_eq!(mapper.font_size(1.0), 18);
    }

    #[test]
    fn one_shot_mapping_validates_font_range() {
        assert!(font_size(1.0, 0.0, 2.0, 20, 10).is_err());
        assert!(font_size(1.0, 0.0, 2.0, 0, 10).is_err());
        assert_eq!(font_size(2.0, 0.0, 2.0, 10, 20).unwrap(), 20);
    }

    #[test]
    fn monotone_in_ratio() {
        let mapper = FontSizeMapper::new(0.1, 9.7, 8, 72).unwrap();
        let mut last = 0;
        for step in 0..=96 {
            let ratio = 0.1 + f64::from(step) * 0.1;
            let font = mapper.font_size(ratio.min(9.7));
            assert!(font >= last);
            last = font;
        }
    }

    #[test]
    fn invalid_font_ranges_are_rejected() {
        assert!(FontSizeMapper::new(0.0, 1.0, 0, 10).is_err());
        assert!(FontSizeMapper::new(0.0, 1.0, 20, 10).is_err());
    }
}
