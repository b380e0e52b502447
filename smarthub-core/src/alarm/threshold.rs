//! Threshold derivation

use smarthub_hal::ADC_MAX;

use crate::config::ThresholdSource;

impl ThresholdSource {
    /// Threshold for the given auxiliary control position
    ///
    /// `Mapped` interpolates linearly: position 0 gives `min`, full scale
    /// gives `max`. Readings above full scale are clamped.
    pub fn derive(&self, aux_axis: u16) -> u16 {
        match *self {
            ThresholdSource::Fixed(value) => value,
            ThresholdSource::Mapped { min, max } => {
                let pos = aux_axis.min(ADC_MAX) as u32;
                let span = max.saturating_sub(min) as u32;
                min + (pos * span / ADC_MAX as u32) as u16
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ignores_axis() {
        let src = ThresholdSource::Fixed(20);
        assert_eq!(src.derive(0), 20);
        assert_eq!(src.derive(4095), 20);
    }

    #[test]
    fn test_mapped_endpoints() {
        let src = ThresholdSource::Mapped { min: 2, max: 100 };
        assert_eq!(src.derive(0), 2);
        assert_eq!(src.derive(4095), 100);
        assert_eq!(src.derive(u16::MAX), 100);
    }

    #[test]
    fn test_mapped_midpoint() {
        let src = ThresholdSource::Mapped { min: 0, max: 4095 };
        assert_eq!(src.derive(2048), 2048);

        let src = ThresholdSource::Mapped { min: 2, max: 100 };
        // 2 + 2048 * 98 / 4095
        assert_eq!(src.derive(2048), 51);
    }
}
