use strum::{Display, FromRepr, VariantArray};

use crate::Rgb;

/// Sticker color reported by the engine, in engine byte order.
#[derive(Debug, Display, FromRepr, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceletColor {
    /// Blue sticker.
    Blue = 0,
    /// Green sticker.
    Green = 1,
    /// Orange sticker.
    Orange = 2,
    /// Red sticker.
    Red = 3,
    /// White sticker.
    White = 4,
    /// Yellow sticker.
    Yellow = 5,
}
impl FaceletColor {
    /// Returns the display color for this sticker.
    pub fn rgb(self) -> Rgb {
        match self {
            FaceletColor::Blue => Rgb { rgb: [0x00, 0x00, 0xff] },
            FaceletColor::Green => Rgb { rgb: [0x00, 0xff, 0x00] },
            FaceletColor::Orange => Rgb { rgb: [0xff, 0xa5, 0x00] },
            FaceletColor::Red => Rgb { rgb: [0xff, 0x00, 0x00] },
            FaceletColor::White => Rgb::WHITE,
            FaceletColor::Yellow => Rgb { rgb: [0xff, 0xff, 0x00] },
        }
    }
}

/// Returns the display color for a raw engine color byte.
///
/// The mapping is total: bytes outside the six-color catalog display as
/// [`Rgb::BLACK`].
pub fn facelet_rgb(byte: u8) -> Rgb {
    match FaceletColor::from_repr(byte) {
        Some(color) => color.rgb(),
        None => Rgb::BLACK,
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_color_byte_order() {
        for (i, &color) in FaceletColor::VARIANTS.iter().enumerate() {
            assert_eq!(i as u8, color as u8);
        }
    }

    #[test]
    fn test_display_colors() {
        assert_eq!("#0000ff", facelet_rgb(0).to_string());
        assert_eq!("#00ff00", facelet_rgb(1).to_string());
        assert_eq!("#ffa500", facelet_rgb(2).to_string());
        assert_eq!("#ff0000", facelet_rgb(3).to_string());
        assert_eq!("#ffffff", facelet_rgb(4).to_string());
        assert_eq!("#ffff00", facelet_rgb(5).to_string());
    }

    #[test]
    fn test_unknown_bytes_display_as_black() {
        for byte in 6..=u8::MAX {
            assert_eq!(Rgb::BLACK, facelet_rgb(byte));
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        for &a in FaceletColor::VARIANTS {
            for &b in FaceletColor::VARIANTS {
                assert_eq!(a == b, a.rgb() == b.rgb());
            }
        }
    }
}
