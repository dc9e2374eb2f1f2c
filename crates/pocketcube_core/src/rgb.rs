use std::fmt;
use std::str::FromStr;

use serde::de::Error;

/// 8-bit sRGB color that serializes to a hex string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb = color_from_hex_str(s)?;
        Ok(Rgb { rgb })
    }
}
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb { rgb: [0; 3] };
    /// Pure white
    pub const WHITE: Rgb = Rgb { rgb: [255; 3] };
}

/// Deserializes a color from a hex string like `#ff00ff` or `#f0f`.
fn color_from_hex_str(s: &str) -> Result<[u8; 3], hex::FromHexError> {
    let mut rgb = [0_u8; 3];
    let s = s.strip_prefix('#').unwrap_or(s).trim();
    match s.len() {
        3 => {
            let s = &s.chars().flat_map(|c| [c, c]).collect::<String>();
            hex::decode_to_slice(s, &mut rgb)?;
        }
        _ => hex::decode_to_slice(s, &mut rgb)?,
    }
    Ok(rgb)
}

#[cfg(feature = "ecolor")]
mod ecolor_convert {
    use super::*;

    impl From<Rgb> for ecolor::Color32 {
        fn from(value: Rgb) -> Self {
            let [r, g, b] = value.rgb;
            ecolor::Color32::from_rgb(r, g, b)
        }
    }
    impl From<ecolor::Color32> for Rgb {
        fn from(value: ecolor::Color32) -> Self {
            let [r, g, b, _] = value.to_array();
            Rgb { rgb: [r, g, b] }
        }
    }

    impl Rgb {
        /// Converts an [`Rgb`] to an [`ecolor::Color32`].
        pub fn to_egui_color32(self) -> ecolor::Color32 {
            self.into()
        }
        /// Converts an [`ecolor::Color32`] to an [`Rgb`].
        pub fn from_egui_color32(color: ecolor::Color32) -> Self {
            color.into()
        }
    }
}
