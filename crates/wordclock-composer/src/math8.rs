use crate::Rgb;

/// Highest brightness value, in percent
pub const MAX_BRIGHTNESS_PERCENT: u8 = 100;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * (u16::from(scale) + 1)) >> 8) as u8
}

/// Convert a brightness percentage to a `scale8` factor
///
/// Values above 100 are treated as 100.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn percent_to_scale(percent: u8) -> u8 {
    let percent = u16::from(percent.min(MAX_BRIGHTNESS_PERCENT));
    (percent * 255 / u16::from(MAX_BRIGHTNESS_PERCENT)) as u8
}

/// Scale every channel of a color
#[inline]
pub fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}
