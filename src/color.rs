//! Three-channel integer pixel value.
//!
//! Channels are signed so filter arithmetic can leave [0,255] before it
//! clamps. The type itself does not enforce the range.

/// RGB pixel with `i32` channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Color {
    pub const BLACK: Color = Color { red: 0, green: 0, blue: 0 };

    pub const fn new(red: i32, green: i32, blue: i32) -> Color {
        Color { red, green, blue }
    }

    /// Color with all three channels set to `level`.
    pub const fn gray(level: i32) -> Color {
        Color { red: level, green: level, blue: level }
    }

    /// Channels in fixed red, green, blue order.
    pub const fn channels(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[i32; 3]> for Color {
    fn from(c: [i32; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_channels_order() {
        let c = Color::from([1, 2, 3]);
        assert_eq!(c.red, 1);
        assert_eq!(c.channels(), [1, 2, 3]);
        assert_eq!(Color::gray(7), Color::new(7, 7, 7));
    }
}
