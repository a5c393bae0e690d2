/// One LED of the play field: green intensity in the high nibble, red in the
/// low nibble. Yellow and orange are mixes of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelColour(pub u8);

impl PixelColour {
    pub const BLACK: PixelColour = PixelColour(0x00);
    pub const RED: PixelColour = PixelColour(0x0F);
    pub const QUART_RED: PixelColour = PixelColour(0x01);
    pub const GREEN: PixelColour = PixelColour(0xF0);
    pub const ORANGE: PixelColour = PixelColour(0x3C);
    pub const QUART_ORANGE: PixelColour = PixelColour(0x12);
    pub const YELLOW: PixelColour = PixelColour(0xFF);
    pub const HALF_YELLOW: PixelColour = PixelColour(0x55);
    pub const QUART_YELLOW: PixelColour = PixelColour(0x11);

    pub const fn new(green: u8, red: u8) -> Self {
        Self(((green & 0x0F) << 4) | (red & 0x0F))
    }

    /// Green intensity, 0-15.
    pub const fn green(self) -> u8 {
        self.0 >> 4
    }

    /// Red intensity, 0-15.
    pub const fn red(self) -> u8 {
        self.0 & 0x0F
    }

    pub const fn is_black(self) -> bool {
        self.0 == 0
    }

    /// 8-bit RGB approximation for screens.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.red() * 17, self.green() * 17, 0)
    }
}
