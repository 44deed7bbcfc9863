/// One 24-bit BMP color sample.
///
/// Field order follows the on-disk byte order (blue, green, red).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSample {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl ColorSample {
    /// Bytes per sample on disk.
    pub const SIZE: usize = 3;

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    /// A sample with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self {
            blue: value,
            green: value,
            red: value,
        }
    }

    /// Read a sample from its 3 on-disk bytes (B, G, R).
    pub const fn from_bgr_bytes(bytes: [u8; 3]) -> Self {
        Self {
            blue: bytes[0],
            green: bytes[1],
            red: bytes[2],
        }
    }

    /// The 3 on-disk bytes (B, G, R).
    pub const fn to_bgr_bytes(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Whether all three channels are equal.
    pub const fn is_gray(self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::alt::BGR8> for ColorSample {
    fn from(p: rgb::alt::BGR8) -> Self {
        Self {
            blue: p.b,
            green: p.g,
            red: p.r,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<ColorSample> for rgb::alt::BGR8 {
    fn from(s: ColorSample) -> Self {
        rgb::alt::BGR8 {
            b: s.blue,
            g: s.green,
            r: s.red,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for ColorSample {
    fn from(p: rgb::RGB8) -> Self {
        Self::new(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<ColorSample> for rgb::RGB8 {
    fn from(s: ColorSample) -> Self {
        rgb::RGB8::new(s.red, s.green, s.blue)
    }
}
