/// Linear RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// From a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let c = |shift: u32| ((hex >> shift) & 0xff) as f64 / 255.0;
        Self::rgb(c(16), c(8), c(0))
    }

    /// Packed `0xRRGGBB`, each channel clamped and rounded.
    pub fn to_hex(self) -> u32 {
        let (r, g, b) = self.to_u8();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    pub fn to_u8(self) -> (u8, u8, u8) {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// CSS `rgb(...)` string for canvas fill styles.
    pub fn css(self) -> String {
        let (r, g, b) = self.to_u8();
        format!("rgb({r},{g},{b})")
    }

    pub fn scale(self, s: f64) -> Self {
        Self::rgb(self.r * s, self.g * s, self.b * s)
    }

    /// Component-wise product.
    pub fn modulate(self, other: Color) -> Self {
        Self::rgb(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    pub fn add(self, other: Color) -> Self {
        Self::rgb(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}
