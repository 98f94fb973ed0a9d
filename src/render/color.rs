//! CSS-style colour values for cell fills.
//!
//! Only the hex forms are accepted (`#RGB`, `#RRGGBB`, `#RGBA`, `#RRGGBBAA`);
//! they are what the settings file uses for category colour overrides.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Perceived brightness in 0..=255 (ITU-R BT.601 weights).
    pub fn luma(self) -> u8 {
        let y = 0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32;
        y.round().clamp(0.0, 255.0) as u8
    }

    /// Black or white, whichever reads better on top of `self`.
    pub fn contrasting_text(self) -> Self {
        if self.luma() > 140 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some((hex_digit(hi)? << 4) | hex_digit(lo)?)
}

/// Parse a CSS hex color string. Returns `None` on anything malformed.
pub fn parse_hex_color(s: &str) -> Option<Rgba> {
    let bytes = s.trim().strip_prefix('#')?.as_bytes();
    match bytes.len() {
        3 | 4 => {
            let nibble = |i: usize| hex_digit(bytes[i]).map(|v| (v << 4) | v);
            let a = if bytes.len() == 4 { nibble(3)? } else { 255 };
            Some(Rgba {
                r: nibble(0)?,
                g: nibble(1)?,
                b: nibble(2)?,
                a,
            })
        }
        6 | 8 => {
            let byte = |i: usize| hex_byte(bytes[i], bytes[i + 1]);
            let a = if bytes.len() == 8 { byte(6)? } else { 255 };
            Some(Rgba {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a,
            })
        }
        _ => None,
    }
}
