//! Four-character codes and media subtype GUIDs.
//!
//! Most video subtypes are a FOURCC folded into the well-known
//! `XXXXXXXX-0000-0010-8000-00AA00389B71` GUID. Uncompressed RGB layouts use
//! dedicated GUIDs, collected in [`subtype`].

use std::fmt;

/// A four-character code, first character in the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FourCc(pub u32);

impl FourCc {
    /// Build a code from its four characters, e.g. `FourCc::new(*b"I420")`.
    #[inline]
    pub const fn new(code: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(code))
    }

    /// The four characters in stream order.
    #[inline]
    pub const fn bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Parse a code from a string of exactly four ASCII characters.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes: [u8; 4] = s.as_bytes().try_into().ok()?;
        Some(Self::new(bytes))
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bytes() {
            let c = if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

const FOURCC_DATA4: [u8; 8] = [0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B, 0x71];

/// A media subtype identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// The subtype GUID carrying a FOURCC.
    pub const fn from_fourcc(code: FourCc) -> Self {
        Self::new(code.0, 0x0000, 0x0010, FOURCC_DATA4)
    }

    /// The FOURCC folded into this GUID, if it has the FOURCC form.
    pub fn fourcc(&self) -> Option<FourCc> {
        (self.data2 == 0x0000 && self.data3 == 0x0010 && self.data4 == FOURCC_DATA4)
            .then_some(FourCc(self.data1))
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

/// Dedicated subtype GUIDs for uncompressed RGB.
pub mod subtype {
    use super::Guid;

    const RGB_DATA4: [u8; 8] = [0x9F, 0x53, 0x00, 0x20, 0xAF, 0x0B, 0xA7, 0x70];

    pub const RGB8: Guid = Guid::new(0xE436_EB7A, 0x524F, 0x11CE, RGB_DATA4);
    pub const RGB565: Guid = Guid::new(0xE436_EB7B, 0x524F, 0x11CE, RGB_DATA4);
    pub const RGB555: Guid = Guid::new(0xE436_EB7C, 0x524F, 0x11CE, RGB_DATA4);
    pub const RGB24: Guid = Guid::new(0xE436_EB7D, 0x524F, 0x11CE, RGB_DATA4);
    pub const RGB32: Guid = Guid::new(0xE436_EB7E, 0x524F, 0x11CE, RGB_DATA4);
    pub const ARGB32: Guid = Guid::new(
        0x773C_9AC0,
        0x3274,
        0x11D0,
        [0xB7, 0x24, 0x00, 0xAA, 0x00, 0x6C, 0x1A, 0x01],
    );
    pub const ARGB1555: Guid = Guid::new(
        0x297C_55AF,
        0xE209,
        0x4CB3,
        [0xB7, 0x57, 0xC7, 0x6D, 0x6B, 0x9C, 0x88, 0xA8],
    );
    pub const ARGB4444: Guid = Guid::new(
        0x6E64_15E6,
        0x5C24,
        0x425F,
        [0x93, 0xCD, 0x80, 0x10, 0x2B, 0x3D, 0x1C, 0xCA],
    );
    pub const A2R10G10B10: Guid = Guid::new(
        0x2F8B_B76D,
        0xB644,
        0x4550,
        [0xAC, 0xF3, 0xD3, 0x0C, 0xAA, 0x65, 0xD5, 0xC5],
    );
    pub const A2B10G10R10: Guid = Guid::new(
        0x576F_7893,
        0xBDF6,
        0x48C4,
        [0x87, 0x5F, 0xAE, 0x7B, 0x81, 0x83, 0x45, 0x67],
    );
}
