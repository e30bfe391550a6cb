//! Fixed-width sample stores.
//!
//! A store writes the low bits of a `u64` pixel value into destination
//! memory at a given width and byte order. Values wider than the store are
//! truncated, matching integer stores of the narrower type.

/// One storage width and byte order.
pub trait Store {
    /// Bytes written per value.
    const BYTES: usize;
    /// Distance in bytes between consecutive values in a row.
    const STRIDE: usize = Self::BYTES;

    /// Write `value` into `dst[..Self::BYTES]`.
    fn write(dst: &mut [u8], value: u64);
}

macro_rules! le_store {
    ($name:ident, $bytes:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Store for $name {
            const BYTES: usize = $bytes;

            #[inline(always)]
            fn write(dst: &mut [u8], value: u64) {
                dst[..$bytes].copy_from_slice(&value.to_le_bytes()[..$bytes]);
            }
        }
    };
}

macro_rules! be_store {
    ($name:ident, $bytes:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Store for $name {
            const BYTES: usize = $bytes;

            #[inline(always)]
            fn write(dst: &mut [u8], value: u64) {
                dst[..$bytes].copy_from_slice(&value.to_be_bytes()[8 - $bytes..]);
            }
        }
    };
}

le_store!(U8, 1, "8-bit sample.");
le_store!(U16Le, 2, "16-bit little-endian.");
le_store!(U24Le, 3, "24-bit little-endian (three bytes of a 32-bit value).");
le_store!(U32Le, 4, "32-bit little-endian.");
le_store!(U48Le, 6, "48-bit little-endian.");
le_store!(U64Le, 8, "64-bit little-endian.");
be_store!(U16Be, 2, "16-bit big-endian.");
be_store!(U32Be, 4, "32-bit big-endian.");
be_store!(U48Be, 6, "48-bit big-endian.");
be_store!(U64Be, 8, "64-bit big-endian.");

/// 8-bit sample in every other byte.
#[derive(Debug, Clone, Copy)]
pub struct U8Stride2;

impl Store for U8Stride2 {
    const BYTES: usize = 1;
    const STRIDE: usize = 2;

    #[inline(always)]
    fn write(dst: &mut [u8], value: u64) {
        dst[0] = value as u8;
    }
}

/// Runtime selector for a [`Store`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    U8,
    U16Le,
    U16Be,
    U24Le,
    U32Le,
    U32Be,
    U48Le,
    U48Be,
    U64Le,
    U64Be,
    U8Stride2,
}

impl StoreKind {
    /// Bytes written per value.
    pub const fn bytes(self) -> usize {
        match self {
            Self::U8 | Self::U8Stride2 => 1,
            Self::U16Le | Self::U16Be => 2,
            Self::U24Le => 3,
            Self::U32Le | Self::U32Be => 4,
            Self::U48Le | Self::U48Be => 6,
            Self::U64Le | Self::U64Be => 8,
        }
    }

    /// Byte distance between consecutive values.
    pub const fn stride(self) -> usize {
        match self {
            Self::U8Stride2 => 2,
            other => other.bytes(),
        }
    }

    /// Write one value into the front of `dst`.
    pub fn write(self, dst: &mut [u8], value: u64) {
        match self {
            Self::U8 => U8::write(dst, value),
            Self::U16Le => U16Le::write(dst, value),
            Self::U16Be => U16Be::write(dst, value),
            Self::U24Le => U24Le::write(dst, value),
            Self::U32Le => U32Le::write(dst, value),
            Self::U32Be => U32Be::write(dst, value),
            Self::U48Le => U48Le::write(dst, value),
            Self::U48Be => U48Be::write(dst, value),
            Self::U64Le => U64Le::write(dst, value),
            Self::U64Be => U64Be::write(dst, value),
            Self::U8Stride2 => U8Stride2::write(dst, value),
        }
    }
}
