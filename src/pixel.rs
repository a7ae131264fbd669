/// Interleaved layout of a decoded source plane.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// Destination bitmap pixel format.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 16-bit truncated color, 5-6-5 bit packing, little-endian words.
    Rgb565,
    /// 32-bit RGBA, one byte per channel.
    Rgba8888,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb565 => 2,
            Self::Rgba8888 => 4,
        }
    }

    /// The source plane layout this format converts from.
    ///
    /// RGB565 drops alpha, so its source is decoded as plain RGB; RGBA8888
    /// keeps the alpha channel and needs an RGBA plane.
    pub fn source_layout(&self) -> PixelLayout {
        match self {
            Self::Rgb565 => PixelLayout::Rgb8,
            Self::Rgba8888 => PixelLayout::Rgba8,
        }
    }
}
