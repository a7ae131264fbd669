use alloc::vec::Vec;

use crate::error::SampleError;
use crate::pixel::PixelFormat;

/// Destination bitmap allocation collaborator.
///
/// The conversion engine never owns destination memory; a decode call asks
/// an allocator for a writable, zeroed buffer shaped for the target format
/// and hands it back filled. Allocation failure is fatal for the call (no
/// partial bitmap is ever returned).
pub trait BitmapAllocator {
    fn allocate(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Vec<u8>, SampleError>;
}

/// Plain heap allocator with fallible reservation.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapAllocator;

impl BitmapAllocator for HeapAllocator {
    fn allocate(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Vec<u8>, SampleError> {
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(format.bytes_per_pixel()))
            .ok_or(SampleError::DimensionsTooLarge { width, height })?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes)
            .map_err(|_| SampleError::AllocationFailed { bytes })?;
        buf.resize(bytes, 0);
        Ok(buf)
    }
}
