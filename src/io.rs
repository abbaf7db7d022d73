use crate::RingBuffer;
use std::io::BufRead;
use std::io::Read;
use std::io::Result;
use std::io::Write;

impl<const N: usize> Write for RingBuffer<u8, N> {
    /// Appends all of `src`, overwriting the oldest bytes if it does not fit. Never fails.
    #[inline]
    fn write(&mut self, src: &[u8]) -> Result<usize> {
        self.extend_from_slice(src);
        Ok(src.len())
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<const N: usize> Read for RingBuffer<u8, N> {
    fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        let (mut front, mut back) = self.as_slices();
        let mut count = front.read(dst)?;
        count += back.read(&mut dst[count..])?;
        self.discard_front(count);
        Ok(count)
    }
}

impl<const N: usize> BufRead for RingBuffer<u8, N> {
    #[inline]
    fn fill_buf(&mut self) -> Result<&[u8]> {
        // The first slice is only empty if the whole buffer is
        Ok(self.as_slices().0)
    }

    #[inline]
    fn consume(&mut self, amt: usize) {
        self.discard_front(amt);
    }
}
