// Copyright © 2024 Andrea Corbellini and contributors
// SPDX-License-Identifier: BSD-3-Clause

use crate::RingBuffer;
use core::convert::Infallible;

#[cfg(feature = "embedded-io")]
use embedded_io::ErrorType;

#[cfg(all(feature = "embedded-io-async", not(feature = "embedded-io")))]
use embedded_io_async::ErrorType;

impl<const N: usize> ErrorType for RingBuffer<u8, N> {
    type Error = Infallible;
}

#[cfg(feature = "embedded-io")]
impl<const N: usize> embedded_io::Write for RingBuffer<u8, N> {
    #[inline]
    fn write(&mut self, src: &[u8]) -> Result<usize, Self::Error> {
        self.extend_from_slice(src);
        Ok(src.len())
    }

    #[inline]
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(feature = "embedded-io")]
impl<const N: usize> embedded_io::Read for RingBuffer<u8, N> {
    fn read(&mut self, dst: &mut [u8]) -> Result<usize, Self::Error> {
        let (mut front, mut back) = self.as_slices();
        let mut count = embedded_io::Read::read(&mut front, dst)?;
        count += embedded_io::Read::read(&mut back, &mut dst[count..])?;
        self.discard_front(count);
        Ok(count)
    }
}

#[cfg(feature = "embedded-io")]
impl<const N: usize> embedded_io::BufRead for RingBuffer<u8, N> {
    #[inline]
    fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        Ok(self.as_slices().0)
    }

    #[inline]
    fn consume(&mut self, amt: usize) {
        self.discard_front(amt);
    }
}

#[cfg(feature = "embedded-io-async")]
impl<const N: usize> embedded_io_async::Write for RingBuffer<u8, N> {
    async fn write(&mut self, src: &[u8]) -> Result<usize, Self::Error> {
        self.extend_from_slice(src);
        Ok(src.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(feature = "embedded-io-async")]
impl<const N: usize> embedded_io_async::Read for RingBuffer<u8, N> {
    async fn read(&mut self, dst: &mut [u8]) -> Result<usize, Self::Error> {
        let (mut front, mut back) = self.as_slices();
        let mut count = embedded_io_async::Read::read(&mut front, dst).await?;
        count += embedded_io_async::Read::read(&mut back, &mut dst[count..]).await?;
        self.discard_front(count);
        Ok(count)
    }
}

#[cfg(feature = "embedded-io-async")]
impl<const N: usize> embedded_io_async::BufRead for RingBuffer<u8, N> {
    async fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        Ok(self.as_slices().0)
    }

    fn consume(&mut self, amt: usize) {
        self.discard_front(amt);
    }
}
