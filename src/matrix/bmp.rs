//! Greyscale BMP export.
//!
//! Each element becomes one 24-bit grey pixel, scaled linearly so the
//! largest element maps to 255. Negative values clamp to black.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::vec::Vec;

use crate::traits::FloatScalar;

use super::Matrix;

const HEADER_LEN: usize = 54;
const INFO_LEN: u32 = 40;
const PIXELS_PER_METER: u32 = 0x0B12;

/// Errors from [`Matrix::save_bmp`].
#[derive(Debug)]
pub enum BmpError {
    /// The image buffer could not be reserved, or the image is too large
    /// for the format's 32-bit fields.
    Alloc,
    /// The destination file could not be created.
    Open(std::io::Error),
    /// Writing the image failed part-way.
    Write(std::io::Error),
}

impl BmpError {
    /// Signed error code: -1 allocation, -2 open, -3 write.
    pub fn code(&self) -> i32 {
        match self {
            BmpError::Alloc => -1,
            BmpError::Open(_) => -2,
            BmpError::Write(_) => -3,
        }
    }
}

impl core::fmt::Display for BmpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BmpError::Alloc => write!(f, "cannot allocate image buffer"),
            BmpError::Open(e) => write!(f, "cannot open file: {}", e),
            BmpError::Write(e) => write!(f, "cannot write file: {}", e),
        }
    }
}

impl std::error::Error for BmpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BmpError::Alloc => None,
            BmpError::Open(e) | BmpError::Write(e) => Some(e),
        }
    }
}

fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

impl<T: FloatScalar> Matrix<T> {
    /// Encode the matrix as an uncompressed 24-bit BMP image.
    ///
    /// The image is `ncols` pixels wide (padded with black to a multiple of
    /// four) and `nrows` high. Rows are written in matrix order.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_rows(1, 2, &[0.0, 2.0]);
    /// let img = m.to_bmp().unwrap();
    /// assert_eq!(&img[0..2], b"BM");
    /// assert_eq!(img.len(), 54 + 4 * 3);
    /// assert_eq!(&img[54..60], &[0, 0, 0, 255, 255, 255]);
    /// ```
    pub fn to_bmp(&self) -> Result<Vec<u8>, BmpError> {
        let width = self.ncols().checked_add(3).ok_or(BmpError::Alloc)? / 4 * 4;
        let height = self.nrows();
        let image_len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(BmpError::Alloc)?;
        let file_len = image_len.checked_add(HEADER_LEN).ok_or(BmpError::Alloc)?;

        let as_u32 = |n: usize| u32::try_from(n).map_err(|_| BmpError::Alloc);
        let (file_len32, image_len32) = (as_u32(file_len)?, as_u32(image_len)?);
        let (width32, height32) = (as_u32(width)?, as_u32(height)?);

        let mut buf = Vec::new();
        buf.try_reserve_exact(file_len).map_err(|_| BmpError::Alloc)?;

        buf.extend_from_slice(b"BM");
        put_u32(&mut buf, file_len32);
        put_u16(&mut buf, 0);
        put_u16(&mut buf, 0);
        put_u32(&mut buf, HEADER_LEN as u32);
        put_u32(&mut buf, INFO_LEN);
        put_u32(&mut buf, width32);
        put_u32(&mut buf, height32);
        put_u16(&mut buf, 1);
        put_u16(&mut buf, 24);
        put_u32(&mut buf, 0);
        put_u32(&mut buf, image_len32);
        put_u32(&mut buf, PIXELS_PER_METER);
        put_u32(&mut buf, PIXELS_PER_METER);
        put_u32(&mut buf, 0);
        put_u32(&mut buf, 0);

        let mut max = T::neg_infinity();
        for i in 0..height {
            for &x in self.row_slice(i) {
                if max < x {
                    max = x;
                }
            }
        }
        let floor = T::from(1e-12).unwrap();
        if !(max >= floor) {
            max = floor;
        }
        let top = T::from(255.0).unwrap();
        let scale = top / max;

        for i in 0..height {
            for &x in self.row_slice(i) {
                let v = x * scale;
                let v = if v < T::zero() {
                    T::zero()
                } else if v > top {
                    top
                } else {
                    v
                };
                let grey = v.to_u8().unwrap_or(0);
                buf.extend_from_slice(&[grey, grey, grey]);
            }
            for _ in self.ncols()..width {
                buf.extend_from_slice(&[0, 0, 0]);
            }
        }
        Ok(buf)
    }

    /// Write the matrix as a BMP file (see [`to_bmp`](Matrix::to_bmp)).
    pub fn save_bmp(&self, path: impl AsRef<Path>) -> Result<(), BmpError> {
        let buf = self.to_bmp()?;
        let mut file = File::create(path.as_ref()).map_err(BmpError::Open)?;
        file.write_all(&buf).map_err(BmpError::Write)?;
        file.flush().map_err(BmpError::Write)
    }
}
