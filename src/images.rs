/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::yuv_error::{
    check_chroma420_channel, check_even_420, check_even_422, check_packed422_channel,
    check_y8_channel, check_zero_size, MismatchedSize,
};
use crate::YuvError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone)]
/// Semi-planar 4:2:0 image, NV12 or NV21 depending on the conversion
pub struct YuvBiPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub uv_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub uv_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a, T> YuvBiPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_zero_size(self.width, self.height)?;
        check_even_420(self.width, self.height)?;
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma420_channel(self.uv_plane, self.uv_stride, self.width, self.height, 2)?;
        Ok(())
    }

    /// Splits one buffer holding `height` luma rows followed by `height / 2`
    /// interleaved chroma rows, both with the same stride.
    pub fn from_stacked(
        data: &'a [T],
        stride: u32,
        width: u32,
        height: u32,
    ) -> Result<YuvBiPlanarImage<'a, T>, YuvError> {
        check_zero_size(width, height)?;
        check_even_420(width, height)?;
        let luma_size = (stride as usize)
            .checked_mul(height as usize)
            .ok_or(YuvError::PointerOverflow)?;
        let chroma_size = stride as usize * (height as usize / 2);
        if data.len() != luma_size + chroma_size {
            return Err(YuvError::PackedPlaneSizeMismatch(MismatchedSize {
                expected: luma_size + chroma_size,
                received: data.len(),
            }));
        }
        let (y_plane, uv_plane) = data.split_at(luma_size);
        let image = YuvBiPlanarImage {
            y_plane,
            y_stride: stride,
            uv_plane,
            uv_stride: stride,
            width,
            height,
        };
        image.check_constraints()?;
        Ok(image)
    }
}

#[derive(Debug)]
/// Mutable semi-planar 4:2:0 image
pub struct YuvBiPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub uv_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub uv_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a, T> YuvBiPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_zero_size(self.width, self.height)?;
        check_even_420(self.width, self.height)?;
        check_y8_channel(
            self.y_plane.borrow(),
            self.y_stride,
            self.width,
            self.height,
        )?;
        check_chroma420_channel(
            self.uv_plane.borrow(),
            self.uv_stride,
            self.width,
            self.height,
            2,
        )?;
        Ok(())
    }

    pub fn to_fixed(&'a self) -> YuvBiPlanarImage<'a, T> {
        YuvBiPlanarImage {
            y_plane: self.y_plane.borrow(),
            y_stride: self.y_stride,
            uv_plane: self.uv_plane.borrow(),
            uv_stride: self.uv_stride,
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> YuvBiPlanarImageMut<'_, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates tightly packed semi-planar 4:2:0 image
    pub fn alloc(width: u32, height: u32) -> Self {
        let chroma_width = (width as usize).div_ceil(2) * 2;
        let chroma_height = (height as usize).div_ceil(2);
        let y_target = vec![T::default(); width as usize * height as usize];
        let chroma_target = vec![T::default(); chroma_width * chroma_height];
        YuvBiPlanarImageMut {
            y_plane: BufferStoreMut::Owned(y_target),
            y_stride: width,
            uv_plane: BufferStoreMut::Owned(chroma_target),
            uv_stride: chroma_width as u32,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone)]
/// Fully planar 4:2:0 image, I420 or YV12 depending on which plane is passed as `u_plane`
pub struct YuvPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub u_stride: u32,
    pub v_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_zero_size(self.width, self.height)?;
        check_even_420(self.width, self.height)?;
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma420_channel(self.u_plane, self.u_stride, self.width, self.height, 1)?;
        check_chroma420_channel(self.v_plane, self.v_stride, self.width, self.height, 1)?;
        Ok(())
    }
}

#[derive(Debug)]
/// Mutable fully planar 4:2:0 image
pub struct YuvPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub u_stride: u32,
    pub v_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a, T> YuvPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_zero_size(self.width, self.height)?;
        check_even_420(self.width, self.height)?;
        check_y8_channel(
            self.y_plane.borrow(),
            self.y_stride,
            self.width,
            self.height,
        )?;
        check_chroma420_channel(
            self.u_plane.borrow(),
            self.u_stride,
            self.width,
            self.height,
            1,
        )?;
        check_chroma420_channel(
            self.v_plane.borrow(),
            self.v_stride,
            self.width,
            self.height,
            1,
        )?;
        Ok(())
    }

    pub fn to_fixed(&'a self) -> YuvPlanarImage<'a, T> {
        YuvPlanarImage {
            y_plane: self.y_plane.borrow(),
            y_stride: self.y_stride,
            u_plane: self.u_plane.borrow(),
            u_stride: self.u_stride,
            v_plane: self.v_plane.borrow(),
            v_stride: self.v_stride,
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> YuvPlanarImageMut<'_, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates tightly packed planar 4:2:0 image
    pub fn alloc(width: u32, height: u32) -> Self {
        let chroma_width = (width as usize).div_ceil(2);
        let chroma_height = (height as usize).div_ceil(2);
        let y_target = vec![T::default(); width as usize * height as usize];
        let u_target = vec![T::default(); chroma_width * chroma_height];
        let v_target = vec![T::default(); chroma_width * chroma_height];
        Self {
            y_plane: BufferStoreMut::Owned(y_target),
            y_stride: width,
            u_plane: BufferStoreMut::Owned(u_target),
            u_stride: chroma_width as u32,
            v_plane: BufferStoreMut::Owned(v_target),
            v_stride: chroma_width as u32,
            width,
            height,
        }
    }
}

#[inline]
fn check_stacked420<T>(data: &[T], stride: u32, width: u32, height: u32) -> Result<(), YuvError> {
    check_zero_size(width, height)?;
    check_even_420(width, height)?;
    if stride < width {
        return Err(YuvError::StrideTooSmall(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    let expected = (stride as usize)
        .checked_mul(height as usize + height as usize / 2)
        .ok_or(YuvError::PointerOverflow)?;
    if data.len() != expected {
        return Err(YuvError::PackedPlaneSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[derive(Debug, Clone)]
/// Planar 4:2:0 image stored in one buffer with a common stride.
///
/// `height` luma rows are followed by the first chroma plane and then the second.
/// Chroma rows are `width / 2` long and two of them share one `stride` row, so
/// each chroma plane takes `height / 4` buffer rows, a half row when `height % 4 == 2`.
pub struct YuvStackedImage<'a, T>
where
    T: Copy + Debug,
{
    pub data: &'a [T],
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvStackedImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_stacked420(self.data, self.stride, self.width, self.height)
    }
}

#[derive(Debug)]
/// Mutable planar 4:2:0 image in one buffer, see [YuvStackedImage]
pub struct YuvStackedImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub data: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a, T> YuvStackedImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_stacked420(self.data.borrow(), self.stride, self.width, self.height)
    }

    pub fn to_fixed(&'a self) -> YuvStackedImage<'a, T> {
        YuvStackedImage {
            data: self.data.borrow(),
            stride: self.stride,
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> YuvStackedImageMut<'_, T>
where
    T: Default + Clone + Copy + Debug,
{
    pub fn alloc(width: u32, height: u32) -> Self {
        let rows = height as usize + height as usize / 2;
        Self {
            data: BufferStoreMut::Owned(vec![T::default(); width as usize * rows]),
            stride: width,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone)]
/// Packed 4:2:2 image, two pixels share one 4 elements macro-pixel
pub struct YuvPackedImage<'a, T>
where
    T: Copy + Debug,
{
    pub yuy: &'a [T],
    /// Stride here always means Elements per row.
    pub yuy_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPackedImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_zero_size(self.width, self.height)?;
        check_even_422(self.width, self.height)?;
        check_packed422_channel(self.yuy, self.yuy_stride, self.width, self.height)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Luma plane view of any 4:2:0 image
pub struct YuvGrayImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvGrayImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        Ok(())
    }
}

impl<'a, T: Copy + Debug> From<&YuvBiPlanarImage<'a, T>> for YuvGrayImage<'a, T> {
    fn from(value: &YuvBiPlanarImage<'a, T>) -> Self {
        YuvGrayImage {
            y_plane: value.y_plane,
            y_stride: value.y_stride,
            width: value.width,
            height: value.height,
        }
    }
}

impl<'a, T: Copy + Debug> From<&YuvPlanarImage<'a, T>> for YuvGrayImage<'a, T> {
    fn from(value: &YuvPlanarImage<'a, T>) -> Self {
        YuvGrayImage {
            y_plane: value.y_plane,
            y_stride: value.y_stride,
            width: value.width,
            height: value.height,
        }
    }
}

impl<'a, T: Copy + Debug> From<&YuvStackedImage<'a, T>> for YuvGrayImage<'a, T> {
    fn from(value: &YuvStackedImage<'a, T>) -> Self {
        let luma_size = (value.stride as usize * value.height as usize).min(value.data.len());
        YuvGrayImage {
            y_plane: &value.data[..luma_size],
            y_stride: value.stride,
            width: value.width,
            height: value.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_stacked_splits_planes() {
        let width = 6u32;
        let height = 4u32;
        let stride = 8u32;
        let mut data = vec![0u8; stride as usize * 6];
        for (i, v) in data.iter_mut().enumerate() {
            *v = (i % 251) as u8;
        }
        let image = YuvBiPlanarImage::from_stacked(&data, stride, width, height).unwrap();
        assert_eq!(image.y_plane.len(), 32);
        assert_eq!(image.uv_plane.len(), 16);
        assert_eq!(image.uv_plane[0], 32);
        assert_eq!(image.uv_stride, stride);
        assert!(YuvBiPlanarImage::from_stacked(&data[1..], stride, width, height).is_err());
        assert!(matches!(
            YuvBiPlanarImage::from_stacked(&data, stride, width, 3),
            Err(YuvError::OddDimensions(_))
        ));
    }

    #[test]
    fn allocated_images_pass_constraints() {
        let bi_planar = YuvBiPlanarImageMut::<u8>::alloc(16, 10);
        assert!(bi_planar.check_constraints().is_ok());
        let planar = YuvPlanarImageMut::<u8>::alloc(16, 10);
        assert!(planar.check_constraints().is_ok());
        assert_eq!(planar.u_plane.borrow().len(), 8 * 5);
        let stacked = YuvStackedImageMut::<u8>::alloc(16, 10);
        assert!(stacked.check_constraints().is_ok());
        assert_eq!(stacked.data.borrow().len(), 16 * 15);
        let odd = YuvPlanarImageMut::<u8>::alloc(15, 10);
        assert!(matches!(
            odd.check_constraints(),
            Err(YuvError::OddDimensions(_))
        ));
    }

    #[test]
    fn packed_image_requires_even_width_only() {
        let data = vec![0u8; 8 * 3];
        let image = YuvPackedImage {
            yuy: &data,
            yuy_stride: 8,
            width: 4,
            height: 3,
        };
        assert!(image.check_constraints().is_ok());
        let image = YuvPackedImage {
            yuy: &data,
            yuy_stride: 8,
            width: 3,
            height: 3,
        };
        assert!(image.check_constraints().is_err());
    }
}
