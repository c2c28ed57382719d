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
use crate::images::{YuvGrayImage, YuvPackedImage};
use crate::yuv_error::check_rgba_destination;
use crate::yuv_support::Yuy2Description;
use crate::YuvError;

/// Copies the luma plane of any 4:2:0 image to `gray`.
///
/// Samples are copied as is, without expanding the video range.
/// `YuvGrayImage` can be made from every 4:2:0 image with `From`.
///
/// # Errors
///
/// Returns an error if the luma plane or `gray` do not match the image geometry.
pub fn yuv420_to_gray(
    gray_image: &YuvGrayImage<u8>,
    gray: &mut [u8],
    gray_stride: u32,
) -> Result<(), YuvError> {
    gray_image.check_constraints()?;
    check_rgba_destination(gray, gray_stride, gray_image.width, gray_image.height, 1)?;

    let width = gray_image.width as usize;

    for (dst, src) in gray
        .chunks_exact_mut(gray_stride as usize)
        .zip(gray_image.y_plane.chunks_exact(gray_image.y_stride as usize))
    {
        dst[..width].copy_from_slice(&src[..width]);
    }
    Ok(())
}

/// Extracts the luma samples of packed 4:2:2 data.
///
/// # Errors
///
/// Returns an error if width is odd or the buffers do not match the image geometry.
pub fn packed422_to_gray(
    packed_image: &YuvPackedImage<u8>,
    description: Yuy2Description,
    gray: &mut [u8],
    gray_stride: u32,
) -> Result<(), YuvError> {
    packed_image.check_constraints()?;
    check_rgba_destination(gray, gray_stride, packed_image.width, packed_image.height, 1)?;

    let width = packed_image.width as usize;
    let first_y = description.get_first_y_position();
    let second_y = description.get_second_y_position();

    for (dst, src) in gray
        .chunks_exact_mut(gray_stride as usize)
        .zip(packed_image.yuy.chunks_exact(packed_image.yuy_stride as usize))
    {
        for (dst, yuy2) in dst[..width]
            .chunks_exact_mut(2)
            .zip(src[..width * 2].chunks_exact(4))
        {
            dst[0] = yuy2[first_y];
            dst[1] = yuy2[second_y];
        }
    }
    Ok(())
}
