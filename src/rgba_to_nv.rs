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
use crate::images::YuvBiPlanarImageMut;
use crate::internals::MIN_SIZE_FOR_PARALLEL_CONVERSION;
#[cfg(feature = "rayon")]
use crate::internals::use_parallel;
use crate::video_range::encode_block;
use crate::yuv_error::check_rgba_destination;
use crate::yuv_support::{YuvNVOrder, YuvSourceChannels};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

pub(crate) fn rgbx_to_nv_impl<const ORIGIN_CHANNELS: u8, const UV_ORDER: u8>(
    image: &mut YuvBiPlanarImageMut<u8>,
    rgba: &[u8],
    rgba_stride: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let order: YuvNVOrder = UV_ORDER.into();
    let src_chans: YuvSourceChannels = ORIGIN_CHANNELS.into();
    let channels = src_chans.get_channels_count();

    check_rgba_destination(rgba, rgba_stride, image.width, image.height, channels)?;
    image.check_constraints()?;

    let width = image.width as usize;
    let y_stride = image.y_stride as usize;
    let uv_stride = image.uv_stride as usize;
    let rgba_stride = rgba_stride as usize;

    let process_double_row = |y_dst: &mut [u8], uv_dst: &mut [u8], rgba: &[u8]| {
        let (y_dst0, y_dst1) = y_dst.split_at_mut(y_stride);
        let (rgba0, rgba1) = rgba.split_at(rgba_stride);

        for ((((y_dst0, y_dst1), uv_dst), rgba0), rgba1) in y_dst0[..width]
            .chunks_exact_mut(2)
            .zip(y_dst1[..width].chunks_exact_mut(2))
            .zip(uv_dst[..width].chunks_exact_mut(2))
            .zip(rgba0[..width * channels].chunks_exact(channels * 2))
            .zip(rgba1[..width * channels].chunks_exact(channels * 2))
        {
            let (u, v) = encode_block::<ORIGIN_CHANNELS>(rgba0, rgba1, y_dst0, y_dst1);
            uv_dst[order.get_u_position()] = u;
            uv_dst[order.get_v_position()] = v;
        }
    };

    let width_u32 = image.width;
    let height_u32 = image.height;
    let y_plane = image.y_plane.borrow_mut();
    let uv_plane = image.uv_plane.borrow_mut();

    #[cfg(feature = "rayon")]
    if use_parallel(width_u32, height_u32, parallel_threshold) {
        y_plane
            .par_chunks_exact_mut(y_stride * 2)
            .zip(uv_plane.par_chunks_exact_mut(uv_stride))
            .zip(rgba.par_chunks_exact(rgba_stride * 2))
            .for_each(|((y_dst, uv_dst), rgba)| process_double_row(y_dst, uv_dst, rgba));
        return Ok(());
    }
    #[cfg(not(feature = "rayon"))]
    let _ = (parallel_threshold, width_u32, height_u32);

    y_plane
        .chunks_exact_mut(y_stride * 2)
        .zip(uv_plane.chunks_exact_mut(uv_stride))
        .zip(rgba.chunks_exact(rgba_stride * 2))
        .for_each(|((y_dst, uv_dst), rgba)| process_double_row(y_dst, uv_dst, rgba));

    Ok(())
}

macro_rules! d_cnv {
    ($method: ident, $px_fmt: expr, $order: expr, $rgb_name: expr, $yuv_name: expr) => {
        #[doc = concat!("Convert ", $rgb_name, " image data to ", $yuv_name, " format.

Produces BT.601 video range 4:2:0 semi-planar data. The chroma pair of each 2x2 block
is computed from its top-left pixel, alpha is ignored.

# Arguments

* `bi_planar_image` - Target ", $yuv_name, " image, width and height must be even.
* `rgba` - The input ", $rgb_name, " image data slice.
* `rgba_stride` - Elements per row.

# Errors

Returns an error if dimensions are odd or the buffers do not match the image geometry.")]
        pub fn $method(
            bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
            rgba: &[u8],
            rgba_stride: u32,
        ) -> Result<(), YuvError> {
            rgbx_to_nv_impl::<{ $px_fmt as u8 }, { $order as u8 }>(
                bi_planar_image,
                rgba,
                rgba_stride,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        }
    };
}

d_cnv!(rgb_to_nv12, YuvSourceChannels::Rgb, YuvNVOrder::UV, "RGB", "NV12");
d_cnv!(bgr_to_nv12, YuvSourceChannels::Bgr, YuvNVOrder::UV, "BGR", "NV12");
d_cnv!(rgba_to_nv12, YuvSourceChannels::Rgba, YuvNVOrder::UV, "RGBA", "NV12");
d_cnv!(bgra_to_nv12, YuvSourceChannels::Bgra, YuvNVOrder::UV, "BGRA", "NV12");
d_cnv!(rgb_to_nv21, YuvSourceChannels::Rgb, YuvNVOrder::VU, "RGB", "NV21");
d_cnv!(bgr_to_nv21, YuvSourceChannels::Bgr, YuvNVOrder::VU, "BGR", "NV21");
d_cnv!(rgba_to_nv21, YuvSourceChannels::Rgba, YuvNVOrder::VU, "RGBA", "NV21");
d_cnv!(bgra_to_nv21, YuvSourceChannels::Bgra, YuvNVOrder::VU, "BGRA", "NV21");
