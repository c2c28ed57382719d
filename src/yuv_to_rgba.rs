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
use crate::images::{YuvPlanarImage, YuvStackedImage};
use crate::internals::{ProcessedOffset, MIN_SIZE_FOR_PARALLEL_CONVERSION};
#[cfg(feature = "rayon")]
use crate::internals::use_parallel;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::sse::sse_yuv_to_rgba_row420;
use crate::video_range::{store_pixel, ChromaTerms};
use crate::yuv_error::check_rgba_destination;
use crate::yuv_support::{StackedChromaPlane, YuvNVOrder, YuvSourceChannels};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Decodes two luma rows sharing one row of U and V, every slice is cut to the image width.
#[inline]
fn decode_double_row<const DESTINATION_CHANNELS: u8>(
    y_src0: &[u8],
    y_src1: &[u8],
    u_src: &[u8],
    v_src: &[u8],
    rgba0: &mut [u8],
    rgba1: &mut [u8],
    _use_sse: bool,
) {
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    let mut _offset = ProcessedOffset::default();
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    if _use_sse {
        _offset = sse_yuv_to_rgba_row420::<DESTINATION_CHANNELS>(
            y_src0,
            y_src1,
            u_src,
            v_src,
            rgba0,
            rgba1,
            y_src0.len(),
        );
    }

    for (((((rgba0, rgba1), y0), y1), &u), &v) in rgba0
        .chunks_exact_mut(channels * 2)
        .zip(rgba1.chunks_exact_mut(channels * 2))
        .zip(y_src0.chunks_exact(2))
        .zip(y_src1.chunks_exact(2))
        .zip(u_src.iter())
        .zip(v_src.iter())
        .skip(_offset.ux)
    {
        let terms = ChromaTerms::new(u, v);
        let (px0, px1) = rgba0.split_at_mut(channels);
        store_pixel::<DESTINATION_CHANNELS>(px0, y0[0], &terms);
        store_pixel::<DESTINATION_CHANNELS>(px1, y0[1], &terms);
        let (px0, px1) = rgba1.split_at_mut(channels);
        store_pixel::<DESTINATION_CHANNELS>(px0, y1[0], &terms);
        store_pixel::<DESTINATION_CHANNELS>(px1, y1[1], &terms);
    }
}

#[inline]
fn sse_available() -> bool {
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    {
        std::arch::is_x86_feature_detected!("sse4.1")
    }
    #[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse")))]
    {
        false
    }
}

pub(crate) fn yuv420_to_rgbx_impl<const DESTINATION_CHANNELS: u8>(
    image: &YuvPlanarImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    image.check_constraints()?;
    check_rgba_destination(rgba, rgba_stride, image.width, image.height, channels)?;

    let use_sse = sse_available();
    let width = image.width as usize;
    let y_stride = image.y_stride as usize;
    let rgba_stride = rgba_stride as usize;

    let process_double_row = |y_src: &[u8], u_src: &[u8], v_src: &[u8], rgba: &mut [u8]| {
        let (y_src0, y_src1) = y_src.split_at(y_stride);
        let (rgba0, rgba1) = rgba.split_at_mut(rgba_stride);
        decode_double_row::<DESTINATION_CHANNELS>(
            &y_src0[..width],
            &y_src1[..width],
            &u_src[..width / 2],
            &v_src[..width / 2],
            &mut rgba0[..width * channels],
            &mut rgba1[..width * channels],
            use_sse,
        );
    };

    #[cfg(feature = "rayon")]
    if use_parallel(image.width, image.height, parallel_threshold) {
        image
            .y_plane
            .par_chunks_exact(y_stride * 2)
            .zip(image.u_plane.par_chunks_exact(image.u_stride as usize))
            .zip(image.v_plane.par_chunks_exact(image.v_stride as usize))
            .zip(rgba.par_chunks_exact_mut(rgba_stride * 2))
            .for_each(|(((y_src, u_src), v_src), rgba)| {
                process_double_row(y_src, u_src, v_src, rgba)
            });
        return Ok(());
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel_threshold;

    image
        .y_plane
        .chunks_exact(y_stride * 2)
        .zip(image.u_plane.chunks_exact(image.u_stride as usize))
        .zip(image.v_plane.chunks_exact(image.v_stride as usize))
        .zip(rgba.chunks_exact_mut(rgba_stride * 2))
        .for_each(|(((y_src, u_src), v_src), rgba)| process_double_row(y_src, u_src, v_src, rgba));

    Ok(())
}

/// Single buffer planar 4:2:0, `UV_ORDER` tells whether U (I420) or V (YV12) is stored first.
pub(crate) fn stacked420_to_rgbx_impl<const UV_ORDER: u8, const DESTINATION_CHANNELS: u8>(
    image: &YuvStackedImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let order: YuvNVOrder = UV_ORDER.into();
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    image.check_constraints()?;
    check_rgba_destination(rgba, rgba_stride, image.width, image.height, channels)?;

    let use_sse = sse_available();
    let width = image.width as usize;
    let stride = image.stride as usize;
    let rgba_stride = rgba_stride as usize;
    let data = image.data;

    let (first, second) = StackedChromaPlane::layout(stride, width, image.height as usize);
    let (u_layout, v_layout) = match order {
        YuvNVOrder::UV => (first, second),
        YuvNVOrder::VU => (second, first),
    };

    let process_double_row = |row: usize, rgba: &mut [u8]| {
        let y_start = row * 2 * stride;
        let y_src0 = &data[y_start..y_start + width];
        let y_src1 = &data[y_start + stride..y_start + stride + width];
        let u_start = u_layout.row_offset(row);
        let v_start = v_layout.row_offset(row);
        let (rgba0, rgba1) = rgba.split_at_mut(rgba_stride);
        decode_double_row::<DESTINATION_CHANNELS>(
            y_src0,
            y_src1,
            &data[u_start..u_start + width / 2],
            &data[v_start..v_start + width / 2],
            &mut rgba0[..width * channels],
            &mut rgba1[..width * channels],
            use_sse,
        );
    };

    #[cfg(feature = "rayon")]
    if use_parallel(image.width, image.height, parallel_threshold) {
        rgba.par_chunks_exact_mut(rgba_stride * 2)
            .enumerate()
            .for_each(|(row, rgba)| process_double_row(row, rgba));
        return Ok(());
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel_threshold;

    rgba.chunks_exact_mut(rgba_stride * 2)
        .enumerate()
        .for_each(|(row, rgba)| process_double_row(row, rgba));

    Ok(())
}

macro_rules! d_cnv {
    ($method: ident, $px_fmt: expr, $rgb_name: expr) => {
        #[doc = concat!("Convert YUV 420 planar format to ", $rgb_name, ".

Decodes BT.601 video range data with separate U and V planes into full range ", $rgb_name, "
with 8-bit per channel precision.

# Arguments

* `planar_image` - Source planar image, width and height must be even.
* `dst` - A mutable slice to store the converted ", $rgb_name, " data.
* `dst_stride` - Elements per row.

# Errors

Returns an error if dimensions are odd or the planes or the destination do not match
the image geometry.")]
        pub fn $method(
            planar_image: &YuvPlanarImage<u8>,
            dst: &mut [u8],
            dst_stride: u32,
        ) -> Result<(), YuvError> {
            yuv420_to_rgbx_impl::<{ $px_fmt as u8 }>(
                planar_image,
                dst,
                dst_stride,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        }
    };
}

d_cnv!(yuv420_to_rgb, YuvSourceChannels::Rgb, "RGB");
d_cnv!(yuv420_to_bgr, YuvSourceChannels::Bgr, "BGR");
d_cnv!(yuv420_to_rgba, YuvSourceChannels::Rgba, "RGBA");
d_cnv!(yuv420_to_bgra, YuvSourceChannels::Bgra, "BGRA");

macro_rules! d_stacked_cnv {
    ($method: ident, $order: expr, $px_fmt: expr, $yuv_name: expr, $rgb_name: expr) => {
        #[doc = concat!("Convert single buffer ", $yuv_name, " to ", $rgb_name, ".

The luma rows are followed by both chroma planes, see [YuvStackedImage] for the exact layout.

# Arguments

* `image` - Source ", $yuv_name, " image, width and height must be even.
* `dst` - A mutable slice to store the converted ", $rgb_name, " data.
* `dst_stride` - Elements per row.

# Errors

Returns an error if dimensions are odd or the buffers do not match the image geometry.")]
        pub fn $method(
            image: &YuvStackedImage<u8>,
            dst: &mut [u8],
            dst_stride: u32,
        ) -> Result<(), YuvError> {
            stacked420_to_rgbx_impl::<{ $order as u8 }, { $px_fmt as u8 }>(
                image,
                dst,
                dst_stride,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        }
    };
}

d_stacked_cnv!(i420_to_rgb, YuvNVOrder::UV, YuvSourceChannels::Rgb, "I420", "RGB");
d_stacked_cnv!(i420_to_bgr, YuvNVOrder::UV, YuvSourceChannels::Bgr, "I420", "BGR");
d_stacked_cnv!(i420_to_rgba, YuvNVOrder::UV, YuvSourceChannels::Rgba, "I420", "RGBA");
d_stacked_cnv!(i420_to_bgra, YuvNVOrder::UV, YuvSourceChannels::Bgra, "I420", "BGRA");
d_stacked_cnv!(yv12_to_rgb, YuvNVOrder::VU, YuvSourceChannels::Rgb, "YV12", "RGB");
d_stacked_cnv!(yv12_to_bgr, YuvNVOrder::VU, YuvSourceChannels::Bgr, "YV12", "BGR");
d_stacked_cnv!(yv12_to_rgba, YuvNVOrder::VU, YuvSourceChannels::Rgba, "YV12", "RGBA");
d_stacked_cnv!(yv12_to_bgra, YuvNVOrder::VU, YuvSourceChannels::Bgra, "YV12", "BGRA");
