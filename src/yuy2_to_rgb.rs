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
use crate::images::YuvPackedImage;
use crate::internals::MIN_SIZE_FOR_PARALLEL_CONVERSION;
#[cfg(feature = "rayon")]
use crate::internals::use_parallel;
use crate::video_range::{store_pixel, ChromaTerms};
use crate::yuv_error::check_rgba_destination;
use crate::yuv_support::{YuvSourceChannels, Yuy2Description};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

pub(crate) fn yuy2_to_rgb_impl<const DESTINATION_CHANNELS: u8, const YUY2_SOURCE: u8>(
    image: &YuvPackedImage<u8>,
    rgb: &mut [u8],
    rgb_stride: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let yuy2_source: Yuy2Description = YUY2_SOURCE.into();
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    image.check_constraints()?;
    check_rgba_destination(rgb, rgb_stride, image.width, image.height, channels)?;

    let width = image.width as usize;

    let process_row = |yuy2_row: &[u8], rgb_row: &mut [u8]| {
        for (rgb, yuy2) in rgb_row[..width * channels]
            .chunks_exact_mut(channels * 2)
            .zip(yuy2_row[..width * 2].chunks_exact(4))
        {
            let terms = ChromaTerms::new(
                yuy2[yuy2_source.get_u_position()],
                yuy2[yuy2_source.get_v_position()],
            );
            let (dst0, dst1) = rgb.split_at_mut(channels);
            store_pixel::<DESTINATION_CHANNELS>(
                dst0,
                yuy2[yuy2_source.get_first_y_position()],
                &terms,
            );
            store_pixel::<DESTINATION_CHANNELS>(
                dst1,
                yuy2[yuy2_source.get_second_y_position()],
                &terms,
            );
        }
    };

    let yuy2_stride = image.yuy_stride as usize;

    #[cfg(feature = "rayon")]
    if use_parallel(image.width, image.height, parallel_threshold) {
        image
            .yuy
            .par_chunks_exact(yuy2_stride)
            .zip(rgb.par_chunks_exact_mut(rgb_stride as usize))
            .for_each(|(yuy2_row, rgb_row)| process_row(yuy2_row, rgb_row));
        return Ok(());
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel_threshold;

    image
        .yuy
        .chunks_exact(yuy2_stride)
        .zip(rgb.chunks_exact_mut(rgb_stride as usize))
        .for_each(|(yuy2_row, rgb_row)| process_row(yuy2_row, rgb_row));

    Ok(())
}

macro_rules! d_cnv {
    ($method: ident, $yuy2_fmt: expr, $px_fmt: expr, $yuy2_name: expr, $rgb_name: expr) => {
        #[doc = concat!("Convert ", $yuy2_name, " format to ", $rgb_name, " image.

This function takes packed ", $yuy2_name, " (4:2:2) data in BT.601 video range
and converts it to ", $rgb_name, " with 8-bit per channel precision.

# Arguments

* `packed_image` - Source packed image, width must be even.
* `dst` - A mutable slice to store the converted ", $rgb_name, " data.
* `dst_stride` - Elements per row.

# Errors

Returns an error if width is odd or the buffers do not match the image geometry.")]
        pub fn $method(
            packed_image: &YuvPackedImage<u8>,
            dst: &mut [u8],
            dst_stride: u32,
        ) -> Result<(), YuvError> {
            yuy2_to_rgb_impl::<{ $px_fmt as u8 }, { $yuy2_fmt as u8 }>(
                packed_image,
                dst,
                dst_stride,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        }
    };
}

d_cnv!(yuyv422_to_rgb, Yuy2Description::YUYV, YuvSourceChannels::Rgb, "YUYV", "RGB");
d_cnv!(yuyv422_to_bgr, Yuy2Description::YUYV, YuvSourceChannels::Bgr, "YUYV", "BGR");
d_cnv!(yuyv422_to_rgba, Yuy2Description::YUYV, YuvSourceChannels::Rgba, "YUYV", "RGBA");
d_cnv!(yuyv422_to_bgra, Yuy2Description::YUYV, YuvSourceChannels::Bgra, "YUYV", "BGRA");
d_cnv!(uyvy422_to_rgb, Yuy2Description::UYVY, YuvSourceChannels::Rgb, "UYVY", "RGB");
d_cnv!(uyvy422_to_bgr, Yuy2Description::UYVY, YuvSourceChannels::Bgr, "UYVY", "BGR");
d_cnv!(uyvy422_to_rgba, Yuy2Description::UYVY, YuvSourceChannels::Rgba, "UYVY", "RGBA");
d_cnv!(uyvy422_to_bgra, Yuy2Description::UYVY, YuvSourceChannels::Bgra, "UYVY", "BGRA");
d_cnv!(yvyu422_to_rgb, Yuy2Description::YVYU, YuvSourceChannels::Rgb, "YVYU", "RGB");
d_cnv!(yvyu422_to_bgr, Yuy2Description::YVYU, YuvSourceChannels::Bgr, "YVYU", "BGR");
d_cnv!(yvyu422_to_rgba, Yuy2Description::YVYU, YuvSourceChannels::Rgba, "YVYU", "RGBA");
d_cnv!(yvyu422_to_bgra, Yuy2Description::YVYU, YuvSourceChannels::Bgra, "YVYU", "BGRA");
