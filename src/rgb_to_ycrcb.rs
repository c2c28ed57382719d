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
use crate::internals::MIN_SIZE_FOR_PARALLEL_CONVERSION;
#[cfg(feature = "rayon")]
use crate::internals::use_parallel;
use crate::numerics::InterleavedSample;
use crate::yuv_error::check_interleaved;
use crate::yuv_support::{YuvFamily, YuvSourceChannels};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Interleaved RGB(A)/BGR(A) to 3 channel Y Cr Cb or Y U V.
///
/// Alpha of 4 channel sources is ignored.
pub(crate) fn rgbx_to_ycrcb_impl<V: InterleavedSample, const SOURCE_CHANNELS: u8, const FAMILY: u8>(
    src: &[V],
    src_stride: u32,
    dst: &mut [V],
    dst_stride: u32,
    width: u32,
    height: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let src_chans: YuvSourceChannels = SOURCE_CHANNELS.into();
    let family: YuvFamily = FAMILY.into();
    let channels = src_chans.get_channels_count();

    check_interleaved(src, src_stride, width, height, channels)?;
    check_interleaved(dst, dst_stride, width, height, 3)?;

    let transform = V::forward_table(family, src_chans);
    let blue_idx = src_chans.get_blue_index();
    let cr_pos = family.cr_position();
    let cb_pos = family.cb_position();

    let process_row = |src_row: &[V], dst_row: &mut [V]| {
        for (src, dst) in src_row[..width as usize * channels]
            .chunks_exact(channels)
            .zip(dst_row[..width as usize * 3].chunks_exact_mut(3))
        {
            let [y, cr, cb] = V::forward([src[0], src[1], src[2]], blue_idx, &transform);
            dst[0] = y;
            dst[cr_pos] = cr;
            dst[cb_pos] = cb;
        }
    };

    #[cfg(feature = "rayon")]
    if use_parallel(width, height, parallel_threshold) {
        src.par_chunks_exact(src_stride as usize)
            .zip(dst.par_chunks_exact_mut(dst_stride as usize))
            .for_each(|(src_row, dst_row)| process_row(src_row, dst_row));
        return Ok(());
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel_threshold;

    src.chunks_exact(src_stride as usize)
        .zip(dst.chunks_exact_mut(dst_stride as usize))
        .for_each(|(src_row, dst_row)| process_row(src_row, dst_row));

    Ok(())
}

macro_rules! d_cnv {
    (
        $method: ident,
        $px_fmt: expr,
        $family: expr,
        $rgb_name: expr,
        $yuv_name: expr,
        $chroma_order: expr
    ) => {
        #[doc = concat!("Convert interleaved ", $rgb_name, " to interleaved ", $yuv_name, ".

Works on `u8` and `u16` samples with 14-bit fixed point arithmetic and on `f32`
samples in [0, 1] without clamping. Output pixels are stored as ", $chroma_order, ".

# Arguments

* `src` - Source ", $rgb_name, " image.
* `src_stride` - Elements per row of the source.
* `dst` - A mutable slice to store the 3 channel ", $yuv_name, " data.
* `dst_stride` - Elements per row of the destination.
* `width` - Image width.
* `height` - Image height.

# Errors

Returns an error if the lengths or strides of the buffers are not valid for `width` and `height`.")]
        pub fn $method<V: InterleavedSample>(
            src: &[V],
            src_stride: u32,
            dst: &mut [V],
            dst_stride: u32,
            width: u32,
            height: u32,
        ) -> Result<(), YuvError> {
            rgbx_to_ycrcb_impl::<V, { $px_fmt as u8 }, { $family as u8 }>(
                src,
                src_stride,
                dst,
                dst_stride,
                width,
                height,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        }
    };
}

d_cnv!(rgb_to_ycrcb, YuvSourceChannels::Rgb, YuvFamily::YCrCb, "RGB", "YCrCb", "Y, Cr, Cb");
d_cnv!(bgr_to_ycrcb, YuvSourceChannels::Bgr, YuvFamily::YCrCb, "BGR", "YCrCb", "Y, Cr, Cb");
d_cnv!(rgba_to_ycrcb, YuvSourceChannels::Rgba, YuvFamily::YCrCb, "RGBA", "YCrCb", "Y, Cr, Cb");
d_cnv!(bgra_to_ycrcb, YuvSourceChannels::Bgra, YuvFamily::YCrCb, "BGRA", "YCrCb", "Y, Cr, Cb");
d_cnv!(rgb_to_yuv, YuvSourceChannels::Rgb, YuvFamily::Yuv, "RGB", "YUV", "Y, U, V");
d_cnv!(bgr_to_yuv, YuvSourceChannels::Bgr, YuvFamily::Yuv, "BGR", "YUV", "Y, U, V");
d_cnv!(rgba_to_yuv, YuvSourceChannels::Rgba, YuvFamily::Yuv, "RGBA", "YUV", "Y, U, V");
d_cnv!(bgra_to_yuv, YuvSourceChannels::Bgra, YuvFamily::Yuv, "BGRA", "YUV", "Y, U, V");

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn white_and_black_ycrcb() {
        let src = [255u8, 255, 255, 0, 0, 0];
        let mut dst = [0u8; 6];
        rgb_to_ycrcb(&src, 6, &mut dst, 6, 2, 1).unwrap();
        assert_eq!(dst, [255, 128, 128, 0, 128, 128]);
    }

    #[test]
    fn channel_swap_symmetry() {
        let mut rng = rand::rng();
        let width = 37usize;
        let height = 9usize;
        let mut rgb = vec![0u8; width * 3 * height];
        for v in rgb.iter_mut() {
            *v = rng.random_range(0..=255);
        }
        let bgr = rgb
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect::<Vec<u8>>();
        let mut from_rgb = vec![0u8; width * 3 * height];
        let mut from_bgr = vec![1u8; width * 3 * height];
        rgb_to_yuv(
            &rgb,
            width as u32 * 3,
            &mut from_rgb,
            width as u32 * 3,
            width as u32,
            height as u32,
        )
        .unwrap();
        bgr_to_yuv(
            &bgr,
            width as u32 * 3,
            &mut from_bgr,
            width as u32 * 3,
            width as u32,
            height as u32,
        )
        .unwrap();
        assert_eq!(from_rgb, from_bgr);
    }

    #[test]
    fn yuv_order_is_y_u_v() {
        let src = [0u8, 0, 255];
        let mut ycrcb = [0u8; 3];
        let mut yuv = [0u8; 3];
        rgb_to_ycrcb(&src, 3, &mut ycrcb, 3, 1, 1).unwrap();
        rgb_to_yuv(&src, 3, &mut yuv, 3, 1, 1).unwrap();
        // Pure blue drives Cb/U up and Cr/V down.
        assert!(ycrcb[2] > 200 && ycrcb[1] < 128);
        assert!(yuv[1] > 200 && yuv[2] < 128);
    }

    #[test]
    fn alpha_is_ignored() {
        let rgba = [10u8, 200, 30, 0, 10, 200, 30, 255];
        let rgb = [10u8, 200, 30, 10, 200, 30];
        let mut a = [0u8; 6];
        let mut b = [0u8; 6];
        rgba_to_ycrcb(&rgba, 8, &mut a, 6, 2, 1).unwrap();
        rgb_to_ycrcb(&rgb, 6, &mut b, 6, 2, 1).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[..3], a[3..]);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let mut rng = rand::rng();
        let width = 64usize;
        let height = 33usize;
        let src_stride = width * 4 + 5;
        let dst_stride = width * 3 + 2;
        let mut src = vec![0u16; src_stride * height];
        for v in src.iter_mut() {
            *v = rng.random_range(0..=u16::MAX);
        }
        let mut sequential = vec![7u16; dst_stride * height];
        let mut parallel = vec![7u16; dst_stride * height];
        rgbx_to_ycrcb_impl::<u16, { YuvSourceChannels::Bgra as u8 }, { YuvFamily::YCrCb as u8 }>(
            &src,
            src_stride as u32,
            &mut sequential,
            dst_stride as u32,
            width as u32,
            height as u32,
            usize::MAX,
        )
        .unwrap();
        rgbx_to_ycrcb_impl::<u16, { YuvSourceChannels::Bgra as u8 }, { YuvFamily::YCrCb as u8 }>(
            &src,
            src_stride as u32,
            &mut parallel,
            dst_stride as u32,
            width as u32,
            height as u32,
            0,
        )
        .unwrap();
        assert_eq!(sequential, parallel);
        for row in sequential.chunks_exact(dst_stride) {
            assert_eq!(&row[width * 3..], &[7, 7], "Row padding must be left untouched");
        }
    }

    #[test]
    fn float_and_integer_agree() {
        let samples = (0..=255u8).step_by(3).collect::<Vec<u8>>();
        let samples = samples.as_slice();
        let src = samples
            .iter()
            .flat_map(move |&b| {
                samples
                    .iter()
                    .flat_map(move |&g| samples.iter().flat_map(move |&r| [b, g, r]))
            })
            .collect::<Vec<u8>>();
        let pixels = src.len() / 3;
        let src_f = src.iter().map(|&v| v as f32 / 255.0).collect::<Vec<f32>>();
        let mut dst = vec![0u8; pixels * 3];
        let mut dst_f = vec![0f32; pixels * 3];
        bgr_to_ycrcb(&src, pixels as u32 * 3, &mut dst, pixels as u32 * 3, pixels as u32, 1)
            .unwrap();
        bgr_to_ycrcb(
            &src_f,
            pixels as u32 * 3,
            &mut dst_f,
            pixels as u32 * 3,
            pixels as u32,
            1,
        )
        .unwrap();
        for (i, (&int, &float)) in dst.iter().zip(dst_f.iter()).enumerate() {
            // Float chroma is centered on 0.5, integer chroma on 128
            let expected = if i % 3 == 0 {
                float * 255.0
            } else {
                (float - 0.5) * 255.0 + 128.0
            };
            assert!(
                (int as f32 - expected).abs() <= 1.0,
                "Float and integer differ for {:?}: int {}, float {}",
                &src[i / 3 * 3..i / 3 * 3 + 3],
                int,
                expected
            );
        }
    }

    #[test]
    fn invalid_geometry_writes_nothing() {
        let src = vec![0u8; 12];
        let mut dst = vec![9u8; 11];
        assert!(rgb_to_ycrcb(&src, 6, &mut dst, 6, 2, 2).is_err());
        assert!(dst.iter().all(|&v| v == 9));
        let mut dst = vec![9u8; 12];
        assert!(rgb_to_ycrcb(&src, 5, &mut dst, 6, 2, 2).is_err());
        assert!(rgb_to_ycrcb(&src, 6, &mut dst, 6, 0, 2).is_err());
    }
}
