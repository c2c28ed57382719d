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

pub(crate) fn ycrcb_to_rgbx_impl<
    V: InterleavedSample,
    const DESTINATION_CHANNELS: u8,
    const FAMILY: u8,
>(
    src: &[V],
    src_stride: u32,
    dst: &mut [V],
    dst_stride: u32,
    width: u32,
    height: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let family: YuvFamily = FAMILY.into();
    let channels = dst_chans.get_channels_count();

    check_interleaved(src, src_stride, width, height, 3)?;
    check_interleaved(dst, dst_stride, width, height, channels)?;

    let transform = V::inverse_table(family);
    let cr_pos = family.cr_position();
    let cb_pos = family.cb_position();

    let process_row = |src_row: &[V], dst_row: &mut [V]| {
        for (src, dst) in src_row[..width as usize * 3]
            .chunks_exact(3)
            .zip(dst_row[..width as usize * channels].chunks_exact_mut(channels))
        {
            let [r, g, b] = V::inverse(src[0], src[cr_pos], src[cb_pos], &transform);
            dst[dst_chans.get_r_channel_offset()] = r;
            dst[dst_chans.get_g_channel_offset()] = g;
            dst[dst_chans.get_b_channel_offset()] = b;
            if dst_chans.has_alpha() {
                dst[dst_chans.get_a_channel_offset()] = V::MAX_VALUE;
            }
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
    ($method: ident, $px_fmt: expr, $family: expr, $yuv_name: expr, $rgb_name: expr) => {
        #[doc = concat!("Convert interleaved ", $yuv_name, " to interleaved ", $rgb_name, ".

Works on `u8` and `u16` samples with 14-bit fixed point arithmetic and on `f32`
samples without clamping. 4 channel outputs receive the maximum value of the sample type as alpha.

# Arguments

* `src` - Source 3 channel ", $yuv_name, " image.
* `src_stride` - Elements per row of the source.
* `dst` - A mutable slice to store the ", $rgb_name, " data.
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
            ycrcb_to_rgbx_impl::<V, { $px_fmt as u8 }, { $family as u8 }>(
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

d_cnv!(ycrcb_to_rgb, YuvSourceChannels::Rgb, YuvFamily::YCrCb, "YCrCb", "RGB");
d_cnv!(ycrcb_to_bgr, YuvSourceChannels::Bgr, YuvFamily::YCrCb, "YCrCb", "BGR");
d_cnv!(ycrcb_to_rgba, YuvSourceChannels::Rgba, YuvFamily::YCrCb, "YCrCb", "RGBA");
d_cnv!(ycrcb_to_bgra, YuvSourceChannels::Bgra, YuvFamily::YCrCb, "YCrCb", "BGRA");
d_cnv!(yuv_to_rgb, YuvSourceChannels::Rgb, YuvFamily::Yuv, "YUV", "RGB");
d_cnv!(yuv_to_bgr, YuvSourceChannels::Bgr, YuvFamily::Yuv, "YUV", "BGR");
d_cnv!(yuv_to_rgba, YuvSourceChannels::Rgba, YuvFamily::Yuv, "YUV", "RGBA");
d_cnv!(yuv_to_bgra, YuvSourceChannels::Bgra, YuvFamily::Yuv, "YUV", "BGRA");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb_to_ycrcb::{bgr_to_ycrcb, rgb_to_ycrcb, rgb_to_yuv};
    use rand::Rng;

    fn random_image(pixels: usize, low: u8, high: u8) -> Vec<u8> {
        let mut rng = rand::rng();
        let mut data = vec![0u8; pixels * 3];
        for v in data.iter_mut() {
            *v = rng.random_range(low..=high);
        }
        data
    }

    /// 256x256 pixels holding `[first, x, y]`, one slice of the 8-bit colour cube.
    fn cube_slice(first: u8) -> Vec<u8> {
        (0..=255u8)
            .flat_map(move |y| (0..=255u8).flat_map(move |x| [first, x, y]))
            .collect()
    }

    #[test]
    fn ycrcb_round_trip_every_colour() {
        let side = 256u32;
        let mut ycrcb = vec![0u8; 256 * 256 * 3];
        let mut restored = vec![0u8; 256 * 256 * 3];
        for first in 0..=255u8 {
            let rgb = cube_slice(first);
            rgb_to_ycrcb(&rgb, side * 3, &mut ycrcb, side * 3, side, side).unwrap();
            ycrcb_to_rgb(&ycrcb, side * 3, &mut restored, side * 3, side, side).unwrap();
            for (a, b) in rgb.chunks_exact(3).zip(restored.chunks_exact(3)) {
                let diff = a
                    .iter()
                    .zip(b.iter())
                    .map(|(&a, &b)| a.abs_diff(b))
                    .max()
                    .unwrap_or(0);
                assert!(diff <= 1, "Round trip error for {:?}: restored {:?}", a, b);
            }
        }
    }

    #[test]
    fn yuv_round_trip_without_clipping() {
        let pixels = 4096usize;
        let rgb = random_image(pixels, 48, 207);
        let mut yuv = vec![0u8; pixels * 3];
        let mut restored = vec![0u8; pixels * 3];
        rgb_to_yuv(&rgb, pixels as u32 * 3, &mut yuv, pixels as u32 * 3, pixels as u32, 1)
            .unwrap();
        yuv_to_rgb(&yuv, pixels as u32 * 3, &mut restored, pixels as u32 * 3, pixels as u32, 1)
            .unwrap();
        for (i, (&a, &b)) in rgb.iter().zip(restored.iter()).enumerate() {
            let diff = (a as i32 - b as i32).abs();
            assert!(
                diff <= 1,
                "Round trip error at {}: original {}, restored {}",
                i,
                a,
                b
            );
        }
    }

    #[test]
    fn bgr_round_trip_16_bit() {
        let mut rng = rand::rng();
        let pixels = 1000usize;
        let mut bgr = vec![0u16; pixels * 3];
        for v in bgr.iter_mut() {
            *v = rng.random_range(0..=u16::MAX);
        }
        let corners = [0u16, u16::MAX]
            .iter()
            .flat_map(|&b| [0u16, u16::MAX].map(|g| (b, g)))
            .flat_map(|(b, g)| [0u16, u16::MAX].map(|r| [b, g, r]))
            .flatten()
            .collect::<Vec<u16>>();
        bgr[..corners.len()].copy_from_slice(&corners);
        let mut ycrcb = vec![0u16; pixels * 3];
        let mut restored = vec![0u16; pixels * 3];
        bgr_to_ycrcb(&bgr, pixels as u32 * 3, &mut ycrcb, pixels as u32 * 3, pixels as u32, 1)
            .unwrap();
        ycrcb_to_bgr(
            &ycrcb,
            pixels as u32 * 3,
            &mut restored,
            pixels as u32 * 3,
            pixels as u32,
            1,
        )
        .unwrap();
        for (&a, &b) in bgr.iter().zip(restored.iter()) {
            let diff = (a as i32 - b as i32).abs();
            // Q14 tables are not exact inverses, pure green drifts the most
            assert!(diff <= 22, "Original {}, restored {}", a, b);
        }
    }

    #[test]
    fn alpha_is_opaque() {
        let ycrcb = [76u8, 255, 85, 128, 128, 128];
        let mut rgba = [0u8; 8];
        ycrcb_to_rgba(&ycrcb, 6, &mut rgba, 8, 2, 1).unwrap();
        assert_eq!(rgba[3], 255);
        assert_eq!(rgba[7], 255);
        assert_eq!(&rgba[4..7], &[128, 128, 128]);
        let ycrcb_f = [0.5f32, 0.5, 0.5];
        let mut bgra_f = [0f32; 4];
        ycrcb_to_bgra(&ycrcb_f, 3, &mut bgra_f, 4, 1, 1).unwrap();
        assert_eq!(bgra_f, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn swapped_destinations_mirror() {
        let ycrcb = random_image(300, 0, 255);
        let mut rgb = vec![0u8; 900];
        let mut bgr = vec![0u8; 900];
        ycrcb_to_rgb(&ycrcb, 900, &mut rgb, 900, 300, 1).unwrap();
        ycrcb_to_bgr(&ycrcb, 900, &mut bgr, 900, 300, 1).unwrap();
        for (a, b) in rgb.chunks_exact(3).zip(bgr.chunks_exact(3)) {
            assert_eq!(a, [b[2], b[1], b[0]]);
        }
    }

    #[test]
    fn float_and_integer_agree() {
        let samples = (0..=255u8).step_by(3).collect::<Vec<u8>>();
        let samples = samples.as_slice();
        let ycrcb = samples
            .iter()
            .flat_map(move |&y| {
                samples
                    .iter()
                    .flat_map(move |&cr| samples.iter().flat_map(move |&cb| [y, cr, cb]))
            })
            .collect::<Vec<u8>>();
        let pixels = ycrcb.len() / 3;
        let ycrcb_f = ycrcb
            .chunks_exact(3)
            .flat_map(|px| {
                [
                    px[0] as f32 / 255.0,
                    (px[1] as f32 - 128.0) / 255.0 + 0.5,
                    (px[2] as f32 - 128.0) / 255.0 + 0.5,
                ]
            })
            .collect::<Vec<f32>>();
        let mut rgb = vec![0u8; pixels * 3];
        let mut rgb_f = vec![0f32; pixels * 3];
        ycrcb_to_rgb(&ycrcb, pixels as u32 * 3, &mut rgb, pixels as u32 * 3, pixels as u32, 1)
            .unwrap();
        ycrcb_to_rgb(
            &ycrcb_f,
            pixels as u32 * 3,
            &mut rgb_f,
            pixels as u32 * 3,
            pixels as u32,
            1,
        )
        .unwrap();
        for (i, (&int, &float)) in rgb.iter().zip(rgb_f.iter()).enumerate() {
            let expected = (float * 255.0).clamp(0.0, 255.0);
            assert!(
                (int as f32 - expected).abs() <= 1.0,
                "Integer {} differs from float {} for {:?}",
                int,
                expected,
                &ycrcb[i / 3 * 3..i / 3 * 3 + 3]
            );
        }
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let width = 40usize;
        let height = 21usize;
        let stride = width * 3 + 3;
        let mut src = vec![0u8; stride * height];
        let len = src.len();
        let random = random_image(len.div_ceil(3), 0, 255);
        src.copy_from_slice(&random[..len]);
        let dst_stride = width * 4;
        let mut sequential = vec![0u8; dst_stride * height];
        let mut parallel = vec![0u8; dst_stride * height];
        ycrcb_to_rgbx_impl::<u8, { YuvSourceChannels::Bgra as u8 }, { YuvFamily::Yuv as u8 }>(
            &src,
            stride as u32,
            &mut sequential,
            dst_stride as u32,
            width as u32,
            height as u32,
            usize::MAX,
        )
        .unwrap();
        ycrcb_to_rgbx_impl::<u8, { YuvSourceChannels::Bgra as u8 }, { YuvFamily::Yuv as u8 }>(
            &src,
            stride as u32,
            &mut parallel,
            dst_stride as u32,
            width as u32,
            height as u32,
            0,
        )
        .unwrap();
        assert_eq!(sequential, parallel);
    }
}
