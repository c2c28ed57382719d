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
use crate::images::YuvBiPlanarImage;
use crate::internals::{ProcessedOffset, MIN_SIZE_FOR_PARALLEL_CONVERSION};
#[cfg(feature = "rayon")]
use crate::internals::use_parallel;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::sse::sse_yuv_nv_to_rgba420;
use crate::video_range::{store_pixel, ChromaTerms};
use crate::yuv_error::check_rgba_destination;
use crate::yuv_support::{YuvNVOrder, YuvSourceChannels};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

pub(crate) fn yuv_nv12_to_rgbx_impl<const UV_ORDER: u8, const DESTINATION_CHANNELS: u8>(
    image: &YuvBiPlanarImage<u8>,
    rgba: &mut [u8],
    rgba_stride: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let order: YuvNVOrder = UV_ORDER.into();
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    image.check_constraints()?;
    check_rgba_destination(rgba, rgba_stride, image.width, image.height, channels)?;

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    let use_sse = std::arch::is_x86_feature_detected!("sse4.1");

    let width = image.width as usize;
    let y_stride = image.y_stride as usize;

    let process_double_row = |y_src: &[u8], uv_src: &[u8], rgba: &mut [u8]| {
        let (y_src0, y_src1) = y_src.split_at(y_stride);
        let (rgba0, rgba1) = rgba.split_at_mut(rgba_stride as usize);
        let y_src0 = &y_src0[..width];
        let y_src1 = &y_src1[..width];
        let uv_src = &uv_src[..width];
        let rgba0 = &mut rgba0[..width * channels];
        let rgba1 = &mut rgba1[..width * channels];

        let mut _offset = ProcessedOffset::default();
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        if use_sse {
            _offset = sse_yuv_nv_to_rgba420::<UV_ORDER, DESTINATION_CHANNELS>(
                y_src0, y_src1, uv_src, rgba0, rgba1, width,
            );
        }

        for ((((rgba0, rgba1), y0), y1), uv) in rgba0
            .chunks_exact_mut(channels * 2)
            .zip(rgba1.chunks_exact_mut(channels * 2))
            .zip(y_src0.chunks_exact(2))
            .zip(y_src1.chunks_exact(2))
            .zip(uv_src.chunks_exact(2))
            .skip(_offset.cx / 2)
        {
            let terms = ChromaTerms::new(uv[order.get_u_position()], uv[order.get_v_position()]);
            let (px0, px1) = rgba0.split_at_mut(channels);
            store_pixel::<DESTINATION_CHANNELS>(px0, y0[0], &terms);
            store_pixel::<DESTINATION_CHANNELS>(px1, y0[1], &terms);
            let (px0, px1) = rgba1.split_at_mut(channels);
            store_pixel::<DESTINATION_CHANNELS>(px0, y1[0], &terms);
            store_pixel::<DESTINATION_CHANNELS>(px1, y1[1], &terms);
        }
    };

    let y_plane = image.y_plane;
    let uv_plane = image.uv_plane;
    let uv_stride = image.uv_stride as usize;

    #[cfg(feature = "rayon")]
    if use_parallel(image.width, image.height, parallel_threshold) {
        y_plane
            .par_chunks_exact(y_stride * 2)
            .zip(uv_plane.par_chunks_exact(uv_stride))
            .zip(rgba.par_chunks_exact_mut(rgba_stride as usize * 2))
            .for_each(|((y_src, uv_src), rgba)| process_double_row(y_src, uv_src, rgba));
        return Ok(());
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel_threshold;

    y_plane
        .chunks_exact(y_stride * 2)
        .zip(uv_plane.chunks_exact(uv_stride))
        .zip(rgba.chunks_exact_mut(rgba_stride as usize * 2))
        .for_each(|((y_src, uv_src), rgba)| process_double_row(y_src, uv_src, rgba));

    Ok(())
}

macro_rules! d_cnv {
    ($method: ident, $order: expr, $px_fmt: expr, $yuv_name: expr, $rgb_name: expr) => {
        #[doc = concat!("Convert ", $yuv_name, " to ", $rgb_name, ".

Decodes BT.601 video range 4:2:0 semi-planar data into full range ", $rgb_name, " with
8-bit per channel precision. Each chroma pair is shared by a 2x2 block of pixels.

# Arguments

* `bi_planar_image` - Source ", $yuv_name, " image, width and height must be even.
* `dst` - A mutable slice to store the converted ", $rgb_name, " data.
* `dst_stride` - Elements per row.

# Errors

Returns an error if dimensions are odd or the planes or the destination do not match
the image geometry; nothing is written in that case.")]
        pub fn $method(
            bi_planar_image: &YuvBiPlanarImage<u8>,
            dst: &mut [u8],
            dst_stride: u32,
        ) -> Result<(), YuvError> {
            yuv_nv12_to_rgbx_impl::<{ $order as u8 }, { $px_fmt as u8 }>(
                bi_planar_image,
                dst,
                dst_stride,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        }
    };
}

d_cnv!(yuv_nv12_to_rgb, YuvNVOrder::UV, YuvSourceChannels::Rgb, "NV12", "RGB");
d_cnv!(yuv_nv12_to_bgr, YuvNVOrder::UV, YuvSourceChannels::Bgr, "NV12", "BGR");
d_cnv!(yuv_nv12_to_rgba, YuvNVOrder::UV, YuvSourceChannels::Rgba, "NV12", "RGBA");
d_cnv!(yuv_nv12_to_bgra, YuvNVOrder::UV, YuvSourceChannels::Bgra, "NV12", "BGRA");
d_cnv!(yuv_nv21_to_rgb, YuvNVOrder::VU, YuvSourceChannels::Rgb, "NV21", "RGB");
d_cnv!(yuv_nv21_to_bgr, YuvNVOrder::VU, YuvSourceChannels::Bgr, "NV21", "BGR");
d_cnv!(yuv_nv21_to_rgba, YuvNVOrder::VU, YuvSourceChannels::Rgba, "NV21", "RGBA");
d_cnv!(yuv_nv21_to_bgra, YuvNVOrder::VU, YuvSourceChannels::Bgra, "NV21", "BGRA");

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_nv(height: usize, y_stride: usize, uv_stride: usize) -> (Vec<u8>, Vec<u8>) {
        let mut rng = rand::rng();
        let mut y_plane = vec![0u8; y_stride * height];
        let mut uv_plane = vec![0u8; uv_stride * height / 2];
        for v in y_plane.iter_mut() {
            *v = rng.random_range(0..=255);
        }
        for v in uv_plane.iter_mut() {
            *v = rng.random_range(0..=255);
        }
        (y_plane, uv_plane)
    }

    #[test]
    fn mid_gray_for_every_layout() {
        let y_plane = [126u8; 4];
        let uv_plane = [128u8; 2];
        let image = YuvBiPlanarImage {
            y_plane: &y_plane,
            y_stride: 2,
            uv_plane: &uv_plane,
            uv_stride: 2,
            width: 2,
            height: 2,
        };
        let mut rgb = [0u8; 12];
        yuv_nv12_to_rgb(&image, &mut rgb, 6).unwrap();
        assert!(rgb.iter().all(|&v| v == 128));
        yuv_nv21_to_bgr(&image, &mut rgb, 6).unwrap();
        assert!(rgb.iter().all(|&v| v == 128));
        let mut rgba = [0u8; 16];
        yuv_nv12_to_bgra(&image, &mut rgba, 8).unwrap();
        for px in rgba.chunks_exact(4) {
            assert_eq!(px, [128, 128, 128, 255]);
        }
        yuv_nv21_to_rgba(&image, &mut rgba, 8).unwrap();
        for px in rgba.chunks_exact(4) {
            assert_eq!(px, [128, 128, 128, 255]);
        }
    }

    #[test]
    fn nv21_is_nv12_with_swapped_chroma() {
        let width = 34usize;
        let height = 6usize;
        let (y_plane, uv_plane) = random_nv(height, width, width);
        let vu_plane = uv_plane
            .chunks_exact(2)
            .flat_map(|c| [c[1], c[0]])
            .collect::<Vec<u8>>();
        let nv12 = YuvBiPlanarImage {
            y_plane: &y_plane,
            y_stride: width as u32,
            uv_plane: &uv_plane,
            uv_stride: width as u32,
            width: width as u32,
            height: height as u32,
        };
        let nv21 = YuvBiPlanarImage {
            uv_plane: &vu_plane,
            ..nv12.clone()
        };
        let mut a = vec![0u8; width * height * 3];
        let mut b = vec![0u8; width * height * 3];
        yuv_nv12_to_rgb(&nv12, &mut a, width as u32 * 3).unwrap();
        yuv_nv21_to_rgb(&nv21, &mut b, width as u32 * 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn chroma_is_shared_by_2x2_block() {
        let y_plane = [100u8, 100, 100, 100];
        let uv_plane = [90u8, 200];
        let image = YuvBiPlanarImage {
            y_plane: &y_plane,
            y_stride: 2,
            uv_plane: &uv_plane,
            uv_stride: 2,
            width: 2,
            height: 2,
        };
        let mut rgb = [0u8; 12];
        yuv_nv12_to_rgb(&image, &mut rgb, 6).unwrap();
        for px in rgb.chunks_exact(3) {
            assert_eq!(px, &rgb[..3]);
        }
        // Red dominant chroma.
        assert!(rgb[0] > rgb[1] && rgb[0] > rgb[2]);
    }

    #[test]
    fn parallel_and_sequential_agree_with_padding() {
        let width = 70usize;
        let height = 14usize;
        let y_stride = 75usize;
        let uv_stride = 72usize;
        let rgba_stride = width * 4 + 8;
        let (y_plane, uv_plane) = random_nv(height, y_stride, uv_stride);
        let image = YuvBiPlanarImage {
            y_plane: &y_plane,
            y_stride: y_stride as u32,
            uv_plane: &uv_plane,
            uv_stride: uv_stride as u32,
            width: width as u32,
            height: height as u32,
        };
        let mut sequential = vec![3u8; rgba_stride * height];
        let mut parallel = vec![3u8; rgba_stride * height];
        yuv_nv12_to_rgbx_impl::<{ YuvNVOrder::VU as u8 }, { YuvSourceChannels::Rgba as u8 }>(
            &image,
            &mut sequential,
            rgba_stride as u32,
            usize::MAX,
        )
        .unwrap();
        yuv_nv12_to_rgbx_impl::<{ YuvNVOrder::VU as u8 }, { YuvSourceChannels::Rgba as u8 }>(
            &image,
            &mut parallel,
            rgba_stride as u32,
            0,
        )
        .unwrap();
        assert_eq!(sequential, parallel);
        for row in sequential.chunks_exact(rgba_stride) {
            assert!(row[width * 4..].iter().all(|&v| v == 3));
            assert!(row[..width * 4].chunks_exact(4).all(|px| px[3] == 255));
        }
    }

    #[test]
    fn odd_dimensions_are_rejected() {
        let y_plane = vec![0u8; 3 * 2];
        let uv_plane = vec![0u8; 4];
        let image = YuvBiPlanarImage {
            y_plane: &y_plane,
            y_stride: 3,
            uv_plane: &uv_plane,
            uv_stride: 4,
            width: 3,
            height: 2,
        };
        let mut rgb = vec![7u8; 3 * 3 * 2];
        assert!(matches!(
            yuv_nv12_to_rgb(&image, &mut rgb, 9),
            Err(YuvError::OddDimensions(_))
        ));
        assert!(rgb.iter().all(|&v| v == 7));
    }

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    #[test]
    fn sse_matches_scalar() {
        if !std::arch::is_x86_feature_detected!("sse4.1") {
            return;
        }
        let width = 50usize;
        let (y_plane, uv_plane) = random_nv(2, width, width);
        let mut scalar = vec![0u8; width * 3 * 2];
        for order in [YuvNVOrder::UV, YuvNVOrder::VU] {
            let mut simd0 = vec![0u8; width * 3];
            let mut simd1 = vec![0u8; width * 3];
            let processed = match order {
                YuvNVOrder::UV => sse_yuv_nv_to_rgba420::<
                    { YuvNVOrder::UV as u8 },
                    { YuvSourceChannels::Bgr as u8 },
                >(
                    &y_plane[..width],
                    &y_plane[width..],
                    &uv_plane,
                    &mut simd0,
                    &mut simd1,
                    width,
                ),
                YuvNVOrder::VU => sse_yuv_nv_to_rgba420::<
                    { YuvNVOrder::VU as u8 },
                    { YuvSourceChannels::Bgr as u8 },
                >(
                    &y_plane[..width],
                    &y_plane[width..],
                    &uv_plane,
                    &mut simd0,
                    &mut simd1,
                    width,
                ),
            };
            assert_eq!(processed.cx, 48);
            for (x, uv) in uv_plane.chunks_exact(2).enumerate() {
                let terms =
                    ChromaTerms::new(uv[order.get_u_position()], uv[order.get_v_position()]);
                for row in 0..2 {
                    for dx in 0..2 {
                        let px = 2 * x + dx;
                        store_pixel::<{ YuvSourceChannels::Bgr as u8 }>(
                            &mut scalar[(row * width + px) * 3..],
                            y_plane[row * width + px],
                            &terms,
                        );
                    }
                }
            }
            assert_eq!(&simd0[..48 * 3], &scalar[..48 * 3]);
            assert_eq!(&simd1[..48 * 3], &scalar[width * 3..(width + 48) * 3]);
        }
    }
}
