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
use crate::images::{BufferStoreMut, YuvPlanarImageMut, YuvStackedImageMut};
use crate::internals::MIN_SIZE_FOR_PARALLEL_CONVERSION;
#[cfg(feature = "rayon")]
use crate::internals::use_parallel;
use crate::video_range::encode_block;
use crate::yuv_error::check_rgba_destination;
use crate::yuv_support::{StackedChromaPlane, YuvNVOrder, YuvSourceChannels};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

pub(crate) fn rgbx_to_yuv420_impl<const ORIGIN_CHANNELS: u8>(
    planar_image: &mut YuvPlanarImageMut<u8>,
    rgba: &[u8],
    rgba_stride: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let src_chans: YuvSourceChannels = ORIGIN_CHANNELS.into();
    let channels = src_chans.get_channels_count();

    check_rgba_destination(
        rgba,
        rgba_stride,
        planar_image.width,
        planar_image.height,
        channels,
    )?;
    planar_image.check_constraints()?;

    let width = planar_image.width as usize;
    let y_stride = planar_image.y_stride as usize;
    let u_stride = planar_image.u_stride as usize;
    let v_stride = planar_image.v_stride as usize;
    let rgba_stride = rgba_stride as usize;

    let process_double_row = |y_dst: &mut [u8], u_dst: &mut [u8], v_dst: &mut [u8], rgba: &[u8]| {
        let (y_dst0, y_dst1) = y_dst.split_at_mut(y_stride);
        let (rgba0, rgba1) = rgba.split_at(rgba_stride);

        for (((((y_dst0, y_dst1), u_dst), v_dst), rgba0), rgba1) in y_dst0[..width]
            .chunks_exact_mut(2)
            .zip(y_dst1[..width].chunks_exact_mut(2))
            .zip(u_dst[..width / 2].iter_mut())
            .zip(v_dst[..width / 2].iter_mut())
            .zip(rgba0[..width * channels].chunks_exact(channels * 2))
            .zip(rgba1[..width * channels].chunks_exact(channels * 2))
        {
            let (u, v) = encode_block::<ORIGIN_CHANNELS>(rgba0, rgba1, y_dst0, y_dst1);
            *u_dst = u;
            *v_dst = v;
        }
    };

    let image_width = planar_image.width;
    let image_height = planar_image.height;
    let y_plane = planar_image.y_plane.borrow_mut();
    let u_plane = planar_image.u_plane.borrow_mut();
    let v_plane = planar_image.v_plane.borrow_mut();

    #[cfg(feature = "rayon")]
    if use_parallel(image_width, image_height, parallel_threshold) {
        y_plane
            .par_chunks_exact_mut(y_stride * 2)
            .zip(u_plane.par_chunks_exact_mut(u_stride))
            .zip(v_plane.par_chunks_exact_mut(v_stride))
            .zip(rgba.par_chunks_exact(rgba_stride * 2))
            .for_each(|(((y_dst, u_dst), v_dst), rgba)| {
                process_double_row(y_dst, u_dst, v_dst, rgba)
            });
        return Ok(());
    }
    #[cfg(not(feature = "rayon"))]
    let _ = (parallel_threshold, image_width, image_height);

    y_plane
        .chunks_exact_mut(y_stride * 2)
        .zip(u_plane.chunks_exact_mut(u_stride))
        .zip(v_plane.chunks_exact_mut(v_stride))
        .zip(rgba.chunks_exact(rgba_stride * 2))
        .for_each(|(((y_dst, u_dst), v_dst), rgba)| process_double_row(y_dst, u_dst, v_dst, rgba));

    Ok(())
}

/// Encodes into one buffer, U first for I420 and V first for YV12.
///
/// Luma is written in place, chroma goes through tightly packed planes and is
/// then copied to the alternating row positions after the luma rows.
pub(crate) fn rgbx_to_stacked420_impl<const ORIGIN_CHANNELS: u8, const UV_ORDER: u8>(
    image: &mut YuvStackedImageMut<u8>,
    rgba: &[u8],
    rgba_stride: u32,
    parallel_threshold: usize,
) -> Result<(), YuvError> {
    let order: YuvNVOrder = UV_ORDER.into();
    let src_chans: YuvSourceChannels = ORIGIN_CHANNELS.into();

    check_rgba_destination(
        rgba,
        rgba_stride,
        image.width,
        image.height,
        src_chans.get_channels_count(),
    )?;
    image.check_constraints()?;

    let width = image.width as usize;
    let height = image.height as usize;
    let stride = image.stride as usize;
    let chroma_width = width / 2;
    let chroma_size = chroma_width * (height / 2);

    let data = image.data.borrow_mut();
    let (luma, chroma) = data.split_at_mut(stride * height);

    let mut planar = YuvPlanarImageMut {
        y_plane: BufferStoreMut::Borrowed(luma),
        y_stride: image.stride,
        u_plane: BufferStoreMut::Owned(vec![0u8; chroma_size]),
        u_stride: chroma_width as u32,
        v_plane: BufferStoreMut::Owned(vec![0u8; chroma_size]),
        v_stride: chroma_width as u32,
        width: image.width,
        height: image.height,
    };
    rgbx_to_yuv420_impl::<ORIGIN_CHANNELS>(&mut planar, rgba, rgba_stride, parallel_threshold)?;

    let (first, second) = StackedChromaPlane::layout(stride, width, height);
    let (u_layout, v_layout) = match order {
        YuvNVOrder::UV => (first, second),
        YuvNVOrder::VU => (second, first),
    };
    let luma_size = stride * height;

    for (row, (u_src, v_src)) in planar
        .u_plane
        .borrow()
        .chunks_exact(chroma_width)
        .zip(planar.v_plane.borrow().chunks_exact(chroma_width))
        .enumerate()
    {
        let u_start = u_layout.row_offset(row) - luma_size;
        chroma[u_start..u_start + chroma_width].copy_from_slice(u_src);
        let v_start = v_layout.row_offset(row) - luma_size;
        chroma[v_start..v_start + chroma_width].copy_from_slice(v_src);
    }

    Ok(())
}

macro_rules! d_cnv {
    ($method: ident, $px_fmt: expr, $rgb_name: expr) => {
        #[doc = concat!("Convert ", $rgb_name, " image data to YUV 420 planar format.

Produces BT.601 video range data with separate U and V planes. The chroma pair of
each 2x2 block is computed from its top-left pixel, alpha is ignored.

# Arguments

* `planar_image` - Target planar image, width and height must be even.
* `rgba` - The input ", $rgb_name, " image data slice.
* `rgba_stride` - Elements per row.

# Errors

Returns an error if dimensions are odd or the buffers do not match the image geometry.")]
        pub fn $method(
            planar_image: &mut YuvPlanarImageMut<u8>,
            rgba: &[u8],
            rgba_stride: u32,
        ) -> Result<(), YuvError> {
            rgbx_to_yuv420_impl::<{ $px_fmt as u8 }>(
                planar_image,
                rgba,
                rgba_stride,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        }
    };
}

d_cnv!(rgb_to_yuv420, YuvSourceChannels::Rgb, "RGB");
d_cnv!(bgr_to_yuv420, YuvSourceChannels::Bgr, "BGR");
d_cnv!(rgba_to_yuv420, YuvSourceChannels::Rgba, "RGBA");
d_cnv!(bgra_to_yuv420, YuvSourceChannels::Bgra, "BGRA");

macro_rules! d_stacked_cnv {
    ($method: ident, $px_fmt: expr, $order: expr, $rgb_name: expr, $yuv_name: expr) => {
        #[doc = concat!("Convert ", $rgb_name, " image data to single buffer ", $yuv_name, ".

See [YuvStackedImage](crate::YuvStackedImage) for the buffer layout.

# Arguments

* `image` - Target ", $yuv_name, " image, width and height must be even.
* `rgba` - The input ", $rgb_name, " image data slice.
* `rgba_stride` - Elements per row.

# Errors

Returns an error if dimensions are odd or the buffers do not match the image geometry.")]
        pub fn $method(
            image: &mut YuvStackedImageMut<u8>,
            rgba: &[u8],
            rgba_stride: u32,
        ) -> Result<(), YuvError> {
            rgbx_to_stacked420_impl::<{ $px_fmt as u8 }, { $order as u8 }>(
                image,
                rgba,
                rgba_stride,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        }
    };
}

d_stacked_cnv!(rgb_to_i420, YuvSourceChannels::Rgb, YuvNVOrder::UV, "RGB", "I420");
d_stacked_cnv!(bgr_to_i420, YuvSourceChannels::Bgr, YuvNVOrder::UV, "BGR", "I420");
d_stacked_cnv!(rgba_to_i420, YuvSourceChannels::Rgba, YuvNVOrder::UV, "RGBA", "I420");
d_stacked_cnv!(bgra_to_i420, YuvSourceChannels::Bgra, YuvNVOrder::UV, "BGRA", "I420");
d_stacked_cnv!(rgb_to_yv12, YuvSourceChannels::Rgb, YuvNVOrder::VU, "RGB", "YV12");
d_stacked_cnv!(bgr_to_yv12, YuvSourceChannels::Bgr, YuvNVOrder::VU, "BGR", "YV12");
d_stacked_cnv!(rgba_to_yv12, YuvSourceChannels::Rgba, YuvNVOrder::VU, "RGBA", "YV12");
d_stacked_cnv!(bgra_to_yv12, YuvSourceChannels::Bgra, YuvNVOrder::VU, "BGRA", "YV12");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::YuvBiPlanarImageMut;
    use crate::rgba_to_nv::rgb_to_nv12;
    use crate::yuv_to_rgba::{i420_to_rgb, yv12_to_rgb};
    use rand::Rng;

    fn random_rgb(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255)).collect()
    }

    #[test]
    fn planar_matches_nv12() {
        let width = 26usize;
        let height = 10usize;
        let rgb = random_rgb(width * 3 * height);
        let mut planar = YuvPlanarImageMut::<u8>::alloc(width as u32, height as u32);
        let mut nv12 = YuvBiPlanarImageMut::<u8>::alloc(width as u32, height as u32);
        rgb_to_yuv420(&mut planar, &rgb, width as u32 * 3).unwrap();
        rgb_to_nv12(&mut nv12, &rgb, width as u32 * 3).unwrap();
        assert_eq!(planar.y_plane.borrow(), nv12.y_plane.borrow());
        for ((&u, &v), uv) in planar
            .u_plane
            .borrow()
            .iter()
            .zip(planar.v_plane.borrow().iter())
            .zip(nv12.uv_plane.borrow().chunks_exact(2))
        {
            assert_eq!([u, v], uv);
        }
    }

    #[test]
    fn stacked_layout_for_every_height_class() {
        for (width, height) in [(8usize, 8usize), (8, 6), (10, 10), (4, 2), (32, 18)] {
            let rgb = random_rgb(width * 3 * height);
            let mut planar = YuvPlanarImageMut::<u8>::alloc(width as u32, height as u32);
            rgb_to_yuv420(&mut planar, &rgb, width as u32 * 3).unwrap();

            let mut i420 = YuvStackedImageMut::<u8>::alloc(width as u32, height as u32);
            let mut yv12 = YuvStackedImageMut::<u8>::alloc(width as u32, height as u32);
            rgb_to_i420(&mut i420, &rgb, width as u32 * 3).unwrap();
            rgb_to_yv12(&mut yv12, &rgb, width as u32 * 3).unwrap();

            let i420_data = i420.data.borrow();
            let yv12_data = yv12.data.borrow();
            assert_eq!(&i420_data[..width * height], planar.y_plane.borrow());
            assert_eq!(&yv12_data[..width * height], planar.y_plane.borrow());

            let (first, second) = StackedChromaPlane::layout(width, width, height);
            let cw = width / 2;
            for (row, (u, v)) in planar
                .u_plane
                .borrow()
                .chunks_exact(cw)
                .zip(planar.v_plane.borrow().chunks_exact(cw))
                .enumerate()
            {
                let f = first.row_offset(row);
                let s = second.row_offset(row);
                assert_eq!(&i420_data[f..f + cw], u);
                assert_eq!(&i420_data[s..s + cw], v);
                assert_eq!(&yv12_data[f..f + cw], v);
                assert_eq!(&yv12_data[s..s + cw], u);
            }
        }
    }

    #[test]
    fn stacked_round_trip_with_padded_stride() {
        let width = 12usize;
        let height = 6usize;
        let stride = 16usize;
        let rgb = [90u8, 160, 40].repeat(width * height);
        let mut image = YuvStackedImageMut {
            data: BufferStoreMut::Owned(vec![0u8; stride * (height + height / 2)]),
            stride: stride as u32,
            width: width as u32,
            height: height as u32,
        };
        rgb_to_i420(&mut image, &rgb, width as u32 * 3).unwrap();
        let mut decoded = vec![0u8; rgb.len()];
        i420_to_rgb(&image.to_fixed(), &mut decoded, width as u32 * 3).unwrap();
        for (&a, &b) in rgb.iter().zip(decoded.iter()) {
            assert!((a as i32 - b as i32).abs() <= 3, "{a} vs {b}");
        }
        rgb_to_yv12(&mut image, &rgb, width as u32 * 3).unwrap();
        let mut decoded_yv12 = vec![0u8; rgb.len()];
        yv12_to_rgb(&image.to_fixed(), &mut decoded_yv12, width as u32 * 3).unwrap();
        assert_eq!(decoded, decoded_yv12);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let width = 20usize;
        let height = 14usize;
        let rgba = random_rgb(width * 4 * height);
        let mut sequential = YuvStackedImageMut::<u8>::alloc(width as u32, height as u32);
        let mut parallel = YuvStackedImageMut::<u8>::alloc(width as u32, height as u32);
        rgbx_to_stacked420_impl::<{ YuvSourceChannels::Bgra as u8 }, { YuvNVOrder::VU as u8 }>(
            &mut sequential,
            &rgba,
            width as u32 * 4,
            usize::MAX,
        )
        .unwrap();
        rgbx_to_stacked420_impl::<{ YuvSourceChannels::Bgra as u8 }, { YuvNVOrder::VU as u8 }>(
            &mut parallel,
            &rgba,
            width as u32 * 4,
            0,
        )
        .unwrap();
        assert_eq!(sequential.data.borrow(), parallel.data.borrow());
    }

    #[test]
    fn wrong_buffer_is_rejected_without_writes() {
        let rgb = random_rgb(4 * 3 * 4);
        let mut image = YuvStackedImageMut {
            data: BufferStoreMut::Owned(vec![5u8; 4 * 6 + 1]),
            stride: 4,
            width: 4,
            height: 4,
        };
        assert!(rgb_to_i420(&mut image, &rgb, 12).is_err());
        assert!(image.data.borrow().iter().all(|&v| v == 5));
    }
}
