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
//! Runtime selection of a converter from channel counts and layout indices.
//!
//! Every entry point folds its arguments into a single code, picks the matching
//! monomorphized converter and reports unknown codes as
//! [YuvError::UnsupportedConversion] carrying that code.

use crate::images::{
    YuvBiPlanarImage, YuvBiPlanarImageMut, YuvPackedImage, YuvPlanarImage, YuvPlanarImageMut,
    YuvStackedImage, YuvStackedImageMut,
};
use crate::internals::{use_parallel, MIN_SIZE_FOR_PARALLEL_CONVERSION};
use crate::numerics::InterleavedSample;
use crate::rgb_to_ycrcb::rgbx_to_ycrcb_impl;
use crate::rgba_to_nv::rgbx_to_nv_impl;
use crate::rgba_to_yuv::{rgbx_to_stacked420_impl, rgbx_to_yuv420_impl};
use crate::ycrcb_to_rgb::ycrcb_to_rgbx_impl;
use crate::yuv_nv_to_rgba::yuv_nv12_to_rgbx_impl;
use crate::yuv_support::{
    ConversionDirection, YuvFamily, YuvNVOrder, YuvSourceChannels, Yuy2Description,
};
use crate::yuv_to_rgba::{stacked420_to_rgbx_impl, yuv420_to_rgbx_impl};
use crate::yuy2_to_rgb::yuy2_to_rgb_impl;
use crate::YuvError;

const RGB: u8 = YuvSourceChannels::Rgb as u8;
const BGR: u8 = YuvSourceChannels::Bgr as u8;
const RGBA: u8 = YuvSourceChannels::Rgba as u8;
const BGRA: u8 = YuvSourceChannels::Bgra as u8;
const UV: u8 = YuvNVOrder::UV as u8;
const VU: u8 = YuvNVOrder::VU as u8;
const YCRCB: u8 = YuvFamily::YCrCb as u8;
const YUV: u8 = YuvFamily::Yuv as u8;

fn trace_selection(kind: &str, code: u32, width: u32, height: u32) {
    log::trace!(
        "{} conversion code {} for {}x{}, parallel: {}",
        kind,
        code,
        width,
        height,
        cfg!(feature = "rayon") && use_parallel(width, height, MIN_SIZE_FOR_PARALLEL_CONVERSION)
    );
}

fn unsupported(kind: &str, code: u32) -> YuvError {
    log::debug!("Rejected {} conversion code {}", kind, code);
    YuvError::UnsupportedConversion(code)
}

const CHANNELS: &[usize] = &[3, 4];
const BLUE_IDX: &[usize] = &[0, 2];
const INDEX: &[usize] = &[0, 1];

#[inline]
fn idx(value: usize) -> u32 {
    value.min(u32::MAX as usize / 10_000) as u32
}

/// Folds `(value, allowed)` pairs into a decimal code, most significant first.
///
/// Every value must be one of its allowed set.
fn compose_code(kind: &str, parts: &[(usize, &[usize])]) -> Result<u32, YuvError> {
    let code = parts
        .iter()
        .fold(0u32, |acc, &(value, _)| acc.saturating_mul(10).saturating_add(idx(value)));
    if parts.iter().all(|(value, allowed)| allowed.contains(value)) {
        Ok(code)
    } else {
        Err(unsupported(kind, code))
    }
}

/// Interleaved RGB(A) <-> YCrCb/YUV conversion selected at runtime.
///
/// * `channels` - 3 or 4, channel count of the RGB side.
/// * `blue_idx` - 0 for BGR(A), 2 for RGB(A).
/// * `is_cbcr` - `true` for YCrCb, `false` for YUV.
///
/// The code is `direction * 1000 + channels * 100 + blue_idx * 10 + is_cbcr`.
pub fn convert_interleaved<V: InterleavedSample>(
    src: &[V],
    src_stride: u32,
    dst: &mut [V],
    dst_stride: u32,
    width: u32,
    height: u32,
    direction: ConversionDirection,
    channels: usize,
    blue_idx: usize,
    is_cbcr: bool,
) -> Result<(), YuvError> {
    let code = compose_code(
        "interleaved",
        &[
            (direction as usize, INDEX),
            (channels, CHANNELS),
            (blue_idx, BLUE_IDX),
            (is_cbcr as usize, INDEX),
        ],
    )?;
    macro_rules! interleaved {
        ($converter: ident, $channels: expr, $family: expr) => {
            $converter::<V, $channels, $family>(
                src,
                src_stride,
                dst,
                dst_stride,
                width,
                height,
                MIN_SIZE_FOR_PARALLEL_CONVERSION,
            )
        };
    }
    let result = match code {
        300 => interleaved!(rgbx_to_ycrcb_impl, BGR, YUV),
        301 => interleaved!(rgbx_to_ycrcb_impl, BGR, YCRCB),
        320 => interleaved!(rgbx_to_ycrcb_impl, RGB, YUV),
        321 => interleaved!(rgbx_to_ycrcb_impl, RGB, YCRCB),
        400 => interleaved!(rgbx_to_ycrcb_impl, BGRA, YUV),
        401 => interleaved!(rgbx_to_ycrcb_impl, BGRA, YCRCB),
        420 => interleaved!(rgbx_to_ycrcb_impl, RGBA, YUV),
        421 => interleaved!(rgbx_to_ycrcb_impl, RGBA, YCRCB),
        1300 => interleaved!(ycrcb_to_rgbx_impl, BGR, YUV),
        1301 => interleaved!(ycrcb_to_rgbx_impl, BGR, YCRCB),
        1320 => interleaved!(ycrcb_to_rgbx_impl, RGB, YUV),
        1321 => interleaved!(ycrcb_to_rgbx_impl, RGB, YCRCB),
        1400 => interleaved!(ycrcb_to_rgbx_impl, BGRA, YUV),
        1401 => interleaved!(ycrcb_to_rgbx_impl, BGRA, YCRCB),
        1420 => interleaved!(ycrcb_to_rgbx_impl, RGBA, YUV),
        1421 => interleaved!(ycrcb_to_rgbx_impl, RGBA, YCRCB),
        _ => return Err(unsupported("interleaved", code)),
    };
    trace_selection("interleaved", code, width, height);
    result
}

/// Semi-planar 4:2:0 to RGB(A), code `channels * 100 + blue_idx * 10 + u_idx`.
///
/// `u_idx` 0 selects NV12, 1 selects NV21.
pub fn convert_nv420_to_rgb(
    image: &YuvBiPlanarImage<u8>,
    dst: &mut [u8],
    dst_stride: u32,
    channels: usize,
    blue_idx: usize,
    u_idx: usize,
) -> Result<(), YuvError> {
    let code = compose_code(
        "semi-planar 4:2:0",
        &[(channels, CHANNELS), (blue_idx, BLUE_IDX), (u_idx, INDEX)],
    )?;
    let t = MIN_SIZE_FOR_PARALLEL_CONVERSION;
    let result = match code {
        300 => yuv_nv12_to_rgbx_impl::<UV, BGR>(image, dst, dst_stride, t),
        301 => yuv_nv12_to_rgbx_impl::<VU, BGR>(image, dst, dst_stride, t),
        320 => yuv_nv12_to_rgbx_impl::<UV, RGB>(image, dst, dst_stride, t),
        321 => yuv_nv12_to_rgbx_impl::<VU, RGB>(image, dst, dst_stride, t),
        400 => yuv_nv12_to_rgbx_impl::<UV, BGRA>(image, dst, dst_stride, t),
        401 => yuv_nv12_to_rgbx_impl::<VU, BGRA>(image, dst, dst_stride, t),
        420 => yuv_nv12_to_rgbx_impl::<UV, RGBA>(image, dst, dst_stride, t),
        421 => yuv_nv12_to_rgbx_impl::<VU, RGBA>(image, dst, dst_stride, t),
        _ => return Err(unsupported("semi-planar 4:2:0", code)),
    };
    trace_selection("semi-planar 4:2:0", code, image.width, image.height);
    result
}

/// Planar 4:2:0 with separate chroma planes to RGB(A), code
/// `channels * 100 + blue_idx * 10 + u_idx`.
///
/// With `u_idx` 1 the roles of `u_plane` and `v_plane` are swapped, so a
/// YV12 image can be passed in storage order.
pub fn convert_planar420_to_rgb(
    image: &YuvPlanarImage<u8>,
    dst: &mut [u8],
    dst_stride: u32,
    channels: usize,
    blue_idx: usize,
    u_idx: usize,
) -> Result<(), YuvError> {
    let code = compose_code(
        "planar 4:2:0",
        &[(channels, CHANNELS), (blue_idx, BLUE_IDX), (u_idx, INDEX)],
    )?;
    let swapped;
    let planes = if u_idx == 1 {
        swapped = YuvPlanarImage {
            u_plane: image.v_plane,
            u_stride: image.v_stride,
            v_plane: image.u_plane,
            v_stride: image.u_stride,
            ..image.clone()
        };
        &swapped
    } else {
        image
    };
    let t = MIN_SIZE_FOR_PARALLEL_CONVERSION;
    let result = match code {
        300 | 301 => yuv420_to_rgbx_impl::<BGR>(planes, dst, dst_stride, t),
        320 | 321 => yuv420_to_rgbx_impl::<RGB>(planes, dst, dst_stride, t),
        400 | 401 => yuv420_to_rgbx_impl::<BGRA>(planes, dst, dst_stride, t),
        420 | 421 => yuv420_to_rgbx_impl::<RGBA>(planes, dst, dst_stride, t),
        _ => return Err(unsupported("planar 4:2:0", code)),
    };
    trace_selection("planar 4:2:0", code, image.width, image.height);
    result
}

/// Single buffer I420 (`u_idx` 0) or YV12 (`u_idx` 1) to RGB(A), same codes as
/// [convert_planar420_to_rgb].
pub fn convert_stacked420_to_rgb(
    image: &YuvStackedImage<u8>,
    dst: &mut [u8],
    dst_stride: u32,
    channels: usize,
    blue_idx: usize,
    u_idx: usize,
) -> Result<(), YuvError> {
    let code = compose_code(
        "stacked 4:2:0",
        &[(channels, CHANNELS), (blue_idx, BLUE_IDX), (u_idx, INDEX)],
    )?;
    let t = MIN_SIZE_FOR_PARALLEL_CONVERSION;
    let result = match code {
        300 => stacked420_to_rgbx_impl::<UV, BGR>(image, dst, dst_stride, t),
        301 => stacked420_to_rgbx_impl::<VU, BGR>(image, dst, dst_stride, t),
        320 => stacked420_to_rgbx_impl::<UV, RGB>(image, dst, dst_stride, t),
        321 => stacked420_to_rgbx_impl::<VU, RGB>(image, dst, dst_stride, t),
        400 => stacked420_to_rgbx_impl::<UV, BGRA>(image, dst, dst_stride, t),
        401 => stacked420_to_rgbx_impl::<VU, BGRA>(image, dst, dst_stride, t),
        420 => stacked420_to_rgbx_impl::<UV, RGBA>(image, dst, dst_stride, t),
        421 => stacked420_to_rgbx_impl::<VU, RGBA>(image, dst, dst_stride, t),
        _ => return Err(unsupported("stacked 4:2:0", code)),
    };
    trace_selection("stacked 4:2:0", code, image.width, image.height);
    result
}

/// Packed 4:2:2 to RGB(A), code `channels * 1000 + blue_idx * 100 + u_idx * 10 + y_idx`.
///
/// `[u_idx, y_idx]` of `[0, 0]`, `[0, 1]` and `[1, 0]` select YUYV, UYVY and YVYU.
pub fn convert_packed422_to_rgb(
    image: &YuvPackedImage<u8>,
    dst: &mut [u8],
    dst_stride: u32,
    channels: usize,
    blue_idx: usize,
    u_idx: usize,
    y_idx: usize,
) -> Result<(), YuvError> {
    const YUYV: u8 = Yuy2Description::YUYV as u8;
    const UYVY: u8 = Yuy2Description::UYVY as u8;
    const YVYU: u8 = Yuy2Description::YVYU as u8;

    let code = compose_code(
        "packed 4:2:2",
        &[
            (channels, CHANNELS),
            (blue_idx, BLUE_IDX),
            (u_idx, INDEX),
            (y_idx, INDEX),
        ],
    )?;
    let t = MIN_SIZE_FOR_PARALLEL_CONVERSION;
    let result = match code {
        3000 => yuy2_to_rgb_impl::<BGR, YUYV>(image, dst, dst_stride, t),
        3001 => yuy2_to_rgb_impl::<BGR, UYVY>(image, dst, dst_stride, t),
        3010 => yuy2_to_rgb_impl::<BGR, YVYU>(image, dst, dst_stride, t),
        3200 => yuy2_to_rgb_impl::<RGB, YUYV>(image, dst, dst_stride, t),
        3201 => yuy2_to_rgb_impl::<RGB, UYVY>(image, dst, dst_stride, t),
        3210 => yuy2_to_rgb_impl::<RGB, YVYU>(image, dst, dst_stride, t),
        4000 => yuy2_to_rgb_impl::<BGRA, YUYV>(image, dst, dst_stride, t),
        4001 => yuy2_to_rgb_impl::<BGRA, UYVY>(image, dst, dst_stride, t),
        4010 => yuy2_to_rgb_impl::<BGRA, YVYU>(image, dst, dst_stride, t),
        4200 => yuy2_to_rgb_impl::<RGBA, YUYV>(image, dst, dst_stride, t),
        4201 => yuy2_to_rgb_impl::<RGBA, UYVY>(image, dst, dst_stride, t),
        4210 => yuy2_to_rgb_impl::<RGBA, YVYU>(image, dst, dst_stride, t),
        _ => return Err(unsupported("packed 4:2:2", code)),
    };
    trace_selection("packed 4:2:2", code, image.width, image.height);
    result
}

/// Destination of [convert_rgb_to_yuv420].
#[derive(Debug)]
pub enum Yuv420Target<'a, 'b> {
    /// NV12 for `u_idx` 0, NV21 for 1.
    BiPlanar(&'a mut YuvBiPlanarImageMut<'b, u8>),
    /// Separate planes, with `u_idx` 1 the U plane receives V and vice versa.
    Planar(&'a mut YuvPlanarImageMut<'b, u8>),
    /// Single buffer I420 for `u_idx` 0, YV12 for 1.
    Stacked(&'a mut YuvStackedImageMut<'b, u8>),
}

/// RGB(A) to 4:2:0, code `channels * 100 + blue_idx * 10 + u_idx`.
///
/// `u_idx` 0 stores U before V, 1 stores V first.
pub fn convert_rgb_to_yuv420(
    src: &[u8],
    src_stride: u32,
    target: Yuv420Target,
    channels: usize,
    blue_idx: usize,
    u_idx: usize,
) -> Result<(), YuvError> {
    let code = compose_code(
        "RGB to 4:2:0",
        &[(channels, CHANNELS), (blue_idx, BLUE_IDX), (u_idx, INDEX)],
    )?;
    let t = MIN_SIZE_FOR_PARALLEL_CONVERSION;
    let (width, height) = match &target {
        Yuv420Target::BiPlanar(image) => (image.width, image.height),
        Yuv420Target::Planar(image) => (image.width, image.height),
        Yuv420Target::Stacked(image) => (image.width, image.height),
    };
    let result = match target {
        Yuv420Target::BiPlanar(image) => match code {
            300 => rgbx_to_nv_impl::<BGR, UV>(image, src, src_stride, t),
            301 => rgbx_to_nv_impl::<BGR, VU>(image, src, src_stride, t),
            320 => rgbx_to_nv_impl::<RGB, UV>(image, src, src_stride, t),
            321 => rgbx_to_nv_impl::<RGB, VU>(image, src, src_stride, t),
            400 => rgbx_to_nv_impl::<BGRA, UV>(image, src, src_stride, t),
            401 => rgbx_to_nv_impl::<BGRA, VU>(image, src, src_stride, t),
            420 => rgbx_to_nv_impl::<RGBA, UV>(image, src, src_stride, t),
            421 => rgbx_to_nv_impl::<RGBA, VU>(image, src, src_stride, t),
            _ => return Err(unsupported("RGB to semi-planar 4:2:0", code)),
        },
        Yuv420Target::Planar(image) => {
            if !matches!(code, 300 | 301 | 320 | 321 | 400 | 401 | 420 | 421) {
                return Err(unsupported("RGB to planar 4:2:0", code));
            }
            if u_idx == 1 {
                std::mem::swap(&mut image.u_plane, &mut image.v_plane);
                std::mem::swap(&mut image.u_stride, &mut image.v_stride);
            }
            let result = match code / 10 {
                30 => rgbx_to_yuv420_impl::<BGR>(image, src, src_stride, t),
                32 => rgbx_to_yuv420_impl::<RGB>(image, src, src_stride, t),
                40 => rgbx_to_yuv420_impl::<BGRA>(image, src, src_stride, t),
                _ => rgbx_to_yuv420_impl::<RGBA>(image, src, src_stride, t),
            };
            if u_idx == 1 {
                std::mem::swap(&mut image.u_plane, &mut image.v_plane);
                std::mem::swap(&mut image.u_stride, &mut image.v_stride);
            }
            result
        }
        Yuv420Target::Stacked(image) => match code {
            300 => rgbx_to_stacked420_impl::<BGR, UV>(image, src, src_stride, t),
            301 => rgbx_to_stacked420_impl::<BGR, VU>(image, src, src_stride, t),
            320 => rgbx_to_stacked420_impl::<RGB, UV>(image, src, src_stride, t),
            321 => rgbx_to_stacked420_impl::<RGB, VU>(image, src, src_stride, t),
            400 => rgbx_to_stacked420_impl::<BGRA, UV>(image, src, src_stride, t),
            401 => rgbx_to_stacked420_impl::<BGRA, VU>(image, src, src_stride, t),
            420 => rgbx_to_stacked420_impl::<RGBA, UV>(image, src, src_stride, t),
            421 => rgbx_to_stacked420_impl::<RGBA, VU>(image, src, src_stride, t),
            _ => return Err(unsupported("RGB to stacked 4:2:0", code)),
        },
    };
    trace_selection("RGB to 4:2:0", code, width, height);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::BufferStoreMut;
    use crate::rgb_to_ycrcb::rgb_to_ycrcb;
    use crate::rgba_to_nv::bgr_to_nv21;
    use crate::yuv_nv_to_rgba::yuv_nv21_to_rgba;
    use crate::yuy2_to_rgb::uyvy422_to_bgr;
    use rand::Rng;

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255)).collect()
    }

    #[test]
    fn interleaved_code_reaches_typed_converter() {
        let src = random_bytes(6 * 3 * 4);
        let mut typed = vec![0u8; src.len()];
        let mut dispatched = vec![0u8; src.len()];
        rgb_to_ycrcb(&src, 18, &mut typed, 18, 6, 4).unwrap();
        convert_interleaved(
            &src,
            18,
            &mut dispatched,
            18,
            6,
            4,
            ConversionDirection::Forward,
            3,
            2,
            true,
        )
        .unwrap();
        assert_eq!(typed, dispatched);
    }

    #[test]
    fn interleaved_rejects_unknown_layouts() {
        let _ = env_logger::builder().is_test(true).try_init();
        let src = [0u8; 12];
        let mut dst = [0u8; 12];
        for (channels, blue_idx, expected) in [(4usize, 1usize, 411u32), (2, 0, 201), (5, 2, 521)] {
            assert!(matches!(
                convert_interleaved(
                    &src,
                    6,
                    &mut dst,
                    6,
                    2,
                    2,
                    ConversionDirection::Forward,
                    channels,
                    blue_idx,
                    true
                ),
                Err(YuvError::UnsupportedConversion(code)) if code == expected
            ));
        }
        assert!(matches!(
            convert_interleaved::<u16>(
                &[0; 12],
                6,
                &mut [0; 12],
                6,
                2,
                2,
                ConversionDirection::Inverse,
                2,
                0,
                false
            ),
            Err(YuvError::UnsupportedConversion(1200))
        ));
    }

    #[test]
    fn nv_code_reaches_typed_converter() {
        let width = 10usize;
        let height = 4usize;
        let y_plane = random_bytes(width * height);
        let uv_plane = random_bytes(width * height / 2);
        let image = YuvBiPlanarImage {
            y_plane: &y_plane,
            y_stride: width as u32,
            uv_plane: &uv_plane,
            uv_stride: width as u32,
            width: width as u32,
            height: height as u32,
        };
        let mut typed = vec![0u8; width * 4 * height];
        let mut dispatched = vec![0u8; width * 4 * height];
        yuv_nv21_to_rgba(&image, &mut typed, width as u32 * 4).unwrap();
        convert_nv420_to_rgb(&image, &mut dispatched, width as u32 * 4, 4, 2, 1).unwrap();
        assert_eq!(typed, dispatched);
        assert!(matches!(
            convert_nv420_to_rgb(&image, &mut dispatched, width as u32 * 4, 4, 1, 0),
            Err(YuvError::UnsupportedConversion(410))
        ));
    }

    #[test]
    fn planar_u_idx_swaps_planes() {
        let width = 8usize;
        let height = 4usize;
        let y_plane = random_bytes(width * height);
        let u_plane = random_bytes(width / 2 * height / 2);
        let v_plane = random_bytes(width / 2 * height / 2);
        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: width as u32,
            u_plane: &u_plane,
            u_stride: width as u32 / 2,
            v_plane: &v_plane,
            v_stride: width as u32 / 2,
            width: width as u32,
            height: height as u32,
        };
        let swapped = YuvPlanarImage {
            u_plane: &v_plane,
            v_plane: &u_plane,
            ..image.clone()
        };
        let mut a = vec![0u8; width * 3 * height];
        let mut b = vec![0u8; width * 3 * height];
        convert_planar420_to_rgb(&image, &mut a, width as u32 * 3, 3, 0, 1).unwrap();
        convert_planar420_to_rgb(&swapped, &mut b, width as u32 * 3, 3, 0, 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn packed_rejects_vyuy() {
        let yuy = [0u8; 8];
        let image = YuvPackedImage {
            yuy: &yuy,
            yuy_stride: 8,
            width: 4,
            height: 1,
        };
        let mut dst = [0u8; 12];
        assert!(matches!(
            convert_packed422_to_rgb(&image, &mut dst, 12, 3, 0, 1, 1),
            Err(YuvError::UnsupportedConversion(3011))
        ));
        assert!(matches!(
            convert_packed422_to_rgb(&image, &mut dst, 12, 2, 0, 0, 0),
            Err(YuvError::UnsupportedConversion(2000))
        ));
    }

    #[test]
    fn out_of_range_parts_do_not_alias_valid_codes() {
        let y_plane = [128u8; 8];
        let uv_plane = [128u8; 4];
        let image = YuvBiPlanarImage {
            y_plane: &y_plane,
            y_stride: 4,
            uv_plane: &uv_plane,
            uv_stride: 4,
            width: 4,
            height: 2,
        };
        let mut dst = [0u8; 24];
        // 3 * 100 + 1 * 10 + 10 folds to the NV12 RGB code 320
        assert!(matches!(
            convert_nv420_to_rgb(&image, &mut dst, 12, 3, 1, 10),
            Err(YuvError::UnsupportedConversion(_))
        ));
        assert!(dst.iter().all(|&v| v == 0));

        let yuy = [128u8; 16];
        let packed = YuvPackedImage {
            yuy: &yuy,
            yuy_stride: 8,
            width: 4,
            height: 2,
        };
        assert!(matches!(
            convert_packed422_to_rgb(&packed, &mut dst, 12, 3, 0, 0, 10),
            Err(YuvError::UnsupportedConversion(_))
        ));
        assert!(matches!(
            convert_stacked420_to_rgb(
                &YuvStackedImage {
                    data: &[128u8; 12],
                    stride: 4,
                    width: 4,
                    height: 2,
                },
                &mut dst,
                12,
                2,
                12,
                0
            ),
            Err(YuvError::UnsupportedConversion(_))
        ));

        let src = [0u8; 12];
        let mut interleaved = [0u8; 12];
        // 0 * 100 + 32 * 10 + 1 folds to the RGB to YCrCb code 321
        assert!(matches!(
            convert_interleaved(
                &src,
                6,
                &mut interleaved,
                6,
                2,
                2,
                ConversionDirection::Forward,
                0,
                32,
                true
            ),
            Err(YuvError::UnsupportedConversion(_))
        ));

        let mut planar = YuvPlanarImageMut::<u8>::alloc(4, 2);
        assert!(matches!(
            convert_rgb_to_yuv420(
                &[0u8; 24],
                12,
                Yuv420Target::Planar(&mut planar),
                3,
                1,
                10
            ),
            Err(YuvError::UnsupportedConversion(_))
        ));
    }

    #[test]
    fn packed_code_reaches_typed_converter() {
        let width = 6usize;
        let yuy = random_bytes(width * 2 * 2);
        let image = YuvPackedImage {
            yuy: &yuy,
            yuy_stride: width as u32 * 2,
            width: width as u32,
            height: 2,
        };
        let mut typed = vec![0u8; width * 3 * 2];
        let mut dispatched = vec![0u8; width * 3 * 2];
        uyvy422_to_bgr(&image, &mut typed, width as u32 * 3).unwrap();
        convert_packed422_to_rgb(&image, &mut dispatched, width as u32 * 3, 3, 0, 0, 1).unwrap();
        assert_eq!(typed, dispatched);
    }

    #[test]
    fn encoder_targets() {
        let width = 6usize;
        let height = 4usize;
        let bgr = random_bytes(width * 3 * height);

        let mut typed = YuvBiPlanarImageMut::<u8>::alloc(width as u32, height as u32);
        bgr_to_nv21(&mut typed, &bgr, width as u32 * 3).unwrap();
        let mut dispatched = YuvBiPlanarImageMut::<u8>::alloc(width as u32, height as u32);
        convert_rgb_to_yuv420(
            &bgr,
            width as u32 * 3,
            Yuv420Target::BiPlanar(&mut dispatched),
            3,
            0,
            1,
        )
        .unwrap();
        assert_eq!(typed.uv_plane.borrow(), dispatched.uv_plane.borrow());

        let mut planar = YuvPlanarImageMut::<u8>::alloc(width as u32, height as u32);
        convert_rgb_to_yuv420(
            &bgr,
            width as u32 * 3,
            Yuv420Target::Planar(&mut planar),
            3,
            0,
            1,
        )
        .unwrap();
        // V went to the plane stored first.
        for ((&first, &second), vu) in planar
            .u_plane
            .borrow()
            .iter()
            .zip(planar.v_plane.borrow().iter())
            .zip(typed.uv_plane.borrow().chunks_exact(2))
        {
            assert_eq!([first, second], vu);
        }

        let mut stacked = YuvStackedImageMut {
            data: BufferStoreMut::Owned(vec![0u8; width * (height + height / 2)]),
            stride: width as u32,
            width: width as u32,
            height: height as u32,
        };
        assert!(matches!(
            convert_rgb_to_yuv420(
                &bgr,
                width as u32 * 3,
                Yuv420Target::Stacked(&mut stacked),
                3,
                1,
                0
            ),
            Err(YuvError::UnsupportedConversion(310))
        ));
        assert!(stacked.data.borrow().iter().all(|&v| v == 0));
    }
}
