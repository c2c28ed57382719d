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
#![deny(deprecated)]
#![allow(clippy::too_many_arguments)]
mod built_coefficients;
mod dispatch;
mod images;
mod internals;
mod numerics;
mod rgb_to_ycrcb;
mod rgba_to_nv;
mod rgba_to_yuv;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;
mod video_range;
mod ycrcb_to_rgb;
mod yuv_error;
mod yuv_nv_to_rgba;
mod yuv_support;
mod yuv_to_gray;
mod yuv_to_rgba;
mod yuy2_to_rgb;

pub use built_coefficients::{
    forward_coefficients, forward_coefficients_fixed, inverse_coefficients,
    inverse_coefficients_fixed, Bt601Forward, Bt601Inverse, Bt601VideoForward, Bt601VideoInverse,
    BT601_VIDEO_FORWARD, BT601_VIDEO_FORWARD_F32, BT601_VIDEO_INVERSE, BT601_VIDEO_INVERSE_F32,
    ITU_SHIFT, YUV_SHIFT,
};
pub use images::{
    BufferStoreMut, YuvBiPlanarImage, YuvBiPlanarImageMut, YuvGrayImage, YuvPackedImage,
    YuvPlanarImage, YuvPlanarImageMut, YuvStackedImage, YuvStackedImageMut,
};
pub use internals::MIN_SIZE_FOR_PARALLEL_CONVERSION;
pub use numerics::InterleavedSample;
pub use yuv_error::{ImageDimensions, MismatchedSize, YuvError};
pub use yuv_support::{
    ConversionDirection, YuvFamily, YuvNVOrder, YuvSourceChannels, Yuy2Description,
};

pub use dispatch::convert_interleaved;
pub use dispatch::convert_nv420_to_rgb;
pub use dispatch::convert_packed422_to_rgb;
pub use dispatch::convert_planar420_to_rgb;
pub use dispatch::convert_rgb_to_yuv420;
pub use dispatch::convert_stacked420_to_rgb;
pub use dispatch::Yuv420Target;

pub use rgb_to_ycrcb::bgr_to_ycrcb;
pub use rgb_to_ycrcb::bgr_to_yuv;
pub use rgb_to_ycrcb::bgra_to_ycrcb;
pub use rgb_to_ycrcb::bgra_to_yuv;
pub use rgb_to_ycrcb::rgb_to_ycrcb;
pub use rgb_to_ycrcb::rgb_to_yuv;
pub use rgb_to_ycrcb::rgba_to_ycrcb;
pub use rgb_to_ycrcb::rgba_to_yuv;

pub use ycrcb_to_rgb::ycrcb_to_bgr;
pub use ycrcb_to_rgb::ycrcb_to_bgra;
pub use ycrcb_to_rgb::ycrcb_to_rgb;
pub use ycrcb_to_rgb::ycrcb_to_rgba;
pub use ycrcb_to_rgb::yuv_to_bgr;
pub use ycrcb_to_rgb::yuv_to_bgra;
pub use ycrcb_to_rgb::yuv_to_rgb;
pub use ycrcb_to_rgb::yuv_to_rgba;

pub use yuv_nv_to_rgba::yuv_nv12_to_bgr;
pub use yuv_nv_to_rgba::yuv_nv12_to_bgra;
pub use yuv_nv_to_rgba::yuv_nv12_to_rgb;
pub use yuv_nv_to_rgba::yuv_nv12_to_rgba;
pub use yuv_nv_to_rgba::yuv_nv21_to_bgr;
pub use yuv_nv_to_rgba::yuv_nv21_to_bgra;
pub use yuv_nv_to_rgba::yuv_nv21_to_rgb;
pub use yuv_nv_to_rgba::yuv_nv21_to_rgba;

pub use yuv_to_rgba::i420_to_bgr;
pub use yuv_to_rgba::i420_to_bgra;
pub use yuv_to_rgba::i420_to_rgb;
pub use yuv_to_rgba::i420_to_rgba;
pub use yuv_to_rgba::yuv420_to_bgr;
pub use yuv_to_rgba::yuv420_to_bgra;
pub use yuv_to_rgba::yuv420_to_rgb;
pub use yuv_to_rgba::yuv420_to_rgba;
pub use yuv_to_rgba::yv12_to_bgr;
pub use yuv_to_rgba::yv12_to_bgra;
pub use yuv_to_rgba::yv12_to_rgb;
pub use yuv_to_rgba::yv12_to_rgba;

pub use yuy2_to_rgb::uyvy422_to_bgr;
pub use yuy2_to_rgb::uyvy422_to_bgra;
pub use yuy2_to_rgb::uyvy422_to_rgb;
pub use yuy2_to_rgb::uyvy422_to_rgba;
pub use yuy2_to_rgb::yuyv422_to_bgr;
pub use yuy2_to_rgb::yuyv422_to_bgra;
pub use yuy2_to_rgb::yuyv422_to_rgb;
pub use yuy2_to_rgb::yuyv422_to_rgba;
pub use yuy2_to_rgb::yvyu422_to_bgr;
pub use yuy2_to_rgb::yvyu422_to_bgra;
pub use yuy2_to_rgb::yvyu422_to_rgb;
pub use yuy2_to_rgb::yvyu422_to_rgba;

pub use rgba_to_nv::bgr_to_nv12;
pub use rgba_to_nv::bgr_to_nv21;
pub use rgba_to_nv::bgra_to_nv12;
pub use rgba_to_nv::bgra_to_nv21;
pub use rgba_to_nv::rgb_to_nv12;
pub use rgba_to_nv::rgb_to_nv21;
pub use rgba_to_nv::rgba_to_nv12;
pub use rgba_to_nv::rgba_to_nv21;

pub use rgba_to_yuv::bgr_to_i420;
pub use rgba_to_yuv::bgr_to_yuv420;
pub use rgba_to_yuv::bgr_to_yv12;
pub use rgba_to_yuv::bgra_to_i420;
pub use rgba_to_yuv::bgra_to_yuv420;
pub use rgba_to_yuv::bgra_to_yv12;
pub use rgba_to_yuv::rgb_to_i420;
pub use rgba_to_yuv::rgb_to_yuv420;
pub use rgba_to_yuv::rgb_to_yv12;
pub use rgba_to_yuv::rgba_to_i420;
pub use rgba_to_yuv::rgba_to_yuv420;
pub use rgba_to_yuv::rgba_to_yv12;

pub use yuv_to_gray::packed422_to_gray;
pub use yuv_to_gray::yuv420_to_gray;
