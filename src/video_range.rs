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
use crate::built_coefficients::{BT601_VIDEO_FORWARD, BT601_VIDEO_INVERSE, ITU_SHIFT};
use crate::numerics::qrshr;
use crate::yuv_support::YuvSourceChannels;

/// Chroma contributions of one U/V pair, shared by every luma sample the pair covers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ChromaTerms {
    pub(crate) r: i32,
    pub(crate) g: i32,
    pub(crate) b: i32,
}

impl ChromaTerms {
    #[inline(always)]
    pub(crate) fn new(u: u8, v: u8) -> ChromaTerms {
        let uu = u as i32 - 128;
        let vv = v as i32 - 128;
        let t = &BT601_VIDEO_INVERSE;
        ChromaTerms {
            r: t.v_r * vv,
            g: t.v_g * vv + t.u_g * uu,
            b: t.u_b * uu,
        }
    }
}

#[inline(always)]
pub(crate) fn scaled_luma(y: u8) -> i32 {
    (y as i32 - 16).max(0) * BT601_VIDEO_INVERSE.y_coef
}

/// Writes one decoded pixel to `dst`, which holds at least `channels` elements.
#[inline(always)]
pub(crate) fn store_pixel<const DESTINATION_CHANNELS: u8>(
    dst: &mut [u8],
    y: u8,
    terms: &ChromaTerms,
) {
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let y = scaled_luma(y);
    dst[dst_chans.get_r_channel_offset()] = qrshr::<ITU_SHIFT, 8>(y + terms.r) as u8;
    dst[dst_chans.get_g_channel_offset()] = qrshr::<ITU_SHIFT, 8>(y + terms.g) as u8;
    dst[dst_chans.get_b_channel_offset()] = qrshr::<ITU_SHIFT, 8>(y + terms.b) as u8;
    if dst_chans.has_alpha() {
        dst[dst_chans.get_a_channel_offset()] = 255;
    }
}

#[inline(always)]
pub(crate) fn encode_luma(r: i32, g: i32, b: i32) -> u8 {
    let t = &BT601_VIDEO_FORWARD;
    qrshr::<ITU_SHIFT, 8>(t.r_y * r + t.g_y * g + t.b_y * b + (16 << ITU_SHIFT)) as u8
}

/// Returns `(U, V)`.
#[inline(always)]
pub(crate) fn encode_chroma(r: i32, g: i32, b: i32) -> (u8, u8) {
    let t = &BT601_VIDEO_FORWARD;
    let u = qrshr::<ITU_SHIFT, 8>(t.r_u * r + t.g_u * g + t.b_u * b + (128 << ITU_SHIFT));
    let v = qrshr::<ITU_SHIFT, 8>(t.b_u * r + t.g_v * g + t.b_v * b + (128 << ITU_SHIFT));
    (u as u8, v as u8)
}

/// Encodes a 2x2 block given as two rows of two pixels.
///
/// Luma is written for all four pixels, the returned `(U, V)` pair is taken
/// from the top-left pixel only.
#[inline(always)]
pub(crate) fn encode_block<const ORIGIN_CHANNELS: u8>(
    rgba0: &[u8],
    rgba1: &[u8],
    y_dst0: &mut [u8],
    y_dst1: &mut [u8],
) -> (u8, u8) {
    let src_chans: YuvSourceChannels = ORIGIN_CHANNELS.into();
    let channels = src_chans.get_channels_count();
    let rgb = |px: &[u8]| {
        (
            px[src_chans.get_r_channel_offset()] as i32,
            px[src_chans.get_g_channel_offset()] as i32,
            px[src_chans.get_b_channel_offset()] as i32,
        )
    };

    let (r00, g00, b00) = rgb(&rgba0[..channels]);
    let (r01, g01, b01) = rgb(&rgba0[channels..channels * 2]);
    let (r10, g10, b10) = rgb(&rgba1[..channels]);
    let (r11, g11, b11) = rgb(&rgba1[channels..channels * 2]);
    y_dst0[0] = encode_luma(r00, g00, b00);
    y_dst0[1] = encode_luma(r01, g01, b01);
    y_dst1[0] = encode_luma(r10, g10, b10);
    y_dst1[1] = encode_luma(r11, g11, b11);
    encode_chroma(r00, g00, b00)
}
