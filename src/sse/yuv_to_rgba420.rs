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
use crate::built_coefficients::{BT601_VIDEO_INVERSE, ITU_SHIFT};
use crate::internals::ProcessedOffset;
use crate::sse::{sse_deinterleave_uv, sse_store_rgbx};
use crate::yuv_support::{YuvNVOrder, YuvSourceChannels};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

struct ChromaLanes {
    r: [__m128i; 4],
    g: [__m128i; 4],
    b: [__m128i; 4],
}

/// Widens 8 chroma pairs in the low halves of `u` and `v` into per-luma terms,
/// each term duplicated for the two horizontal luma samples it covers.
#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn sse_chroma_lanes(u: __m128i, v: __m128i) -> ChromaLanes {
    let t = &BT601_VIDEO_INVERSE;
    let bias = _mm_set1_epi32(128);
    let rounding = _mm_set1_epi32(1 << (ITU_SHIFT - 1));
    let v_r = _mm_set1_epi32(t.v_r);
    let v_g = _mm_set1_epi32(t.v_g);
    let u_g = _mm_set1_epi32(t.u_g);
    let u_b = _mm_set1_epi32(t.u_b);

    let uu_lo = _mm_sub_epi32(_mm_cvtepu8_epi32(u), bias);
    let uu_hi = _mm_sub_epi32(_mm_cvtepu8_epi32(_mm_srli_si128::<4>(u)), bias);
    let vv_lo = _mm_sub_epi32(_mm_cvtepu8_epi32(v), bias);
    let vv_hi = _mm_sub_epi32(_mm_cvtepu8_epi32(_mm_srli_si128::<4>(v)), bias);

    let r_lo = _mm_add_epi32(_mm_mullo_epi32(vv_lo, v_r), rounding);
    let r_hi = _mm_add_epi32(_mm_mullo_epi32(vv_hi, v_r), rounding);
    let g_lo = _mm_add_epi32(
        _mm_add_epi32(_mm_mullo_epi32(vv_lo, v_g), _mm_mullo_epi32(uu_lo, u_g)),
        rounding,
    );
    let g_hi = _mm_add_epi32(
        _mm_add_epi32(_mm_mullo_epi32(vv_hi, v_g), _mm_mullo_epi32(uu_hi, u_g)),
        rounding,
    );
    let b_lo = _mm_add_epi32(_mm_mullo_epi32(uu_lo, u_b), rounding);
    let b_hi = _mm_add_epi32(_mm_mullo_epi32(uu_hi, u_b), rounding);

    ChromaLanes {
        r: [
            _mm_unpacklo_epi32(r_lo, r_lo),
            _mm_unpackhi_epi32(r_lo, r_lo),
            _mm_unpacklo_epi32(r_hi, r_hi),
            _mm_unpackhi_epi32(r_hi, r_hi),
        ],
        g: [
            _mm_unpacklo_epi32(g_lo, g_lo),
            _mm_unpackhi_epi32(g_lo, g_lo),
            _mm_unpacklo_epi32(g_hi, g_hi),
            _mm_unpackhi_epi32(g_hi, g_hi),
        ],
        b: [
            _mm_unpacklo_epi32(b_lo, b_lo),
            _mm_unpackhi_epi32(b_lo, b_lo),
            _mm_unpacklo_epi32(b_hi, b_hi),
            _mm_unpackhi_epi32(b_hi, b_hi),
        ],
    }
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn sse_scale_luma(y: __m128i) -> [__m128i; 4] {
    let y_coef = _mm_set1_epi32(BT601_VIDEO_INVERSE.y_coef);
    let y = _mm_subs_epu8(y, _mm_set1_epi8(16));
    [
        _mm_mullo_epi32(_mm_cvtepu8_epi32(y), y_coef),
        _mm_mullo_epi32(_mm_cvtepu8_epi32(_mm_srli_si128::<4>(y)), y_coef),
        _mm_mullo_epi32(_mm_cvtepu8_epi32(_mm_srli_si128::<8>(y)), y_coef),
        _mm_mullo_epi32(_mm_cvtepu8_epi32(_mm_srli_si128::<12>(y)), y_coef),
    ]
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn sse_channel_u8(y: &[__m128i; 4], term: &[__m128i; 4]) -> __m128i {
    let c0 = _mm_srai_epi32::<ITU_SHIFT>(_mm_add_epi32(y[0], term[0]));
    let c1 = _mm_srai_epi32::<ITU_SHIFT>(_mm_add_epi32(y[1], term[1]));
    let c2 = _mm_srai_epi32::<ITU_SHIFT>(_mm_add_epi32(y[2], term[2]));
    let c3 = _mm_srai_epi32::<ITU_SHIFT>(_mm_add_epi32(y[3], term[3]));
    _mm_packus_epi16(_mm_packs_epi32(c0, c1), _mm_packs_epi32(c2, c3))
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn sse_store_row<const DESTINATION_CHANNELS: u8>(
    y_plane: &[u8],
    rgba: &mut [u8],
    cx: usize,
    lanes: &ChromaLanes,
) {
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();
    let y_values = _mm_loadu_si128(y_plane.get_unchecked(cx..).as_ptr() as *const __m128i);
    let y = sse_scale_luma(y_values);
    let r = sse_channel_u8(&y, &lanes.r);
    let g = sse_channel_u8(&y, &lanes.g);
    let b = sse_channel_u8(&y, &lanes.b);
    sse_store_rgbx::<DESTINATION_CHANNELS>(
        rgba.get_unchecked_mut(cx * channels..).as_mut_ptr(),
        r,
        g,
        b,
    );
}

/// Double row 4:2:0 decoding with separate U and V rows.
///
/// Rows must hold at least `width` luma samples, `width / 2` chroma samples
/// and `width * channels` destination elements.
pub(crate) fn sse_yuv_to_rgba_row420<const DESTINATION_CHANNELS: u8>(
    y_plane0: &[u8],
    y_plane1: &[u8],
    u_plane: &[u8],
    v_plane: &[u8],
    rgba0: &mut [u8],
    rgba1: &mut [u8],
    width: usize,
) -> ProcessedOffset {
    unsafe {
        sse_yuv_to_rgba_row420_impl::<DESTINATION_CHANNELS>(
            y_plane0, y_plane1, u_plane, v_plane, rgba0, rgba1, width,
        )
    }
}

#[target_feature(enable = "sse4.1")]
unsafe fn sse_yuv_to_rgba_row420_impl<const DESTINATION_CHANNELS: u8>(
    y_plane0: &[u8],
    y_plane1: &[u8],
    u_plane: &[u8],
    v_plane: &[u8],
    rgba0: &mut [u8],
    rgba1: &mut [u8],
    width: usize,
) -> ProcessedOffset {
    let mut cx = 0usize;
    let mut ux = 0usize;

    while cx + 16 <= width {
        let u = _mm_loadl_epi64(u_plane.get_unchecked(ux..).as_ptr() as *const __m128i);
        let v = _mm_loadl_epi64(v_plane.get_unchecked(ux..).as_ptr() as *const __m128i);
        let lanes = sse_chroma_lanes(u, v);

        sse_store_row::<DESTINATION_CHANNELS>(y_plane0, rgba0, cx, &lanes);
        sse_store_row::<DESTINATION_CHANNELS>(y_plane1, rgba1, cx, &lanes);

        cx += 16;
        ux += 8;
    }

    ProcessedOffset { cx, ux }
}

/// Double row 4:2:0 decoding with interleaved chroma.
pub(crate) fn sse_yuv_nv_to_rgba420<const UV_ORDER: u8, const DESTINATION_CHANNELS: u8>(
    y_plane0: &[u8],
    y_plane1: &[u8],
    uv_plane: &[u8],
    rgba0: &mut [u8],
    rgba1: &mut [u8],
    width: usize,
) -> ProcessedOffset {
    unsafe {
        sse_yuv_nv_to_rgba420_impl::<UV_ORDER, DESTINATION_CHANNELS>(
            y_plane0, y_plane1, uv_plane, rgba0, rgba1, width,
        )
    }
}

#[target_feature(enable = "sse4.1")]
unsafe fn sse_yuv_nv_to_rgba420_impl<const UV_ORDER: u8, const DESTINATION_CHANNELS: u8>(
    y_plane0: &[u8],
    y_plane1: &[u8],
    uv_plane: &[u8],
    rgba0: &mut [u8],
    rgba1: &mut [u8],
    width: usize,
) -> ProcessedOffset {
    let order: YuvNVOrder = UV_ORDER.into();
    let mut cx = 0usize;

    while cx + 16 <= width {
        let uv = _mm_loadu_si128(uv_plane.get_unchecked(cx..).as_ptr() as *const __m128i);
        let (even, odd) = sse_deinterleave_uv(uv);
        let lanes = match order {
            YuvNVOrder::UV => sse_chroma_lanes(even, odd),
            YuvNVOrder::VU => sse_chroma_lanes(odd, even),
        };

        sse_store_row::<DESTINATION_CHANNELS>(y_plane0, rgba0, cx, &lanes);
        sse_store_row::<DESTINATION_CHANNELS>(y_plane1, rgba1, cx, &lanes);

        cx += 16;
    }

    ProcessedOffset { cx, ux: cx }
}
