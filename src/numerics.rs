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
use crate::built_coefficients::{
    forward_coefficients, forward_coefficients_fixed, inverse_coefficients,
    inverse_coefficients_fixed, Bt601Forward, Bt601Inverse, YUV_SHIFT,
};
use crate::yuv_support::{YuvFamily, YuvSourceChannels};
use num_traits::AsPrimitive;
use std::fmt::Debug;

#[inline(always)]
/// Saturating rounding shift right against bit depth
pub(crate) fn qrshr<const PRECISION: i32, const BIT_DEPTH: usize>(val: i32) -> i32 {
    let rounding: i32 = 1 << (PRECISION - 1);
    let max_value: i32 = (1 << BIT_DEPTH) - 1;
    ((val + rounding) >> PRECISION).min(max_value).max(0)
}

#[inline(always)]
/// Rounding shift right without saturation
pub(crate) const fn descale<const PRECISION: i32>(val: i32) -> i32 {
    (val + (1 << (PRECISION - 1))) >> PRECISION
}

/// Element of an interleaved image handled by the RGB <-> YCrCb/YUV converters.
///
/// Integer samples run in Q14 and saturate, `f32` keeps the float formula as is.
pub trait InterleavedSample: Copy + Default + Debug + Send + Sync + 'static {
    type Coefficient: Copy + Debug + Send + Sync;

    /// Opaque alpha written by 4 channel inverse conversions.
    const MAX_VALUE: Self;

    fn forward_table(
        family: YuvFamily,
        channels: YuvSourceChannels,
    ) -> Bt601Forward<Self::Coefficient>;

    fn inverse_table(family: YuvFamily) -> Bt601Inverse<Self::Coefficient>;

    /// Converts one pixel stored in memory order, `blue_idx` is the slot of B.
    ///
    /// Returns `[Y, Cr, Cb]`.
    fn forward(
        pixel: [Self; 3],
        blue_idx: usize,
        transform: &Bt601Forward<Self::Coefficient>,
    ) -> [Self; 3];

    /// Returns `[R, G, B]`.
    fn inverse(y: Self, cr: Self, cb: Self, transform: &Bt601Inverse<Self::Coefficient>)
        -> [Self; 3];
}

#[inline(always)]
fn forward_fixed<V, const BIT_DEPTH: usize>(
    pixel: [V; 3],
    blue_idx: usize,
    transform: &Bt601Forward<i32>,
) -> [V; 3]
where
    V: AsPrimitive<i32>,
    i32: AsPrimitive<V>,
{
    let delta = (1i32 << (BIT_DEPTH - 1)) << YUV_SHIFT;
    let s0: i32 = pixel[0].as_();
    let s1: i32 = pixel[1].as_();
    let s2: i32 = pixel[2].as_();
    let y = descale::<YUV_SHIFT>(
        s0 * transform.luma[0] + s1 * transform.luma[1] + s2 * transform.luma[2],
    );
    let r: i32 = pixel[blue_idx ^ 2].as_();
    let b: i32 = pixel[blue_idx].as_();
    let cr = qrshr::<YUV_SHIFT, BIT_DEPTH>((r - y) * transform.cr_coef + delta);
    let cb = qrshr::<YUV_SHIFT, BIT_DEPTH>((b - y) * transform.cb_coef + delta);
    let max_value = (1i32 << BIT_DEPTH) - 1;
    [y.min(max_value).max(0).as_(), cr.as_(), cb.as_()]
}

#[inline(always)]
fn inverse_fixed<V, const BIT_DEPTH: usize>(
    y: V,
    cr: V,
    cb: V,
    transform: &Bt601Inverse<i32>,
) -> [V; 3]
where
    V: AsPrimitive<i32>,
    i32: AsPrimitive<V>,
{
    let delta = 1i32 << (BIT_DEPTH - 1);
    let max_value = (1i32 << BIT_DEPTH) - 1;
    let y: i32 = y.as_();
    let cr = AsPrimitive::<i32>::as_(cr) - delta;
    let cb = AsPrimitive::<i32>::as_(cb) - delta;
    let r = y + descale::<YUV_SHIFT>(cr * transform.cr_r);
    let g = y + descale::<YUV_SHIFT>(cb * transform.cb_g + cr * transform.cr_g);
    let b = y + descale::<YUV_SHIFT>(cb * transform.cb_b);
    [
        r.min(max_value).max(0).as_(),
        g.min(max_value).max(0).as_(),
        b.min(max_value).max(0).as_(),
    ]
}

macro_rules! fixed_sample {
    ($sample: ty, $bit_depth: expr) => {
        impl InterleavedSample for $sample {
            type Coefficient = i32;

            const MAX_VALUE: Self = <$sample>::MAX;

            fn forward_table(family: YuvFamily, channels: YuvSourceChannels) -> Bt601Forward<i32> {
                forward_coefficients_fixed(family, channels)
            }

            fn inverse_table(family: YuvFamily) -> Bt601Inverse<i32> {
                inverse_coefficients_fixed(family)
            }

            #[inline(always)]
            fn forward(
                pixel: [Self; 3],
                blue_idx: usize,
                transform: &Bt601Forward<i32>,
            ) -> [Self; 3] {
                forward_fixed::<$sample, $bit_depth>(pixel, blue_idx, transform)
            }

            #[inline(always)]
            fn inverse(y: Self, cr: Self, cb: Self, transform: &Bt601Inverse<i32>) -> [Self; 3] {
                inverse_fixed::<$sample, $bit_depth>(y, cr, cb, transform)
            }
        }
    };
}

fixed_sample!(u8, 8);
fixed_sample!(u16, 16);

impl InterleavedSample for f32 {
    type Coefficient = f32;

    const MAX_VALUE: Self = 1.0;

    fn forward_table(family: YuvFamily, channels: YuvSourceChannels) -> Bt601Forward<f32> {
        forward_coefficients(family, channels)
    }

    fn inverse_table(family: YuvFamily) -> Bt601Inverse<f32> {
        inverse_coefficients(family)
    }

    #[inline(always)]
    fn forward(pixel: [Self; 3], blue_idx: usize, transform: &Bt601Forward<f32>) -> [Self; 3] {
        const DELTA: f32 = 0.5;
        let y = pixel[0] * transform.luma[0]
            + pixel[1] * transform.luma[1]
            + pixel[2] * transform.luma[2];
        let cr = (pixel[blue_idx ^ 2] - y) * transform.cr_coef + DELTA;
        let cb = (pixel[blue_idx] - y) * transform.cb_coef + DELTA;
        [y, cr, cb]
    }

    #[inline(always)]
    fn inverse(y: Self, cr: Self, cb: Self, transform: &Bt601Inverse<f32>) -> [Self; 3] {
        const DELTA: f32 = 0.5;
        let cr = cr - DELTA;
        let cb = cb - DELTA;
        let r = y + cr * transform.cr_r;
        let g = y + cb * transform.cb_g + cr * transform.cr_g;
        let b = y + cb * transform.cb_b;
        [r, g, b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qrshr_saturates() {
        assert_eq!(qrshr::<14, 8>(300 << 14), 255);
        assert_eq!(qrshr::<14, 8>(-5 << 14), 0);
        assert_eq!(qrshr::<14, 8>((100 << 14) + (1 << 13)), 101);
        assert_eq!(qrshr::<14, 8>((100 << 14) + (1 << 13) - 1), 100);
    }

    #[test]
    fn descale_rounds_half_up() {
        assert_eq!(descale::<14>(3 << 13), 2);
        assert_eq!(descale::<14>((3 << 13) - 1), 1);
        assert_eq!(descale::<14>(-(1 << 13)), 0);
    }

    #[test]
    fn white_and_black_ycrcb() {
        let transform = u8::forward_table(YuvFamily::YCrCb, YuvSourceChannels::Rgb);
        assert_eq!(u8::forward([255, 255, 255], 2, &transform), [255, 128, 128]);
        assert_eq!(u8::forward([0, 0, 0], 2, &transform), [0, 128, 128]);
        let transform = u16::forward_table(YuvFamily::YCrCb, YuvSourceChannels::Bgr);
        assert_eq!(
            u16::forward([65535, 65535, 65535], 0, &transform),
            [65535, 32768, 32768]
        );
    }

    #[test]
    fn inverse_saturates_instead_of_wrapping() {
        let transform = u8::inverse_table(YuvFamily::Yuv);
        let [r, g, b] = u8::inverse(250, 255, 255, &transform);
        assert_eq!(r, 255);
        assert_eq!(b, 255);
        assert!(g < 250);
        let [r, _, b] = u8::inverse(5, 0, 0, &transform);
        assert_eq!((r, b), (0, 0));
    }

    #[test]
    fn float_path_does_not_clamp() {
        let transform = f32::inverse_table(YuvFamily::YCrCb);
        let [r, _, _] = f32::inverse(1.0, 1.0, 0.5, &transform);
        assert!(r > 1.0);
    }
}
