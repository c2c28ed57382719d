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
use crate::yuv_support::{YuvFamily, YuvSourceChannels};

/// Fixed point precision of the interleaved 8/16-bit path.
pub const YUV_SHIFT: i32 = 14;
/// Fixed point precision of the BT.601 video range 4:2:0/4:2:2 path.
pub const ITU_SHIFT: i32 = 20;

/// Forward interleaved transform.
///
/// `luma` holds weights for source channels 0, 1, 2 in memory order, so the same
/// coefficients serve RGB and BGR once built for a layout.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct Bt601Forward<T> {
    pub luma: [T; 3],
    /// Scale of `R - Y`, Cr for YCrCb and V for YUV
    pub cr_coef: T,
    /// Scale of `B - Y`, Cb for YCrCb and U for YUV
    pub cb_coef: T,
}

impl<T: Copy> Bt601Forward<T> {
    /// Exchanges R and B luma slots for layouts with blue stored first.
    #[inline]
    pub fn swap_rb(&self) -> Bt601Forward<T> {
        Bt601Forward {
            luma: [self.luma[2], self.luma[1], self.luma[0]],
            cr_coef: self.cr_coef,
            cb_coef: self.cb_coef,
        }
    }
}

impl Bt601Forward<f32> {
    pub fn to_integers(&self, precision: u32) -> Bt601Forward<i32> {
        let scale = (1 << precision) as f32;
        Bt601Forward {
            luma: [
                (self.luma[0] * scale).round() as i32,
                (self.luma[1] * scale).round() as i32,
                (self.luma[2] * scale).round() as i32,
            ],
            cr_coef: (self.cr_coef * scale).round() as i32,
            cb_coef: (self.cb_coef * scale).round() as i32,
        }
    }
}

/// Inverse interleaved transform, chroma contributions to each of R, G, B.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct Bt601Inverse<T> {
    pub cr_r: T,
    pub cr_g: T,
    pub cb_g: T,
    pub cb_b: T,
}

impl Bt601Inverse<f32> {
    pub fn to_integers(&self, precision: u32) -> Bt601Inverse<i32> {
        let scale = (1 << precision) as f32;
        Bt601Inverse {
            cr_r: (self.cr_r * scale).round() as i32,
            cr_g: (self.cr_g * scale).round() as i32,
            cb_g: (self.cb_g * scale).round() as i32,
            cb_b: (self.cb_b * scale).round() as i32,
        }
    }
}

static YCRCB_FORWARD: Bt601Forward<f32> = Bt601Forward {
    luma: [0.299, 0.587, 0.114],
    cr_coef: 0.713,
    cb_coef: 0.564,
};

static YUV_FORWARD: Bt601Forward<f32> = Bt601Forward {
    luma: [0.299, 0.587, 0.114],
    cr_coef: 0.877,
    cb_coef: 0.492,
};

static YCRCB_FORWARD_14PREC: Bt601Forward<i32> = Bt601Forward {
    luma: [4899, 9617, 1868],
    cr_coef: 11682,
    cb_coef: 9241,
};

static YUV_FORWARD_14PREC: Bt601Forward<i32> = Bt601Forward {
    luma: [4899, 9617, 1868],
    cr_coef: 14369,
    cb_coef: 8061,
};

static YCRCB_INVERSE: Bt601Inverse<f32> = Bt601Inverse {
    cr_r: 1.403,
    cr_g: -0.714,
    cb_g: -0.344,
    cb_b: 1.773,
};

static YUV_INVERSE: Bt601Inverse<f32> = Bt601Inverse {
    cr_r: 1.140,
    cr_g: -0.581,
    cb_g: -0.395,
    cb_b: 2.032,
};

static YCRCB_INVERSE_14PREC: Bt601Inverse<i32> = Bt601Inverse {
    cr_r: 22987,
    cr_g: -11698,
    cb_g: -5636,
    cb_b: 29049,
};

static YUV_INVERSE_14PREC: Bt601Inverse<i32> = Bt601Inverse {
    cr_r: 18678,
    cr_g: -9519,
    cb_g: -6472,
    cb_b: 33292,
};

/// Forward float coefficients laid out for `channels`.
pub fn forward_coefficients(family: YuvFamily, channels: YuvSourceChannels) -> Bt601Forward<f32> {
    let base = match family {
        YuvFamily::YCrCb => YCRCB_FORWARD,
        YuvFamily::Yuv => YUV_FORWARD,
    };
    if channels.get_b_channel_offset() == 0 {
        base.swap_rb()
    } else {
        base
    }
}

/// Forward coefficients in Q14 laid out for `channels`.
pub fn forward_coefficients_fixed(
    family: YuvFamily,
    channels: YuvSourceChannels,
) -> Bt601Forward<i32> {
    let base = match family {
        YuvFamily::YCrCb => YCRCB_FORWARD_14PREC,
        YuvFamily::Yuv => YUV_FORWARD_14PREC,
    };
    if channels.get_b_channel_offset() == 0 {
        base.swap_rb()
    } else {
        base
    }
}

pub fn inverse_coefficients(family: YuvFamily) -> Bt601Inverse<f32> {
    match family {
        YuvFamily::YCrCb => YCRCB_INVERSE,
        YuvFamily::Yuv => YUV_INVERSE,
    }
}

/// Inverse coefficients in Q14.
pub fn inverse_coefficients_fixed(family: YuvFamily) -> Bt601Inverse<i32> {
    match family {
        YuvFamily::YCrCb => YCRCB_INVERSE_14PREC,
        YuvFamily::Yuv => YUV_INVERSE_14PREC,
    }
}

/// BT.601 video range (Y 16..235, UV 16..240) to full range RGB.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct Bt601VideoInverse<T> {
    pub y_coef: T,
    pub u_b: T,
    pub u_g: T,
    pub v_g: T,
    pub v_r: T,
}

impl Bt601VideoInverse<f32> {
    pub fn to_integers(&self, precision: u32) -> Bt601VideoInverse<i32> {
        let scale = (1 << precision) as f32;
        Bt601VideoInverse {
            y_coef: (self.y_coef * scale).round() as i32,
            u_b: (self.u_b * scale).round() as i32,
            u_g: (self.u_g * scale).round() as i32,
            v_g: (self.v_g * scale).round() as i32,
            v_r: (self.v_r * scale).round() as i32,
        }
    }
}

/// Full range RGB to BT.601 video range.
///
/// V takes `b_u` as its R weight, the table holds only the eight distinct values.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct Bt601VideoForward<T> {
    pub r_y: T,
    pub g_y: T,
    pub b_y: T,
    pub r_u: T,
    pub g_u: T,
    pub b_u: T,
    pub g_v: T,
    pub b_v: T,
}

impl Bt601VideoForward<f32> {
    pub fn to_integers(&self, precision: u32) -> Bt601VideoForward<i32> {
        let scale = (1 << precision) as f32;
        Bt601VideoForward {
            r_y: (self.r_y * scale).round() as i32,
            g_y: (self.g_y * scale).round() as i32,
            b_y: (self.b_y * scale).round() as i32,
            r_u: (self.r_u * scale).round() as i32,
            g_u: (self.g_u * scale).round() as i32,
            b_u: (self.b_u * scale).round() as i32,
            g_v: (self.g_v * scale).round() as i32,
            b_v: (self.b_v * scale).round() as i32,
        }
    }
}

pub static BT601_VIDEO_INVERSE_F32: Bt601VideoInverse<f32> = Bt601VideoInverse {
    y_coef: 1.164,
    u_b: 2.018,
    u_g: -0.391,
    v_g: -0.813,
    v_r: 1.596,
};

/// Q20 table used by every 4:2:0 and 4:2:2 decoder.
pub static BT601_VIDEO_INVERSE: Bt601VideoInverse<i32> = Bt601VideoInverse {
    y_coef: 1220542,
    u_b: 2116026,
    u_g: -409993,
    v_g: -852492,
    v_r: 1673527,
};

pub static BT601_VIDEO_FORWARD_F32: Bt601VideoForward<f32> = Bt601VideoForward {
    r_y: 0.257,
    g_y: 0.504,
    b_y: 0.098,
    r_u: -0.148,
    g_u: -0.291,
    b_u: 0.439,
    g_v: -0.368,
    b_v: -0.071,
};

/// Q20 table used by the RGB to 4:2:0 encoder.
///
/// Values are tuned so the encoder and decoder agree, some differ from the
/// rounded float by one unit.
pub static BT601_VIDEO_FORWARD: Bt601VideoForward<i32> = Bt601VideoForward {
    r_y: 269484,
    g_y: 528482,
    b_y: 102760,
    r_u: -155188,
    g_u: -305135,
    b_u: 460324,
    g_v: -385875,
    b_v: -74448,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q14_tables_are_rounded_floats() {
        for family in [YuvFamily::YCrCb, YuvFamily::Yuv] {
            for channels in [YuvSourceChannels::Rgb, YuvSourceChannels::Bgra] {
                let float = forward_coefficients(family, channels);
                let fixed = forward_coefficients_fixed(family, channels);
                assert_eq!(float.to_integers(YUV_SHIFT as u32), fixed);
            }
            let float = inverse_coefficients(family);
            let fixed = inverse_coefficients_fixed(family);
            assert_eq!(float.to_integers(YUV_SHIFT as u32), fixed);
        }
    }

    #[test]
    fn blue_first_layout_swaps_only_outer_luma_weights() {
        let rgb = forward_coefficients_fixed(YuvFamily::YCrCb, YuvSourceChannels::Rgb);
        let bgr = forward_coefficients_fixed(YuvFamily::YCrCb, YuvSourceChannels::Bgr);
        assert_eq!(rgb.luma, [4899, 9617, 1868]);
        assert_eq!(bgr.luma, [1868, 9617, 4899]);
        assert_eq!(rgb.cr_coef, bgr.cr_coef);
        assert_eq!(rgb.cb_coef, bgr.cb_coef);
        let luma_sum: i32 = rgb.luma.iter().sum();
        assert_eq!(luma_sum, 1 << YUV_SHIFT);
    }

    #[test]
    fn q20_tables_are_close_to_floats() {
        let inverse = BT601_VIDEO_INVERSE_F32.to_integers(ITU_SHIFT as u32);
        let pairs = [
            (inverse.y_coef, BT601_VIDEO_INVERSE.y_coef),
            (inverse.u_b, BT601_VIDEO_INVERSE.u_b),
            (inverse.u_g, BT601_VIDEO_INVERSE.u_g),
            (inverse.v_g, BT601_VIDEO_INVERSE.v_g),
            (inverse.v_r, BT601_VIDEO_INVERSE.v_r),
        ];
        for (computed, table) in pairs {
            assert!(
                (computed - table).abs() <= 1,
                "Inverse coefficient {} is too far from {}",
                table,
                computed
            );
        }
        let forward = BT601_VIDEO_FORWARD_F32.to_integers(ITU_SHIFT as u32);
        let pairs = [
            (forward.r_y, BT601_VIDEO_FORWARD.r_y),
            (forward.g_y, BT601_VIDEO_FORWARD.g_y),
            (forward.b_y, BT601_VIDEO_FORWARD.b_y),
            (forward.r_u, BT601_VIDEO_FORWARD.r_u),
            (forward.g_u, BT601_VIDEO_FORWARD.g_u),
            (forward.b_u, BT601_VIDEO_FORWARD.b_u),
            (forward.g_v, BT601_VIDEO_FORWARD.g_v),
            (forward.b_v, BT601_VIDEO_FORWARD.b_v),
        ];
        for (computed, table) in pairs {
            assert!(
                (computed - table).abs() <= 1,
                "Forward coefficient {} is too far from {}",
                table,
                computed
            );
        }
    }
}
