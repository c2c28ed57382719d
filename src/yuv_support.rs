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
/// Which pair of chroma constants a conversion uses.
///
/// `YCrCb` stores chroma as Cr, Cb in that order, `Yuv` stores U, V.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YuvFamily {
    Yuv = 0,
    YCrCb = 1,
}

impl From<u8> for YuvFamily {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvFamily::Yuv,
            1 => YuvFamily::YCrCb,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvFamily {
    /// Position of Cr/V inside an interleaved pixel, Cb/U takes the other slot.
    #[inline(always)]
    pub(crate) const fn cr_position(&self) -> usize {
        match self {
            YuvFamily::YCrCb => 1,
            YuvFamily::Yuv => 2,
        }
    }

    #[inline(always)]
    pub(crate) const fn cb_position(&self) -> usize {
        match self {
            YuvFamily::YCrCb => 2,
            YuvFamily::Yuv => 1,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConversionDirection {
    /// RGB to YCrCb/YUV
    Forward = 0,
    /// YCrCb/YUV to RGB
    Inverse = 1,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum YuvNVOrder {
    UV = 0,
    VU = 1,
}

impl From<u8> for YuvNVOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvNVOrder::UV,
            1 => YuvNVOrder::VU,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvNVOrder {
    #[inline(always)]
    pub const fn get_u_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 0,
            YuvNVOrder::VU => 1,
        }
    }

    #[inline(always)]
    pub const fn get_v_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 1,
            YuvNVOrder::VU => 0,
        }
    }
}

/// Interleaved RGB family layout, `blue index` 0 means BGR(A), 2 means RGB(A).
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YuvSourceChannels {
    Rgb = 0,
    Rgba = 1,
    Bgra = 2,
    Bgr = 3,
}

impl From<u8> for YuvSourceChannels {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvSourceChannels::Rgb,
            1 => YuvSourceChannels::Rgba,
            2 => YuvSourceChannels::Bgra,
            3 => YuvSourceChannels::Bgr,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvSourceChannels {
    /// Resolves layout from channel count and position of blue, `None` for anything
    /// except 3/4 channels with blue at 0 or 2.
    pub const fn from_layout(channels: usize, blue_idx: usize) -> Option<YuvSourceChannels> {
        match (channels, blue_idx) {
            (3, 0) => Some(YuvSourceChannels::Bgr),
            (3, 2) => Some(YuvSourceChannels::Rgb),
            (4, 0) => Some(YuvSourceChannels::Bgra),
            (4, 2) => Some(YuvSourceChannels::Rgba),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            YuvSourceChannels::Rgb | YuvSourceChannels::Bgr => 3,
            YuvSourceChannels::Rgba | YuvSourceChannels::Bgra => 4,
        }
    }

    #[inline(always)]
    pub const fn has_alpha(&self) -> bool {
        match self {
            YuvSourceChannels::Rgb | YuvSourceChannels::Bgr => false,
            YuvSourceChannels::Rgba | YuvSourceChannels::Bgra => true,
        }
    }

    #[inline(always)]
    pub const fn get_blue_index(&self) -> usize {
        self.get_b_channel_offset()
    }

    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            YuvSourceChannels::Rgb | YuvSourceChannels::Rgba => 0,
            YuvSourceChannels::Bgra | YuvSourceChannels::Bgr => 2,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            YuvSourceChannels::Rgb | YuvSourceChannels::Rgba => 2,
            YuvSourceChannels::Bgra | YuvSourceChannels::Bgr => 0,
        }
    }

    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        match self {
            YuvSourceChannels::Rgb | YuvSourceChannels::Bgr => 0,
            YuvSourceChannels::Rgba | YuvSourceChannels::Bgra => 3,
        }
    }
}

/// Byte order of a packed 4:2:2 macro-pixel, two luma and one chroma pair in 4 bytes.
///
/// VYUY is not part of the supported set.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Yuy2Description {
    YUYV = 0,
    UYVY = 1,
    YVYU = 2,
}

impl From<u8> for Yuy2Description {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => Yuy2Description::YUYV,
            1 => Yuy2Description::UYVY,
            2 => Yuy2Description::YVYU,
            _ => {
                panic!("Not supported value {}", value)
            }
        }
    }
}

impl Yuy2Description {
    /// Resolves a description from the chroma order (`u_idx`, 0 for U first) and
    /// whether luma comes second (`y_idx`).
    pub const fn from_indices(u_idx: usize, y_idx: usize) -> Option<Yuy2Description> {
        match (u_idx, y_idx) {
            (0, 0) => Some(Yuy2Description::YUYV),
            (0, 1) => Some(Yuy2Description::UYVY),
            (1, 0) => Some(Yuy2Description::YVYU),
            _ => None,
        }
    }

    #[inline(always)]
    const fn u_idx(&self) -> usize {
        match self {
            Yuy2Description::YUYV | Yuy2Description::UYVY => 0,
            Yuy2Description::YVYU => 1,
        }
    }

    #[inline(always)]
    const fn y_idx(&self) -> usize {
        match self {
            Yuy2Description::YUYV | Yuy2Description::YVYU => 0,
            Yuy2Description::UYVY => 1,
        }
    }

    #[inline]
    pub const fn get_u_position(&self) -> usize {
        1 - self.y_idx() + self.u_idx() * 2
    }

    #[inline]
    pub const fn get_v_position(&self) -> usize {
        (2 + self.get_u_position()) % 4
    }

    #[inline(always)]
    pub const fn get_first_y_position(&self) -> usize {
        self.y_idx()
    }

    #[inline]
    pub const fn get_second_y_position(&self) -> usize {
        self.y_idx() + 2
    }
}

/// Row addressing of one chroma plane inside a single-buffer planar 4:2:0 image.
///
/// Chroma rows are `width / 2` long and advance alternately by `width / 2` and
/// `stride - width / 2`, so two of them share one buffer row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct StackedChromaPlane {
    pub(crate) base: usize,
    pub(crate) step_idx: usize,
    pub(crate) steps: [usize; 2],
    pub(crate) stride: usize,
}

impl StackedChromaPlane {
    /// Offset of chroma row `row` from the start of the buffer.
    #[inline]
    pub(crate) const fn row_offset(&self, row: usize) -> usize {
        self.base + (row / 2) * self.stride + (row % 2) * self.steps[self.step_idx & 1]
    }

    /// Returns the planes stored first and second after the luma rows.
    pub(crate) const fn layout(
        stride: usize,
        width: usize,
        height: usize,
    ) -> (StackedChromaPlane, StackedChromaPlane) {
        let steps = [width / 2, stride - width / 2];
        let first = StackedChromaPlane {
            base: stride * height,
            step_idx: 0,
            steps,
            stride,
        };
        let second = StackedChromaPlane {
            base: stride * (height + height / 4) + (width / 2) * ((height % 4) / 2),
            step_idx: if height % 4 == 2 { 1 } else { 0 },
            steps,
            stride,
        };
        (first, second)
    }
}
