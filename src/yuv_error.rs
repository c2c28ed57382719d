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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YuvError {
    /// Requested layout combination has no converter, carries the dispatch code.
    UnsupportedConversion(u32),
    /// Chroma subsampled layouts need even dimensions in the subsampled direction.
    OddDimensions(ImageDimensions),
    DestinationSizeMismatch(MismatchedSize),
    MinimumDestinationSizeMismatch(MismatchedSize),
    StrideTooSmall(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
    LumaPlaneSizeMismatch(MismatchedSize),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    PackedPlaneSizeMismatch(MismatchedSize),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::UnsupportedConversion(code) => f.write_fmt(format_args!(
                "Unknown/unsupported color conversion code {}",
                code
            )),
            YuvError::OddDimensions(dims) => f.write_fmt(format_args!(
                "Subsampled layout requires even dimensions, but image is {}x{}",
                dims.width, dims.height
            )),
            YuvError::LumaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::PackedPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Packed plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::StrideTooSmall(size) => f.write_fmt(format_args!(
                "Stride must be at least {} elements, but it is {}",
                size.expected, size.received
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::MinimumDestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)?;
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), YuvError> {
    v0.checked_mul(v1)
        .and_then(|p| p.checked_mul(v2))
        .ok_or(YuvError::PointerOverflow)?;
    Ok(())
}

#[inline]
pub(crate) fn check_zero_size(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    Ok(())
}

/// 4:2:0 layouts share one chroma sample between a 2x2 luma block.
#[inline]
pub(crate) fn check_even_420(width: u32, height: u32) -> Result<(), YuvError> {
    if width & 1 != 0 || height & 1 != 0 {
        return Err(YuvError::OddDimensions(ImageDimensions { width, height }));
    }
    Ok(())
}

/// 4:2:2 layouts share one chroma pair between two horizontal luma samples.
#[inline]
pub(crate) fn check_even_422(width: u32, height: u32) -> Result<(), YuvError> {
    if width & 1 != 0 {
        return Err(YuvError::OddDimensions(ImageDimensions { width, height }));
    }
    Ok(())
}

/// Checks interleaved image with `channels` components per pixel.
///
/// Stride is counted in elements, the slice must hold exactly `stride * height` elements.
#[inline]
pub(crate) fn check_interleaved<V>(
    arr: &[V],
    stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), YuvError> {
    check_zero_size(width, height)?;
    check_overflow_v3(width as usize, height as usize, channels)?;
    check_overflow_v2(stride as usize, height as usize)?;
    let min_stride = width as usize * channels;
    if (stride as usize) < min_stride {
        return Err(YuvError::StrideTooSmall(MismatchedSize {
            expected: min_stride,
            received: stride as usize,
        }));
    }
    if arr.len() != stride as usize * height as usize {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_rgba_destination<V>(
    arr: &[V],
    rgba_stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), YuvError> {
    check_overflow_v3(width as usize, height as usize, channels)?;
    check_overflow_v2(rgba_stride as usize, height as usize)?;
    if arr.len() != rgba_stride as usize * height as usize {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: rgba_stride as usize * height as usize,
            received: arr.len(),
        }));
    }
    if (rgba_stride as usize) < width as usize * channels {
        return Err(YuvError::MinimumDestinationSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize * channels,
            received: rgba_stride as usize * height as usize,
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_y8_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_zero_size(width, height)?;
    check_overflow_v2(stride as usize, height as usize)?;
    check_overflow_v2(width as usize, height as usize)?;
    if (stride as usize) < width as usize {
        return Err(YuvError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize,
            received: stride as usize * height as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(YuvError::LumaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Checks one 4:2:0 chroma plane, `components` is 1 for planar and 2 for NV layouts.
#[inline]
pub(crate) fn check_chroma420_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
    components: usize,
) -> Result<(), YuvError> {
    let chroma_min_width = (image_width as usize / 2) * components;
    let chroma_height = image_height as usize / 2;
    check_overflow_v2(stride as usize, chroma_height)?;
    if (stride as usize) < chroma_min_width {
        return Err(YuvError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: chroma_min_width * chroma_height,
            received: stride as usize * chroma_height,
        }));
    }
    if stride as usize * chroma_height != data.len() {
        return Err(YuvError::ChromaPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * chroma_height,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_packed422_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_zero_size(width, height)?;
    check_overflow_v3(width as usize, height as usize, 2)?;
    check_overflow_v2(stride as usize, height as usize)?;
    if (stride as usize) < width as usize * 2 {
        return Err(YuvError::StrideTooSmall(MismatchedSize {
            expected: width as usize * 2,
            received: stride as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(YuvError::PackedPlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}
