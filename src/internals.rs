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
/// Images with at least this many pixels are split into row bands and
/// converted on the rayon pool when the `rayon` feature is enabled.
pub const MIN_SIZE_FOR_PARALLEL_CONVERSION: usize = 320 * 240;

/// How far a SIMD kernel advanced in a row, `cx` in luma samples, `ux` in chroma elements.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(crate) struct ProcessedOffset {
    pub cx: usize,
    pub ux: usize,
}

#[inline]
#[cfg_attr(not(feature = "rayon"), allow(dead_code))]
pub(crate) fn use_parallel(width: u32, height: u32, threshold: usize) -> bool {
    (width as usize).saturating_mul(height as usize) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(use_parallel(320, 240, MIN_SIZE_FOR_PARALLEL_CONVERSION));
        assert!(!use_parallel(320, 239, MIN_SIZE_FOR_PARALLEL_CONVERSION));
        assert!(use_parallel(1, 1, 0));
    }
}
