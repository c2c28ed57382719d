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
#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv601::{convert_interleaved, ConversionDirection};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    let width = data.0 as u32;
    let height = data.1 as u32;
    if width == 0 || height == 0 {
        return;
    }
    let channels = 3 + (data.2 as usize & 1);
    let blue_idx = if data.2 & 2 != 0 { 2 } else { 0 };
    let is_cbcr = data.2 & 4 != 0;
    let direction = if data.2 & 8 != 0 {
        ConversionDirection::Forward
    } else {
        ConversionDirection::Inverse
    };

    let pixels = width as usize * height as usize;
    let src_u8 = [data.3, data.4, data.5, 255].repeat(pixels);
    let mut dst_u8 = vec![0u8; pixels * 4];
    convert_interleaved(
        &src_u8,
        width * 4,
        &mut dst_u8,
        width * 4,
        width,
        height,
        direction,
        channels,
        blue_idx,
        is_cbcr,
    )
    .unwrap();

    let src_f32 = [data.3, data.4, data.5]
        .map(|v| v as f32 / 255.)
        .repeat(pixels);
    let mut dst_f32 = vec![0f32; pixels * 3];
    convert_interleaved(
        &src_f32,
        width * 3,
        &mut dst_f32,
        width * 3,
        width,
        height,
        direction,
        3,
        blue_idx,
        is_cbcr,
    )
    .unwrap();
});
