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
use yuv601::{
    packed422_to_gray, uyvy422_to_bgra, yuyv422_to_rgb, yvyu422_to_rgba, YuvPackedImage,
    Yuy2Description,
};

fuzz_target!(|data: (u8, u8, u8, u8)| {
    let width = data.0 as u32 * 2;
    let height = data.1 as u32;
    if width == 0 || height == 0 {
        return;
    }

    let yuy = [data.2, data.3].repeat(width as usize * height as usize);
    let packed_image = YuvPackedImage {
        yuy: &yuy,
        yuy_stride: width * 2,
        width,
        height,
    };

    let mut target_rgb = vec![0u8; width as usize * height as usize * 3];
    yuyv422_to_rgb(&packed_image, &mut target_rgb, width * 3).unwrap();

    let mut target_rgba = vec![0u8; width as usize * height as usize * 4];
    uyvy422_to_bgra(&packed_image, &mut target_rgba, width * 4).unwrap();
    yvyu422_to_rgba(&packed_image, &mut target_rgba, width * 4).unwrap();

    let mut gray = vec![0u8; width as usize * height as usize];
    packed422_to_gray(&packed_image, Yuy2Description::UYVY, &mut gray, width).unwrap();
});
