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
    bgra_to_nv21, rgb_to_i420, rgb_to_nv12, rgb_to_yuv420, rgba_to_yv12, YuvBiPlanarImageMut,
    YuvPlanarImageMut, YuvStackedImageMut,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    let width = data.0 as u32 * 2;
    let height = data.1 as u32 * 2;
    fuzz_nv(width, height, data.2, data.3, data.4);
    fuzz_planar(width, height, data.2, data.3, data.4);
    fuzz_stacked(width, height, data.2, data.3, data.4);
});

fn fuzz_nv(width: u32, height: u32, r: u8, g: u8, b: u8) {
    if width == 0 || height == 0 {
        return;
    }
    let mut bi_planar_image = YuvBiPlanarImageMut::<u8>::alloc(width, height);

    let src_rgb = [r, g, b].repeat(width as usize * height as usize);
    rgb_to_nv12(&mut bi_planar_image, &src_rgb, width * 3).unwrap();

    let src_bgra = [b, g, r, 255].repeat(width as usize * height as usize);
    bgra_to_nv21(&mut bi_planar_image, &src_bgra, width * 4).unwrap();
}

fn fuzz_planar(width: u32, height: u32, r: u8, g: u8, b: u8) {
    if width == 0 || height == 0 {
        return;
    }
    let mut planar_image = YuvPlanarImageMut::<u8>::alloc(width, height);

    let src_rgb = [r, g, b].repeat(width as usize * height as usize);
    rgb_to_yuv420(&mut planar_image, &src_rgb, width * 3).unwrap();
}

fn fuzz_stacked(width: u32, height: u32, r: u8, g: u8, b: u8) {
    if width == 0 || height == 0 {
        return;
    }
    let mut stacked_image = YuvStackedImageMut::<u8>::alloc(width, height);

    let src_rgb = [r, g, b].repeat(width as usize * height as usize);
    rgb_to_i420(&mut stacked_image, &src_rgb, width * 3).unwrap();

    let src_rgba = [r, g, b, 255].repeat(width as usize * height as usize);
    rgba_to_yv12(&mut stacked_image, &src_rgba, width * 4).unwrap();
}
