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
    i420_to_rgb, yuv420_to_bgra, yuv_nv12_to_rgb, yuv_nv21_to_rgba, yv12_to_bgr,
    YuvBiPlanarImage, YuvPlanarImage, YuvStackedImage,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    let width = data.0 as u32 * 2;
    let height = data.1 as u32 * 2;
    fuzz_nv(width, height, data.2, data.3, data.4);
    fuzz_planar(width, height, data.2, data.3, data.4);
    fuzz_stacked(width, height, data.2, data.3);
});

fn fuzz_nv(width: u32, height: u32, y_value: u8, u_value: u8, v_value: u8) {
    if width == 0 || height == 0 {
        return;
    }
    let y_plane = vec![y_value; width as usize * height as usize];
    let uv_plane = [u_value, v_value].repeat(width as usize / 2 * height as usize / 2);

    let bi_planar_image = YuvBiPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        uv_plane: &uv_plane,
        uv_stride: width,
        width,
        height,
    };

    let mut target_rgb = vec![0u8; width as usize * height as usize * 3];
    yuv_nv12_to_rgb(&bi_planar_image, &mut target_rgb, width * 3).unwrap();

    let mut target_rgba = vec![0u8; width as usize * height as usize * 4];
    yuv_nv21_to_rgba(&bi_planar_image, &mut target_rgba, width * 4).unwrap();
}

fn fuzz_planar(width: u32, height: u32, y_value: u8, u_value: u8, v_value: u8) {
    if width == 0 || height == 0 {
        return;
    }
    let y_plane = vec![y_value; width as usize * height as usize];
    let u_plane = vec![u_value; width as usize / 2 * height as usize / 2];
    let v_plane = vec![v_value; width as usize / 2 * height as usize / 2];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &u_plane,
        u_stride: width / 2,
        v_plane: &v_plane,
        v_stride: width / 2,
        width,
        height,
    };

    let mut target_bgra = vec![0u8; width as usize * height as usize * 4];
    yuv420_to_bgra(&planar_image, &mut target_bgra, width * 4).unwrap();
}

fn fuzz_stacked(width: u32, height: u32, y_value: u8, uv_value: u8) {
    if width == 0 || height == 0 {
        return;
    }
    let mut data = vec![uv_value; width as usize * (height as usize + height as usize / 2)];
    data[..width as usize * height as usize].fill(y_value);

    let stacked_image = YuvStackedImage {
        data: &data,
        stride: width,
        width,
        height,
    };

    let mut target_rgb = vec![0u8; width as usize * height as usize * 3];
    i420_to_rgb(&stacked_image, &mut target_rgb, width * 3).unwrap();
    yv12_to_bgr(&stacked_image, &mut target_rgb, width * 3).unwrap();
}
