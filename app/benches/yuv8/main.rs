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
use criterion::{criterion_group, criterion_main, Criterion};
use yuv601::{
    bgr_to_ycrcb, i420_to_rgb, rgb_to_i420, rgb_to_nv21, rgb_to_yuv420, yuv420_to_rgb,
    yuv_nv21_to_rgba, yuyv422_to_rgb, ycrcb_to_bgr, YuvBiPlanarImageMut, YuvPackedImage,
    YuvPlanarImageMut, YuvStackedImageMut,
};
use yuv_sys::{rs_I420ToRGB24, rs_NV21ToABGR, rs_RGB24ToI420};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    for (y, row) in rgb.chunks_exact_mut(width as usize * 3).enumerate() {
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            px[0] = (x * 255 / width as usize) as u8;
            px[1] = (y * 255 / height as usize) as u8;
            px[2] = ((x + y) % 256) as u8;
        }
    }
    rgb
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let src_bytes = gradient(WIDTH, HEIGHT);
    let stride = WIDTH * 3;

    let mut planar_image = YuvPlanarImageMut::<u8>::alloc(WIDTH, HEIGHT);
    rgb_to_yuv420(&mut planar_image, &src_bytes, stride).unwrap();
    let mut bi_planar_image = YuvBiPlanarImageMut::<u8>::alloc(WIDTH, HEIGHT);
    rgb_to_nv21(&mut bi_planar_image, &src_bytes, stride).unwrap();
    let mut stacked_image = YuvStackedImageMut::<u8>::alloc(WIDTH, HEIGHT);
    rgb_to_i420(&mut stacked_image, &src_bytes, stride).unwrap();

    let fixed_planar = planar_image.to_fixed();
    let fixed_bi_planar = bi_planar_image.to_fixed();
    let fixed_stacked = stacked_image.to_fixed();

    let yuy2 = src_bytes[..WIDTH as usize * 2 * HEIGHT as usize].to_vec();
    let packed_image = YuvPackedImage {
        yuy: &yuy2,
        yuy_stride: WIDTH * 2,
        width: WIDTH,
        height: HEIGHT,
    };

    c.bench_function("yuv601 RGB -> YUV 4:2:0", |b| {
        let mut test_planar = YuvPlanarImageMut::<u8>::alloc(WIDTH, HEIGHT);
        b.iter(|| {
            rgb_to_yuv420(&mut test_planar, &src_bytes, stride).unwrap();
        })
    });

    c.bench_function("libyuv RGB -> YUV 4:2:0", |b| {
        let mut y_plane = vec![0u8; WIDTH as usize * HEIGHT as usize];
        let mut u_plane = vec![0u8; WIDTH as usize / 2 * HEIGHT as usize / 2];
        let mut v_plane = vec![0u8; WIDTH as usize / 2 * HEIGHT as usize / 2];
        b.iter(|| unsafe {
            rs_RGB24ToI420(
                src_bytes.as_ptr(),
                stride as i32,
                y_plane.as_mut_ptr(),
                WIDTH as i32,
                u_plane.as_mut_ptr(),
                WIDTH as i32 / 2,
                v_plane.as_mut_ptr(),
                WIDTH as i32 / 2,
                WIDTH as i32,
                HEIGHT as i32,
            );
        })
    });

    c.bench_function("yuv601 RGB -> I420 single buffer", |b| {
        let mut test_stacked = YuvStackedImageMut::<u8>::alloc(WIDTH, HEIGHT);
        b.iter(|| {
            rgb_to_i420(&mut test_stacked, &src_bytes, stride).unwrap();
        })
    });

    c.bench_function("yuv601 YUV NV21 -> RGBA", |b| {
        let mut rgba = vec![0u8; WIDTH as usize * 4 * HEIGHT as usize];
        b.iter(|| {
            yuv_nv21_to_rgba(&fixed_bi_planar, &mut rgba, WIDTH * 4).unwrap();
        })
    });

    c.bench_function("libyuv YUV NV21 -> RGBA", |b| {
        let mut rgba = vec![0u8; WIDTH as usize * 4 * HEIGHT as usize];
        b.iter(|| unsafe {
            rs_NV21ToABGR(
                fixed_bi_planar.y_plane.as_ptr(),
                fixed_bi_planar.y_stride as i32,
                fixed_bi_planar.uv_plane.as_ptr(),
                fixed_bi_planar.uv_stride as i32,
                rgba.as_mut_ptr(),
                WIDTH as i32 * 4,
                fixed_bi_planar.width as i32,
                fixed_bi_planar.height as i32,
            );
        })
    });

    c.bench_function("yuv601 YUV 4:2:0 -> RGB", |b| {
        let mut rgb = vec![0u8; WIDTH as usize * 3 * HEIGHT as usize];
        b.iter(|| {
            yuv420_to_rgb(&fixed_planar, &mut rgb, WIDTH * 3).unwrap();
        })
    });

    c.bench_function("libyuv YUV 4:2:0 -> RGB", |b| {
        let mut rgb = vec![0u8; WIDTH as usize * 3 * HEIGHT as usize];
        b.iter(|| unsafe {
            rs_I420ToRGB24(
                fixed_planar.y_plane.as_ptr(),
                fixed_planar.y_stride as i32,
                fixed_planar.u_plane.as_ptr(),
                fixed_planar.u_stride as i32,
                fixed_planar.v_plane.as_ptr(),
                fixed_planar.v_stride as i32,
                rgb.as_mut_ptr(),
                WIDTH as i32 * 3,
                fixed_planar.width as i32,
                fixed_planar.height as i32,
            );
        })
    });

    c.bench_function("yuv601 I420 single buffer -> RGB", |b| {
        let mut rgb = vec![0u8; WIDTH as usize * 3 * HEIGHT as usize];
        b.iter(|| {
            i420_to_rgb(&fixed_stacked, &mut rgb, WIDTH * 3).unwrap();
        })
    });

    c.bench_function("yuv601 YUYV -> RGB", |b| {
        let mut rgb = vec![0u8; WIDTH as usize * 3 * HEIGHT as usize];
        b.iter(|| {
            yuyv422_to_rgb(&packed_image, &mut rgb, WIDTH * 3).unwrap();
        })
    });

    c.bench_function("yuv601 BGR -> YCrCb -> BGR", |b| {
        let mut ycrcb = vec![0u8; src_bytes.len()];
        let mut bgr = vec![0u8; src_bytes.len()];
        b.iter(|| {
            bgr_to_ycrcb(&src_bytes, stride, &mut ycrcb, stride, WIDTH, HEIGHT).unwrap();
            ycrcb_to_bgr(&ycrcb, stride, &mut bgr, stride, WIDTH, HEIGHT).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
