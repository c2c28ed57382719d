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
mod max_divergence;
mod support;

use image::{DynamicImage, EncodableLayout, GenericImageView, ImageReader, RgbImage};
use log::info;
use std::time::Instant;
use yuv601::{
    convert_packed422_to_rgb, i420_to_rgb, rgb_to_i420, rgb_to_nv12, rgb_to_ycrcb,
    ycrcb_to_rgb, yuv_nv12_to_rgb, YuvBiPlanarImageMut, YuvPackedImage, YuvStackedImageMut,
};

fn load_or_synthesize() -> DynamicImage {
    match std::env::args().nth(1) {
        Some(path) => ImageReader::open(path).unwrap().decode().unwrap(),
        None => {
            let img = RgbImage::from_fn(1280, 720, |x, y| {
                image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) / 8 % 256) as u8])
            });
            DynamicImage::ImageRgb8(img)
        }
    }
}

fn max_difference(a: &[u8], b: &[u8]) -> u8 {
    a.iter().zip(b).map(|(&x, &y)| x.abs_diff(y)).max().unwrap_or(0)
}

fn main() {
    env_logger::init();

    let img = load_or_synthesize();
    // 4:2:0 and 4:2:2 need even dimensions
    let (width, height) = img.dimensions();
    let (width, height) = (width & !1, height & !1);
    let img = DynamicImage::ImageRgb8(img.crop_imm(0, 0, width, height).to_rgb8());

    let src_bytes = img.as_bytes();
    let rgb_stride = width * 3;
    let mut rgb = vec![0u8; src_bytes.len()];

    let mut stacked_image = YuvStackedImageMut::<u8>::alloc(width, height);
    let start_time = Instant::now();
    rgb_to_i420(&mut stacked_image, src_bytes, rgb_stride).unwrap();
    info!("RGB -> I420 time: {:?}", start_time.elapsed());

    let fixed_stacked = stacked_image.to_fixed();
    let start_time = Instant::now();
    i420_to_rgb(&fixed_stacked, &mut rgb, rgb_stride).unwrap();
    info!("I420 -> RGB time: {:?}", start_time.elapsed());
    info!("I420 max divergence: {}", max_difference(src_bytes, &rgb));

    support::save_i420_image("converted.i420.yuv", &fixed_stacked).unwrap();
    let reloaded = support::read_i420("converted.i420.yuv", width, height).unwrap();
    assert_eq!(reloaded.to_fixed().data, fixed_stacked.data);

    let mut bi_planar_image = YuvBiPlanarImageMut::<u8>::alloc(width, height);
    let start_time = Instant::now();
    rgb_to_nv12(&mut bi_planar_image, src_bytes, rgb_stride).unwrap();
    info!("RGB -> NV12 time: {:?}", start_time.elapsed());

    let start_time = Instant::now();
    yuv_nv12_to_rgb(&bi_planar_image.to_fixed(), &mut rgb, rgb_stride).unwrap();
    info!("NV12 -> RGB time: {:?}", start_time.elapsed());
    info!("NV12 max divergence: {}", max_difference(src_bytes, &rgb));

    let mut ycrcb = vec![0u8; src_bytes.len()];
    let start_time = Instant::now();
    rgb_to_ycrcb(src_bytes, rgb_stride, &mut ycrcb, rgb_stride, width, height).unwrap();
    ycrcb_to_rgb(&ycrcb, rgb_stride, &mut rgb, rgb_stride, width, height).unwrap();
    info!("RGB -> YCrCb -> RGB time: {:?}", start_time.elapsed());
    info!("YCrCb max divergence: {}", max_difference(src_bytes, &rgb));

    // Luma and chroma of the NV12 frame repacked as YUYV, one chroma row per two luma rows
    let fixed_bi_planar = bi_planar_image.to_fixed();
    let mut yuyv = vec![0u8; width as usize * 2 * height as usize];
    for (y, row) in yuyv.chunks_exact_mut(width as usize * 2).enumerate() {
        let y_row = &fixed_bi_planar.y_plane[y * width as usize..][..width as usize];
        let uv_row = &fixed_bi_planar.uv_plane[y / 2 * width as usize..][..width as usize];
        for ((dst, luma), uv) in row
            .chunks_exact_mut(4)
            .zip(y_row.chunks_exact(2))
            .zip(uv_row.chunks_exact(2))
        {
            dst.copy_from_slice(&[luma[0], uv[0], luma[1], uv[1]]);
        }
    }
    let packed_image = YuvPackedImage {
        yuy: &yuyv,
        yuy_stride: width * 2,
        width,
        height,
    };
    let start_time = Instant::now();
    convert_packed422_to_rgb(&packed_image, &mut rgb, rgb_stride, 3, 2, 0, 0).unwrap();
    info!("YUYV -> RGB time: {:?}", start_time.elapsed());
    info!("YUYV max divergence: {}", max_difference(src_bytes, &rgb));

    max_divergence::find_max_divergence(16);

    image::save_buffer(
        "converted.png",
        rgb.as_bytes(),
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )
    .unwrap();
}
