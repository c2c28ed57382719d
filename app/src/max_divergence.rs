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
use log::info;
use rand::Rng;
use yuv601::{rgb_to_nv12, yuv_nv12_to_rgb, YuvBiPlanarImageMut};

const IMAGE_WIDTH: usize = 32;
const IMAGE_HEIGHT: usize = 32;
const CHANNELS: usize = 3;

/// Paints a handful of 2x2 blocks with one colour, round trips through NV12
/// and returns the largest per channel difference on those blocks.
fn round_trip(or: u8, og: u8, ob: u8) -> (u32, u32, u32) {
    let random_point_x = rand::rng().random_range(0..IMAGE_WIDTH / 2) * 2;
    let random_point_y = rand::rng().random_range(0..IMAGE_HEIGHT / 2) * 2;

    let block_points = [
        [0, 0],
        [IMAGE_WIDTH - 2, IMAGE_HEIGHT - 2],
        [IMAGE_WIDTH - 2, 0],
        [0, IMAGE_HEIGHT - 2],
        [IMAGE_WIDTH / 2, IMAGE_HEIGHT / 2],
        [random_point_x, random_point_y],
    ];

    let mut source_rgb = vec![0u8; IMAGE_WIDTH * IMAGE_HEIGHT * CHANNELS];

    let offsets = |point: &[usize; 2]| {
        [[0, 0], [1, 0], [0, 1], [1, 1]]
            .map(|[dx, dy]| (point[0] + dx) * CHANNELS + (point[1] + dy) * IMAGE_WIDTH * CHANNELS)
    };

    for point in &block_points {
        for offset in offsets(point) {
            source_rgb[offset] = or;
            source_rgb[offset + 1] = og;
            source_rgb[offset + 2] = ob;
        }
    }

    let mut nv_image = YuvBiPlanarImageMut::<u8>::alloc(IMAGE_WIDTH as u32, IMAGE_HEIGHT as u32);
    let rgb_stride = (IMAGE_WIDTH * CHANNELS) as u32;
    if rgb_to_nv12(&mut nv_image, &source_rgb, rgb_stride).is_err() {
        return (u32::MAX, u32::MAX, u32::MAX);
    }

    let mut decoded = vec![0u8; source_rgb.len()];
    if yuv_nv12_to_rgb(&nv_image.to_fixed(), &mut decoded, rgb_stride).is_err() {
        return (u32::MAX, u32::MAX, u32::MAX);
    }

    let mut max_diff = (0u32, 0u32, 0u32);
    for point in &block_points {
        for offset in offsets(point) {
            let diff_r = (decoded[offset] as i32 - or as i32).unsigned_abs();
            let diff_g = (decoded[offset + 1] as i32 - og as i32).unsigned_abs();
            let diff_b = (decoded[offset + 2] as i32 - ob as i32).unsigned_abs();
            max_diff.0 = max_diff.0.max(diff_r);
            max_diff.1 = max_diff.1.max(diff_g);
            max_diff.2 = max_diff.2.max(diff_b);
        }
    }
    max_diff
}

/// Walks the colour cube in steps and reports the worst NV12 round trip error.
///
/// Colours outside the video range clip on encode, so the walk stays inside it.
pub(crate) fn find_max_divergence(step: usize) {
    let mut worst = (0u32, 0u32, 0u32);
    let mut worst_color = (0u8, 0u8, 0u8);

    for r in (48..208).step_by(step) {
        for g in (48..208).step_by(step) {
            for b in (48..208).step_by(step) {
                let diff = round_trip(r as u8, g as u8, b as u8);
                if diff.0.max(diff.1).max(diff.2) > worst.0.max(worst.1).max(worst.2) {
                    worst = diff;
                    worst_color = (r as u8, g as u8, b as u8);
                }
            }
        }
    }

    info!(
        "NV12 max divergence {:?} at colour {:?}",
        worst, worst_color
    );
}
