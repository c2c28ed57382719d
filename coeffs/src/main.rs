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
use rug::float::Round;
use rug::Float;

const BITS: u32 = 150;

const KR: f64 = 0.299;
const KB: f64 = 0.114;

fn fixed(value: &Float, precision: u32) -> i32 {
    let scaled = value.clone() * Float::with_val(BITS, 1u64 << precision);
    scaled.to_i32_saturating_round(Round::Nearest).unwrap_or(0)
}

fn float(value: f64) -> Float {
    Float::with_val(BITS, value)
}

/// Analog BT.601 weights from `Kr` and `Kb`, full range on both sides.
fn print_analog_weights() {
    let kg = float(1.) - float(KR) - float(KB);
    let cr = float(0.5) / (float(1.) - float(KR));
    let cb = float(0.5) / (float(1.) - float(KB));
    let cr_r = float(2.) * (float(1.) - float(KR));
    let cb_b = float(2.) * (float(1.) - float(KB));
    let cr_g = -(cr_r.clone() * float(KR) / kg.clone());
    let cb_g = -(cb_b.clone() * float(KB) / kg.clone());
    println!("kg = {}", kg.to_f64());
    println!("cr_coef = {}, cb_coef = {}", cr.to_f64(), cb.to_f64());
    println!(
        "cr_r = {}, cr_g = {}, cb_g = {}, cb_b = {}",
        cr_r.to_f64(),
        cr_g.to_f64(),
        cb_g.to_f64(),
        cb_b.to_f64()
    );
}

fn print_table(name: &str, values: &[(&str, f64)], precision: u32) {
    println!("{name} Q{precision}:");
    for (field, value) in values {
        println!("    {field}: {},", fixed(&float(*value), precision));
    }
}

fn main() {
    print_analog_weights();

    print_table(
        "YCrCb forward",
        &[
            ("r", 0.299),
            ("g", 0.587),
            ("b", 0.114),
            ("cr_coef", 0.713),
            ("cb_coef", 0.564),
        ],
        14,
    );
    print_table(
        "YUV forward",
        &[("cr_coef", 0.877), ("cb_coef", 0.492)],
        14,
    );
    print_table(
        "YCrCb inverse",
        &[
            ("cr_r", 1.403),
            ("cr_g", -0.714),
            ("cb_g", -0.344),
            ("cb_b", 1.773),
        ],
        14,
    );
    print_table(
        "YUV inverse",
        &[
            ("cr_r", 1.140),
            ("cr_g", -0.581),
            ("cb_g", -0.395),
            ("cb_b", 2.032),
        ],
        14,
    );
    print_table(
        "Video range inverse",
        &[
            ("y_coef", 1.164),
            ("u_b", 2.018),
            ("u_g", -0.391),
            ("v_g", -0.813),
            ("v_r", 1.596),
        ],
        20,
    );
    print_table(
        "Video range forward",
        &[
            ("r_y", 0.257),
            ("g_y", 0.504),
            ("b_y", 0.098),
            ("r_u", -0.148),
            ("g_u", -0.291),
            ("b_u", 0.439),
            ("g_v", -0.368),
            ("b_v", -0.071),
        ],
        20,
    );
}
