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
use std::fs::File;
use std::io::{Error, Read, Write};
use std::path::Path;
use yuv601::{BufferStoreMut, YuvStackedImage, YuvStackedImageMut};

pub(crate) fn save_i420_image<P: AsRef<Path>>(
    path: P,
    image: &YuvStackedImage<u8>,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(image.data)?;
    Ok(())
}

/// Reads a raw I420 frame where all planes are stored back to back without padding.
pub(crate) fn read_i420<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
) -> Result<YuvStackedImageMut<'static, u8>, Error> {
    let mut file = File::open(path)?;
    let frame_size = width as usize * (height as usize + height as usize / 2);

    let mut data = vec![0u8; frame_size];
    file.read_exact(&mut data)?;

    Ok(YuvStackedImageMut {
        data: BufferStoreMut::Owned(data),
        stride: width,
        width,
        height,
    })
}
