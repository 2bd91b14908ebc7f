use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::frames::Frame,
    foundation::error::{HeroError, HeroResult},
    foundation::math::premultiply_rgba8_in_place,
};

/// Decode encoded image bytes (JPEG, PNG, ...) into a paint-ready [`Frame`].
pub fn decode_frame(bytes: &[u8]) -> HeroResult<Frame> {
    let dyn_img = image::load_from_memory(bytes).context("decode frame image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    let pixmap = premul_bytes_to_pixmap(&rgba8_premul, width, height)?;
    Ok(Frame {
        width,
        height,
        paint: vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        },
    })
}

pub(crate) fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> HeroResult<vello_cpu::Pixmap> {
    if width == 0 || height == 0 {
        return Err(HeroError::asset("frame image has zero width or height"));
    }
    let w: u16 = width
        .try_into()
        .map_err(|_| HeroError::asset(format!("frame width {width} exceeds u16")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| HeroError::asset(format!("frame height {height} exceeds u16")))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(HeroError::asset("frame byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
