pub mod canvas;
pub mod composite;
pub mod cpu;
pub mod diagram;
pub mod legend;
pub mod shapes;
pub mod text;

use crate::foundation::math::Fnv1a64;

/// RGBA8 frame as produced by [`cpu::CpuSurface::finish`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize * self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Content hash of size and pixels; equal frames hash equal.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }

    /// Pixel bytes with straight alpha, as encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        if self.premultiplied {
            composite::unpremultiply(&self.data)
        } else {
            self.data.clone()
        }
    }
}
