//! Draw targets over the RGBA pixel buffer

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// An RGBA8 frame viewed as an `embedded-graphics` target
pub struct Framebuffer<'a> {
    pixels: &'a mut [[u8; 4]],
    width: u32,
    height: u32,
}

impl<'a> Framebuffer<'a> {
    /// Wrap a frame of `width * height * 4` bytes
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(frame);
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Darken every pixel; `alpha` is the strength of a black overlay
    pub fn dim(&mut self, alpha: u8) {
        let keep = 255 - alpha as u16;
        for px in self.pixels.iter_mut() {
            for channel in &mut px[..3] {
                *channel = (*channel as u16 * keep / 255) as u8;
            }
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, _] = self.pixels[(y * self.width + x) as usize];
        Some(Rgb888::new(r, g, b))
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x < self.width && y < self.height {
                self.pixels[(y * self.width + x) as usize] =
                    [color.r(), color.g(), color.b(), 0xff];
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill([color.r(), color.g(), color.b(), 0xff]);
        Ok(())
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Blows every pixel drawn through it up into a `factor` x `factor` block.
/// Used for large text with the bitmap fonts.
pub struct Scaled<'a, D> {
    inner: &'a mut D,
    factor: u32,
}

impl<'a, D: DrawTarget> Scaled<'a, D> {
    pub fn new(inner: &'a mut D, factor: u32) -> Self {
        Self {
            inner,
            factor: factor.max(1),
        }
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let f = self.factor as i32;
        let block = Size::new(self.factor, self.factor);
        for Pixel(point, color) in pixels {
            let area = Rectangle::new(Point::new(point.x * f, point.y * f), block);
            self.inner.fill_solid(&area, color)?;
        }
        Ok(())
    }
}

impl<D: DrawTarget> OriginDimensions for Scaled<'_, D> {
    fn size(&self) -> Size {
        self.inner.bounding_box().size / self.factor
    }
}
