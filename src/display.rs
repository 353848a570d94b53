use image::{
    Rgb,
    RgbImage,
};
use macroquad::{
    color::{
        Color,
        BLACK,
        WHITE,
    },
    math::vec2,
    texture::{
        draw_texture_ex,
        DrawTextureParams,
        FilterMode,
        Image,
        Texture2D,
    },
    window::{
        clear_background,
        screen_height,
        screen_width,
    },
};

use crate::constants::{
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

const PIXEL_ON: Color = Color {
    r: 0.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// 64x32 one-bit framebuffer, row-major. The dirty flag records
/// whether anything changed since the last hand-off to the renderer.
pub struct Framebuffer {
    pixels: [bool; SCREEN_WIDTH * SCREEN_HEIGHT],
    dirty: bool,
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pixels: [false; SCREEN_WIDTH * SCREEN_HEIGHT],
            dirty: false,
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
        self.dirty = true;
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y * SCREEN_WIDTH + x]
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// XOR the sprite rows into the framebuffer. The origin is wrapped
    /// once; pixels past the right/bottom edge are clipped when `clip`
    /// is set and wrapped to the opposite edge otherwise. Returns the
    /// collision flag: whether any lit pixel was turned off.
    pub fn draw_sprite(&mut self, origin_x: u8, origin_y: u8, rows: &[u8], clip: bool) -> bool {
        let start_x = origin_x as usize % SCREEN_WIDTH;
        let start_y = origin_y as usize % SCREEN_HEIGHT;

        let mut collision = false;
        for (row, sprite) in rows.iter().enumerate() {
            let mut y = start_y + row;
            if y >= SCREEN_HEIGHT {
                if clip {
                    continue;
                }
                y %= SCREEN_HEIGHT;
            }

            for bit in 0..8 {
                if (sprite >> (7 - bit)) & 1 == 0 {
                    continue;
                }

                let mut x = start_x + bit;
                if x >= SCREEN_WIDTH {
                    if clip {
                        continue;
                    }
                    x %= SCREEN_WIDTH;
                }

                let pixel = &mut self.pixels[y * SCREEN_WIDTH + x];
                if *pixel {
                    collision = true;
                }
                *pixel = !*pixel;
                self.dirty = true;
            }
        }

        collision
    }

    /// Export as an image, one image pixel per framebuffer pixel.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, |x, y| {
            if self.get(x as usize, y as usize) {
                Rgb([0, 128, 0])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Blits the framebuffer to the window. The texture is only rebuilt
/// when the scheduler hands over a dirty framebuffer; every frame in
/// between redraws the cached texture.
pub struct Renderer {
    image: Image,
    texture: Texture2D,
}

impl Renderer {
    pub fn new() -> Self {
        let image = Image::gen_image_color(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16, BLACK);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);

        Self { image, texture }
    }

    pub fn present(&mut self, framebuffer: &Framebuffer) {
        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                let color = if framebuffer.get(x, y) { PIXEL_ON } else { BLACK };
                self.image.set_pixel(x as u32, y as u32, color);
            }
        }
        self.texture.update(&self.image);
    }

    pub fn draw(&self) {
        clear_background(BLACK);
        draw_texture_ex(
            &self.texture,
            0.,
            0.,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
