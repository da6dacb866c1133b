//! SDL2 rendering sink
//!
//! Executes a [`DrawPlan`] on an SDL2 canvas. Owns the loaded font and
//! textures; the core never sees any of them.

use crate::config::AssetConfig;
use crate::draw_plan::{DrawCommand, DrawPlan, Rgb, TextPosition};
use crate::error::FrontendError;
use crate::text::{place, TextMeasure, TextSize};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

// Title image box, centered horizontally
const TITLE_IMAGE_WIDTH: u32 = 400;
const TITLE_IMAGE_HEIGHT: u32 = 100;
const TITLE_IMAGE_Y: i32 = 100;

pub struct SdlRenderer<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    font: Font<'a, 'static>,
    star: Texture<'a>,
    title: Option<Texture<'a>>,
    window_width: u32,
}

impl<'a> SdlRenderer<'a> {
    /// Loads the font and images named in the asset config
    ///
    /// The font and the star image are required. The title image is
    /// optional; without it the title text is drawn instead.
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        ttf_context: &'a Sdl2TtfContext,
        assets: &AssetConfig,
        window_width: u32,
    ) -> Result<Self, FrontendError> {
        let font = ttf_context
            .load_font(&assets.font, assets.font_size)
            .map_err(|reason| FrontendError::ResourceUnavailable {
                what: "font",
                path: assets.font.clone(),
                reason,
            })?;
        tracing::info!(path = %assets.font.display(), size = assets.font_size, "loaded font");

        let star = texture_creator
            .load_texture(&assets.star_image)
            .map_err(|reason| FrontendError::ResourceUnavailable {
                what: "star image",
                path: assets.star_image.clone(),
                reason,
            })?;
        tracing::info!(path = %assets.star_image.display(), "loaded star image");

        let title = match &assets.title_image {
            Some(path) => match texture_creator.load_texture(path) {
                Ok(texture) => {
                    tracing::info!(path = %path.display(), "loaded title image");
                    Some(texture)
                }
                Err(reason) => {
                    tracing::warn!(path = %path.display(), %reason, "title image unavailable, drawing title text");
                    None
                }
            },
            None => None,
        };

        Ok(SdlRenderer {
            texture_creator,
            font,
            star,
            title,
            window_width,
        })
    }

    /// Draws every directive of the plan in order
    ///
    /// Presenting the frame is left to the caller.
    pub fn execute(&self, canvas: &mut Canvas<Window>, plan: DrawPlan) -> Result<(), String> {
        for command in plan {
            match command {
                DrawCommand::Clear(color) => {
                    canvas.set_draw_color(to_sdl_color(color));
                    canvas.clear();
                }
                DrawCommand::Particle { x, y, size } => {
                    canvas.copy(&self.star, None, Rect::new(x as i32, y as i32, size, size))?;
                }
                DrawCommand::Text {
                    text,
                    color,
                    position,
                } => {
                    self.draw_text(canvas, &text, color, position)?;
                }
                DrawCommand::Banner { fallback, color, y } => match &self.title {
                    Some(texture) => {
                        let x = (self.window_width as i32 - TITLE_IMAGE_WIDTH as i32) / 2;
                        canvas.copy(
                            texture,
                            None,
                            Rect::new(x, TITLE_IMAGE_Y, TITLE_IMAGE_WIDTH, TITLE_IMAGE_HEIGHT),
                        )?;
                    }
                    None => {
                        self.draw_text(canvas, &fallback, color, TextPosition::Centered { y })?;
                    }
                },
            }
        }
        Ok(())
    }

    fn draw_text(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        color: Rgb,
        position: TextPosition,
    ) -> Result<(), String> {
        // TTF refuses to render zero-width strings
        if text.is_empty() {
            return Ok(());
        }

        let placement = place(self, text, position, self.window_width)?;
        let surface = self
            .font
            .render(text)
            .solid(to_sdl_color(color))
            .map_err(|e| e.to_string())?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;

        canvas.copy(
            &texture,
            None,
            Rect::new(placement.x, placement.y, placement.w, placement.h),
        )
    }
}

impl TextMeasure for SdlRenderer<'_> {
    fn measure(&self, text: &str) -> Result<TextSize, String> {
        let (width, height) = self.font.size_of(text).map_err(|e| e.to_string())?;
        Ok(TextSize { width, height })
    }
}

fn to_sdl_color(color: Rgb) -> Color {
    Color::RGB(color.r, color.g, color.b)
}
