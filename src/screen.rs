use std::fmt;

use log::{info, warn};
use sdl2::{
  image::LoadTexture,
  pixels::Color,
  rect::{Point, Rect},
  render::{Canvas, Texture, TextureCreator},
  ttf::{Font, Sdl2TtfContext},
  video::{Window, WindowContext},
};

use crate::render::Painter;

/// SDL canvas with the optional font and sprite image the editor draws with.
pub struct Screen<'a, 't, 'f> {
  canvas: &'a mut Canvas<Window>,
  texture_creator: &'t TextureCreator<WindowContext>,
  font: Option<&'a Font<'f, 'static>>,
  sprite: Option<&'a Texture<'t>>,
}

struct Loaded(bool);

impl fmt::Debug for Loaded {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    loaded(&if self.0 { Some(()) } else { None }, f)
  }
}

impl<'a, 't, 'f> fmt::Debug for Screen<'a, 't, 'f> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Screen")
      .field("font", &Loaded(self.font.is_some()))
      .field("sprite", &Loaded(self.sprite.is_some()))
      .finish()
  }
}

fn loaded<T>(value: &Option<T>, f: &mut fmt::Formatter) -> fmt::Result {
  f.write_str(if value.is_some() { "loaded" } else { "missing" })
}

impl<'a, 't, 'f> Screen<'a, 't, 'f> {
  pub fn new(
    canvas: &'a mut Canvas<Window>,
    texture_creator: &'t TextureCreator<WindowContext>,
    font: Option<&'a Font<'f, 'static>>,
    sprite: Option<&'a Texture<'t>>,
  ) -> Screen<'a, 't, 'f> {
    Screen {
      canvas,
      texture_creator,
      font,
      sprite,
    }
  }
}

pub fn load_font<'f>(ttf: &'f Sdl2TtfContext, paths: &[String], size: u16) -> Option<Font<'f, 'static>> {
  for path in paths {
    match ttf.load_font(path, size) {
      Ok(font) => {
        info!("loaded font {path}");
        return Some(font);
      }
      Err(error) => info!("font {path} unavailable: {error}"),
    }
  }
  warn!("no usable font, text will not be drawn");
  None
}

pub fn load_sprite<'t>(
  texture_creator: &'t TextureCreator<WindowContext>,
  paths: &[String],
) -> Option<Texture<'t>> {
  for path in paths {
    if let Ok(texture) = texture_creator.load_texture(path) {
      info!("loaded sprite image {path}");
      return Some(texture);
    }
  }
  warn!("no sprite image found, using circle fallback");
  None
}

impl<'a, 't, 'f> Painter for Screen<'a, 't, 'f> {
  fn clear(&mut self, color: Color) -> Result<(), String> {
    self.canvas.set_draw_color(color);
    self.canvas.clear();
    Ok(())
  }

  fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
    self.canvas.set_draw_color(color);
    self.canvas.fill_rect(rect)
  }

  fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) -> Result<(), String> {
    let radius = radius.min(rect.width() / 2).min(rect.height() / 2);
    if radius == 0 {
      return self.fill_rect(rect, color);
    }
    let r = radius as i32;
    self.canvas.set_draw_color(color);
    self.canvas.fill_rects(&[
      Rect::new(rect.x() + r, rect.y(), rect.width() - 2 * radius, rect.height()),
      Rect::new(rect.x(), rect.y() + r, rect.width(), rect.height() - 2 * radius),
    ])?;
    for corner in [
      Point::new(rect.left() + r, rect.top() + r),
      Point::new(rect.right() - r - 1, rect.top() + r),
      Point::new(rect.left() + r, rect.bottom() - r - 1),
      Point::new(rect.right() - r - 1, rect.bottom() - r - 1),
    ] {
      self.fill_circle(corner, r, color)?;
    }
    Ok(())
  }

  fn outline_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
    self.canvas.set_draw_color(color);
    self.canvas.draw_rect(rect)
  }

  fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), String> {
    self.canvas.set_draw_color(color);
    for dy in -radius..=radius {
      let dx = ((radius * radius - dy * dy) as f64).sqrt() as i32;
      self.canvas.draw_line(
        Point::new(center.x() - dx, center.y() + dy),
        Point::new(center.x() + dx, center.y() + dy),
      )?;
    }
    Ok(())
  }

  fn draw_text(&mut self, text: &str, at: Point, color: Color) -> Result<(), String> {
    let Some(font) = self.font else {
      return Ok(());
    };
    if text.is_empty() {
      return Ok(());
    }
    let surface = font
      .render(text)
      .blended(color)
      .map_err(|e| e.to_string())?;
    let texture = self
      .texture_creator
      .create_texture_from_surface(&surface)
      .map_err(|e| e.to_string())?;
    self.canvas.copy(
      &texture,
      None,
      Rect::new(at.x(), at.y(), surface.width(), surface.height()),
    )
  }

  fn measure_text(&self, text: &str) -> Option<(u32, u32)> {
    self.font?.size_of(text).ok()
  }

  fn draw_image(&mut self, rect: Rect) -> Result<bool, String> {
    let Some(sprite) = self.sprite else {
      return Ok(false);
    };
    self.canvas.copy(sprite, None, rect)?;
    Ok(true)
  }
}
