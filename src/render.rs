use sdl2::{
  pixels::Color,
  rect::{Point, Rect},
};

use crate::{
  block::Block,
  config::Config,
  edit::Edit,
  editor::Editor,
  engine::Engine,
};

pub const SPRITE_SIZE: u32 = 50;
/// Screen coordinates are clamped to this many pixels either side of the
/// stage before drawing; anything further out is off screen anyway.
const SPRITE_REACH: f32 = 1_000_000.;
const BLOCK_RADIUS: u32 = 6;
const NOTCH_WIDTH: u32 = 60;

const BACKGROUND: Color = Color::RGB(30, 30, 30);
const PALETTE_BACKGROUND: Color = Color::RGB(45, 45, 60);
const WORKSPACE_BACKGROUND: Color = Color::RGB(55, 55, 70);
const STAGE_BACKGROUND: Color = Color::RGB(220, 230, 245);
const INFO_BAR: Color = Color::RGB(40, 40, 55);
const OUTLINE: Color = Color::RGBA(0, 0, 0, 80);
const LABEL: Color = Color::RGB(255, 255, 255);
const BADGE: Color = Color::RGB(255, 255, 255);
const BADGE_EDITING: Color = Color::RGB(255, 230, 100);
const BADGE_TEXT: Color = Color::RGB(30, 30, 30);
const SPRITE_FALLBACK: Color = Color::RGB(255, 140, 0);
const INFO_TEXT: Color = Color::RGB(200, 220, 255);
const HINT_TEXT: Color = Color::RGB(255, 220, 100);
const GO: Color = Color::RGB(50, 200, 80);
const STOP: Color = Color::RGB(210, 60, 60);
const RESET: Color = Color::RGB(120, 120, 140);

/// Drawing and text primitives supplied by the windowing backend.
pub trait Painter {
  fn clear(&mut self, color: Color) -> Result<(), String>;
  fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;
  fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) -> Result<(), String>;
  fn outline_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;
  fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), String>;
  /// Silently draws nothing when no font is available.
  fn draw_text(&mut self, text: &str, at: Point, color: Color) -> Result<(), String>;
  fn measure_text(&self, text: &str) -> Option<(u32, u32)>;
  /// Blits the sprite image into `rect`. Returns `false` when there is no image.
  fn draw_image(&mut self, rect: Rect) -> Result<bool, String>;
}

pub fn frame<P: Painter>(
  painter: &mut P,
  config: &Config,
  editor: &Editor,
  engine: &Engine,
  now: u64,
) -> Result<(), String> {
  painter.clear(BACKGROUND)?;
  painter.fill_rect(config.palette_rect(), PALETTE_BACKGROUND)?;
  painter.fill_rect(config.workspace_rect(), WORKSPACE_BACKGROUND)?;
  painter.fill_rect(config.stage_rect(), STAGE_BACKGROUND)?;

  for header in &editor.palette.headers {
    painter.draw_text(header.category.title(), header.at, header.category.color())?;
  }
  for block in &editor.palette.blocks {
    draw_block(painter, block, false, None, config.notch_offset)?;
  }

  let highlighted = engine.highlighted(now);
  for (index, block) in editor.workspace.blocks().iter().enumerate() {
    let edit = editor.edit.as_ref().filter(|edit| edit.index == index);
    draw_block(painter, block, highlighted == Some(index), edit, config.notch_offset)?;
  }
  if let Some(drag) = &editor.drag {
    draw_block(painter, &drag.block, false, None, config.notch_offset)?;
  }

  draw_sprite(painter, config, engine)?;
  draw_info_bar(painter, config, editor, engine)?;
  draw_button(painter, config.go_button_rect(), GO, "> GO")?;
  draw_button(painter, config.stop_button_rect(), STOP, "STOP")?;
  draw_button(painter, config.reset_button_rect(), RESET, "RESET")?;
  Ok(())
}

pub fn lighten(color: Color) -> Color {
  Color::RGBA(
    color.r.saturating_add(60),
    color.g.saturating_add(60),
    color.b,
    color.a,
  )
}

fn draw_block<P: Painter>(
  painter: &mut P,
  block: &Block,
  highlight: bool,
  edit: Option<&Edit>,
  notch: u32,
) -> Result<(), String> {
  let mut color = block.category().color();
  if highlight {
    color = lighten(color);
  }
  let bounds = block.bounds;
  if block.is_trigger() && notch > 0 {
    let hat = Rect::new(
      bounds.x() + 10,
      bounds.y() - notch as i32,
      NOTCH_WIDTH,
      notch + BLOCK_RADIUS,
    );
    painter.fill_rounded_rect(hat, BLOCK_RADIUS, color)?;
  }
  painter.fill_rounded_rect(bounds, BLOCK_RADIUS, color)?;
  painter.outline_rect(bounds, OUTLINE)?;

  let label = block.kind.label();
  let text_height = painter.measure_text(label).map_or(16, |(_, height)| height);
  let label_y = bounds.y() + (bounds.height() as i32 - text_height as i32) / 2;
  painter.draw_text(label, Point::new(bounds.x() + 8, label_y), LABEL)?;

  if let Some(badge) = block.badge() {
    let shown = match edit {
      Some(edit) => format!("{}_", edit.buffer),
      None => block.value.to_string(),
    };
    painter.fill_rect(badge, if edit.is_some() { BADGE_EDITING } else { BADGE })?;
    painter.outline_rect(badge, Color::RGB(if edit.is_some() { 200 } else { 100 }, 100, 100))?;
    painter.draw_text(&shown, Point::new(badge.x() + 4, badge.y() + 2), BADGE_TEXT)?;
  }
  Ok(())
}

fn draw_sprite<P: Painter>(painter: &mut P, config: &Config, engine: &Engine) -> Result<(), String> {
  let sprite = &engine.sprite;
  if !sprite.visible {
    return Ok(());
  }
  let stage = config.stage_rect();
  let center = Point::new(
    on_screen(stage.x(), sprite.x),
    on_screen(stage.y(), sprite.y),
  );
  if !painter.draw_image(Rect::from_center(center, SPRITE_SIZE, SPRITE_SIZE))? {
    painter.fill_circle(center, SPRITE_SIZE as i32 / 2, SPRITE_FALLBACK)?;
  }
  Ok(())
}

fn on_screen(origin: i32, offset: f32) -> i32 {
  (origin as f32 + offset.round()).clamp(-SPRITE_REACH, SPRITE_REACH) as i32
}

fn draw_info_bar<P: Painter>(
  painter: &mut P,
  config: &Config,
  editor: &Editor,
  engine: &Engine,
) -> Result<(), String> {
  let bar = config.info_bar_rect();
  painter.fill_rect(bar, INFO_BAR)?;
  let mut status = format!("X:{} Y:{}", engine.sprite.x as i32, engine.sprite.y as i32);
  if engine.is_running() {
    status.push_str(&format!("  step {}", engine.run.current_step));
  }
  painter.draw_text(&status, Point::new(bar.x() + 8, bar.y() + 8), INFO_TEXT)?;
  if editor.edit.is_some() {
    let workspace = config.workspace_rect();
    painter.draw_text(
      "Type number + Enter (ESC to cancel)",
      Point::new(workspace.x() + 10, bar.y() + 8),
      HINT_TEXT,
    )?;
  }
  Ok(())
}

fn draw_button<P: Painter>(painter: &mut P, rect: Rect, color: Color, label: &str) -> Result<(), String> {
  painter.fill_rounded_rect(rect, 4, color)?;
  let (width, height) = painter.measure_text(label).unwrap_or((0, 0));
  let at = Point::new(
    rect.x() + (rect.width() as i32 - width as i32) / 2,
    rect.y() + (rect.height() as i32 - height as i32) / 2,
  );
  painter.draw_text(label, at, LABEL)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{block::BlockKind, input::InputEvent};

  #[derive(Debug, Clone, PartialEq)]
  enum Op {
    Fill(Rect, Color),
    Rounded(Rect, Color),
    Circle(Point),
    Text(String, Color),
    Image(Rect),
  }

  #[derive(Default)]
  struct Recorder {
    ops: Vec<Op>,
    has_image: bool,
  }

  impl Painter for Recorder {
    fn clear(&mut self, _color: Color) -> Result<(), String> {
      self.ops.clear();
      Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
      self.ops.push(Op::Fill(rect, color));
      Ok(())
    }

    fn fill_rounded_rect(&mut self, rect: Rect, _radius: u32, color: Color) -> Result<(), String> {
      self.ops.push(Op::Rounded(rect, color));
      Ok(())
    }

    fn outline_rect(&mut self, _rect: Rect, _color: Color) -> Result<(), String> {
      Ok(())
    }

    fn fill_circle(&mut self, center: Point, _radius: i32, _color: Color) -> Result<(), String> {
      self.ops.push(Op::Circle(center));
      Ok(())
    }

    fn draw_text(&mut self, text: &str, _at: Point, color: Color) -> Result<(), String> {
      self.ops.push(Op::Text(text.to_string(), color));
      Ok(())
    }

    fn measure_text(&self, text: &str) -> Option<(u32, u32)> {
      Some((7 * text.len() as u32, 15))
    }

    fn draw_image(&mut self, rect: Rect) -> Result<bool, String> {
      if self.has_image {
        self.ops.push(Op::Image(rect));
      }
      Ok(self.has_image)
    }
  }

  fn add(editor: &mut Editor, kind: BlockKind) {
    let from = editor
      .palette
      .blocks
      .iter()
      .find(|block| block.kind == kind)
      .unwrap()
      .bounds
      .center();
    let to = Point::new(400, 640);
    editor.handle(InputEvent::PointerDown(from));
    editor.handle(InputEvent::PointerUp(to));
  }

  fn texts(recorder: &Recorder) -> Vec<String> {
    recorder
      .ops
      .iter()
      .filter_map(|op| match op {
        Op::Text(text, _) => Some(text.clone()),
        _ => None,
      })
      .collect()
  }

  #[test]
  fn test_circle_fallback_without_image() {
    let config = Config::default();
    let editor = Editor::new(&config);
    let engine = Engine::new(&config);
    let mut recorder = Recorder::default();
    frame(&mut recorder, &config, &editor, &engine, 0).unwrap();
    assert!(recorder.ops.contains(&Op::Circle(Point::new(900, 200))));

    let mut with_image = Recorder {
      has_image: true,
      ..Recorder::default()
    };
    frame(&mut with_image, &config, &editor, &engine, 0).unwrap();
    assert!(with_image
      .ops
      .contains(&Op::Image(Rect::from_center(Point::new(900, 200), 50, 50))));
    assert!(!with_image.ops.iter().any(|op| matches!(op, Op::Circle(_))));
  }

  #[test]
  fn test_sprite_far_off_stage_still_renders() {
    let config = Config::default();
    let editor = Editor::new(&config);
    let mut engine = Engine::new(&config);
    engine.sprite.x = 2147484000.;
    engine.sprite.y = -2147484000.;
    let mut recorder = Recorder::default();
    frame(&mut recorder, &config, &editor, &engine, 0).unwrap();
    assert!(recorder
      .ops
      .contains(&Op::Circle(Point::new(SPRITE_REACH as i32, -SPRITE_REACH as i32))));
    assert!(texts(&recorder).contains(&String::from("X:2147483647 Y:-2147483648")));
  }

  #[test]
  fn test_hidden_sprite_is_not_drawn() {
    let config = Config::default();
    let editor = Editor::new(&config);
    let mut engine = Engine::new(&config);
    engine.sprite.visible = false;
    let mut recorder = Recorder::default();
    frame(&mut recorder, &config, &editor, &engine, 0).unwrap();
    assert!(!recorder.ops.iter().any(|op| matches!(op, Op::Circle(_))));
  }

  #[test]
  fn test_highlighted_block_is_lighter() {
    let config = Config::default();
    let mut editor = Editor::new(&config);
    add(&mut editor, BlockKind::ScriptStart);
    add(&mut editor, BlockKind::ChangeX);
    let mut engine = Engine::new(&config);
    engine.start(&editor.workspace, 0);
    engine.tick(&editor.workspace, 400);
    let mut recorder = Recorder::default();
    frame(&mut recorder, &config, &editor, &engine, 450).unwrap();
    let bounds = editor.workspace.blocks()[1].bounds;
    let motion = BlockKind::ChangeX.category().color();
    assert!(recorder.ops.contains(&Op::Rounded(bounds, lighten(motion))));
  }

  #[test]
  fn test_editing_badge_shows_buffer_and_hint() {
    let config = Config::default();
    let mut editor = Editor::new(&config);
    add(&mut editor, BlockKind::ChangeY);
    let badge = editor.workspace.blocks()[0].badge().unwrap();
    editor.handle(InputEvent::PointerDown(badge.center()));
    editor.handle(InputEvent::Text(String::from("42")));
    let engine = Engine::new(&config);
    let mut recorder = Recorder::default();
    frame(&mut recorder, &config, &editor, &engine, 0).unwrap();
    let texts = texts(&recorder);
    assert!(texts.contains(&String::from("42_")));
    assert!(texts.contains(&String::from("Type number + Enter (ESC to cancel)")));
    assert!(recorder.ops.contains(&Op::Fill(badge, BADGE_EDITING)));
  }

  #[test]
  fn test_floating_block_is_drawn_last_among_blocks() {
    let config = Config::default();
    let mut editor = Editor::new(&config);
    let from = editor.palette.blocks[5].bounds.center();
    editor.handle(InputEvent::PointerDown(from));
    editor.handle(InputEvent::PointerMove(Point::new(450, 300)));
    let engine = Engine::new(&config);
    let mut recorder = Recorder::default();
    frame(&mut recorder, &config, &editor, &engine, 0).unwrap();
    let floating = editor.drag.as_ref().unwrap().block.bounds;
    assert!(recorder
      .ops
      .contains(&Op::Rounded(floating, BlockKind::ShowSprite.category().color())));
  }

  #[test]
  fn test_labels_and_status() {
    let config = Config::default();
    let editor = Editor::new(&config);
    let engine = Engine::new(&config);
    let mut recorder = Recorder::default();
    frame(&mut recorder, &config, &editor, &engine, 0).unwrap();
    let texts = texts(&recorder);
    for title in ["Events", "Motion", "Looks", "> GO", "STOP", "RESET", "X:200 Y:200"] {
      assert!(texts.contains(&title.to_string()), "missing {title}");
    }
  }
}
