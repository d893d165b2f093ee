use sdl2::{pixels::Color, rect::Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
  Event,
  Motion,
  Looks,
}

impl Category {
  pub fn color(self) -> Color {
    match self {
      Category::Event => Color::RGB(255, 165, 0),
      Category::Motion => Color::RGB(70, 130, 180),
      Category::Looks => Color::RGB(180, 80, 200),
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Category::Event => "Events",
      Category::Motion => "Motion",
      Category::Looks => "Looks",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
  ScriptStart,
  ChangeX,
  ChangeY,
  SetX,
  SetY,
  ShowSprite,
  HideSprite,
}

impl BlockKind {
  pub fn category(self) -> Category {
    match self {
      BlockKind::ScriptStart => Category::Event,
      BlockKind::ChangeX | BlockKind::ChangeY | BlockKind::SetX | BlockKind::SetY => {
        Category::Motion
      }
      BlockKind::ShowSprite | BlockKind::HideSprite => Category::Looks,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      BlockKind::ScriptStart => "When GO clicked",
      BlockKind::ChangeX => "Change X by",
      BlockKind::ChangeY => "Change Y by",
      BlockKind::SetX => "Set X to",
      BlockKind::SetY => "Set Y to",
      BlockKind::ShowSprite => "Show",
      BlockKind::HideSprite => "Hide",
    }
  }

  pub fn is_trigger(self) -> bool {
    self == BlockKind::ScriptStart
  }

  /// Whether the block carries an editable value badge.
  pub fn has_value(self) -> bool {
    self.category() == Category::Motion
  }

  pub fn default_value(self) -> i32 {
    match self {
      BlockKind::ChangeX | BlockKind::ChangeY => 10,
      _ => 0,
    }
  }
}

pub const BADGE_WIDTH: u32 = 52;
pub const BADGE_HEIGHT: u32 = 20;
pub const BADGE_INSET: i32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
  pub kind: BlockKind,
  pub value: i32,
  pub bounds: Rect,
}

impl Block {
  pub fn new(kind: BlockKind, bounds: Rect) -> Block {
    Block {
      kind,
      value: kind.default_value(),
      bounds,
    }
  }

  pub fn category(&self) -> Category {
    self.kind.category()
  }

  pub fn is_trigger(&self) -> bool {
    self.kind.is_trigger()
  }

  /// The value badge sits at the right edge, vertically centered.
  pub fn badge(&self) -> Option<Rect> {
    if !self.kind.has_value() {
      return None;
    }
    Some(Rect::new(
      self.bounds.right() - BADGE_INSET - BADGE_WIDTH as i32,
      self.bounds.y() + (self.bounds.height() as i32 - BADGE_HEIGHT as i32) / 2,
      BADGE_WIDTH,
      BADGE_HEIGHT,
    ))
  }

  /// Adds `delta` to the value of a motion block, saturating at the i32 range.
  pub fn nudge(&mut self, delta: i32) {
    if self.kind.has_value() {
      self.value = self.value.saturating_add(delta);
    }
  }
}
