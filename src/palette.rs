use sdl2::rect::{Point, Rect};

use crate::{
  block::{Block, BlockKind, Category},
  config::BlockMetrics,
};

pub const HEADER_HEIGHT: i32 = 18;
pub const CATEGORY_SPACING: i32 = 8;

const CATALOG: [(Category, &[BlockKind]); 3] = [
  (Category::Event, &[BlockKind::ScriptStart]),
  (
    Category::Motion,
    &[
      BlockKind::ChangeX,
      BlockKind::ChangeY,
      BlockKind::SetX,
      BlockKind::SetY,
    ],
  ),
  (
    Category::Looks,
    &[BlockKind::ShowSprite, BlockKind::HideSprite],
  ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
  pub category: Category,
  pub at: Point,
}

/// Read-only catalog of block templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
  pub headers: Vec<Header>,
  pub blocks: Vec<Block>,
}

impl Palette {
  pub fn build(origin: Point, metrics: BlockMetrics) -> Palette {
    let mut palette = Palette {
      headers: Vec::new(),
      blocks: Vec::new(),
    };
    let mut y = origin.y();
    for (index, (category, kinds)) in CATALOG.iter().enumerate() {
      if index > 0 {
        y += CATEGORY_SPACING;
      }
      palette.headers.push(Header {
        category: *category,
        at: Point::new(origin.x(), y),
      });
      y += HEADER_HEIGHT;
      for kind in kinds.iter() {
        if kind.is_trigger() {
          y += metrics.notch as i32;
        }
        palette.blocks.push(Block::new(
          *kind,
          Rect::new(origin.x(), y, metrics.width, metrics.height),
        ));
        y += (metrics.height + metrics.gap) as i32;
      }
    }
    palette
  }

  /// The template under `point`, if any.
  pub fn block_at(&self, point: Point) -> Option<&Block> {
    self
      .blocks
      .iter()
      .find(|block| block.bounds.contains_point(point))
  }
}
