use sdl2::rect::{Point, Rect};

use crate::{block::Block, config::BlockMetrics};

/// The user's script. Sequence order is both execution order and top-to-bottom
/// display order; every block's bounds are derived from its index.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
  origin: Point,
  metrics: BlockMetrics,
  blocks: Vec<Block>,
}

impl Workspace {
  pub fn new(origin: Point, metrics: BlockMetrics) -> Workspace {
    Workspace {
      origin,
      metrics,
      blocks: Vec::new(),
    }
  }

  pub fn blocks(&self) -> &[Block] {
    &self.blocks
  }

  pub fn len(&self) -> usize {
    self.blocks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Block> {
    self.blocks.get(index)
  }

  /// Inserts a copy of `block`, clamping `index` to the end of the sequence.
  /// Returns the index the block landed at.
  pub fn insert(&mut self, block: &Block, index: usize) -> usize {
    let index = index.min(self.blocks.len());
    self.blocks.insert(index, block.clone());
    self.relayout();
    index
  }

  pub fn push(&mut self, block: &Block) -> usize {
    self.insert(block, self.blocks.len())
  }

  pub fn remove_at(&mut self, index: usize) -> Option<Block> {
    if index >= self.blocks.len() {
      return None;
    }
    let block = self.blocks.remove(index);
    self.relayout();
    Some(block)
  }

  pub fn relayout(&mut self) {
    let mut y = self.origin.y();
    for block in &mut self.blocks {
      if block.is_trigger() {
        y += self.metrics.notch as i32;
      }
      block.bounds = Rect::new(self.origin.x(), y, self.metrics.width, self.metrics.height);
      y += (self.metrics.height + self.metrics.gap) as i32;
    }
  }

  /// Stores the parsed edit buffer into the block at `index`. Out of range is a no-op.
  pub fn commit_edit(&mut self, index: usize, raw: &str) {
    if let Some(block) = self.blocks.get_mut(index) {
      block.value = parse_value(raw);
    }
  }

  pub fn nudge(&mut self, index: usize, delta: i32) {
    if let Some(block) = self.blocks.get_mut(index) {
      block.nudge(delta);
    }
  }

  /// Index a block dropped at height `y` should be inserted at: above the first
  /// block whose vertical midpoint lies below `y`, otherwise at the end.
  pub fn insertion_index(&self, y: i32) -> usize {
    self
      .blocks
      .iter()
      .position(|block| block.bounds.center().y() > y)
      .unwrap_or(self.blocks.len())
  }

  /// Topmost block under `point`.
  pub fn block_at(&self, point: Point) -> Option<usize> {
    self
      .blocks
      .iter()
      .rposition(|block| block.bounds.contains_point(point))
  }

  pub fn badge_at(&self, point: Point) -> Option<usize> {
    self.blocks.iter().rposition(|block| {
      block
        .badge()
        .map_or(false, |badge| badge.contains_point(point))
    })
  }
}

/// Parses an edit buffer. Empty, a lone `-`, and anything unparsable give 0;
/// digit strings past the i32 range saturate.
pub fn parse_value(raw: &str) -> i32 {
  let (negative, digits) = match raw.strip_prefix('-') {
    Some(digits) => (true, digits),
    None => (false, raw),
  };
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return 0;
  }
  match raw.parse::<i32>() {
    Ok(value) => value,
    Err(_) if negative => i32::MIN,
    Err(_) => i32::MAX,
  }
}
