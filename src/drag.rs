use log::debug;
use sdl2::rect::{Point, Rect};

use crate::{block::Block, palette::Palette, workspace::Workspace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
  Palette,
  Workspace { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropped {
  InWorkspace { index: usize },
  Outside,
}

/// A block being carried by the pointer. The editor keeps one in an
/// `Option<Drag>`; `None` is the idle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
  pub origin: Origin,
  pub block: Block,
  pub grab_offset: Point,
}

impl Drag {
  /// Picks up the block under `at`. Workspace blocks win over palette
  /// templates; a workspace block leaves the sequence immediately, a palette
  /// template is copied.
  pub fn pick_up(palette: &Palette, workspace: &mut Workspace, at: Point) -> Option<Drag> {
    if let Some(index) = workspace.block_at(at) {
      let block = workspace.remove_at(index)?;
      debug!("picked up {:?} from workspace slot {index}", block.kind);
      return Some(Drag::new(Origin::Workspace { index }, block, at));
    }
    let block = palette.block_at(at)?.clone();
    debug!("picked up {:?} from palette", block.kind);
    Some(Drag::new(Origin::Palette, block, at))
  }

  fn new(origin: Origin, block: Block, at: Point) -> Drag {
    let grab_offset = at - block.bounds.top_left();
    Drag {
      origin,
      block,
      grab_offset,
    }
  }

  pub fn move_to(&mut self, at: Point) {
    let top_left = at - self.grab_offset;
    self.block.bounds.set_x(top_left.x());
    self.block.bounds.set_y(top_left.y());
  }

  /// Ends the drag. Inside `region` the block is inserted above the first
  /// block whose midpoint lies below the pointer; anywhere else it is gone.
  pub fn release(self, workspace: &mut Workspace, region: Rect, at: Point) -> Dropped {
    if !region.contains_point(at) {
      debug!("discarded {:?} from {:?}", self.block.kind, self.origin);
      return Dropped::Outside;
    }
    let index = workspace.insert(&self.block, workspace.insertion_index(at.y()));
    debug!("dropped {:?} at workspace slot {index}", self.block.kind);
    Dropped::InWorkspace { index }
  }
}
