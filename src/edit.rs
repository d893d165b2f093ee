use log::debug;

use crate::workspace::Workspace;

/// Longest buffer accepted; enough for any i32 including the sign.
pub const MAX_BUFFER_LEN: usize = 11;

/// An in-progress edit of a workspace block's value badge. The editor keeps one
/// in an `Option<Edit>`; `None` is the idle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
  pub index: usize,
  pub buffer: String,
  /// Still showing the prefilled value; the first typed character replaces it.
  pub pristine: bool,
}

impl Edit {
  pub fn begin(workspace: &Workspace, index: usize) -> Option<Edit> {
    let block = workspace.get(index)?;
    if !block.kind.has_value() {
      return None;
    }
    Some(Edit {
      index,
      buffer: block.value.to_string(),
      pristine: true,
    })
  }

  /// Appends digits, and a `-` only as the first character.
  pub fn type_text(&mut self, text: &str) {
    for c in text.chars() {
      let leading = self.pristine || self.buffer.is_empty();
      if !(c.is_ascii_digit() || (c == '-' && leading)) {
        continue;
      }
      if self.pristine {
        self.buffer.clear();
        self.pristine = false;
      }
      if self.buffer.len() >= MAX_BUFFER_LEN {
        break;
      }
      self.buffer.push(c);
    }
  }

  pub fn backspace(&mut self) {
    self.pristine = false;
    self.buffer.pop();
  }

  pub fn commit(self, workspace: &mut Workspace) {
    debug!("committing {:?} to workspace slot {}", self.buffer, self.index);
    workspace.commit_edit(self.index, &self.buffer);
  }

  pub fn cancel(self) {
    debug!("cancelled edit of workspace slot {}", self.index);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    block::{Block, BlockKind},
    config::Config,
  };
  use sdl2::rect::Rect;

  fn workspace_with(kind: BlockKind, value: i32) -> Workspace {
    let config = Config::default();
    let mut workspace = Workspace::new(config.workspace_origin(), config.block_metrics());
    let mut block = Block::new(kind, Rect::new(0, 0, 1, 1));
    block.value = value;
    workspace.push(&block);
    workspace
  }

  #[test]
  fn test_begin_only_on_motion_blocks() {
    assert!(Edit::begin(&workspace_with(BlockKind::ShowSprite, 0), 0).is_none());
    assert!(Edit::begin(&workspace_with(BlockKind::ChangeX, 0), 3).is_none());
    let edit = Edit::begin(&workspace_with(BlockKind::SetY, -4), 0).unwrap();
    assert_eq!(edit.buffer, "-4");
  }

  #[test]
  fn test_typing_and_commit() {
    let mut workspace = workspace_with(BlockKind::ChangeX, 7);
    let mut edit = Edit::begin(&workspace, 0).unwrap();
    edit.type_text("1");
    edit.type_text("5");
    assert_eq!(edit.buffer, "15");
    edit.commit(&mut workspace);
    assert_eq!(workspace.blocks()[0].value, 15);
  }

  #[test]
  fn test_cancel_keeps_value() {
    let workspace = workspace_with(BlockKind::ChangeX, 7);
    let mut edit = Edit::begin(&workspace, 0).unwrap();
    edit.type_text("99");
    edit.cancel();
    assert_eq!(workspace.blocks()[0].value, 7);
  }

  #[test]
  fn test_sign_only_leads() {
    let mut edit = Edit {
      index: 0,
      buffer: String::new(),
      pristine: false,
    };
    edit.type_text("-");
    edit.type_text("1-2a.3");
    assert_eq!(edit.buffer, "-123");
    edit.type_text("-");
    assert_eq!(edit.buffer, "-123");
  }

  #[test]
  fn test_buffer_is_capped() {
    let mut edit = Edit {
      index: 0,
      buffer: String::new(),
      pristine: false,
    };
    edit.type_text("123456789012345");
    assert_eq!(edit.buffer.len(), MAX_BUFFER_LEN);
  }

  #[test]
  fn test_backspace_edits_prefilled_value() {
    let mut workspace = workspace_with(BlockKind::ChangeX, 25);
    let mut edit = Edit::begin(&workspace, 0).unwrap();
    edit.backspace();
    edit.type_text("0");
    assert_eq!(edit.buffer, "20");
    edit.commit(&mut workspace);
    assert_eq!(workspace.blocks()[0].value, 20);
  }

  #[test]
  fn test_rejected_text_keeps_prefill() {
    let workspace = workspace_with(BlockKind::ChangeX, 25);
    let mut edit = Edit::begin(&workspace, 0).unwrap();
    edit.type_text("x");
    assert_eq!(edit.buffer, "25");
    assert!(edit.pristine);
  }

  #[test]
  fn test_lone_minus_commits_zero() {
    let mut workspace = workspace_with(BlockKind::ChangeY, 12);
    let mut edit = Edit::begin(&workspace, 0).unwrap();
    edit.backspace();
    edit.backspace();
    edit.type_text("-");
    edit.commit(&mut workspace);
    assert_eq!(workspace.blocks()[0].value, 0);
  }
}
