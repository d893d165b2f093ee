use log::debug;
use sdl2::rect::{Point, Rect};

use crate::{
  config::Config,
  drag::{Drag, Dropped, Origin},
  edit::Edit,
  input::{InputEvent, Key},
  palette::Palette,
  workspace::Workspace,
};

/// Value change per wheel notch over a motion block.
pub const WHEEL_STEP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Continue,
  StartScript,
  StopScript,
  ResetSprite,
  Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Buttons {
  go: Rect,
  stop: Rect,
  reset: Rect,
}

/// Owns the palette and the script, and runs the drag and edit state machines
/// over them. Taking a block out of the script or dropping one into it asks
/// for the running script to stop, since either shifts the indices it steps by.
#[derive(Debug, Clone)]
pub struct Editor {
  pub palette: Palette,
  pub workspace: Workspace,
  pub drag: Option<Drag>,
  pub edit: Option<Edit>,
  region: Rect,
  buttons: Buttons,
}

impl Editor {
  pub fn new(config: &Config) -> Editor {
    Editor {
      palette: Palette::build(config.palette_origin(), config.block_metrics()),
      workspace: Workspace::new(config.workspace_origin(), config.block_metrics()),
      drag: None,
      edit: None,
      region: config.workspace_rect(),
      buttons: Buttons {
        go: config.go_button_rect(),
        stop: config.stop_button_rect(),
        reset: config.reset_button_rect(),
      },
    }
  }

  pub fn handle(&mut self, event: InputEvent) -> Action {
    match event {
      InputEvent::Quit => Action::Quit,
      InputEvent::PointerDown(at) => self.pointer_down(at),
      InputEvent::PointerMove(at) => {
        if let Some(drag) = &mut self.drag {
          drag.move_to(at);
        }
        Action::Continue
      }
      InputEvent::PointerUp(at) => {
        let Some(drag) = self.drag.take() else {
          return Action::Continue;
        };
        match drag.release(&mut self.workspace, self.region, at) {
          Dropped::InWorkspace { .. } => Action::StopScript,
          Dropped::Outside => Action::Continue,
        }
      }
      InputEvent::Text(text) => {
        if let Some(edit) = &mut self.edit {
          edit.type_text(&text);
        }
        Action::Continue
      }
      InputEvent::Key(key) => self.key(key),
      InputEvent::Wheel { at, delta } => {
        if self.edit.is_none() && self.drag.is_none() {
          if let Some(index) = self.workspace.block_at(at) {
            let step = if delta > 0 { WHEEL_STEP } else { -WHEEL_STEP };
            self.workspace.nudge(index, step);
          }
        }
        Action::Continue
      }
    }
  }

  fn key(&mut self, key: Key) -> Action {
    if self.edit.is_none() {
      return match key {
        Key::Space => Action::StartScript,
        _ => Action::Continue,
      };
    }
    match key {
      Key::Enter => self.commit_edit(),
      Key::Escape => self.cancel_edit(),
      Key::Backspace => {
        if let Some(edit) = &mut self.edit {
          edit.backspace();
        }
      }
      Key::Space => {}
    }
    Action::Continue
  }

  fn pointer_down(&mut self, at: Point) -> Action {
    if let Some(edit) = &self.edit {
      let on_badge = self
        .workspace
        .get(edit.index)
        .and_then(|block| block.badge())
        .map_or(false, |badge| badge.contains_point(at));
      if on_badge {
        return Action::Continue;
      }
    }

    let on_button = [self.buttons.go, self.buttons.stop, self.buttons.reset]
      .iter()
      .any(|button| button.contains_point(at));
    let on_badge = self.workspace.badge_at(at);
    let starts_drag = !on_button
      && on_badge.is_none()
      && (self.workspace.block_at(at).is_some() || self.palette.block_at(at).is_some());
    if starts_drag {
      self.cancel_edit();
    } else {
      self.commit_edit();
    }

    if self.buttons.go.contains_point(at) {
      return Action::StartScript;
    }
    if self.buttons.stop.contains_point(at) {
      return Action::StopScript;
    }
    if self.buttons.reset.contains_point(at) {
      return Action::ResetSprite;
    }
    if let Some(index) = on_badge {
      self.edit = Edit::begin(&self.workspace, index);
      debug!("editing workspace slot {index}");
      return Action::Continue;
    }
    self.drag = Drag::pick_up(&self.palette, &mut self.workspace, at);
    match self.drag.as_ref().map(|drag| drag.origin) {
      Some(Origin::Workspace { .. }) => Action::StopScript,
      _ => Action::Continue,
    }
  }

  fn commit_edit(&mut self) {
    if let Some(edit) = self.edit.take() {
      edit.commit(&mut self.workspace);
    }
  }

  fn cancel_edit(&mut self) {
    if let Some(edit) = self.edit.take() {
      edit.cancel();
    }
  }
}
