use log::{debug, info};

use crate::{block::BlockKind, config::Config, sprite::SpriteState, workspace::Workspace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunState {
  pub running: bool,
  pub current_step: usize,
  pub last_step_at: u64,
  /// Trigger index at start, then the last block applied.
  pub last_executed: Option<usize>,
}

/// Steps through the workspace on a fixed cadence, one block per gated tick.
///
/// Execution starts right after the first trigger block in the sequence, so
/// blocks above it never run. A later trigger takes a step of its own and
/// changes nothing.
#[derive(Debug, Clone)]
pub struct Engine {
  pub run: RunState,
  pub sprite: SpriteState,
  step_delay: u64,
  clamp_to_stage: bool,
  stage_size: (u32, u32),
  margin: i32,
  center: (f32, f32),
  start_position: (f32, f32),
}

impl Engine {
  pub fn new(config: &Config) -> Engine {
    let stage = config.stage_rect();
    let (x, y) = config.sprite_start;
    Engine {
      run: RunState::default(),
      sprite: SpriteState::new(x, y),
      step_delay: config.step_delay_ms,
      clamp_to_stage: config.clamp_to_stage,
      stage_size: (stage.width(), stage.height()),
      margin: config.sprite_margin,
      center: config.stage_center,
      start_position: config.sprite_start,
    }
  }

  pub fn is_running(&self) -> bool {
    self.run.running
  }

  /// Begins right after the first trigger block, or at the top of a script
  /// that has none.
  pub fn start(&mut self, workspace: &Workspace, now: u64) {
    let trigger = workspace.blocks().iter().position(|block| block.is_trigger());
    let current_step = match trigger {
      Some(trigger) => {
        info!("starting script after trigger at slot {trigger}");
        trigger + 1
      }
      None => {
        info!("starting script without a trigger from the top");
        0
      }
    };
    self.run = RunState {
      running: true,
      current_step,
      last_step_at: now,
      last_executed: trigger,
    };
  }

  pub fn stop(&mut self) {
    if self.run.running {
      info!("script stopped at slot {}", self.run.current_step);
    }
    self.run.running = false;
  }

  pub fn reset_sprite(&mut self) {
    self.stop();
    self.run.last_executed = None;
    let (x, y) = self.start_position;
    self.sprite = SpriteState::new(x, y);
  }

  pub fn tick(&mut self, workspace: &Workspace, now: u64) {
    if !self.run.running {
      return;
    }
    if self.run.current_step >= workspace.len() {
      self.finish();
      return;
    }
    if now.saturating_sub(self.run.last_step_at) < self.step_delay {
      return;
    }
    let index = self.run.current_step;
    let Some(block) = workspace.get(index) else {
      self.finish();
      return;
    };
    debug!("step {index}: {:?} {}", block.kind, block.value);
    self.apply(block.kind, block.value);
    self.run.last_executed = Some(index);
    self.run.current_step += 1;
    self.run.last_step_at = now;
    if self.run.current_step >= workspace.len() {
      self.finish();
    }
  }

  fn finish(&mut self) {
    if self.run.running {
      info!("script finished");
    }
    self.run.running = false;
  }

  fn apply(&mut self, kind: BlockKind, value: i32) {
    let value = value as f32;
    let sprite = &mut self.sprite;
    match kind {
      BlockKind::ScriptStart => {}
      BlockKind::ChangeX => sprite.x += value,
      BlockKind::ChangeY => sprite.y += value,
      BlockKind::SetX => sprite.x = self.center.0 + value,
      BlockKind::SetY => sprite.y = self.center.1 + value,
      BlockKind::ShowSprite => sprite.visible = true,
      BlockKind::HideSprite => sprite.visible = false,
    }
    if self.clamp_to_stage {
      let (width, height) = self.stage_size;
      sprite.clamp(width, height, self.margin);
    }
  }

  /// Block to highlight. The last block applied stays lit for one step delay
  /// after the script ends.
  pub fn highlighted(&self, now: u64) -> Option<usize> {
    if self.run.running || now.saturating_sub(self.run.last_step_at) < self.step_delay {
      self.run.last_executed
    } else {
      None
    }
  }
}
