use std::{fs::File, io::BufReader, path::Path};

use log::{info, warn};
use sdl2::rect::{Point, Rect};
use serde::Deserialize;

pub const CONFIG_PATH: &str = "blockstage.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
  pub window_width: u32,
  pub window_height: u32,
  pub palette_width: u32,
  pub workspace_width: u32,
  pub info_bar_height: u32,
  pub block_width: u32,
  pub block_height: u32,
  pub block_gap: u32,
  /// Extra room above a trigger block for its hat notch.
  pub notch_offset: u32,
  pub step_delay_ms: u64,
  pub clamp_to_stage: bool,
  pub sprite_margin: i32,
  pub sprite_start: (f32, f32),
  pub stage_center: (f32, f32),
  pub frame_rate: u32,
  pub font_size: u16,
  pub font_paths: Vec<String>,
  pub sprite_paths: Vec<String>,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      window_width: 1100,
      window_height: 650,
      palette_width: 200,
      workspace_width: 500,
      info_bar_height: 30,
      block_width: 170,
      block_height: 38,
      block_gap: 10,
      notch_offset: 10,
      step_delay_ms: 400,
      clamp_to_stage: false,
      sprite_margin: 25,
      sprite_start: (200., 200.),
      stage_center: (200., 200.),
      frame_rate: 60,
      font_size: 13,
      font_paths: vec![
        String::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        String::from("C:/Windows/Fonts/arial.ttf"),
        String::from("/System/Library/Fonts/Helvetica.ttc"),
      ],
      sprite_paths: vec![
        String::from("sprite.png"),
        String::from("sprite.jpg"),
        String::from("assets/sprite.png"),
        String::from("assets/sprite.jpg"),
      ],
    }
  }
}

/// Sizes shared by palette and workspace layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMetrics {
  pub width: u32,
  pub height: u32,
  pub gap: u32,
  pub notch: u32,
}

impl Config {
  pub fn load<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    let file = match File::open(path) {
      Ok(file) => file,
      Err(_) => {
        info!("no config at {}, using defaults", path.display());
        return Config::default();
      }
    };
    match serde_json::from_reader(BufReader::new(file)) {
      Ok(config) => {
        info!("loaded config from {}", path.display());
        config
      }
      Err(error) => {
        warn!("ignoring malformed config {}: {error}", path.display());
        Config::default()
      }
    }
  }

  pub fn block_metrics(&self) -> BlockMetrics {
    BlockMetrics {
      width: self.block_width,
      height: self.block_height,
      gap: self.block_gap,
      notch: self.notch_offset,
    }
  }

  pub fn palette_rect(&self) -> Rect {
    Rect::new(0, 0, self.palette_width, self.window_height)
  }

  pub fn workspace_rect(&self) -> Rect {
    Rect::new(
      self.palette_width as i32,
      0,
      self.workspace_width,
      self.window_height,
    )
  }

  pub fn stage_rect(&self) -> Rect {
    let x = self.palette_width + self.workspace_width;
    Rect::new(
      x as i32,
      0,
      self.window_width.saturating_sub(x).max(1),
      self.window_height.saturating_sub(self.info_bar_height).max(1),
    )
  }

  pub fn info_bar_rect(&self) -> Rect {
    let stage = self.stage_rect();
    Rect::new(
      stage.x(),
      stage.bottom(),
      stage.width(),
      self.info_bar_height.max(1),
    )
  }

  pub fn go_button_rect(&self) -> Rect {
    let stage = self.stage_rect();
    Rect::new(stage.x() + 10, 10, 60, 30)
  }

  pub fn stop_button_rect(&self) -> Rect {
    let stage = self.stage_rect();
    Rect::new(stage.x() + 80, 10, 60, 30)
  }

  pub fn reset_button_rect(&self) -> Rect {
    let stage = self.stage_rect();
    Rect::new(stage.x() + 150, 10, 70, 30)
  }

  /// Top-left of the first workspace block.
  pub fn workspace_origin(&self) -> Point {
    let workspace = self.workspace_rect();
    Point::new(workspace.x() + 20, workspace.y() + 20)
  }

  pub fn palette_origin(&self) -> Point {
    Point::new(15, 10)
  }
}
