/// Where the sprite is and whether it is drawn. Coordinates are stage-local
/// with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteState {
  pub x: f32,
  pub y: f32,
  pub visible: bool,
}

impl SpriteState {
  pub fn new(x: f32, y: f32) -> SpriteState {
    SpriteState {
      x,
      y,
      visible: true,
    }
  }

  /// Keeps the sprite `margin` units inside a stage of the given size.
  pub fn clamp(&mut self, width: u32, height: u32, margin: i32) {
    let (low_x, high_x) = bounds(width, margin);
    let (low_y, high_y) = bounds(height, margin);
    self.x = self.x.clamp(low_x, high_x);
    self.y = self.y.clamp(low_y, high_y);
  }
}

fn bounds(extent: u32, margin: i32) -> (f32, f32) {
  let low = margin as f32;
  let high = extent as f32 - margin as f32;
  if low > high {
    let middle = extent as f32 / 2.;
    (middle, middle)
  } else {
    (low, high)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_clamp_to_margin() {
    let mut sprite = SpriteState::new(-40., 900.);
    sprite.clamp(400, 620, 25);
    assert_eq!((sprite.x, sprite.y), (25., 595.));
    let mut inside = SpriteState::new(120., 80.);
    inside.clamp(400, 620, 25);
    assert_eq!((inside.x, inside.y), (120., 80.));
  }

  #[test]
  fn test_clamp_on_tiny_stage_centers() {
    let mut sprite = SpriteState::new(3., 3.);
    sprite.clamp(20, 20, 25);
    assert_eq!((sprite.x, sprite.y), (10., 10.));
  }
}
