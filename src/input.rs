use sdl2::{
  event::Event,
  keyboard::Keycode,
  mouse::MouseButton,
  rect::Point,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
  Enter,
  Escape,
  Backspace,
  Space,
}

/// Everything the editor reacts to, independent of the windowing backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
  PointerDown(Point),
  PointerMove(Point),
  PointerUp(Point),
  Text(String),
  Key(Key),
  Wheel { at: Point, delta: i32 },
  Quit,
}

/// Maps an SDL event onto an `InputEvent`. `pointer` is the current pointer
/// position, used for wheel events which carry none.
pub fn translate(event: &Event, pointer: Point) -> Option<InputEvent> {
  match event {
    Event::Quit { .. } => Some(InputEvent::Quit),
    Event::MouseButtonDown {
      mouse_btn: MouseButton::Left,
      x,
      y,
      ..
    } => Some(InputEvent::PointerDown(Point::new(*x, *y))),
    Event::MouseButtonUp {
      mouse_btn: MouseButton::Left,
      x,
      y,
      ..
    } => Some(InputEvent::PointerUp(Point::new(*x, *y))),
    Event::MouseMotion { x, y, .. } => Some(InputEvent::PointerMove(Point::new(*x, *y))),
    Event::MouseWheel { y, .. } if *y != 0 => Some(InputEvent::Wheel {
      at: pointer,
      delta: *y,
    }),
    Event::TextInput { text, .. } => Some(InputEvent::Text(text.clone())),
    Event::KeyDown {
      keycode: Some(keycode),
      ..
    } => {
      let key = match *keycode {
        Keycode::Return | Keycode::KpEnter => Key::Enter,
        Keycode::Escape => Key::Escape,
        Keycode::Backspace => Key::Backspace,
        Keycode::Space => Key::Space,
        _ => return None,
      };
      Some(InputEvent::Key(key))
    }
    _ => None,
  }
}
