mod block;
mod config;
mod drag;
mod edit;
mod editor;
mod engine;
mod input;
mod palette;
mod render;
mod screen;
mod sprite;
mod workspace;

use crate::config::{Config, CONFIG_PATH};
use crate::editor::{Action, Editor};
use crate::engine::Engine;
use crate::screen::Screen;
use log::{info, warn};
use sdl2::{image::InitFlag, rect::Point, render::BlendMode};
use std::time::{Duration, Instant};

fn main() -> Result<(), String> {
  pretty_env_logger::init();
  let config = Config::load(CONFIG_PATH);

  let sdl_context = sdl2::init()?;
  let video_subsystem = sdl_context.video()?;
  let _image_context = sdl2::image::init(InitFlag::PNG | InitFlag::JPG)?;
  let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;
  let window = video_subsystem
    .window("Blockstage", config.window_width, config.window_height)
    .position_centered()
    .build()
    .map_err(|e| e.to_string())?;
  let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
  canvas.set_blend_mode(BlendMode::Blend);
  let texture_creator = canvas.texture_creator();
  let font = screen::load_font(&ttf_context, &config.font_paths, config.font_size);
  let sprite = screen::load_sprite(&texture_creator, &config.sprite_paths);
  let mut event_pump = sdl_context.event_pump()?;
  video_subsystem.text_input().start();

  let mut editor = Editor::new(&config);
  let mut engine = Engine::new(&config);
  let frame_time = Duration::from_millis(1000 / config.frame_rate.max(1) as u64);
  let epoch = Instant::now();
  'main: loop {
    let now = epoch.elapsed().as_millis() as u64;
    let mouse = event_pump.mouse_state();
    let pointer = Point::new(mouse.x(), mouse.y());
    for event in event_pump.poll_iter() {
      let Some(event) = input::translate(&event, pointer) else {
        continue;
      };
      match editor.handle(event) {
        Action::Continue => {}
        Action::StartScript => engine.start(&editor.workspace, now),
        Action::StopScript => engine.stop(),
        Action::ResetSprite => engine.reset_sprite(),
        Action::Quit => break 'main,
      }
    }
    engine.tick(&editor.workspace, now);
    {
      let mut screen = Screen::new(&mut canvas, &texture_creator, font.as_ref(), sprite.as_ref());
      if let Err(error) = render::frame(&mut screen, &config, &editor, &engine, now) {
        warn!("frame not fully drawn: {error}");
      }
    }
    canvas.present();
    ::std::thread::sleep(frame_time);
  }
  video_subsystem.text_input().stop();
  info!("quit");
  Ok(())
}
