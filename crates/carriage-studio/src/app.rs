use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use winit::window::WindowId;

use carriage_engine::core::{App, AppControl, FrameCtx};
use carriage_engine::input::{ButtonState, InputEvent, Key, MouseButton};
use carriage_engine::paint::Color;
use carriage_engine::render::{FramePresenter, ImageRef};
use carriage_engine::window::RuntimeCtx;
use carriage_scene::config::SPEED_STEP;
use carriage_scene::{Frame, FrameSink, RepaintScheduler, SessionDriver};

use crate::triggers::DebouncedToggle;

pub const TITLE: &str = "Horse & Carriage";

/// Wires the session driver to the window: input toggles it, redraws tick it.
pub struct StudioApp {
    driver: SessionDriver,
    presenter: FramePresenter,
    click: DebouncedToggle,
    clear: Color,
    shown_running: Option<bool>,
}

impl StudioApp {
    pub fn new(driver: SessionDriver) -> Self {
        let bg = driver.config().background;
        Self {
            driver,
            presenter: FramePresenter::new(),
            click: DebouncedToggle::default(),
            clear: Color::from_srgb_u8(bg.0, bg.1, bg.2, 255),
            shown_running: None,
        }
    }

    fn toggle(&mut self, now: Instant, runtime: &mut RuntimeCtx) {
        self.driver.toggle_running(now);
        // One tick either restarts the loop or shows the paused frame.
        runtime.request_redraw();
    }

    fn nudge_speed(&mut self, delta: f64) {
        let speed = self.driver.set_speed(self.driver.speed() + delta);
        log::info!("speed {speed} px/s");
    }
}

impl App for StudioApp {
    fn on_input(&mut self, _window_id: WindowId, event: &InputEvent, runtime: &mut RuntimeCtx) -> AppControl {
        let now = Instant::now();
        match event {
            InputEvent::Key { key: Key::Escape, state: ButtonState::Pressed, .. } => {
                return AppControl::Exit;
            }
            ev if ev.is_key_press(Key::Space) || ev.is_key_press(Key::Enter) => {
                self.toggle(now, runtime);
            }
            InputEvent::Key { key: Key::ArrowUp, state: ButtonState::Pressed, .. } => {
                self.nudge_speed(SPEED_STEP);
            }
            InputEvent::Key { key: Key::ArrowDown, state: ButtonState::Pressed, .. } => {
                self.nudge_speed(-SPEED_STEP);
            }
            ev if ev.is_button_press(MouseButton::Left) => {
                if self.click.accept(now) {
                    self.toggle(now, runtime);
                } else {
                    log::debug!("click ignored (debounce)");
                }
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let running = self.driver.is_running();
        if self.shown_running != Some(running) {
            let status = if running { "Running" } else { "Stopped" };
            ctx.window.set_title(&format!("{TITLE} - {status}"));
            self.shown_running = Some(running);
        }

        let mut next = PendingTick::default();
        let now = ctx.time.now;
        let result = {
            let mut sink = WindowSink {
                ctx: &mut *ctx,
                presenter: &mut self.presenter,
                clear: self.clear,
            };
            self.driver.on_tick(now, &mut sink, &mut next)
        };

        if let Err(e) = result {
            log::error!("frame {} presentation failed: {e:#}", ctx.time.frame_index);
            return AppControl::Exit;
        }
        if let Some(delay) = next.0 {
            ctx.runtime.schedule_redraw(delay);
        }
        AppControl::Continue
    }
}

/// Presents driver frames through the engine's letterbox presenter.
struct WindowSink<'s, 'a, 'w> {
    ctx: &'s mut FrameCtx<'a, 'w>,
    presenter: &'s mut FramePresenter,
    clear: Color,
}

impl FrameSink for WindowSink<'_, '_, '_> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let image = ImageRef::new(frame.width(), frame.height(), frame.pixels())
            .context("frame buffer does not match its dimensions")?;

        let WindowSink { ctx, presenter, clear } = self;
        match ctx.render(*clear, |rctx, target| presenter.present(rctx, target, image)) {
            AppControl::Continue => Ok(()),
            AppControl::Exit => bail!("surface can no longer be presented to"),
        }
    }
}

/// Holds the requested delay until the frame context is free again.
#[derive(Debug, Default)]
struct PendingTick(Option<Duration>);

impl RepaintScheduler for PendingTick {
    fn schedule_tick(&mut self, delay: Duration) {
        self.0 = Some(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_tick_keeps_last_request() {
        let mut p = PendingTick::default();
        assert!(p.0.is_none());
        p.schedule_tick(Duration::from_millis(50));
        assert_eq!(p.0, Some(Duration::from_millis(50)));
    }
}
