use winit::window::WindowId;

use crate::input::InputEvent;
use crate::window::RuntimeCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the studio.
///
/// Nothing is drawn unless the app asks for it: frames are produced only for
/// redraws requested through [`RuntimeCtx`] (or by the platform on resize and
/// expose).
pub trait App {
    /// Called for each translated input event.
    fn on_input(
        &mut self,
        window_id: WindowId,
        event: &InputEvent,
        runtime: &mut RuntimeCtx,
    ) -> AppControl {
        let _ = (window_id, event, runtime);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
