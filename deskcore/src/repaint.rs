//! Repaint controller
//!
//! egui is an immediate-mode GUI: every frame redraws everything. A
//! calculator only changes when the user presses a button, so the window
//! should sleep between presses instead of polling.
//!
//! Input already wakes egui. The one case it misses is state that changes
//! *after* the frame drew it: a button click is only known once the keypad
//! has been laid out, so the new display text needs one more frame. Apps
//! call [`RepaintController::mark_needs_repaint`] for that and the
//! controller turns it into a single repaint request.

/// Controls when the egui context should request repaints.
///
/// Keep one in the app struct and call [`begin_frame`](Self::begin_frame)
/// at the top of `update()` and [`end_frame`](Self::end_frame) at the bottom.
#[derive(Debug, Default)]
pub struct RepaintController {
    /// Whether a one-shot repaint has been requested.
    needs_repaint: bool,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Call at the **start** of `update()`. This frame satisfies any
    /// request made during the previous one.
    pub fn begin_frame(&mut self) {
        self.needs_repaint = false;
    }

    /// Call at the **end** of `update()`.
    ///
    /// Issues an immediate repaint if the frame marked itself dirty;
    /// otherwise egui sleeps until the next input event.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.needs_repaint {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clean() {
        assert!(!RepaintController::new().needs_repaint);
    }

    #[test]
    fn test_mark_survives_until_next_frame() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            rc.begin_frame();
            rc.mark_needs_repaint();
            rc.end_frame(ctx);
        });
        assert!(rc.needs_repaint);

        rc.begin_frame();
        assert!(!rc.needs_repaint);
    }

    #[test]
    fn test_clean_frame_stays_clean() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            rc.begin_frame();
            rc.end_frame(ctx);
        });
        assert!(!rc.needs_repaint);
    }
}
