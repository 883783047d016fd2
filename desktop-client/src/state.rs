use common::games::snake::{GameSnapshot, SessionSummary};
use eframe::egui;
use std::sync::{Arc, Mutex};

/// State shared between the session thread and the UI thread.
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    summary: Arc<Mutex<Option<SessionSummary>>>,
    repaint_ctx: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            summary: Arc::new(Mutex::new(None)),
            repaint_ctx: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_summary(&self, summary: SessionSummary) {
        *self.summary.lock().unwrap() = Some(summary);
        self.request_repaint();
    }

    pub fn get_summary(&self) -> Option<SessionSummary> {
        self.summary.lock().unwrap().clone()
    }

    /// Lets the session wake the UI when a new snapshot arrives.
    pub fn set_repaint_ctx(&self, ctx: egui::Context) {
        *self.repaint_ctx.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.repaint_ctx.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            summary: Arc::clone(&self.summary),
            repaint_ctx: Arc::clone(&self.repaint_ctx),
        }
    }
}
