use std::time::Duration;

use common::games::snake::{GameSnapshot, GameStatus, SessionCommand};
use eframe::egui;
use tokio::sync::mpsc;
use crate::state::SharedState;

use super::colors::{cell_color, BACKGROUND_COLOR};

const ARROW_KEYS: [(egui::Key, &str); 4] = [
    (egui::Key::ArrowUp, "ArrowUp"),
    (egui::Key::ArrowRight, "ArrowRight"),
    (egui::Key::ArrowDown, "ArrowDown"),
    (egui::Key::ArrowLeft, "ArrowLeft"),
];

pub struct ReversnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    tick_interval: Duration,
}

impl ReversnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<SessionCommand>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            tick_interval,
        }
    }

    fn handle_input(&self, ctx: &egui::Context) {
        let commands = ctx.input(|i| {
            let mut commands: Vec<SessionCommand> = ARROW_KEYS
                .iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .map(|(_, name)| SessionCommand::Key(name.to_string()))
                .collect();
            if i.key_pressed(egui::Key::Space) {
                commands.push(SessionCommand::TogglePause);
            }
            commands
        });

        for command in commands {
            // fails only once the session has ended
            let _ = self.command_tx.send(command);
        }
    }

    fn render_game(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.vertical_centered(|ui| {
            ui.heading(format!("Score: {}", snapshot.score));
            ui.label(format!(
                "Tick: {}    Length: {}",
                snapshot.tick,
                snapshot.snake_len()
            ));
            ui.add_space(10.0);

            self.render_board(ui, snapshot);

            ui.add_space(10.0);
            match snapshot.status {
                GameStatus::GameOver(reason) => {
                    ui.label(
                        egui::RichText::new(format!("Game Over: the snake {}", reason))
                            .color(egui::Color32::RED)
                            .size(24.0),
                    );
                    ui.label("Press an arrow key to play again");
                }
                GameStatus::Running if snapshot.paused => {
                    ui.label(
                        egui::RichText::new("Paused")
                            .color(egui::Color32::YELLOW)
                            .size(24.0),
                    );
                    ui.label("Press Space to resume");
                }
                GameStatus::Running => {
                    ui.label("Use Arrow Keys to steer, Space to pause");
                }
            }

            if let Some(summary) = self.shared_state.get_summary() {
                ui.add_space(10.0);
                ui.label(format!(
                    "Session over: {} game(s), best score {}",
                    summary.games_played, summary.best_score
                ));
            }
        });
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let board_size = snapshot.board.len().max(1);
        let available = ui.available_size();
        let max_board_size = available.x.min(available.y - 100.0).max(100.0);
        let cell_size = (max_board_size / board_size as f32).floor().max(4.0);
        let board_width = cell_size * board_size as f32;

        let (board_rect, _) = ui.allocate_exact_size(
            egui::vec2(board_width, board_width),
            egui::Sense::hover(),
        );
        let painter = ui.painter();
        painter.rect_filled(board_rect.expand(2.0), 4.0, BACKGROUND_COLOR);

        for (row_index, row) in snapshot.board.iter().enumerate() {
            for (col_index, &cell) in row.iter().enumerate() {
                let min = board_rect.min
                    + egui::vec2(col_index as f32 * cell_size, row_index as f32 * cell_size);
                let rect = egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size));
                painter.rect_filled(rect.shrink(1.0), 2.0, cell_color(snapshot.cell_kind(cell)));
            }
        }
    }
}

impl eframe::App for ReversnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let snapshot = self.shared_state.get_snapshot();
        egui::CentralPanel::default().show(ctx, |ui| match &snapshot {
            Some(snapshot) => self.render_game(ui, snapshot),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Waiting for game state...");
                });
            }
        });

        ctx.request_repaint_after(self.tick_interval);
    }
}
