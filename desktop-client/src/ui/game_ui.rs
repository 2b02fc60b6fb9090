use eframe::egui;
use engine::{Cell, Direction, GRID_SIZE};
use tokio::sync::mpsc;

use crate::state::{ClientCommand, GameSnapshot, SharedState};

const BOARD_FILL: egui::Color32 = egui::Color32::from_rgb(0xfa, 0xfa, 0xf7);
const BOARD_STROKE: egui::Color32 = egui::Color32::from_rgb(0xe7, 0xe5, 0xde);
const FOOD_FILL: egui::Color32 = egui::Color32::from_rgb(0xd1, 0xa8, 0x58);
const FOOD_STROKE: egui::Color32 = egui::Color32::from_rgb(0x9b, 0x7d, 0x3f);
const HEAD_FILL: egui::Color32 = egui::Color32::from_rgb(0x2b, 0x5c, 0x5a);
const BODY_FILL: egui::Color32 = egui::Color32::from_rgb(0x4f, 0x7b, 0x79);
const SNAKE_STROKE: egui::Color32 = egui::Color32::from_rgb(0x1f, 0x3f, 0x3c);

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    cell_px: f32,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        cell_px: f32,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            cell_px,
        }
    }

    fn send(&self, command: ClientCommand) {
        let _ = self.command_tx.send(command);
    }

    fn turn(&self, direction: Direction) {
        self.send(ClientCommand::Turn { direction });
    }

    fn handle_input(&self, ctx: &egui::Context) {
        let (direction, pause) = ctx.input(|i| {
            let direction = if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            };
            (direction, i.key_pressed(egui::Key::Space))
        });

        if let Some(direction) = direction {
            self.turn(direction);
        }
        if pause {
            self.send(ClientCommand::TogglePause);
        }
    }

    fn render_hud(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.horizontal(|ui| {
            ui.label(format!("Score: {}", snapshot.score));
            ui.separator();
            let status = egui::RichText::new(snapshot.status.to_string());
            let status = if snapshot.game_over {
                status.color(egui::Color32::RED).strong()
            } else {
                status
            };
            ui.label(status);
        });
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let board_px = self.cell_px * GRID_SIZE as f32;
        let (response, painter) =
            ui.allocate_painter(egui::Vec2::splat(board_px), egui::Sense::hover());
        let origin = response.rect.min;

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.draw_cell(&painter, origin, Cell::new(x, y), BOARD_FILL, BOARD_STROKE);
            }
        }

        if let Some(food) = snapshot.food {
            self.draw_cell(&painter, origin, food, FOOD_FILL, FOOD_STROKE);
        }

        for (i, segment) in snapshot.snake.iter().enumerate() {
            let fill = if i == 0 { HEAD_FILL } else { BODY_FILL };
            self.draw_cell(&painter, origin, *segment, fill, SNAKE_STROKE);
        }
    }

    fn draw_cell(
        &self,
        painter: &egui::Painter,
        origin: egui::Pos2,
        cell: Cell,
        fill: egui::Color32,
        stroke: egui::Color32,
    ) {
        let rect = egui::Rect::from_min_size(
            egui::pos2(
                origin.x + cell.x as f32 * self.cell_px,
                origin.y + cell.y as f32 * self.cell_px,
            ),
            egui::Vec2::splat(self.cell_px),
        );
        painter.rect_filled(rect, 0.0, fill);
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, stroke),
            egui::StrokeKind::Inside,
        );
    }

    fn render_controls(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Start").clicked() {
                self.send(ClientCommand::Start);
            }
            if ui.button("Pause").clicked() {
                self.send(ClientCommand::TogglePause);
            }
            if ui.button("Restart").clicked() {
                self.send(ClientCommand::Restart);
            }
        });

        ui.add_space(6.0);

        // On-screen arrow pad for mouse play.
        ui.vertical_centered(|ui| {
            if ui.button("⬆").clicked() {
                self.turn(Direction::Up);
            }
            ui.horizontal(|ui| {
                if ui.button("⬅").clicked() {
                    self.turn(Direction::Left);
                }
                if ui.button("⬇").clicked() {
                    self.turn(Direction::Down);
                }
                if ui.button("➡").clicked() {
                    self.turn(Direction::Right);
                }
            });
        });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let snapshot = self.shared_state.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Snake");
                ui.add_space(4.0);
                self.render_hud(ui, &snapshot);
                ui.add_space(8.0);
                self.render_board(ui, &snapshot);
                ui.add_space(8.0);
                self.render_controls(ui);
                ui.add_space(4.0);
                ui.label("Arrow keys or WASD to steer, Space to pause");
            });
        });

        ctx.request_repaint();
    }
}
