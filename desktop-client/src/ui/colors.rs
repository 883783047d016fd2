use common::games::snake::CellKind;
use eframe::egui;

pub const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_gray(40);
pub const REVERSING_FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(128, 0, 160);

pub fn cell_color(kind: CellKind) -> egui::Color32 {
    match kind {
        CellKind::Empty => egui::Color32::GRAY,
        CellKind::Snake => egui::Color32::from_rgb(0, 160, 0),
        CellKind::SnakeHead => egui::Color32::BLACK,
        CellKind::Food => egui::Color32::RED,
        CellKind::ReversingFood => REVERSING_FOOD_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_kind_has_distinct_color() {
        let kinds = [
            CellKind::Empty,
            CellKind::Snake,
            CellKind::SnakeHead,
            CellKind::Food,
            CellKind::ReversingFood,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(cell_color(*a), cell_color(*b), "{:?} vs {:?}", a, b);
            }
        }
    }
}
