//! Control Panel Widget
//! Top bar with the file path field and the browse/plot buttons.

use egui::{Color32, RichText};

/// Top bar state: the editable path and a status line.
pub struct ControlPanel {
    pub file_path: String,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            file_path: String::new(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.label("Select .txt file:");
            ui.add(egui::TextEdit::singleline(&mut self.file_path).desired_width(420.0));
            if ui.button("📂 Browse").clicked() {
                action = ControlPanelAction::Browse;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = egui::Button::new(RichText::new("▶ Plot").size(14.0))
                    .min_size(egui::vec2(90.0, 24.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Plot;
                }
            });
        });

        let status_color = if self.status.starts_with("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else if self.status == "Ready" {
            Color32::GRAY
        } else {
            Color32::from_rgb(220, 53, 69)
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        ui.add_space(5.0);

        action
    }

    /// Set status text
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Browse,
    Plot,
}
