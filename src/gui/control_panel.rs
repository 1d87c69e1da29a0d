//! Control Panel Widget
//! Left side panel with file selection, region filter, and country choice.

use egui::{Color32, ComboBox, RichText, ScrollArea};
use std::collections::HashSet;
use std::path::PathBuf;

/// User settings driving the dashboard view
#[derive(Default, Clone)]
pub struct UserSettings {
    pub csv_path: Option<PathBuf>,
    pub selected_country: String,
}

/// Left side control panel with file selection and view controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub regions: Vec<String>,
    pub selected_regions: Vec<bool>,
    pub countries: Vec<String>,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            regions: Vec::new(),
            selected_regions: Vec::new(),
            countries: Vec::new(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update available regions after a load; all start selected.
    pub fn update_regions(&mut self, regions: Vec<String>) {
        self.selected_regions = vec![true; regions.len()];
        self.regions = regions;
    }

    /// Update the countries offered by the selector (the filtered set).
    pub fn update_countries(&mut self, countries: Vec<String>) {
        self.countries = countries;
    }

    /// Currently checked regions as a set.
    pub fn checked_regions(&self) -> HashSet<String> {
        self.regions
            .iter()
            .zip(self.selected_regions.iter())
            .filter(|(_, &selected)| selected)
            .map(|(region, _)| region.clone())
            .collect()
    }

    /// Set the status line.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("💰 WageScope")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Wages & Cost of Living")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Region Filter Section =====
        ui.label(RichText::new("🌍 Region Filter").size(14.0).strong());
        ui.add_space(5.0);

        if self.regions.is_empty() {
            ui.label(RichText::new("Load a CSV first").size(12.0).color(Color32::GRAY));
        } else {
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(5.0)
                .show(ui, |ui| {
                    ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                        for (i, region) in self.regions.iter().enumerate() {
                            if i < self.selected_regions.len()
                                && ui
                                    .checkbox(&mut self.selected_regions[i], region)
                                    .changed()
                            {
                                action = ControlPanelAction::FilterChanged;
                            }
                        }
                    });
                });

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.small_button("Select All").clicked() {
                    self.selected_regions.iter_mut().for_each(|v| *v = true);
                    action = ControlPanelAction::FilterChanged;
                }
                if ui.small_button("Clear All").clicked() {
                    self.selected_regions.iter_mut().for_each(|v| *v = false);
                    action = ControlPanelAction::FilterChanged;
                }
            });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Country Section =====
        ui.label(RichText::new("🔎 Country Detail").size(14.0).strong());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.add_sized([70.0, 20.0], egui::Label::new("Country:"));
            ComboBox::from_id_salt("country_select")
                .width(170.0)
                .selected_text(&self.settings.selected_country)
                .show_ui(ui, |ui| {
                    for country in &self.countries {
                        if ui
                            .selectable_label(self.settings.selected_country == *country, country)
                            .clicked()
                        {
                            self.settings.selected_country = country.clone();
                            action = ControlPanelAction::CountryChanged;
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    FilterChanged,
    CountryChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_default_to_all_selected() {
        let mut panel = ControlPanel::new();
        panel.update_regions(vec!["Europa".to_string(), "Oceanía".to_string()]);

        let checked = panel.checked_regions();
        assert_eq!(checked.len(), 2);
        assert!(checked.contains("Europa"));
        assert!(checked.contains("Oceanía"));
    }

    #[test]
    fn unchecking_a_region_removes_it_from_the_set() {
        let mut panel = ControlPanel::new();
        panel.update_regions(vec!["Europa".to_string(), "Oceanía".to_string()]);
        panel.selected_regions[0] = false;

        let checked = panel.checked_regions();
        assert!(!checked.contains("Europa"));
        assert!(checked.contains("Oceanía"));
    }
}
