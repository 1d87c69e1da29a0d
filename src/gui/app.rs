//! WageScope Main Application
//! Main window wiring the control panel to the dashboard.

use std::path::{Path, PathBuf};

use anyhow::Context;
use egui::SidePanel;

use crate::data::{select_country, DataLoader, SelectError};
use crate::gui::dashboard::{CountrySelection, DashboardView};
use crate::gui::{ControlPanel, ControlPanelAction, Dashboard};
use crate::metrics::MetricsCalculator;

/// Table loaded on startup when present in the working directory.
const DEFAULT_CSV: &str = "salario_minimo.csv";

/// Main application window.
pub struct WageScopeApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    dashboard: Dashboard,
}

impl WageScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            dashboard: Dashboard::new(),
        };
        if Path::new(DEFAULT_CSV).exists() {
            app.load_csv(PathBuf::from(DEFAULT_CSV));
        }
        app
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.load_csv(path);
        }
    }

    fn load_csv(&mut self, path: PathBuf) {
        self.dashboard.clear();
        self.control_panel.settings.csv_path = Some(path.clone());
        self.control_panel.settings.selected_country.clear();

        let result = self
            .loader
            .load_csv(&path.to_string_lossy())
            .with_context(|| format!("loading {}", path.display()));

        match result {
            Ok(table) => {
                let regions = table.regions();
                let row_count = table.len();
                let first_country = table.records().first().map(|r| r.country.clone());
                log::info!("loaded {} countries from {}", row_count, path.display());

                self.control_panel.set_status(&format!(
                    "Loaded {} countries, {} regions",
                    row_count,
                    regions.len()
                ));
                self.control_panel.update_regions(regions);
                // The detail view starts on the first country, like the table
                if let Some(country) = first_country {
                    self.control_panel.settings.selected_country = country;
                }
                self.refresh_view();
            }
            Err(e) => {
                log::error!("CSV load failed: {e:#}");
                self.control_panel.update_regions(Vec::new());
                self.control_panel.update_countries(Vec::new());
                self.control_panel.set_status(&format!("Error: {e:#}"));
            }
        }
    }

    /// One full pass for the current settings: filter, select, compute.
    fn refresh_view(&mut self) {
        let Some(table) = self.loader.table() else {
            self.dashboard.clear();
            return;
        };

        let checked = self.control_panel.checked_regions();
        let filtered = table.filter_by_regions(&checked);
        let regions = table.regions();

        self.control_panel
            .update_countries(filtered.iter().map(|r| r.country.clone()).collect());

        let selected = self.control_panel.settings.selected_country.clone();
        let selection = if selected.is_empty() {
            None
        } else {
            match select_country(&filtered, &selected) {
                Ok(record) => {
                    let (breakdown, metrics) = MetricsCalculator::compute(record);
                    Some(CountrySelection {
                        record: record.clone(),
                        breakdown,
                        metrics,
                    })
                }
                Err(SelectError::NotFound(name)) => {
                    // A region toggle can drop the picked country; prompt again
                    log::warn!("country {name} not in filtered set");
                    self.control_panel.settings.selected_country.clear();
                    self.control_panel.set_status(&format!(
                        "{name} left the filtered set, pick another country"
                    ));
                    None
                }
            }
        };

        self.dashboard.set_view(DashboardView {
            filtered,
            regions,
            selection,
        });
    }
}

impl eframe::App for WageScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::FilterChanged
                        | ControlPanelAction::CountryChanged => self.refresh_view(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard.show(ui);
        });
    }
}
