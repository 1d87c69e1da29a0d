//! Dashboard Widget
//! Central scrollable panel: filtered table, wage bar chart, expense pie
//! chart, and the three metric cards for the selected country.

use egui::{Color32, RichText, ScrollArea};

use crate::charts::ChartPlotter;
use crate::data::CountryRecord;
use crate::metrics::{CountryMetrics, ExpenseBreakdown};

const SECTION_SPACING: f32 = 18.0;
const POSITIVE_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
const NEGATIVE_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Derived state for the selected country.
pub struct CountrySelection {
    pub record: CountryRecord,
    pub breakdown: ExpenseBreakdown,
    pub metrics: CountryMetrics,
}

/// View state recomputed on each interaction.
pub struct DashboardView {
    /// Rows surviving the region filter, source order preserved
    pub filtered: Vec<CountryRecord>,
    /// All regions of the loaded table, for stable bar colors
    pub regions: Vec<String>,
    pub selection: Option<CountrySelection>,
}

/// Central dashboard area.
pub struct Dashboard {
    view: Option<DashboardView>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self { view: None }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.view = None;
    }

    pub fn set_view(&mut self, view: DashboardView) {
        self.view = Some(view);
    }

    /// Draw the dashboard
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(view) = &self.view else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        if view.filtered.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("No countries match the region filter")
                        .size(16.0)
                        .color(Color32::GRAY),
                );
            });
            return;
        }

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            Self::draw_table_section(ui, &view.filtered);
            ui.add_space(SECTION_SPACING);

            Self::draw_wage_section(ui, &view.filtered, &view.regions);
            ui.add_space(SECTION_SPACING);

            match &view.selection {
                Some(selection) => Self::draw_country_section(ui, selection),
                None => {
                    ui.label(
                        RichText::new("Select a country to see its expense breakdown")
                            .size(14.0)
                            .color(Color32::GRAY),
                    );
                }
            }
            ui.add_space(SECTION_SPACING);
        });
    }

    /// Filtered table as a striped grid.
    fn draw_table_section(ui: &mut egui::Ui, records: &[CountryRecord]) {
        Self::section_frame(ui, |ui| {
            ui.label(RichText::new("Countries").size(16.0).strong());
            ui.add_space(8.0);

            egui::Grid::new("country_table")
                .striped(true)
                .min_col_width(70.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for header in [
                        "Country",
                        "Region",
                        "Currency",
                        "Min. Wage",
                        "Rent",
                        "Food",
                        "Utilities",
                        "Internet",
                        "Transport",
                        "Entertainment",
                    ] {
                        ui.label(RichText::new(header).strong().size(12.0));
                    }
                    ui.end_row();

                    for record in records {
                        ui.label(RichText::new(&record.country).size(12.0));
                        ui.label(RichText::new(&record.region).size(12.0));
                        ui.label(RichText::new(&record.currency).size(12.0));
                        for value in [
                            record.minimum_wage,
                            record.rent,
                            record.food,
                            record.utilities,
                            record.internet,
                            record.transport,
                            record.entertainment,
                        ] {
                            ui.label(RichText::new(format!("{value:.2}")).size(12.0));
                        }
                        ui.end_row();
                    }
                });
        });
    }

    /// Bar chart of minimum wages, colored by region.
    fn draw_wage_section(ui: &mut egui::Ui, records: &[CountryRecord], regions: &[String]) {
        Self::section_frame(ui, |ui| {
            ui.label(
                RichText::new("Minimum Wage by Country")
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(8.0);
            ChartPlotter::draw_wage_bar_chart(ui, records, regions);
        });
    }

    /// Pie chart plus the three metric cards for the selected country.
    fn draw_country_section(ui: &mut egui::Ui, selection: &CountrySelection) {
        let record = &selection.record;

        Self::section_frame(ui, |ui| {
            ui.label(
                RichText::new(format!("Expense Breakdown: {}", record.country))
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(8.0);

            ChartPlotter::draw_expense_pie_chart(ui, &selection.breakdown, &record.currency);

            ui.add_space(12.0);

            let metrics = &selection.metrics;
            let balance_color = if metrics.balance < 0.0 {
                NEGATIVE_COLOR
            } else {
                POSITIVE_COLOR
            };

            ui.columns(3, |columns| {
                Self::draw_metric_card(
                    &mut columns[0],
                    "Total Monthly Expenses",
                    &ChartPlotter::format_amount(metrics.total_expenses, &record.currency),
                    None,
                );
                Self::draw_metric_card(
                    &mut columns[1],
                    "Minimum Wage",
                    &ChartPlotter::format_amount(record.minimum_wage, &record.currency),
                    None,
                );
                Self::draw_metric_card(
                    &mut columns[2],
                    "Balance",
                    &ChartPlotter::format_amount(metrics.balance, &record.currency),
                    Some(balance_color),
                );
            });
        });
    }

    fn draw_metric_card(ui: &mut egui::Ui, label: &str, value: &str, color: Option<Color32>) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).size(11.0).color(Color32::GRAY));
                    ui.add_space(4.0);
                    let value_color = color.unwrap_or_else(|| ui.visuals().text_color());
                    ui.label(RichText::new(value).size(18.0).strong().color(value_color));
                });
            });
    }

    fn section_frame(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, add_contents);
    }
}
