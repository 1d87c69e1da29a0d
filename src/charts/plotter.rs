//! Chart Plotter Module
//! Creates the wage bar chart and expense pie chart using egui_plot and the
//! egui painter.

use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::data::CountryRecord;
use crate::metrics::{ExpenseBreakdown, ExpenseCategory};

/// Color palette for regions and expense categories
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
];

const PIE_DIAMETER: f32 = 260.0;
const SWATCH_SIZE: f32 = 14.0;

/// Creates dashboard visualizations using egui_plot and painter primitives.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Stable color for a region, assigned by its position in the loaded
    /// table's first-appearance order so it survives filtering.
    pub fn region_color(region: &str, regions: &[String]) -> Color32 {
        let index = regions.iter().position(|r| r == region).unwrap_or(0);
        PALETTE[index % PALETTE.len()]
    }

    /// Color for an expense category, by presentation order.
    pub fn category_color(category: ExpenseCategory) -> Color32 {
        let index = ExpenseCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0);
        PALETTE[index % PALETTE.len()]
    }

    /// Amount formatted for display, two decimals with currency suffix.
    pub fn format_amount(value: f64, currency: &str) -> String {
        format!("{value:.2} {currency}")
    }

    /// Draw the minimum-wage bar chart.
    /// X-axis: countries, Y-axis: wage; one bar group per region for the legend.
    pub fn draw_wage_bar_chart(ui: &mut egui::Ui, records: &[CountryRecord], regions: &[String]) {
        let x_labels: Vec<String> = records.iter().map(|r| r.country.clone()).collect();

        Plot::new("wage_bar_chart")
            .height(320.0)
            .allow_scroll(false)
            .x_axis_label("Country")
            .y_axis_label("Minimum Wage (local currency)")
            .legend(Legend::default())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if mark.value.fract().abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for region in regions {
                    let bars: Vec<Bar> = records
                        .iter()
                        .enumerate()
                        .filter(|(_, r)| &r.region == region)
                        .map(|(i, r)| {
                            Bar::new(i as f64, r.minimum_wage)
                                .width(0.6)
                                .name(&r.country)
                        })
                        .collect();
                    if bars.is_empty() {
                        continue;
                    }

                    let color = Self::region_color(region, regions);
                    plot_ui.bar_chart(BarChart::new(bars).color(color).name(region));
                }
            });
    }

    /// Draw the expense pie chart with a legend of amounts and shares.
    pub fn draw_expense_pie_chart(ui: &mut egui::Ui, breakdown: &ExpenseBreakdown, currency: &str) {
        let total = breakdown.total();
        if total <= 0.0 {
            ui.label(RichText::new("No expense data").size(14.0).color(Color32::GRAY));
            return;
        }

        ui.horizontal(|ui| {
            let (rect, _) =
                ui.allocate_exact_size(Vec2::splat(PIE_DIAMETER), Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = PIE_DIAMETER / 2.0 - 6.0;

            // Start at twelve o'clock, sweep clockwise
            let mut angle = -std::f32::consts::FRAC_PI_2;
            for (category, amount) in &breakdown.entries {
                if *amount <= 0.0 {
                    continue;
                }
                let sweep = (*amount / total) as f32 * std::f32::consts::TAU;
                Self::draw_pie_sector(
                    &painter,
                    center,
                    radius,
                    angle,
                    sweep,
                    Self::category_color(*category),
                );
                angle += sweep;
            }

            ui.add_space(16.0);

            ui.vertical(|ui| {
                for (category, amount) in &breakdown.entries {
                    let share = amount / total * 100.0;
                    ui.horizontal(|ui| {
                        let (swatch, _) = ui
                            .allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::hover());
                        ui.painter()
                            .rect_filled(swatch, 3.0, Self::category_color(*category));
                        ui.label(
                            RichText::new(format!(
                                "{}: {} ({:.1}%)",
                                category.label(),
                                Self::format_amount(*amount, currency),
                                share
                            ))
                            .size(13.0),
                        );
                    });
                    ui.add_space(4.0);
                }
            });
        });
    }

    /// Fill one sector as a fan of thin triangles; sectors wider than a
    /// half-turn are not convex, so the fan keeps tessellation correct.
    fn draw_pie_sector(
        painter: &egui::Painter,
        center: Pos2,
        radius: f32,
        start: f32,
        sweep: f32,
        color: Color32,
    ) {
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        let mut prev = Self::arc_point(center, radius, start);

        for step in 1..=steps {
            let angle = start + sweep * step as f32 / steps as f32;
            let next = Self::arc_point(center, radius, angle);
            painter.add(Shape::convex_polygon(
                vec![center, prev, next],
                color,
                Stroke::NONE,
            ));
            prev = next;
        }
    }

    fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
        center + radius * Vec2::new(angle.cos(), angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_colors_are_stable_and_distinct() {
        let regions: Vec<String> = ["Sudamérica", "Norteamérica", "Europa", "Oceanía"]
            .iter()
            .map(|r| r.to_string())
            .collect();

        let first = ChartPlotter::region_color("Europa", &regions);
        let second = ChartPlotter::region_color("Europa", &regions);
        assert_eq!(first, second);

        let other = ChartPlotter::region_color("Oceanía", &regions);
        assert_ne!(first, other);
    }

    #[test]
    fn category_colors_follow_presentation_order() {
        assert_eq!(ChartPlotter::category_color(ExpenseCategory::Rent), PALETTE[0]);
        assert_eq!(
            ChartPlotter::category_color(ExpenseCategory::Entertainment),
            PALETTE[5]
        );
    }

    #[test]
    fn amounts_format_with_two_decimals_and_currency() {
        assert_eq!(
            ChartPlotter::format_amount(1_360_000.0, "COP"),
            "1360000.00 COP"
        );
        assert_eq!(ChartPlotter::format_amount(-60_000.0, "COP"), "-60000.00 COP");
        assert_eq!(ChartPlotter::format_amount(3_867.678, "AUD"), "3867.68 AUD");
    }
}
