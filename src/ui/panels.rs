use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::FeatureColumn;
use crate::data::stats::Statistic;
use crate::state::{AppState, UiEvent, EMPTY_SELECTION_WARNING, FOOTER, TITLE};

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 20.0;

/// Section subheading, smaller than `ui.heading`.
pub fn subheading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(6.0);
    ui.label(RichText::new(text).size(17.0).strong());
}

pub fn title(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.label(RichText::new(TITLE).size(30.0).strong());
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Dataset overview: preview, statistics, metrics
// ---------------------------------------------------------------------------

/// Render the static overview panels.
pub fn overview(ui: &mut Ui, state: &AppState) {
    ui.heading("Dataset Overview");

    subheading(ui, "First 5 Rows");
    ui.push_id("preview_table", |ui: &mut Ui| preview_table(ui, state));

    subheading(ui, "Summary Statistics");
    ui.push_id("summary_table", |ui: &mut Ui| summary_table(ui, state));

    ui.add_space(8.0);
    ui.columns(2, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Rows", state.dataset.len());
        metric(&mut cols[1], "Total Columns", state.dataset.column_count());
    });
}

fn preview_table(ui: &mut Ui, state: &AppState) {
    let records = state.dataset.head(state.config.preview_rows);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(30.0))
        .columns(Column::auto().at_least(110.0), FeatureColumn::ALL.len())
        .column(Column::remainder().at_least(80.0))
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|_ui| {});
            for column in FeatureColumn::ALL {
                header.col(|ui| {
                    ui.strong(column.label());
                });
            }
            header.col(|ui| {
                ui.strong("Species");
            });
        })
        .body(|mut body| {
            for (idx, record) in records.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(idx.to_string()).weak());
                    });
                    for column in FeatureColumn::ALL {
                        row.col(|ui| {
                            ui.monospace(format!("{:.1}", record.value(column)));
                        });
                    }
                    row.col(|ui| {
                        let color = state.color_map.color_for(record.species);
                        ui.label(RichText::new(record.species.name()).color(color));
                    });
                });
            }
        });
}

fn summary_table(ui: &mut Ui, state: &AppState) {
    let columns: Vec<FeatureColumn> = state.summary.columns().collect();
    let rows = state.summary.rows();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(50.0))
        .columns(Column::auto().at_least(110.0), columns.len())
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|_ui| {});
            for column in &columns {
                header.col(|ui| {
                    ui.strong(column.label());
                });
            }
        })
        .body(|mut body| {
            for (stat, values) in &rows {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.strong(stat.label());
                    });
                    for value in values {
                        row.col(|ui| {
                            ui.monospace(format_stat(*stat, *value));
                        });
                    }
                });
            }
        });
}

/// Counts print as integers, everything else with six decimals.
pub fn format_stat(stat: Statistic, value: f64) -> String {
    match stat {
        _ if value.is_nan() => "NaN".to_string(),
        Statistic::Count => format!("{value:.0}"),
        _ => format!("{value:.6}"),
    }
}

fn metric(ui: &mut Ui, label: &str, value: usize) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value.to_string()).size(28.0));
}

// ---------------------------------------------------------------------------
// Column picker
// ---------------------------------------------------------------------------

/// Multi-choice input over the four feature columns.
pub fn column_picker(ui: &mut Ui, state: &AppState, events: &mut Vec<UiEvent>) {
    ui.add_space(12.0);
    ui.heading("Data Visualization");
    ui.label("Select numeric columns to visualize:");

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for column in FeatureColumn::ALL {
            let mut on = state.selection.is_selected(column);
            if ui.checkbox(&mut on, column.label()).changed() {
                events.push(UiEvent::SetColumnSelected { column, on });
            }
        }
    });

    let picked: Vec<&str> = state.selection.selected().iter().map(|c| c.label()).collect();
    if !picked.is_empty() {
        ui.label(RichText::new(format!("Selected: {}", picked.join(", "))).weak());
    }
}

/// Single-choice input restricted to the selected columns.
pub fn column_combo(
    ui: &mut Ui,
    id: &str,
    label: &str,
    current: FeatureColumn,
    options: &[FeatureColumn],
    mut on_pick: impl FnMut(FeatureColumn),
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.label())
        .width(200.0)
        .show_ui(ui, |ui: &mut Ui| {
            for &column in options {
                if ui
                    .selectable_label(column == current, column.label())
                    .clicked()
                    && column != current
                {
                    on_pick(column);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Warning and footer
// ---------------------------------------------------------------------------

pub fn warning(ui: &mut Ui) {
    ui.add_space(8.0);
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(255, 244, 214))
        .show(ui, |ui: &mut Ui| {
            ui.label(
                RichText::new(format!("⚠ {EMPTY_SELECTION_WARNING}"))
                    .color(Color32::from_rgb(146, 96, 0)),
            );
        });
}

pub fn footer(ui: &mut Ui) {
    ui.add_space(12.0);
    ui.separator();
    ui.label(RichText::new(FOOTER).small().weak());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(Statistic::Count, 150.0), "150");
        assert_eq!(format_stat(Statistic::Mean, 5.843333333), "5.843333");
        assert_eq!(format_stat(Statistic::Std, f64::NAN), "NaN");
    }
}
