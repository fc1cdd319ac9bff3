use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::{HISTOGRAM_EDGE, HISTOGRAM_FILL};
use crate::data::model::{FeatureColumn, Species};
use crate::state::{AppState, UiEvent};
use crate::ui::panels::{column_combo, subheading};

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Column chooser plus frequency histogram of the chosen column.
pub fn histogram_section(
    ui: &mut Ui,
    state: &AppState,
    column: FeatureColumn,
    events: &mut Vec<UiEvent>,
) {
    subheading(ui, "Histogram");
    column_combo(
        ui,
        "histogram_column",
        "Choose a column for histogram:",
        column,
        state.selection.selected(),
        |c| events.push(UiEvent::ChooseHistogram(c)),
    );

    let Some(hist) = state.histogram(column) else {
        return;
    };

    ui.add_space(4.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(format!("Distribution of {column}"));
    });

    let width = hist.bin_width();
    let bars: Vec<Bar> = hist
        .bars()
        .map(|(centre, count)| {
            Bar::new(centre, count as f64)
                .width(width)
                .fill(HISTOGRAM_FILL)
                .stroke(Stroke::new(1.0, HISTOGRAM_EDGE))
        })
        .collect();

    Plot::new("histogram_plot")
        .height(state.config.histogram_height)
        .x_axis_label(column.label())
        .y_axis_label("Frequency")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Frequency"));
        });
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// X/Y choosers plus a scatter plot with one series per species.
pub fn scatter_section(
    ui: &mut Ui,
    state: &AppState,
    x: FeatureColumn,
    y: FeatureColumn,
    events: &mut Vec<UiEvent>,
) {
    subheading(ui, "Scatter Plot");

    let options = state.selection.selected();
    ui.columns(2, |cols: &mut [Ui]| {
        column_combo(
            &mut cols[0],
            "scatter_x",
            "Choose X-axis column:",
            x,
            options,
            |c| events.push(UiEvent::ChooseScatterX(c)),
        );
        column_combo(
            &mut cols[1],
            "scatter_y",
            "Choose Y-axis column:",
            y,
            options,
            |c| events.push(UiEvent::ChooseScatterY(c)),
        );
    });

    ui.add_space(4.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(format!("{x} vs {y}"));
    });

    Plot::new("scatter_plot")
        .height(state.config.scatter_height)
        .legend(Legend::default())
        .show_grid(true)
        .x_axis_label(x.label())
        .y_axis_label(y.label())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for species in state.dataset.species() {
                let points = Points::new(species_points(state, species, x, y))
                    .name(species.name())
                    .color(state.color_map.marker_color(species))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(state.config.marker_radius);
                plot_ui.points(points);
            }
        });

    if x == y {
        ui.label(RichText::new("X and Y are the same column; points fall on the diagonal.").weak());
    }
}

/// `(x, y)` pairs for the records of one species.
fn species_points(
    state: &AppState,
    species: Species,
    x: FeatureColumn,
    y: FeatureColumn,
) -> PlotPoints<'static> {
    state
        .dataset
        .records()
        .iter()
        .filter(|r| r.species == species)
        .map(|r| [r.value(x), r.value(y)])
        .collect()
}
