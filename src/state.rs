use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::ExplorerConfig;
use crate::data::histogram::Histogram;
use crate::data::model::{FeatureColumn, IrisDataset};
use crate::data::selection::SelectionState;
use crate::data::stats::SummaryTable;

// ---------------------------------------------------------------------------
// UI events and view state
// ---------------------------------------------------------------------------

/// A widget interaction captured during a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    SetColumnSelected { column: FeatureColumn, on: bool },
    ChooseHistogram(FeatureColumn),
    ChooseScatterX(FeatureColumn),
    ChooseScatterY(FeatureColumn),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No columns selected: charts hidden, warning shown.
    AwaitingSelection,
    /// At least one column selected: histogram and scatter shown.
    ChartsRendered,
}

/// One block of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Overview,
    ColumnPicker,
    Histogram(FeatureColumn),
    Scatter { x: FeatureColumn, y: FeatureColumn },
    Warning,
    Footer,
}

pub const TITLE: &str = "🌸 Iris Dataset Explorer";
pub const EMPTY_SELECTION_WARNING: &str = "Please select at least one numeric column to visualize.";
pub const FOOTER: &str = "Built with egui | Dataset: Iris (Fisher, 1936)";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: Arc<IrisDataset>,

    /// Descriptive statistics of the full dataset (computed once).
    pub summary: SummaryTable,

    /// Species colours for the scatter plot.
    pub color_map: ColorMap,

    /// Column choices for this session.
    pub selection: SelectionState,

    pub config: ExplorerConfig,
}

impl AppState {
    pub fn new(dataset: Arc<IrisDataset>, config: ExplorerConfig) -> Self {
        let summary = SummaryTable::describe(&dataset);
        let color_map = ColorMap::new(&dataset.species());
        Self {
            dataset,
            summary,
            color_map,
            selection: SelectionState::default(),
            config,
        }
    }

    pub fn view_state(&self) -> ViewState {
        if self.selection.is_empty() {
            ViewState::AwaitingSelection
        } else {
            ViewState::ChartsRendered
        }
    }

    /// Apply one event; the selection re-validates its dependent choices.
    pub fn apply(&mut self, event: UiEvent) {
        log::debug!("applying {event:?}");
        let before = self.view_state();

        match event {
            UiEvent::SetColumnSelected { column, on } => self.selection.set_selected(column, on),
            UiEvent::ChooseHistogram(c) => self.selection.choose_histogram(c),
            UiEvent::ChooseScatterX(c) => self.selection.choose_x(c),
            UiEvent::ChooseScatterY(c) => self.selection.choose_y(c),
        }

        let after = self.view_state();
        if before != after {
            log::info!("view state {before:?} -> {after:?}");
        }
    }

    /// Page layout for the current state.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::Title, Section::Overview, Section::ColumnPicker];

        let charts = (
            self.selection.histogram(),
            self.selection.scatter_x(),
            self.selection.scatter_y(),
        );
        match (self.view_state(), charts) {
            (ViewState::ChartsRendered, (Some(hist), Some(x), Some(y))) => {
                sections.push(Section::Histogram(hist));
                sections.push(Section::Scatter { x, y });
            }
            _ => sections.push(Section::Warning),
        }

        sections.push(Section::Footer);
        sections
    }

    /// Histogram of a column with the configured bin count.
    pub fn histogram(&self, column: FeatureColumn) -> Option<Histogram> {
        Histogram::from_values(&self.dataset.column(column), self.config.histogram_bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_bundled;
    use crate::data::model::FeatureColumn::*;

    fn state() -> AppState {
        AppState::new(Arc::new(load_bundled().unwrap()), ExplorerConfig::default())
    }

    fn deselect(column: FeatureColumn) -> UiEvent {
        UiEvent::SetColumnSelected { column, on: false }
    }

    #[test]
    fn test_default_layout() {
        let s = state();
        assert_eq!(s.view_state(), ViewState::ChartsRendered);
        assert_eq!(
            s.sections(),
            vec![
                Section::Title,
                Section::Overview,
                Section::ColumnPicker,
                Section::Histogram(SepalLength),
                Section::Scatter {
                    x: SepalLength,
                    y: SepalWidth
                },
                Section::Footer,
            ]
        );
    }

    #[test]
    fn test_single_column_layout() {
        let mut s = state();
        s.apply(deselect(SepalWidth));
        let sections = s.sections();
        assert!(sections.contains(&Section::Histogram(SepalLength)));
        assert!(sections.contains(&Section::Scatter {
            x: SepalLength,
            y: SepalLength
        }));
        assert!(!sections.contains(&Section::Warning));
    }

    #[test]
    fn test_empty_selection_shows_warning() {
        let mut s = state();
        s.apply(deselect(SepalLength));
        s.apply(deselect(SepalWidth));
        assert_eq!(s.view_state(), ViewState::AwaitingSelection);
        assert_eq!(
            s.sections(),
            vec![
                Section::Title,
                Section::Overview,
                Section::ColumnPicker,
                Section::Warning,
                Section::Footer,
            ]
        );
        // Overview data is untouched.
        assert_eq!(s.dataset.len(), 150);
        assert_eq!(s.summary.rows().len(), 8);
    }

    #[test]
    fn test_reselecting_restores_charts() {
        let mut s = state();
        s.apply(deselect(SepalLength));
        s.apply(deselect(SepalWidth));
        s.apply(UiEvent::SetColumnSelected {
            column: PetalLength,
            on: true,
        });
        assert_eq!(s.view_state(), ViewState::ChartsRendered);
        assert!(s.sections().contains(&Section::Histogram(PetalLength)));
    }

    #[test]
    fn test_adding_second_column_moves_scatter_off_diagonal() {
        let mut s = state();
        s.apply(deselect(SepalWidth));
        s.apply(UiEvent::SetColumnSelected {
            column: PetalLength,
            on: true,
        });
        assert!(s.sections().contains(&Section::Scatter {
            x: SepalLength,
            y: PetalLength
        }));
    }

    #[test]
    fn test_choose_events_update_sections() {
        let mut s = state();
        s.apply(UiEvent::ChooseHistogram(SepalWidth));
        s.apply(UiEvent::ChooseScatterX(SepalWidth));
        s.apply(UiEvent::ChooseScatterY(SepalLength));
        let sections = s.sections();
        assert!(sections.contains(&Section::Histogram(SepalWidth)));
        assert!(sections.contains(&Section::Scatter {
            x: SepalWidth,
            y: SepalLength
        }));
    }

    #[test]
    fn test_histogram_uses_configured_bins() {
        let s = state();
        let h = s.histogram(PetalWidth).unwrap();
        assert_eq!(h.bin_count(), 20);
        assert_eq!(h.counts.iter().sum::<usize>(), 150);
    }
}
