use eframe::egui::{self, ScrollArea, Ui};

use crate::state::{AppState, Section, UiEvent};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisExplorerApp {
    pub state: AppState,
}

impl IrisExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for IrisExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Widgets only record events during the pass; state changes after it.
        let mut events: Vec<UiEvent> = Vec::new();
        let state = &self.state;

        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for section in state.sections() {
                        match section {
                            Section::Title => panels::title(ui),
                            Section::Overview => panels::overview(ui, state),
                            Section::ColumnPicker => panels::column_picker(ui, state, &mut events),
                            Section::Histogram(column) => {
                                plot::histogram_section(ui, state, column, &mut events)
                            }
                            Section::Scatter { x, y } => {
                                plot::scatter_section(ui, state, x, y, &mut events)
                            }
                            Section::Warning => panels::warning(ui),
                            Section::Footer => panels::footer(ui),
                        }
                    }
                });
        });

        if !events.is_empty() {
            for event in events {
                self.state.apply(event);
            }
            ctx.request_repaint();
        }
    }
}
