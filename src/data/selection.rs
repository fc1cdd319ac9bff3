use super::model::FeatureColumn;

// ---------------------------------------------------------------------------
// Selection state: which columns are eligible for charting
// ---------------------------------------------------------------------------

/// Per-session column choices.
///
/// Invariant: when `selected` is non-empty the histogram, X and Y choices
/// are `Some` and members of `selected`; when it is empty they are `None`.
/// Every mutator re-validates before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Chosen feature columns in pick order, no duplicates.
    selected: Vec<FeatureColumn>,
    histogram: Option<FeatureColumn>,
    scatter_x: Option<FeatureColumn>,
    scatter_y: Option<FeatureColumn>,
}

impl Default for SelectionState {
    /// The first two feature columns, with derived defaults.
    fn default() -> Self {
        Self::with_selected(FeatureColumn::ALL[..2].to_vec())
    }
}

impl SelectionState {
    /// Build a state from an explicit selection; duplicates are dropped.
    pub fn with_selected(columns: Vec<FeatureColumn>) -> Self {
        let mut state = SelectionState {
            selected: Vec::with_capacity(columns.len()),
            histogram: None,
            scatter_x: None,
            scatter_y: None,
        };
        for c in columns {
            if !state.selected.contains(&c) {
                state.selected.push(c);
            }
        }
        state.revalidate();
        state
    }

    pub fn selected(&self) -> &[FeatureColumn] {
        &self.selected
    }

    pub fn is_selected(&self, column: FeatureColumn) -> bool {
        self.selected.contains(&column)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn histogram(&self) -> Option<FeatureColumn> {
        self.histogram
    }

    pub fn scatter_x(&self) -> Option<FeatureColumn> {
        self.scatter_x
    }

    pub fn scatter_y(&self) -> Option<FeatureColumn> {
        self.scatter_y
    }

    /// Default histogram / X column: the first selected.
    pub fn default_primary(&self) -> Option<FeatureColumn> {
        self.selected.first().copied()
    }

    /// Default Y column: the second selected, else the first.
    pub fn default_secondary(&self) -> Option<FeatureColumn> {
        self.selected.get(1).or(self.selected.first()).copied()
    }

    /// Add or remove a column from the selection.
    ///
    /// The choosers list the selected columns, so any change to the
    /// selection starts every choice over at its default.
    pub fn set_selected(&mut self, column: FeatureColumn, on: bool) {
        let before = self.selected.len();
        if on {
            if !self.selected.contains(&column) {
                self.selected.push(column);
            }
        } else {
            self.selected.retain(|c| *c != column);
        }

        if self.selected.len() != before {
            self.histogram = None;
            self.scatter_x = None;
            self.scatter_y = None;
        }
        self.revalidate();
    }

    /// Choose the histogram column. Ignored unless `column` is selected.
    pub fn choose_histogram(&mut self, column: FeatureColumn) {
        if self.is_selected(column) {
            self.histogram = Some(column);
        }
    }

    /// Choose the scatter X column. Ignored unless `column` is selected.
    pub fn choose_x(&mut self, column: FeatureColumn) {
        if self.is_selected(column) {
            self.scatter_x = Some(column);
        }
    }

    /// Choose the scatter Y column. Ignored unless `column` is selected.
    pub fn choose_y(&mut self, column: FeatureColumn) {
        if self.is_selected(column) {
            self.scatter_y = Some(column);
        }
    }

    /// Keep choices that are still selected; fill the rest with defaults.
    fn revalidate(&mut self) {
        let keep = |choice: Option<FeatureColumn>, selected: &[FeatureColumn]| {
            choice.filter(|c| selected.contains(c))
        };
        self.histogram = keep(self.histogram, &self.selected).or(self.default_primary());
        self.scatter_x = keep(self.scatter_x, &self.selected).or(self.default_primary());
        self.scatter_y = keep(self.scatter_y, &self.selected).or(self.default_secondary());
    }
}
