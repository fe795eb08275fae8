use crate::color::ColorMap;
use crate::data::aggregate::{self, ExplicitCount, GenreCount, TrendPoint};
use crate::data::filter::{self, FilterValue};
use crate::data::model::{Category, DataContext, NumericField};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering: the immutable data context,
/// the user's selections, and the derived views recomputed from them.
pub struct AppState {
    /// Loaded dataset; never mutated after startup.
    pub data: DataContext,

    /// Scatter axis selections.
    pub x_axis: NumericField,
    pub y_axis: NumericField,

    /// Which category colours the scatter points.
    pub scatter_category: Category,

    /// Active filter: category, value, and inclusive year range.
    pub filter_category: Category,
    pub filter_value: FilterValue,
    pub year_range: (i32, i32),

    /// Row indices passing the category filter (cached).
    pub filtered_rows: Vec<usize>,

    /// Aggregate tables recomputed on every selection change.
    pub genre_counts: Vec<GenreCount>,
    pub explicit_counts: Vec<ExplicitCount>,
    pub genre_trend: Vec<TrendPoint>,

    /// Colours for the scatter's category groups.
    pub scatter_colors: ColorMap,
    /// Colours for the trend lines, one per genre; fixed for the dataset.
    pub trend_colors: ColorMap,
}

impl AppState {
    /// Build the initial state: everything selected wide open, derived
    /// views computed once.
    pub fn new(data: DataContext) -> Self {
        let scatter_category = Category::Artist;
        let scatter_colors = ColorMap::new(&data.category_values(scatter_category));
        let trend_colors = ColorMap::new(&data.genres);
        let year_range = (data.year_min, data.year_max);

        let mut state = Self {
            data,
            x_axis: NumericField::DurationMs,
            y_axis: NumericField::Popularity,
            scatter_category,
            filter_category: Category::Artist,
            filter_value: FilterValue::All,
            year_range,
            filtered_rows: Vec::new(),
            genre_counts: Vec::new(),
            explicit_counts: Vec::new(),
            genre_trend: Vec::new(),
            scatter_colors,
            trend_colors,
        };
        state.recompute();
        state
    }

    /// Recompute every derived view after a selection change.
    pub fn recompute(&mut self) {
        self.filtered_rows =
            filter::filter_rows(&self.data, self.filter_category, &self.filter_value);

        // Genre-level view: feeds both the histogram and the trend lines.
        let genre_view = filter::filter_exploded(
            &self.data,
            self.filter_category,
            &self.filter_value,
            self.year_range,
        );
        self.genre_counts = aggregate::count_by_genre(&self.data, &genre_view);
        self.genre_trend = aggregate::mean_popularity_by_year_genre(&self.data, &genre_view);

        // The explicit-content split ignores the category filter.
        let year_rows = filter::rows_in_year_range(&self.data, self.year_range);
        self.explicit_counts = aggregate::count_by_explicit(&self.data, &year_rows);
    }

    /// Change the scatter colouring category and rebuild its colour map.
    pub fn set_scatter_category(&mut self, category: Category) {
        self.scatter_category = category;
        self.scatter_colors = ColorMap::new(&self.data.category_values(category));
    }

    /// Change the filter category; the value selection resets to All since
    /// the value list belongs to the previous category.
    pub fn set_filter_category(&mut self, category: Category) {
        self.filter_category = category;
        self.filter_value = FilterValue::All;
        self.recompute();
    }

    /// Set the year range, clamped so from ≤ to.
    pub fn set_year_range(&mut self, from: i32, to: i32) {
        self.year_range = (from.min(to), from.max(to));
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::song;

    fn state() -> AppState {
        AppState::new(DataContext::from_songs(vec![
            song("A", "one", &["pop", "rock"], 2000, 50.0),
            song("B", "two", &["pop"], 2010, 70.0),
            song("C", "three", &["hip hop"], 2015, 90.0),
        ]))
    }

    #[test]
    fn initial_state_shows_everything() {
        let state = state();
        assert_eq!(state.filtered_rows, [0, 1, 2]);
        assert_eq!(state.year_range, (2000, 2015));
        assert_eq!(state.genre_counts.len(), 3);
        assert_eq!(state.explicit_counts.len(), 1);
    }

    #[test]
    fn changing_the_filter_category_resets_the_value() {
        let mut state = state();
        state.filter_value = FilterValue::Is("A".into());
        state.recompute();
        assert_eq!(state.filtered_rows, [0]);

        state.set_filter_category(Category::Genre);
        assert_eq!(state.filter_value, FilterValue::All);
        assert_eq!(state.filtered_rows, [0, 1, 2]);
    }

    #[test]
    fn narrowing_the_year_range_shrinks_the_derived_views() {
        let mut state = state();
        state.set_year_range(2000, 2010);
        let genres: Vec<&str> = state
            .genre_counts
            .iter()
            .map(|c| c.genre.as_str())
            .collect();
        assert_eq!(genres, ["pop", "rock"]);
        assert_eq!(state.explicit_counts[0].song_count, 2);
    }

    #[test]
    fn a_reversed_year_range_is_clamped() {
        let mut state = state();
        state.set_year_range(2012, 2003);
        assert_eq!(state.year_range, (2003, 2012));
    }

    #[test]
    fn genre_filter_narrows_the_trend_to_that_genre() {
        let mut state = state();
        state.set_filter_category(Category::Genre);
        state.filter_value = FilterValue::Is("pop".into());
        state.recompute();
        assert!(state.genre_trend.iter().all(|p| p.genre == "pop"));
        assert_eq!(state.genre_trend.len(), 2);
    }
}
