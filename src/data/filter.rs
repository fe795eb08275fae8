use std::fmt;

use super::model::{Category, DataContext, Song};

// ---------------------------------------------------------------------------
// Filter selection: which value of the chosen category is active
// ---------------------------------------------------------------------------

/// The value selected for the active filter category. `All` is the
/// sentinel no-op filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    All,
    Is(String),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::All => write!(f, "All"),
            FilterValue::Is(v) => write!(f, "{v}"),
        }
    }
}

/// Whether a song matches `value` under the given category. Genre matches
/// by token containment, so a multi-genre row matches at most once.
fn row_matches(song: &Song, category: Category, value: &str) -> bool {
    match category {
        Category::Artist => song.artist == value,
        Category::Song => song.title == value,
        Category::Explicit => song.explicit.to_string() == value,
        Category::Genre => song.genre.iter().any(|g| g == value),
    }
}

/// Row indices of the original table passing the category filter.
/// An empty result is valid and renders as an empty table/chart.
pub fn filter_rows(ctx: &DataContext, category: Category, value: &FilterValue) -> Vec<usize> {
    let FilterValue::Is(value) = value else {
        return (0..ctx.songs.len()).collect();
    };
    ctx.songs
        .iter()
        .enumerate()
        .filter(|(_, song)| row_matches(song, category, value))
        .map(|(i, _)| i)
        .collect()
}

/// Indices into the exploded table passing the category filter and the
/// inclusive year range. Genre filters compare each entry's own token;
/// every other category is read through the entry's source row.
pub fn filter_exploded(
    ctx: &DataContext,
    category: Category,
    value: &FilterValue,
    year_range: (i32, i32),
) -> Vec<usize> {
    let (lo, hi) = year_range;
    ctx.exploded
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            let song = &ctx.songs[entry.row];
            if song.year < lo || song.year > hi {
                return false;
            }
            match value {
                FilterValue::All => true,
                FilterValue::Is(v) => match category {
                    Category::Genre => entry.genre == *v,
                    _ => row_matches(song, category, v),
                },
            }
        })
        .map(|(i, _)| i)
        .collect()
}

/// Row indices of the original table within the inclusive year range,
/// ignoring the category filter.
pub fn rows_in_year_range(ctx: &DataContext, year_range: (i32, i32)) -> Vec<usize> {
    let (lo, hi) = year_range;
    ctx.songs
        .iter()
        .enumerate()
        .filter(|(_, song)| song.year >= lo && song.year <= hi)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::song;

    fn ctx() -> DataContext {
        DataContext::from_songs(vec![
            song("Britney Spears", "one", &["pop", "rock"], 2000, 70.0),
            song("Eminem", "two", &["hip hop"], 2005, 80.0),
            song("Daft Punk", "three", &["electro", "pop"], 2015, 60.0),
        ])
    }

    #[test]
    fn the_all_sentinel_returns_the_full_table_unchanged() {
        let ctx = ctx();
        let rows = filter_rows(&ctx, Category::Genre, &FilterValue::All);
        assert_eq!(rows, [0, 1, 2]);
    }

    #[test]
    fn genre_filter_returns_a_multi_genre_row_exactly_once() {
        let ctx = ctx();
        let rows = filter_rows(&ctx, Category::Genre, &FilterValue::Is("pop".into()));
        assert_eq!(rows, [0, 2]);
    }

    #[test]
    fn artist_filter_selects_only_matching_rows() {
        let ctx = ctx();
        let rows = filter_rows(&ctx, Category::Artist, &FilterValue::Is("Eminem".into()));
        assert_eq!(rows, [1]);
    }

    #[test]
    fn explicit_filter_matches_the_flag_text() {
        let ctx = ctx();
        let rows = filter_rows(&ctx, Category::Explicit, &FilterValue::Is("false".into()));
        assert_eq!(rows, [0, 1, 2]);
        let rows = filter_rows(&ctx, Category::Explicit, &FilterValue::Is("true".into()));
        assert!(rows.is_empty());
    }

    #[test]
    fn year_range_is_inclusive_and_excludes_outsiders() {
        let ctx = ctx();
        let rows = rows_in_year_range(&ctx, (2000, 2010));
        assert_eq!(rows, [0, 1]);
        let entries = filter_exploded(&ctx, Category::Genre, &FilterValue::All, (2000, 2010));
        let genres: Vec<&str> = entries
            .iter()
            .map(|&i| ctx.exploded[i].genre.as_str())
            .collect();
        assert_eq!(genres, ["pop", "rock", "hip hop"]);
    }

    #[test]
    fn exploded_genre_filter_compares_the_entry_token() {
        let ctx = ctx();
        let entries = filter_exploded(
            &ctx,
            Category::Genre,
            &FilterValue::Is("pop".into()),
            (ctx.year_min, ctx.year_max),
        );
        assert_eq!(entries.len(), 2);
        for &i in &entries {
            assert_eq!(ctx.exploded[i].genre, "pop");
        }
    }

    #[test]
    fn exploded_artist_filter_reads_through_the_source_row() {
        let ctx = ctx();
        let entries = filter_exploded(
            &ctx,
            Category::Artist,
            &FilterValue::Is("Daft Punk".into()),
            (ctx.year_min, ctx.year_max),
        );
        let genres: Vec<&str> = entries
            .iter()
            .map(|&i| ctx.exploded[i].genre.as_str())
            .collect();
        assert_eq!(genres, ["electro", "pop"]);
    }

    #[test]
    fn an_unmatched_value_yields_a_valid_empty_result() {
        let ctx = ctx();
        assert!(filter_rows(&ctx, Category::Song, &FilterValue::Is("nope".into())).is_empty());
        assert!(filter_exploded(
            &ctx,
            Category::Genre,
            &FilterValue::Is("nope".into()),
            (ctx.year_min, ctx.year_max)
        )
        .is_empty());
    }
}
