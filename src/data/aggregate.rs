use std::collections::BTreeMap;

use super::model::DataContext;

// ---------------------------------------------------------------------------
// Aggregate rows – flat (group key, metric) tables consumed by the charts
// ---------------------------------------------------------------------------

/// Songs per genre token over an exploded view.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub song_count: usize,
}

/// Songs per explicit flag over a row view.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitCount {
    pub explicit: bool,
    pub song_count: usize,
}

/// Mean popularity of one (year, genre) group.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub genre: String,
    pub mean_popularity: f64,
}

// ---------------------------------------------------------------------------
// Group-by-count / group-by-mean
// ---------------------------------------------------------------------------

/// Count exploded entries per genre token. Output is sorted by genre.
pub fn count_by_genre(ctx: &DataContext, entries: &[usize]) -> Vec<GenreCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in entries {
        *counts.entry(ctx.exploded[i].genre.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(genre, song_count)| GenreCount {
            genre: genre.to_string(),
            song_count,
        })
        .collect()
}

/// Count rows per explicit flag. At most two groups; groups with no rows
/// are omitted.
pub fn count_by_explicit(ctx: &DataContext, rows: &[usize]) -> Vec<ExplicitCount> {
    let mut counts: BTreeMap<bool, usize> = BTreeMap::new();
    for &i in rows {
        *counts.entry(ctx.songs[i].explicit).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(explicit, song_count)| ExplicitCount {
            explicit,
            song_count,
        })
        .collect()
}

/// Arithmetic mean of popularity per (year, genre) group over an exploded
/// view. Output is sorted by year, then genre.
pub fn mean_popularity_by_year_genre(ctx: &DataContext, entries: &[usize]) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<(i32, &str), (f64, usize)> = BTreeMap::new();
    for &i in entries {
        let entry = &ctx.exploded[i];
        let song = &ctx.songs[entry.row];
        let acc = groups
            .entry((song.year, entry.genre.as_str()))
            .or_insert((0.0, 0));
        acc.0 += song.popularity;
        acc.1 += 1;
    }
    groups
        .into_iter()
        .map(|((year, genre), (sum, n))| TrendPoint {
            year,
            genre: genre.to_string(),
            mean_popularity: sum / n as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::song;

    fn all_entries(ctx: &DataContext) -> Vec<usize> {
        (0..ctx.exploded.len()).collect()
    }

    fn all_rows(ctx: &DataContext) -> Vec<usize> {
        (0..ctx.songs.len()).collect()
    }

    #[test]
    fn counts_songs_per_genre() {
        let ctx = DataContext::from_songs(vec![
            song("A", "one", &["pop"], 2000, 50.0),
            song("B", "two", &["pop"], 2001, 60.0),
            song("C", "three", &["rock"], 2002, 70.0),
        ]);
        let counts = count_by_genre(&ctx, &all_entries(&ctx));
        assert_eq!(
            counts,
            [
                GenreCount {
                    genre: "pop".into(),
                    song_count: 2
                },
                GenreCount {
                    genre: "rock".into(),
                    song_count: 1
                },
            ]
        );
    }

    #[test]
    fn counts_explicit_flags_into_exactly_two_groups() {
        let mut songs = vec![
            song("A", "one", &["pop"], 2000, 50.0),
            song("B", "two", &["pop"], 2001, 60.0),
            song("C", "three", &["rock"], 2002, 70.0),
        ];
        songs[0].explicit = true;
        songs[1].explicit = true;
        let ctx = DataContext::from_songs(songs);

        let counts = count_by_explicit(&ctx, &all_rows(&ctx));
        assert_eq!(counts.len(), 2);
        assert_eq!(
            counts,
            [
                ExplicitCount {
                    explicit: false,
                    song_count: 1
                },
                ExplicitCount {
                    explicit: true,
                    song_count: 2
                },
            ]
        );
    }

    #[test]
    fn means_popularity_per_year_and_genre() {
        let ctx = DataContext::from_songs(vec![
            song("A", "one", &["pop"], 2010, 50.0),
            song("B", "two", &["pop"], 2010, 70.0),
            song("C", "three", &["pop"], 2011, 90.0),
        ]);
        let trend = mean_popularity_by_year_genre(&ctx, &all_entries(&ctx));
        assert_eq!(
            trend,
            [
                TrendPoint {
                    year: 2010,
                    genre: "pop".into(),
                    mean_popularity: 60.0
                },
                TrendPoint {
                    year: 2011,
                    genre: "pop".into(),
                    mean_popularity: 90.0
                },
            ]
        );
    }

    #[test]
    fn multi_genre_rows_contribute_to_each_of_their_groups() {
        let ctx = DataContext::from_songs(vec![song("A", "one", &["pop", "rock"], 2000, 40.0)]);
        let counts = count_by_genre(&ctx, &all_entries(&ctx));
        assert_eq!(counts.len(), 2);
        assert!(counts.iter().all(|c| c.song_count == 1));
    }

    #[test]
    fn empty_views_aggregate_to_empty_tables() {
        let ctx = DataContext::from_songs(vec![song("A", "one", &["pop"], 2000, 50.0)]);
        assert!(count_by_genre(&ctx, &[]).is_empty());
        assert!(count_by_explicit(&ctx, &[]).is_empty());
        assert!(mean_popularity_by_year_genre(&ctx, &[]).is_empty());
    }
}
