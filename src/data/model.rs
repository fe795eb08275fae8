use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Song – one row of the dataset
// ---------------------------------------------------------------------------

/// A single song (one row of the source CSV) with the genre string already
/// split into tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub artist: String,
    /// Track title (the CSV column is named `song`).
    pub title: String,
    /// Genre tokens, split from the raw delimited string.
    pub genre: Vec<String>,
    pub explicit: bool,
    pub year: i32,
    pub popularity: f64,
    pub duration_ms: i64,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
}

// ---------------------------------------------------------------------------
// NumericField – the columns selectable as scatter axes
// ---------------------------------------------------------------------------

/// The numeric columns a scatter axis can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    DurationMs,
    Year,
    Popularity,
    Danceability,
    Energy,
    Key,
    Loudness,
    Mode,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Tempo,
}

impl NumericField {
    pub const ALL: [NumericField; 14] = [
        NumericField::DurationMs,
        NumericField::Year,
        NumericField::Popularity,
        NumericField::Danceability,
        NumericField::Energy,
        NumericField::Key,
        NumericField::Loudness,
        NumericField::Mode,
        NumericField::Speechiness,
        NumericField::Acousticness,
        NumericField::Instrumentalness,
        NumericField::Liveness,
        NumericField::Valence,
        NumericField::Tempo,
    ];

    /// Column name as it appears in the CSV header.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::DurationMs => "duration_ms",
            NumericField::Year => "year",
            NumericField::Popularity => "popularity",
            NumericField::Danceability => "danceability",
            NumericField::Energy => "energy",
            NumericField::Key => "key",
            NumericField::Loudness => "loudness",
            NumericField::Mode => "mode",
            NumericField::Speechiness => "speechiness",
            NumericField::Acousticness => "acousticness",
            NumericField::Instrumentalness => "instrumentalness",
            NumericField::Liveness => "liveness",
            NumericField::Valence => "valence",
            NumericField::Tempo => "tempo",
        }
    }

    /// Read this field from a song as an `f64` for plotting.
    pub fn value(self, song: &Song) -> f64 {
        match self {
            NumericField::DurationMs => song.duration_ms as f64,
            NumericField::Year => song.year as f64,
            NumericField::Popularity => song.popularity,
            NumericField::Danceability => song.danceability,
            NumericField::Energy => song.energy,
            NumericField::Key => song.key as f64,
            NumericField::Loudness => song.loudness,
            NumericField::Mode => song.mode as f64,
            NumericField::Speechiness => song.speechiness,
            NumericField::Acousticness => song.acousticness,
            NumericField::Instrumentalness => song.instrumentalness,
            NumericField::Liveness => song.liveness,
            NumericField::Valence => song.valence,
            NumericField::Tempo => song.tempo,
        }
    }
}

// ---------------------------------------------------------------------------
// Category – the columns rows can be filtered / grouped by
// ---------------------------------------------------------------------------

/// The categorical columns used for filtering and scatter coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Artist,
    Song,
    Explicit,
    Genre,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Artist,
        Category::Song,
        Category::Explicit,
        Category::Genre,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Artist => "artist",
            Category::Song => "song",
            Category::Explicit => "explicit",
            Category::Genre => "genre",
        }
    }

    /// The label a song contributes to when grouping by this category.
    /// Genre uses the first token; a song with no genre falls into "unknown".
    pub fn group_label(self, song: &Song) -> String {
        match self {
            Category::Artist => song.artist.clone(),
            Category::Song => song.title.clone(),
            Category::Explicit => song.explicit.to_string(),
            Category::Genre => song
                .genre
                .first()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// GenreEntry – one row of the exploded table
// ---------------------------------------------------------------------------

/// One exploded row: a song index paired with a single genre token.
/// All non-genre fields are read through `row`, so every copy reproduces
/// the original song's fields exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreEntry {
    pub row: usize,
    pub genre: String,
}

// ---------------------------------------------------------------------------
// DataContext – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable data context every query function is handed: the song
/// table, its exploded genre view, and the value lists that populate the
/// selection widgets. Derived once at load time, never mutated.
#[derive(Debug, Clone)]
pub struct DataContext {
    /// All songs (rows), in file order.
    pub songs: Vec<Song>,
    /// One entry per (song, genre token) pair.
    pub exploded: Vec<GenreEntry>,
    /// Sorted unique artist names.
    pub artists: Vec<String>,
    /// Sorted unique track titles.
    pub titles: Vec<String>,
    /// Sorted unique genre tokens.
    pub genres: Vec<String>,
    /// Inclusive year bounds of the dataset.
    pub year_min: i32,
    pub year_max: i32,
}

impl DataContext {
    /// Build the exploded view and selector value lists from loaded songs.
    pub fn from_songs(songs: Vec<Song>) -> Self {
        let mut exploded = Vec::new();
        let mut artists: BTreeSet<String> = BTreeSet::new();
        let mut titles: BTreeSet<String> = BTreeSet::new();
        let mut genres: BTreeSet<String> = BTreeSet::new();
        let mut year_min = i32::MAX;
        let mut year_max = i32::MIN;

        for (row, song) in songs.iter().enumerate() {
            artists.insert(song.artist.clone());
            titles.insert(song.title.clone());
            year_min = year_min.min(song.year);
            year_max = year_max.max(song.year);
            for token in &song.genre {
                genres.insert(token.clone());
                exploded.push(GenreEntry {
                    row,
                    genre: token.clone(),
                });
            }
        }

        if songs.is_empty() {
            year_min = 0;
            year_max = 0;
        }

        DataContext {
            songs,
            exploded,
            artists: artists.into_iter().collect(),
            titles: titles.into_iter().collect(),
            genres: genres.into_iter().collect(),
            year_min,
            year_max,
        }
    }

    /// Number of songs.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// The unique values a filter on `category` can select from.
    pub fn category_values(&self, category: Category) -> Vec<String> {
        match category {
            Category::Artist => self.artists.clone(),
            Category::Song => self.titles.clone(),
            Category::Explicit => vec!["false".to_string(), "true".to_string()],
            Category::Genre => self.genres.clone(),
        }
    }
}
