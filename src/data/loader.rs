use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use super::model::Song;

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

/// Malformed-content errors the loader distinguishes on its own; everything
/// else (I/O, missing columns, unparseable numbers) surfaces through the
/// csv/serde error chain with anyhow context.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("unrecognised explicit flag '{0}' (expected True/False)")]
    BadExplicitFlag(String),
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Raw CSV record
// ---------------------------------------------------------------------------

/// One CSV record as written by the upstream export: `explicit` is a
/// pandas-style boolean string and `genre` a single delimited string.
#[derive(Debug, Deserialize)]
struct RawRecord {
    artist: String,
    song: String,
    duration_ms: i64,
    explicit: String,
    year: i32,
    popularity: f64,
    danceability: f64,
    energy: f64,
    key: i32,
    loudness: f64,
    mode: i32,
    speechiness: f64,
    acousticness: f64,
    instrumentalness: f64,
    liveness: f64,
    valence: f64,
    tempo: f64,
    genre: String,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the song table from a CSV file with the fixed known schema.
/// Any failure here is a fatal startup error.
pub fn load_csv(path: &Path) -> Result<Vec<Song>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_songs(file)
}

/// Parse songs from any CSV byte stream (header row required).
pub fn read_songs<R: Read>(input: R) -> Result<Vec<Song>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut songs = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let song = convert(raw).with_context(|| format!("CSV row {row_no}"))?;
        songs.push(song);
    }

    if songs.is_empty() {
        bail!(DataError::Empty);
    }
    Ok(songs)
}

fn convert(raw: RawRecord) -> Result<Song> {
    let explicit = parse_explicit_flag(&raw.explicit)?;
    Ok(Song {
        artist: raw.artist,
        title: raw.song,
        genre: split_genres(&raw.genre),
        explicit,
        year: raw.year,
        popularity: raw.popularity,
        duration_ms: raw.duration_ms,
        danceability: raw.danceability,
        energy: raw.energy,
        key: raw.key,
        loudness: raw.loudness,
        mode: raw.mode,
        speechiness: raw.speechiness,
        acousticness: raw.acousticness,
        instrumentalness: raw.instrumentalness,
        liveness: raw.liveness,
        valence: raw.valence,
        tempo: raw.tempo,
    })
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Split a raw genre string on comma or semicolon delimiters; surrounding
/// whitespace is stripped and empty tokens dropped.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accept the pandas capitalisation (`True`/`False`) as well as plain
/// lowercase booleans.
fn parse_explicit_flag(s: &str) -> Result<bool, DataError> {
    match s {
        "True" | "true" => Ok(true),
        "False" | "false" => Ok(false),
        other => Err(DataError::BadExplicitFlag(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "artist,song,duration_ms,explicit,year,popularity,\
danceability,energy,key,loudness,mode,speechiness,acousticness,\
instrumentalness,liveness,valence,tempo,genre";

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn splits_genres_on_comma_and_semicolon_with_optional_whitespace() {
        assert_eq!(split_genres("pop, rock"), ["pop", "rock"]);
        assert_eq!(split_genres("pop;rock"), ["pop", "rock"]);
        assert_eq!(split_genres("hip hop, pop; R&B"), ["hip hop", "pop", "R&B"]);
        assert_eq!(split_genres("pop"), ["pop"]);
        assert_eq!(split_genres(""), Vec::<String>::new());
    }

    #[test]
    fn split_reproduces_the_token_set_under_any_rejoin() {
        let raw = "pop, rock;dance,  latin";
        let tokens = split_genres(raw);
        assert_eq!(split_genres(&tokens.join(",")), tokens);
        assert_eq!(split_genres(&tokens.join("; ")), tokens);
    }

    #[test]
    fn reads_a_well_formed_row() {
        let text = csv_with_rows(&[
            "Britney Spears,Oops!...I Did It Again,211160,False,2000,77,\
0.751,0.834,1,-5.444,0,0.0437,0.3,1.77e-05,0.355,0.894,95.053,\"pop, rock\"",
        ]);
        let songs = read_songs(text.as_bytes()).unwrap();
        assert_eq!(songs.len(), 1);
        let s = &songs[0];
        assert_eq!(s.artist, "Britney Spears");
        assert_eq!(s.title, "Oops!...I Did It Again");
        assert_eq!(s.genre, ["pop", "rock"]);
        assert!(!s.explicit);
        assert_eq!(s.year, 2000);
        assert_eq!(s.popularity, 77.0);
        assert_eq!(s.tempo, 95.053);
    }

    #[test]
    fn accepts_pandas_and_lowercase_explicit_flags() {
        let text = csv_with_rows(&[
            "A,x,1000,True,2001,10,0.1,0.1,0,-3.0,1,0.0,0.0,0.0,0.1,0.5,100.0,pop",
            "B,y,1000,false,2002,20,0.1,0.1,0,-3.0,1,0.0,0.0,0.0,0.1,0.5,100.0,rock",
        ]);
        let songs = read_songs(text.as_bytes()).unwrap();
        assert!(songs[0].explicit);
        assert!(!songs[1].explicit);
    }

    #[test]
    fn rejects_an_unrecognised_explicit_flag() {
        let text = csv_with_rows(&[
            "A,x,1000,maybe,2001,10,0.1,0.1,0,-3.0,1,0.0,0.0,0.0,0.1,0.5,100.0,pop",
        ]);
        let err = read_songs(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("CSV row 0"));
    }

    #[test]
    fn rejects_an_empty_dataset() {
        let text = csv_with_rows(&[]);
        let err = read_songs(text.as_bytes()).unwrap_err();
        assert_eq!(err.downcast::<DataError>().unwrap(), DataError::Empty);
    }

    #[test]
    fn rejects_a_malformed_numeric_field() {
        let text = csv_with_rows(&[
            "A,x,1000,True,not-a-year,10,0.1,0.1,0,-3.0,1,0.0,0.0,0.0,0.1,0.5,100.0,pop",
        ]);
        assert!(read_songs(text.as_bytes()).is_err());
    }
}
