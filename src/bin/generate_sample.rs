//! Writes a deterministic `songs_normalize.csv` so the dashboard can be
//! run without the real dataset export.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform float in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let artists = [
        "Aurora Lane", "The Midnight Vats", "DJ Cardamom", "Petra & The Pines",
        "Silver Harbor", "Mono Ghost", "Los Faros", "Velvet Antenna",
        "Kite County", "June Atlas",
    ];
    let title_heads = [
        "Neon", "Paper", "Golden", "Broken", "Silent", "Electric", "Midnight",
        "Crimson", "Hollow", "Wild",
    ];
    let title_tails = [
        "Hearts", "Highway", "Summer", "Echoes", "Lights", "Waves", "Letters",
        "Gardens", "Motels", "Static",
    ];
    // Multi-valued genres use the same comma delimiter as the real export.
    let genres = [
        "pop", "rock", "pop, dance", "hip hop", "hip hop, rap", "latin",
        "metal", "pop, R&B", "country", "electro; house",
    ];

    let output_path = "songs_normalize.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "artist", "song", "duration_ms", "explicit", "year", "popularity",
            "danceability", "energy", "key", "loudness", "mode", "speechiness",
            "acousticness", "instrumentalness", "liveness", "valence", "tempo",
            "genre",
        ])
        .expect("Failed to write header");

    let n_rows = 500;
    for i in 0..n_rows {
        let artist = *rng.pick(&artists);
        let song = format!("{} {}", rng.pick(&title_heads), rng.pick(&title_tails));
        let duration_ms = (rng.range(150_000.0, 300_000.0)) as i64;
        let explicit = if rng.next_f64() < 0.25 { "True" } else { "False" };
        let year = 1998 + (rng.next_u64() % 23) as i32;
        let popularity = rng.gauss(60.0, 15.0).clamp(0.0, 100.0).round();
        let key = (rng.next_u64() % 12) as i32;
        let mode = (rng.next_u64() % 2) as i32;
        let genre = *rng.pick(&genres);

        let record = [
            artist.to_string(),
            song,
            duration_ms.to_string(),
            explicit.to_string(),
            year.to_string(),
            format!("{popularity:.0}"),
            format!("{:.3}", rng.range(0.2, 0.95)),
            format!("{:.3}", rng.range(0.2, 0.98)),
            key.to_string(),
            format!("{:.3}", rng.range(-12.0, -2.0)),
            mode.to_string(),
            format!("{:.4}", rng.range(0.02, 0.4)),
            format!("{:.4}", rng.range(0.0, 0.8)),
            format!("{:.4}", rng.range(0.0, 0.05)),
            format!("{:.4}", rng.range(0.05, 0.5)),
            format!("{:.3}", rng.range(0.1, 0.95)),
            format!("{:.3}", rng.range(70.0, 180.0)),
            genre.to_string(),
        ];
        writer
            .write_record(&record)
            .unwrap_or_else(|e| panic!("Failed to write row {i}: {e}"));
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} songs to {output_path}");
}
