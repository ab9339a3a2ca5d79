//! Write synthetic IR exports in the vendor CSV layout for trying out `irviz`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use irviz::config::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};

#[derive(Parser)]
#[command(about = "Generate sample IR spectra as vendor CSV exports")]
struct Args {
    /// Directory to write the files into.
    #[arg(default_value = ".")]
    out_dir: PathBuf,

    /// Points per spectrum (4000 cm⁻¹ downwards in 2 cm⁻¹ steps).
    #[arg(long, default_value_t = 1751)]
    points: usize,
}

/// Absorption band: centre, width, depth (fraction of transmission lost).
type Band = (f64, f64, f64);

const SAMPLES: [(&str, &[Band]); 3] = [
    ("ethanol", &[(3350.0, 120.0, 0.55), (2970.0, 25.0, 0.40), (1050.0, 20.0, 0.60)]),
    ("acetone", &[(3000.0, 20.0, 0.20), (1715.0, 15.0, 0.80), (1220.0, 18.0, 0.50)]),
    ("polystyrene", &[(3026.0, 12.0, 0.45), (1601.0, 6.0, 0.35), (698.0, 8.0, 0.85)]),
];

fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Small deterministic noise source (64-bit LCG).
struct Noise(u64);

impl Noise {
    fn next(&mut self, amplitude: f64) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let unit = (self.0 >> 11) as f64 / (1u64 << 53) as f64;
        (unit - 0.5) * 2.0 * amplitude
    }
}

fn transmission(wn: f64, bands: &[Band], noise: &mut Noise) -> f64 {
    let absorbed: f64 = bands
        .iter()
        .map(|&(mu, sigma, depth)| depth * gaussian(wn, mu, sigma))
        .sum();
    (92.0 * (1.0 - absorbed.min(0.98)) + noise.next(0.3)).max(0.0)
}

fn write_export(path: &Path, title: &str, bands: &[Band], points: usize, seed: u64) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["TITLE", title])?;
    writer.write_record(["DATA TYPE", "INFRARED SPECTRUM"])?;
    writer.write_record(["XUNITS", "1/CM"])?;
    writer.write_record(["YUNITS", "%T"])?;
    writer.write_record(["NPOINTS", points.to_string().as_str()])?;
    writer.write_record([DEFAULT_START_MARKER])?;

    let mut noise = Noise(seed);
    for i in 0..points {
        let wn = 4000.0 - 2.0 * i as f64;
        let t = transmission(wn, bands, &mut noise);
        writer.write_record([format!("{wn:.1}"), format!("{t:.4}")])?;
    }

    writer.write_record([DEFAULT_END_MARKER])?;
    writer.write_record(["[Instrument]", "FT-IR"])?;
    writer.write_record(["[Accessory]", "ATR, diamond"])?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for (seed, (name, bands)) in SAMPLES.iter().enumerate() {
        let path = args.out_dir.join(format!("{name}.csv"));
        write_export(&path, name, bands, args.points, seed as u64 + 1)?;
        println!("Wrote {} ({} points)", path.display(), args.points);
    }
    Ok(())
}
