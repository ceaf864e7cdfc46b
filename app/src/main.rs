use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use displace_core::{Artwork, Axis, Mutator, Preset, Settings, SettingsFile};
use image::RgbaImage;
use log::info;

/// Displace an image through two fields of fractal noise
#[derive(Parser, Debug)]
#[command(name = "displace")]
#[command(about = "Generative art from noise displacement maps", long_about = None)]
struct Args {
    /// Source image to displace; without one only the noise fields are drawn
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Noise seed; defaults to the current time in milliseconds
    #[arg(long)]
    seed: Option<u64>,

    /// Named preset, see --list-presets
    #[arg(long, default_value = "default")]
    preset: String,

    /// JSON settings file, used instead of the preset
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Output width in pixels
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Directory the PNG files are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Print the preset names and exit
    #[arg(long)]
    list_presets: bool,
}

impl Args {
    fn load_settings(&self) -> Result<Settings> {
        match &self.settings {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings file {}", path.display()))?;
                let file = SettingsFile::from_json(&text)
                    .with_context(|| format!("failed to parse {}", path.display()))?;
                info!("Settings: {}", path.display());
                Ok(file.resolve()?)
            }
            None => {
                let preset: Preset = self.preset.parse()?;
                info!("Preset: {}", preset.name());
                Ok(preset.settings()?)
            }
        }
    }

    fn seed(&self) -> Result<u64> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .context("system clock is before the UNIX epoch")?;
                Ok(now.as_millis() as u64)
            }
        }
    }
}

// Comma separated mutator names, outermost first
fn mutator_names(mutators: &[Mutator]) -> String {
    if mutators.is_empty() {
        return "none".to_string();
    }
    mutators
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("failed to load {}", path.display()))?;
    Ok(img.to_rgba8())
}

fn save(img: &RgbaImage, dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    img.save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Saved {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_presets {
        for preset in Preset::ALL {
            println!("{}", preset.name());
        }
        return Ok(());
    }

    let settings = args.load_settings()?;
    let seed = args.seed()?;
    // Load the source first so a bad path fails before any noise is generated
    let source = args.image.as_deref().map(load_image).transpose()?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let started = Instant::now();
    let art = Artwork::new(args.width, args.height, seed, &settings);
    for axis in [Axis::X, Axis::Y] {
        info!(
            "{} mutators: {}",
            axis,
            mutator_names(&settings.axis(axis).mutators)
        );
    }
    save(&art.noise_image(Axis::X), &args.out_dir, "noise-x.png")?;
    save(&art.noise_image(Axis::Y), &args.out_dir, "noise-y.png")?;

    if let Some(source) = &source {
        save(&art.render(source), &args.out_dir, "art.png")?;
    }

    println!("Seed {} done in {:.2?}", art.seed(), started.elapsed());
    Ok(())
}
