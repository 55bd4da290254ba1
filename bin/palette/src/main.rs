use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use image::RgbImage;
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use rand::{rngs::StdRng, SeedableRng};
use swatch::{
    adjust_brightness, color_name, contrast_text_color, random_color, Component, Input,
    NamedColor, Picker, PickerConfig, Rgb, Space, BRAND_COLORS, PRESET_COLORS,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WIDTH: u32 = 960;
const BAND_HEIGHT: u32 = 80;
const BANDS: u32 = 6;

/// Render the palettes around a color to an image.
#[derive(Parser, Debug)]
struct Args {
    /// The color to start from, in any supported notation.
    #[arg(short, long, default_value("#007bff"))]
    color: String,

    /// Pick a random color from this seed instead of using `--color`.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value("palette.png"))]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatch=debug,swatch_palette=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = PickerConfig {
        initial_color: args.color.clone(),
        ..PickerConfig::default()
    };
    let mut picker = Picker::from_config(&config)
        .with_context(|| format!("could not parse color {:?}", args.color))?;

    if let Some(seed) = args.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        picker.update(Input::Rgb(random_color(&mut rng)));
    }

    let swatch = *picker.swatch();
    info!(name = color_name(&swatch.rgb()), "selected {}", swatch.display_code());
    for space in Space::ALL {
        info!("{:>5}: {}", space.label(), swatch.format(space));
    }

    let mut img = RgbImage::new(WIDTH, BAND_HEIGHT * BANDS);

    // The selected color with a stripe in its contrasting text color.
    fill(&mut img, 0, 0, WIDTH, swatch.rgb());
    let stripe = contrast_text_color(&swatch.rgb()).to_rgb();
    draw_filled_rect_mut(
        &mut img,
        Rect::at(0, (BAND_HEIGHT / 2 - 4) as i32).of_size(WIDTH, 8),
        pixel(stripe),
    );

    draw_named(&mut img, 1, &PRESET_COLORS);
    draw_named(&mut img, 2, &BRAND_COLORS);

    let hsb = swatch.hsb();
    draw_ramp(&mut img, 3, |t| hsb.with_hue(t * 360.0).to_rgb());

    let hsl = swatch.hsl();
    draw_ramp(&mut img, 4, |t| hsl.with_lightness(t * 100.0).to_rgb());

    let rgb = swatch.rgb();
    draw_ramp(&mut img, 5, |t| adjust_brightness(&rgb, t * 200.0 - 100.0));

    img.save(&args.output)
        .with_context(|| format!("could not write image to {}", args.output.display()))?;
    info!(output = %args.output.display(), "palette written");

    Ok(())
}

fn pixel(rgb: Rgb) -> image::Rgb<u8> {
    image::Rgb([rgb.red, rgb.green, rgb.blue])
}

fn fill(img: &mut RgbImage, band: u32, x: u32, width: u32, rgb: Rgb) {
    draw_filled_rect_mut(
        img,
        Rect::at(x as i32, (band * BAND_HEIGHT) as i32).of_size(width, BAND_HEIGHT),
        pixel(rgb),
    );
}

fn draw_named(img: &mut RgbImage, band: u32, colors: &[NamedColor]) {
    let width = WIDTH / colors.len() as u32;
    for (i, named) in colors.iter().enumerate() {
        debug!(name = named.name, hex = %named.hex(), "cell");
        fill(img, band, i as u32 * width, width, named.color);
    }
}

fn draw_ramp(img: &mut RgbImage, band: u32, color_at: impl Fn(Component) -> Rgb) {
    for x in 0..WIDTH {
        let t = x as Component / (WIDTH - 1) as Component;
        let color = pixel(color_at(t));
        for y in band * BAND_HEIGHT..(band + 1) * BAND_HEIGHT {
            img.put_pixel(x, y, color);
        }
    }
}
