//! termsixel - show images and demo plots in a sixel-capable terminal.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termsixel::{
    imshow_scaled, load_pgm, Figure, Image, LineStyle, Magnify, Palette, Surface, TextStyle,
};

#[derive(Parser)]
#[command(name = "termsixel")]
#[command(version)]
#[command(about = "Show images and simple plots as sixel graphics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Colourmap {
    Gray,
    Hot,
    Jet,
}

#[derive(Subcommand)]
enum Commands {
    /// Display an ASCII PGM image in the terminal
    Show {
        /// Input PGM (P2) file
        input: PathBuf,

        /// Intensity rendered as the first palette entry
        #[arg(long, default_value = "0")]
        min: f64,

        /// Intensity rendered as the last palette entry
        #[arg(long, default_value = "255")]
        max: f64,

        /// Colourmap used for rendering
        #[arg(short, long, value_enum, default_value = "gray")]
        colourmap: Colourmap,

        /// Integer magnification factor
        #[arg(short, long, default_value = "1")]
        magnify: usize,

        /// Leave the lowest intensity undrawn
        #[arg(short, long)]
        transparent: bool,
    },

    /// Render a set of demonstration plots
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            input,
            min,
            max,
            colourmap,
            magnify,
            transparent,
        } => {
            let image: Image<f32> = load_pgm(&input)?;
            log::info!(
                "showing \"{}\", size: {} x {}",
                input.display(),
                image.width(),
                image.height()
            );

            let palette = match colourmap {
                Colourmap::Gray => Palette::gray(101),
                Colourmap::Hot => Palette::hot(101),
                Colourmap::Jet => Palette::jet(101),
            };

            if magnify > 1 {
                let magnified = Magnify::new(&image, magnify);
                imshow_scaled(&magnified, min, max, &palette, transparent)?;
            } else {
                imshow_scaled(&image, min, max, &palette, transparent)?;
            }
        }

        Commands::Demo => {
            let y: Vec<f32> = (0..50)
                .map(|n| (0.2 * n as f32).sin() + 0.3 * (0.33 * n as f32).cos())
                .collect();
            let x: Vec<f32> = (0..50)
                .map(|n| 20.0 + 10.0 * (0.41 * n as f32).cos() + 5.0 * (0.21 * n as f32).sin())
                .collect();

            println!("Plotting arbitrary lines:");
            let mut fig = Figure::new(768, 256);
            fig.plot(&y, LineStyle::default().colour(4).stipple(10, 0.5))?
                .plot_xy(&x, &y, LineStyle::default().colour(3))?
                .text(
                    "sinusoids",
                    (y.len() - 1) as f32 / 2.0,
                    1.2,
                    TextStyle::default().anchor(0.5, 0.0).colour(6),
                )?;
            fig.show()?;

            println!("Plotting pseudo-random noise:");
            let noise: Vec<f32> = {
                let mut state = 0x9e3779b97f4a7c15_u64;
                (0..512)
                    .map(|_| {
                        // sum of uniforms approximates a normal deviate
                        let mut sum = 0.0f32;
                        for _ in 0..12 {
                            state ^= state << 13;
                            state ^= state >> 7;
                            state ^= state << 17;
                            sum += (state >> 40) as f32 / (1u64 << 24) as f32;
                        }
                        5.0 + 2.0 * (sum - 6.0)
                    })
                    .collect()
            };

            let mut fig = Figure::new(1024, 256);
            fig.xticks(50.0)?
                .yticks(2.0)?
                .plot(&noise, LineStyle::default().colour(2))?;
            fig.show()?;
        }
    }

    Ok(())
}
