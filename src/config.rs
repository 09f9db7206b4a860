// Command line -> validated run configuration.
// Sizes left unset fall back to each demo's own defaults.

use crate::error::Error;
use crate::{fire, ramp, waves};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Radial color waves
    Circles,
    /// Mouse-fed fire
    Fire,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Which demo to run
    #[arg(value_enum, default_value_t = Demo::Fire)]
    pub demo: Demo,

    /// Window width in pixels
    #[arg(long)]
    pub display_width: Option<usize>,

    /// Window height in pixels
    #[arg(long)]
    pub display_height: Option<usize>,

    /// Off-screen image (and fire field) width
    #[arg(long)]
    pub image_width: Option<usize>,

    /// Off-screen image (and fire field) height
    #[arg(long)]
    pub image_height: Option<usize>,

    /// Fire: radius of the heat disc under the mouse, in field cells
    #[arg(long, default_value_t = fire::DEFAULT_RADIUS)]
    pub radius: i32,

    /// Fire: number of entries in the color ramp
    #[arg(long, default_value_t = ramp::DEFAULT_RAMP_LEN)]
    pub ramp_len: usize,

    /// Hide the FPS overlay
    #[arg(long)]
    pub no_stats: bool,

    /// Run N frames without a window, then exit
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Headless: simulated milliseconds per frame
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    /// Headless: fixed pointer x in display pixels (default: center)
    #[arg(long)]
    pub pointer_x: Option<i32>,

    /// Headless: fixed pointer y in display pixels (default: center)
    #[arg(long)]
    pub pointer_y: Option<i32>,

    /// Headless: write the last frame to this PNG
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub demo: Demo,
    pub display: (usize, usize),
    pub image: (usize, usize),
    pub radius: i32,
    pub ramp_len: usize,
    pub show_stats: bool,
    pub headless: Option<Headless>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Headless {
    pub frames: u64,
    pub frame_ms: u64,
    pub pointer: (i32, i32),
    pub snapshot: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, Error> {
        let (default_display, default_image) = match args.demo {
            Demo::Circles => (waves::DEFAULT_DISPLAY_SIZE, waves::DEFAULT_IMAGE_SIZE),
            Demo::Fire => (fire::DEFAULT_DISPLAY_SIZE, fire::DEFAULT_FIELD_SIZE),
        };
        let display = (
            args.display_width.unwrap_or(default_display.0),
            args.display_height.unwrap_or(default_display.1),
        );
        let image = (
            args.image_width.unwrap_or(default_image.0),
            args.image_height.unwrap_or(default_image.1),
        );

        if display.0 == 0 || display.1 == 0 {
            return Err(Error::Config(format!("display size {}x{} is empty", display.0, display.1)));
        }
        if image.0 == 0 || image.1 == 0 {
            return Err(Error::Config(format!("image size {}x{} is empty", image.0, image.1)));
        }
        if args.radius <= 0 {
            return Err(Error::Config(format!("radius must be positive, got {}", args.radius)));
        }
        if args.ramp_len < 2 {
            return Err(Error::Config(format!("ramp needs at least 2 colors, got {}", args.ramp_len)));
        }

        let headless = match args.headless {
            Some(frames) => {
                if args.frame_ms == 0 {
                    return Err(Error::Config("frame-ms must be positive".into()));
                }
                Some(Headless {
                    frames,
                    frame_ms: args.frame_ms,
                    pointer: (
                        args.pointer_x.unwrap_or(display.0 as i32 / 2),
                        args.pointer_y.unwrap_or(display.1 as i32 / 2),
                    ),
                    snapshot: args.snapshot,
                })
            }
            None if args.snapshot.is_some() => {
                return Err(Error::Config("--snapshot only works together with --headless".into()));
            }
            None => None,
        };

        Ok(Self {
            demo: args.demo,
            display,
            image,
            radius: args.radius,
            ramp_len: args.ramp_len,
            show_stats: !args.no_stats,
            headless,
        })
    }
}
