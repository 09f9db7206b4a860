// Two software-rendered demos on one tiny frame loop:
// • circles: color waves rolling out of the center of the window.
// • fire:    move the mouse; heat pools under it and drifts up as flames.
// ESC or closing the window quits. `--headless N` runs without a window.

mod color;
mod config;
mod draw;
mod effect;
mod error;
mod fire;
mod frame_loop;
mod headless;
mod host;
mod ramp;
mod snapshot;
mod types;
mod waves;

use clap::Parser;
use config::{Args, Config, Demo};
use draw::Drawer;
use effect::Effect;
use error::Error;
use fire::FireSim;
use frame_loop::FrameLoop;
use headless::HeadlessHost;
use log::info;
use waves::RadialWaves;

fn main() -> Result<(), Error> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(Args::parse())?;
    info!("{config:?}");

    match config.demo {
        Demo::Circles => run(RadialWaves::new(config.image.0, config.image.1), &config),
        Demo::Fire => run(
            FireSim::new(config.image.0, config.image.1, config.radius, config.ramp_len),
            &config,
        ),
    }
}

fn run<E: Effect>(effect: E, config: &Config) -> Result<(), Error> {
    let title = effect.name();
    let mut frame_loop = FrameLoop::new(effect, config.display, config.show_stats);

    match &config.headless {
        Some(h) => {
            let mut host = HeadlessHost::new(config.display, h.frames, h.frame_ms, h.pointer);
            frame_loop.run(&mut host)?;
            if let Some(path) = &h.snapshot {
                snapshot::save(host.screen(), path)?;
            }
        }
        None => {
            let mut drawer = Drawer::new(title, config.display.0, config.display.1)?;
            frame_loop.run(&mut drawer)?;
        }
    }
    Ok(())
}
