//! Terminal preview for myrtio-pixel-strip animations
//!
//! Plays the strandtest sequence on a simulated strip drawn with colored
//! glyphs. Ctrl-C turns the strip off and releases it before exiting.

use std::fmt;
use std::io::{self, Write as _};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration as StdDuration;

use clap::Parser;
use embedded_hal::delay::DelayNs;
use log::{debug, error, info, warn};
use myrtio_pixel_strip::{
    Animation, AnimationId, AnimationSlot, Color, ColorWipe, Duration, Error, Interruptible,
    PixelSink, Rainbow, RainbowCycle, Strip, StripConfig, TextRenderer, TheaterChase,
    TheaterChaseRainbow, pack,
};

/// Maximum number of LEDs the preview supports
const MAX_LEDS: usize = 1024;

type PreviewStrip = Strip<TextRenderer<Stdout, String>, MAX_LEDS>;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal preview of the strandtest animations", long_about = None)]
struct Cli {
    /// Number of LED pixels
    #[arg(long, default_value_t = 8)]
    leds: usize,
    /// GPIO pin connected to the pixels
    #[arg(long, default_value_t = 18)]
    pin: u8,
    /// DMA channel used to generate the signal
    #[arg(long, default_value_t = 5)]
    dma: u8,
    /// Signal frequency in hertz
    #[arg(long, default_value_t = 800_000)]
    frequency: u32,
    /// Brightness, only the low 8 bits are used
    #[arg(long, default_value_t = 255)]
    brightness: u32,
    /// Invert the signal
    #[arg(long)]
    invert: bool,
    /// Glyph drawn for every pixel
    #[arg(long)]
    glyph: Option<String>,
    /// Play a single animation instead of the whole sequence
    #[arg(long, value_parser = parse_animation)]
    animation: Option<AnimationId>,
    /// Color used by color_wipe and theater_chase, as 0xRRGGBB
    #[arg(long, value_parser = parse_color, default_value = "0xFF0000")]
    color: Color,
    /// Pause between frames in milliseconds, replaces the animation default
    #[arg(long)]
    wait_ms: Option<u64>,
    /// Play once instead of looping
    #[arg(long)]
    once: bool,
}

/// `fmt::Write` adapter over stdout, flushed on every write so partial
/// lines show up immediately
struct Stdout(io::Stdout);

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut out = self.0.lock();
        out.write_all(s.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|_| fmt::Error)
    }
}

/// Thread sleep delay
struct PreviewDelay;

impl DelayNs for PreviewDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(StdDuration::from_nanos(u64::from(ns)));
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> myrtio_pixel_strip::Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    if let Err(err) = ctrlc::set_handler(move || handler_stop.store(true, Ordering::Relaxed)) {
        warn!("Ctrl-C handler not installed: {err}");
    }

    let config = StripConfig::new(cli.leds, cli.pin)
        .with_dma_channel(cli.dma)
        .with_frequency(cli.frequency)
        .with_invert(cli.invert)
        .with_brightness(cli.brightness);

    // An empty glyph keeps the default
    let renderer =
        TextRenderer::new(Stdout(io::stdout())).with_glyph(cli.glyph.clone().unwrap_or_default());
    let mut strip = PreviewStrip::new(config, renderer)?;

    info!("Press Ctrl-C to quit.");
    let played = play(&mut strip, cli, &stop);
    let shutdown = strip.shutdown();
    debug!("strip turned off");

    played.and(shutdown)
}

fn play(strip: &mut PreviewStrip, cli: &Cli, stop: &AtomicBool) -> myrtio_pixel_strip::Result<()> {
    let sequence = match cli.animation {
        Some(id) => vec![id.to_slot(cli.color)],
        None => strandtest(),
    };
    let mut delay = PreviewDelay;
    // Aborts the running animation at its next frame once Ctrl-C was pressed
    let mut sink = Interruptible::new(strip, || stop.load(Ordering::Relaxed));

    loop {
        for slot in &sequence {
            let slot = match cli.wait_ms {
                Some(ms) => slot.clone().with_wait(Duration::from_millis(ms)),
                None => slot.clone(),
            };
            if matches!(slot, AnimationSlot::TheaterChase(_)) {
                sink.fill_all(Color::OFF)?;
            }
            debug!("playing {}", slot.id().as_str());
            match slot.run(&mut sink, &mut delay) {
                Err(Error::Interrupted) => {
                    debug!("{} interrupted", slot.id().as_str());
                    return Ok(());
                }
                result => result?,
            }
        }
        if cli.once || stop.load(Ordering::Relaxed) {
            return Ok(());
        }
    }
}

/// The classic strandtest sequence
fn strandtest() -> Vec<AnimationSlot> {
    vec![
        AnimationSlot::ColorWipe(ColorWipe::new(pack(255, 0, 0))),
        AnimationSlot::ColorWipe(ColorWipe::new(pack(0, 255, 0))),
        AnimationSlot::ColorWipe(ColorWipe::new(pack(0, 0, 255))),
        AnimationSlot::TheaterChase(TheaterChase::new(pack(255, 255, 255))),
        AnimationSlot::TheaterChase(TheaterChase::new(pack(255, 0, 0))),
        AnimationSlot::TheaterChase(TheaterChase::new(pack(0, 0, 255))),
        AnimationSlot::Rainbow(Rainbow::default()),
        AnimationSlot::RainbowCycle(RainbowCycle::default()),
        AnimationSlot::TheaterChaseRainbow(TheaterChaseRainbow::default()),
    ]
}

fn parse_animation(s: &str) -> Result<AnimationId, String> {
    AnimationId::parse_from_str(s).ok_or_else(|| {
        let known: Vec<&str> = AnimationId::ALL.iter().map(|id| id.as_str()).collect();
        format!("unknown animation `{s}`, expected one of: {}", known.join(", "))
    })
}

fn parse_color(s: &str) -> Result<Color, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16)
        .map(Color::new)
        .map_err(|err| format!("invalid color `{s}`: {err}"))
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
