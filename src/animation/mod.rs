//! Animation library with compile-time known animation variants
//!
//! Every animation is a deterministic sequence of buffer writes, each frame
//! followed by a flush and a pause. Animations never read the buffer, so
//! running one twice with the same parameters on the same strip length
//! produces the same frames.

mod chase;
mod rainbow;
mod wipe;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

pub use chase::{TheaterChase, TheaterChaseRainbow};
pub use rainbow::{Rainbow, RainbowCycle};
pub use wipe::ColorWipe;

use crate::OutputDriver;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::strip::Strip;

const ANIMATION_NAME_COLOR_WIPE: &str = "color_wipe";
const ANIMATION_NAME_THEATER_CHASE: &str = "theater_chase";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";
const ANIMATION_NAME_THEATER_CHASE_RAINBOW: &str = "theater_chase_rainbow";

const ANIMATION_ID_COLOR_WIPE: u8 = 0;
const ANIMATION_ID_THEATER_CHASE: u8 = 1;
const ANIMATION_ID_RAINBOW: u8 = 2;
const ANIMATION_ID_RAINBOW_CYCLE: u8 = 3;
const ANIMATION_ID_THEATER_CHASE_RAINBOW: u8 = 4;

/// Minimal pixel output an animation needs
///
/// Indexed writes, a bulk fill and a flush that makes the buffer visible.
pub trait PixelSink {
    /// Number of addressable pixels
    fn length(&self) -> Result<usize>;

    /// Store a color; not visible until [`PixelSink::flush`]
    fn set(&mut self, index: usize, color: Color) -> Result<()>;

    /// Store the same color in every pixel
    fn fill_all(&mut self, color: Color) -> Result<()>;

    /// Make the current contents visible
    fn flush(&mut self) -> Result<()>;
}

impl<D: OutputDriver, const MAX_LEDS: usize> PixelSink for Strip<D, MAX_LEDS> {
    fn length(&self) -> Result<usize> {
        Strip::length(self)
    }

    fn set(&mut self, index: usize, color: Color) -> Result<()> {
        self.set_pixel(index, color)?;
        Ok(())
    }

    fn fill_all(&mut self, color: Color) -> Result<()> {
        self.fill(color)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.show()?;
        Ok(())
    }
}

/// Sink adapter that stops an animation on request
///
/// Every flush first asks `should_stop`; once it returns `true` the flush
/// fails with [`Error::Interrupted`] and nothing more reaches the inner
/// sink, so the animation unwinds at the next frame boundary.
pub struct Interruptible<'a, S: ?Sized, F> {
    sink: &'a mut S,
    should_stop: F,
}

impl<'a, S, F> Interruptible<'a, S, F>
where
    S: PixelSink + ?Sized,
    F: FnMut() -> bool,
{
    pub const fn new(sink: &'a mut S, should_stop: F) -> Self {
        Self { sink, should_stop }
    }
}

impl<S, F> PixelSink for Interruptible<'_, S, F>
where
    S: PixelSink + ?Sized,
    F: FnMut() -> bool,
{
    fn length(&self) -> Result<usize> {
        self.sink.length()
    }

    fn set(&mut self, index: usize, color: Color) -> Result<()> {
        self.sink.set(index, color)
    }

    fn fill_all(&mut self, color: Color) -> Result<()> {
        self.sink.fill_all(color)
    }

    fn flush(&mut self) -> Result<()> {
        if (self.should_stop)() {
            return Err(Error::Interrupted);
        }
        self.sink.flush()
    }
}

pub trait Animation {
    /// Play the animation to completion
    ///
    /// Errors from the sink abort the animation mid-way and are returned
    /// unchanged.
    fn run<S, D>(&self, sink: &mut S, delay: &mut D) -> Result<()>
    where
        S: PixelSink + ?Sized,
        D: DelayNs + ?Sized;
}

/// Flush the sink and wait before the next frame
pub(crate) fn present<S, D>(sink: &mut S, delay: &mut D, wait: Duration) -> Result<()>
where
    S: PixelSink + ?Sized,
    D: DelayNs + ?Sized,
{
    sink.flush()?;
    let micros = u32::try_from(wait.as_micros()).unwrap_or(u32::MAX);
    delay.delay_us(micros);
    Ok(())
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationSlot {
    ColorWipe(ColorWipe),
    TheaterChase(TheaterChase),
    Rainbow(Rainbow),
    RainbowCycle(RainbowCycle),
    TheaterChaseRainbow(TheaterChaseRainbow),
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    ColorWipe = ANIMATION_ID_COLOR_WIPE,
    TheaterChase = ANIMATION_ID_THEATER_CHASE,
    Rainbow = ANIMATION_ID_RAINBOW,
    RainbowCycle = ANIMATION_ID_RAINBOW_CYCLE,
    TheaterChaseRainbow = ANIMATION_ID_THEATER_CHASE_RAINBOW,
}

impl AnimationId {
    pub const ALL: [Self; 5] = [
        Self::ColorWipe,
        Self::TheaterChase,
        Self::Rainbow,
        Self::RainbowCycle,
        Self::TheaterChaseRainbow,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_COLOR_WIPE => Self::ColorWipe,
            ANIMATION_ID_THEATER_CHASE => Self::TheaterChase,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            ANIMATION_ID_THEATER_CHASE_RAINBOW => Self::TheaterChaseRainbow,
            _ => return None,
        })
    }

    /// Build the animation with its default parameters
    ///
    /// `color` is used by the single-color animations and ignored by the
    /// rainbow ones.
    pub fn to_slot(self, color: Color) -> AnimationSlot {
        match self {
            Self::ColorWipe => AnimationSlot::ColorWipe(ColorWipe::new(color)),
            Self::TheaterChase => AnimationSlot::TheaterChase(TheaterChase::new(color)),
            Self::Rainbow => AnimationSlot::Rainbow(Rainbow::default()),
            Self::RainbowCycle => AnimationSlot::RainbowCycle(RainbowCycle::default()),
            Self::TheaterChaseRainbow => {
                AnimationSlot::TheaterChaseRainbow(TheaterChaseRainbow::default())
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColorWipe => ANIMATION_NAME_COLOR_WIPE,
            Self::TheaterChase => ANIMATION_NAME_THEATER_CHASE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::RainbowCycle => ANIMATION_NAME_RAINBOW_CYCLE,
            Self::TheaterChaseRainbow => ANIMATION_NAME_THEATER_CHASE_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            ANIMATION_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            ANIMATION_NAME_THEATER_CHASE_RAINBOW => Some(Self::TheaterChaseRainbow),
            _ => None,
        }
    }
}

impl AnimationSlot {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::ColorWipe(_) => AnimationId::ColorWipe,
            Self::TheaterChase(_) => AnimationId::TheaterChase,
            Self::Rainbow(_) => AnimationId::Rainbow,
            Self::RainbowCycle(_) => AnimationId::RainbowCycle,
            Self::TheaterChaseRainbow(_) => AnimationId::TheaterChaseRainbow,
        }
    }

    /// Replace the pause between frames
    #[must_use]
    pub fn with_wait(self, wait: Duration) -> Self {
        match self {
            Self::ColorWipe(animation) => Self::ColorWipe(animation.with_wait(wait)),
            Self::TheaterChase(animation) => Self::TheaterChase(animation.with_wait(wait)),
            Self::Rainbow(animation) => Self::Rainbow(animation.with_wait(wait)),
            Self::RainbowCycle(animation) => Self::RainbowCycle(animation.with_wait(wait)),
            Self::TheaterChaseRainbow(animation) => {
                Self::TheaterChaseRainbow(animation.with_wait(wait))
            }
        }
    }
}

impl Animation for AnimationSlot {
    fn run<S, D>(&self, sink: &mut S, delay: &mut D) -> Result<()>
    where
        S: PixelSink + ?Sized,
        D: DelayNs + ?Sized,
    {
        match self {
            Self::ColorWipe(animation) => animation.run(sink, delay),
            Self::TheaterChase(animation) => animation.run(sink, delay),
            Self::Rainbow(animation) => animation.run(sink, delay),
            Self::RainbowCycle(animation) => animation.run(sink, delay),
            Self::TheaterChaseRainbow(animation) => animation.run(sink, delay),
        }
    }
}
