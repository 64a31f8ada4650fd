#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use myrtio_pixel_strip::{Color, DriverError, OutputDriver, StripConfig};

/// Everything a [`RecordingDriver`] saw
#[derive(Debug, Default)]
pub struct DriverLog {
    pub configured: Option<StripConfig>,
    pub frames: Vec<Vec<Color>>,
    pub brightness: Vec<u8>,
    pub releases: usize,
}

impl DriverLog {
    pub fn last_frame(&self) -> &[Color] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }
}

/// Output driver that records configuration, frames and releases
///
/// The log is shared so it can be inspected after the strip is dropped.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub log: Rc<RefCell<DriverLog>>,
    pub reject: Option<DriverError>,
    pub fail_render: bool,
}

impl RecordingDriver {
    pub fn new() -> (Self, Rc<RefCell<DriverLog>>) {
        let driver = Self::default();
        let log = Rc::clone(&driver.log);
        (driver, log)
    }
}

impl OutputDriver for RecordingDriver {
    fn configure(&mut self, config: &StripConfig) -> Result<(), DriverError> {
        if let Some(error) = self.reject {
            return Err(error);
        }
        self.log.borrow_mut().configured = Some(config.clone());
        Ok(())
    }

    fn render(&mut self, pixels: &[Color], brightness: u8) -> Result<(), DriverError> {
        if self.fail_render {
            return Err(DriverError::Write);
        }
        let mut log = self.log.borrow_mut();
        log.frames.push(pixels.to_vec());
        log.brightness.push(brightness);
        Ok(())
    }

    fn release(&mut self) {
        self.log.borrow_mut().releases += 1;
    }
}

/// Delay that never sleeps, only records the requested waits in nanoseconds
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits: Vec<u64>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits.push(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.waits.push(u64::from(us) * 1_000);
    }
}
