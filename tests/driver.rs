mod tests {
    use myrtio_pixel_strip::driver::DEFAULT_GLYPH;
    use myrtio_pixel_strip::{
        ConfigError, DriverError, Error, OutputDriver, Rgb, SmartLedsDriver, Strip, StripConfig,
        TextRenderer, pack,
    };
    use smart_leds::SmartLedsWrite;

    const RED: &str = "\x1b[38;2;255;0;0m◉ \x1b[0m";
    const DARK: &str = "\x1b[38;2;0;0;0m◉ \x1b[0m";

    #[derive(Debug, Default)]
    struct MockWriter {
        frames: Vec<Vec<Rgb>>,
        attempts: usize,
        fail: bool,
    }

    /// Text sink that rejects every write
    #[derive(Debug, Default)]
    struct BrokenOut {
        attempts: usize,
    }

    impl core::fmt::Write for BrokenOut {
        fn write_str(&mut self, _s: &str) -> core::fmt::Result {
            self.attempts += 1;
            Err(core::fmt::Error)
        }
    }

    impl SmartLedsWrite for MockWriter {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.attempts += 1;
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_text_renderer_frame() {
        let mut renderer = TextRenderer::new(String::new());
        renderer.configure(&StripConfig::new(2, 18)).unwrap();
        renderer
            .render(&[pack(255, 0, 0), pack(0, 0, 0)], 255)
            .unwrap();
        assert_eq!(renderer.output(), &format!("\r{RED}{DARK}"));

        renderer.render(&[pack(0, 0, 0)], 255).unwrap();
        assert_eq!(renderer.into_inner(), format!("\r{RED}{DARK}\r{DARK}"));
    }

    #[test]
    fn test_text_renderer_applies_brightness() {
        let mut renderer = TextRenderer::new(String::new());
        renderer.render(&[pack(255, 100, 0)], 128).unwrap();
        assert_eq!(
            renderer.output().as_str(),
            "\r\x1b[38;2;128;50;0m◉ \x1b[0m"
        );

        let mut renderer = TextRenderer::new(String::new());
        renderer.render(&[pack(255, 100, 0)], 0).unwrap();
        assert_eq!(renderer.output().as_str(), format!("\r{DARK}"));
    }

    #[test]
    fn test_text_renderer_glyph() {
        let mut renderer = TextRenderer::new(String::new()).with_glyph("#");
        renderer.render(&[pack(0, 0, 255)], 255).unwrap();
        assert_eq!(renderer.output().as_str(), "\r\x1b[38;2;0;0;255m#\x1b[0m");

        let mut renderer = TextRenderer::new(String::new()).with_glyph("");
        renderer.render(&[pack(255, 0, 0)], 255).unwrap();
        assert_eq!(renderer.output().as_str(), format!("\r{RED}"));
        assert_eq!(DEFAULT_GLYPH, "◉ ");
    }

    #[test]
    fn test_text_renderer_owned_glyph() {
        let glyph = String::from("[]");
        let mut renderer = TextRenderer::new(String::new()).with_glyph(glyph);
        assert_eq!(renderer.glyph(), "[]");
        renderer.render(&[pack(0, 255, 0)], 255).unwrap();
        assert_eq!(renderer.output().as_str(), "\r\x1b[38;2;0;255;0m[]\x1b[0m");

        let renderer = TextRenderer::new(String::new()).with_glyph(String::new());
        assert_eq!(renderer.glyph(), DEFAULT_GLYPH);
        assert_eq!(TextRenderer::new(String::new()).glyph(), DEFAULT_GLYPH);
    }

    #[test]
    fn test_text_renderer_broken_output() {
        let mut renderer = TextRenderer::new(BrokenOut::default());
        assert_eq!(renderer.render(&[pack(1, 2, 3)], 255), Err(DriverError::Write));

        let before = renderer.output().attempts;
        renderer.release();
        renderer.release();
        assert_eq!(renderer.output().attempts, before + 1);
    }

    #[test]
    fn test_text_renderer_release_once() {
        let mut renderer = TextRenderer::new(String::new());
        renderer.release();
        renderer.release();
        assert_eq!(renderer.output().as_str(), "\n");
    }

    #[test]
    fn test_text_renderer_through_strip() {
        let renderer = TextRenderer::new(String::new());
        let mut strip = Strip::<_, 8>::new(StripConfig::new(2, 18), renderer).unwrap();
        strip.set_pixel(0, 0xFF0000_u32).unwrap().show().unwrap();
        assert_eq!(strip.driver().output(), &format!("\r{RED}{DARK}"));

        strip.close().unwrap();
        assert_eq!(strip.driver().output(), &format!("\r{RED}{DARK}\n"));
    }

    #[test]
    fn test_smart_leds_driver_scales_frames() {
        let driver = SmartLedsDriver::new(MockWriter::default());
        let config = StripConfig::new(3, 18).with_brightness(128);
        let mut strip = Strip::<_, 8>::new(config, driver).unwrap();

        strip
            .replace([pack(255, 0, 0), pack(0, 255, 0), pack(0, 0, 100)])
            .unwrap()
            .show()
            .unwrap();

        let frames = &strip.driver().writer().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(
            frames[0],
            [Rgb::new(128, 0, 0), Rgb::new(0, 128, 0), Rgb::new(0, 0, 50)]
        );
    }

    #[test]
    fn test_smart_leds_driver_rejects_unsupported_config() {
        let driver = SmartLedsDriver::new(MockWriter::default());
        let result = Strip::<_, 8>::new(StripConfig::new(3, 18).with_invert(true), driver);
        assert!(matches!(
            result,
            Err(Error::Configuration(ConfigError::Driver(
                DriverError::Unsupported(_)
            )))
        ));

        let driver = SmartLedsDriver::new(MockWriter::default());
        let result = Strip::<_, 8>::new(StripConfig::new(3, 18).with_frequency(400_000), driver);
        assert!(matches!(
            result,
            Err(Error::Configuration(ConfigError::Driver(
                DriverError::Unsupported(_)
            )))
        ));
    }

    #[test]
    fn test_smart_leds_driver_write_failure() {
        let writer = MockWriter {
            fail: true,
            ..MockWriter::default()
        };
        let mut strip =
            Strip::<_, 8>::new(StripConfig::new(2, 18), SmartLedsDriver::new(writer)).unwrap();
        assert!(matches!(
            strip.show(),
            Err(Error::Render(DriverError::Write))
        ));
    }

    #[test]
    fn test_smart_leds_driver_release_failure_is_not_retried() {
        let writer = MockWriter {
            fail: true,
            ..MockWriter::default()
        };
        let mut driver = SmartLedsDriver::new(writer);
        driver.configure(&StripConfig::new(2, 18)).unwrap();
        driver.release();
        driver.release();

        let writer = driver.into_inner();
        assert_eq!(writer.attempts, 1);
        assert!(writer.frames.is_empty());
    }

    #[test]
    fn test_smart_leds_driver_release_turns_off() {
        let mut driver = SmartLedsDriver::new(MockWriter::default());
        driver.configure(&StripConfig::new(2, 18)).unwrap();
        driver.render(&[pack(1, 2, 3), pack(4, 5, 6)], 255).unwrap();
        driver.release();
        driver.release();

        assert_eq!(driver.render(&[pack(1, 2, 3)], 255), Err(DriverError::Write));
        let writer = driver.into_inner();
        assert_eq!(
            writer.frames,
            [
                vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)],
                vec![Rgb::default(); 2],
            ]
        );
    }
}
