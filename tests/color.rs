mod tests {
    use myrtio_pixel_strip::{ArgumentError, Color, Error, Rgb, pack, unpack, wheel};

    #[test]
    fn test_pack_unpack() {
        assert_eq!(unpack(pack(0, 0, 0)), (0, 0, 0));
        assert_eq!(unpack(pack(255, 255, 255)), (255, 255, 255));
        assert_eq!(unpack(pack(18, 52, 86)), (18, 52, 86));
        assert_eq!(pack(0x12, 0x34, 0x56).raw(), 0x0012_3456);
    }

    #[test]
    fn test_pack_truncates_channels() {
        assert_eq!(pack(256, 0, 0), pack(0, 0, 0));
        assert_eq!(pack(0x1FF, 0x100, 0x2AB), pack(0xFF, 0x00, 0xAB));
    }

    #[test]
    fn test_color_masks_to_24_bits() {
        assert_eq!(Color::new(0xFF12_3456).raw(), 0x0012_3456);
        assert_eq!(Color::from(0x0100_0000), Color::OFF);
        assert_eq!(Color::from((1, 2, 3)), pack(1, 2, 3));
    }

    #[test]
    fn test_color_channels() {
        let color = Color::new(0x00AB_CDEF);
        assert_eq!(color.red(), 0xAB);
        assert_eq!(color.green(), 0xCD);
        assert_eq!(color.blue(), 0xEF);
        assert_eq!(color.to_rgb(), Rgb::new(0xAB, 0xCD, 0xEF));
        assert_eq!(Color::from(Rgb::new(0xAB, 0xCD, 0xEF)), color);
    }

    #[test]
    fn test_color_from_components() {
        assert_eq!(Color::try_from(&[0x0102_0304_u32][..]), Ok(Color::new(0x0002_0304)));
        assert_eq!(Color::try_from(&[1_u32, 2, 3][..]), Ok(pack(1, 2, 3)));
        assert_eq!(
            Color::try_from(&[1_u32, 2][..]),
            Err(Error::InvalidArgument(ArgumentError::ColorArity(2)))
        );
        assert_eq!(
            Color::try_from(&[0_u32; 0][..]),
            Err(Error::InvalidArgument(ArgumentError::ColorArity(0)))
        );
    }

    #[test]
    fn test_wheel_boundaries() {
        assert_eq!(wheel(0), pack(0, 255, 0));
        assert_eq!(wheel(84), pack(252, 3, 0));
        assert_eq!(wheel(85), pack(255, 0, 0));
        assert_eq!(wheel(169), pack(3, 0, 252));
        assert_eq!(wheel(170), pack(0, 0, 255));
        assert_eq!(wheel(255), pack(0, 255, 0));
    }

    #[test]
    fn test_wheel_midpoints() {
        assert_eq!(wheel(42), pack(126, 129, 0));
        assert_eq!(wheel(127), pack(129, 0, 126));
        assert_eq!(wheel(212), pack(0, 126, 129));
    }
}
