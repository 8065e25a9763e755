mod tests {
    use ledstrip_controller::color::{BLACK, Rgb};
    use ledstrip_controller::math8::{
        crossfade8, falloff8, falloff_color, lerp_colors, lerp8, quantize8,
    };

    #[test]
    fn test_lerp8() {
        assert_eq!(lerp8(0, 255, 0), 0);
        assert_eq!(lerp8(0, 255, 255), 255);
        assert_eq!(lerp8(0, 255, 128), 128);
        assert_eq!(lerp8(255, 0, 128), 127);
        assert_eq!(lerp8(10, 10, 77), 10);
    }

    #[test]
    fn test_lerp_colors() {
        let white = Rgb::new(255, 255, 255);
        assert_eq!(lerp_colors(BLACK, white, 0), BLACK);
        assert_eq!(lerp_colors(BLACK, white, 255), white);
        assert_eq!(
            lerp_colors(Rgb::new(0, 100, 200), Rgb::new(255, 100, 0), 51),
            Rgb::new(51, 100, 160)
        );
    }

    #[test]
    fn test_falloff8() {
        assert_eq!(falloff8(255), 127);
        assert_eq!(falloff8(33), 16);
        assert_eq!(falloff8(32), 22);
        assert_eq!(falloff8(10), 7);
        assert_eq!(falloff8(1), 0);
        assert_eq!(falloff8(0), 0);
        assert_eq!(falloff_color(Rgb::new(0, 255, 20)), Rgb::new(0, 127, 14));
    }

    #[test]
    fn test_quantize8() {
        assert_eq!(quantize8(130, 25), 125);
        assert_eq!(quantize8(24, 25), 0);
        assert_eq!(quantize8(255, 25), 250);
        assert_eq!(quantize8(5, 0), 5);
    }

    #[test]
    fn test_crossfade8() {
        assert_eq!(crossfade8(0, 100, 0, 4), 0);
        assert_eq!(crossfade8(0, 100, 2, 4), 50);
        assert_eq!(crossfade8(0, 100, 4, 4), 100);
        assert_eq!(crossfade8(100, 0, 1, 4), 75);
        assert_eq!(crossfade8(100, 0, 9, 4), 0);
        assert_eq!(crossfade8(100, 7, 0, 0), 7);
    }
}
