mod tests {
    use ledstrip_controller::color::{
        BLACK, ColorOrder, InterpolatedColor, Rgb, SignedColor, clamp_channel, mirror_into, peak,
    };

    #[test]
    fn test_color_order_pack() {
        let color = Rgb::new(1, 2, 3);
        assert_eq!(ColorOrder::Rgb.pack(color), 0x0001_0203);
        assert_eq!(ColorOrder::Grb.pack(color), 0x0002_0103);
        assert_eq!(ColorOrder::Brg.pack(color), 0x0003_0102);
    }

    #[test]
    fn test_color_order_reorder() {
        let color = Rgb::new(1, 2, 3);
        assert_eq!(ColorOrder::default().reorder(color), color);
        assert_eq!(ColorOrder::Grb.reorder(color), Rgb::new(2, 1, 3));
        assert_eq!(ColorOrder::Brg.reorder(color), Rgb::new(3, 1, 2));
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-1.0), 0);
        assert_eq!(clamp_channel(0.5), 0);
        assert_eq!(clamp_channel(12.9), 12);
        assert_eq!(clamp_channel(300.0), 255);
    }

    #[test]
    fn test_interpolated_color_truncates() {
        let mut color = InterpolatedColor::from_rgb(Rgb::new(10, 20, 30));
        assert_eq!(color.to_rgb(), Rgb::new(10, 20, 30));
        for channel in color.channels_mut() {
            channel.value -= 0.5;
        }
        assert_eq!(color.to_rgb(), Rgb::new(9, 19, 29));
        assert_eq!(InterpolatedColor::BLACK.to_rgb(), BLACK);
    }

    #[test]
    fn test_peak_and_mirror() {
        assert_eq!(peak(Rgb::new(3, 200, 100)), 200);
        assert_eq!(peak(BLACK), 0);

        let src = [Rgb::new(1, 0, 0), Rgb::new(2, 0, 0), Rgb::new(3, 0, 0)];
        let mut dst = [BLACK; 3];
        mirror_into(&src, &mut dst);
        assert_eq!(dst, [Rgb::new(3, 0, 0), Rgb::new(2, 0, 0), Rgb::new(1, 0, 0)]);
    }

    #[test]
    fn test_signed_color_channels() {
        assert_eq!(SignedColor::new(20, 0, -20).channels(), [20, 0, -20]);
    }
}
