mod tests {
    use ledstrip_controller::color::{BLACK, ColorOrder, Rgb};
    use ledstrip_controller::{OutputDriver, SmartLedsOutput};
    use smart_leds::SmartLedsWrite;

    #[derive(Default)]
    struct CollectingWriter {
        frames: Vec<Vec<Rgb>>,
    }

    impl SmartLedsWrite for CollectingWriter {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_flush_writes_whole_frame() {
        let mut output: SmartLedsOutput<_, 3> = SmartLedsOutput::new(CollectingWriter::default());
        output.set_pixel(1, Rgb::new(1, 2, 3));
        // Out of range pixels are ignored.
        output.set_pixel(7, Rgb::new(9, 9, 9));
        output.flush();

        assert_eq!(output.pixels(), &[BLACK, Rgb::new(1, 2, 3), BLACK]);
        let writer = output.into_inner();
        assert_eq!(writer.frames, [vec![BLACK, Rgb::new(1, 2, 3), BLACK]]);
    }

    #[test]
    fn test_flush_applies_color_order() {
        let mut output: SmartLedsOutput<_, 1> =
            SmartLedsOutput::new(CollectingWriter::default()).with_order(ColorOrder::Grb);
        output.set_pixel(0, Rgb::new(1, 2, 3));
        output.flush();
        assert_eq!(output.into_inner().frames, [vec![Rgb::new(2, 1, 3)]]);
    }
}
