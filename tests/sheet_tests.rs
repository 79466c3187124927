#[cfg(test)]
mod tests {
    use cortimap::{GaussianPattern, PatternConfig, RandomStream, Sheet, SheetConfig, SomError};

    // Unit tests for the random streams and the retinal sheet/pattern layer

    #[test]
    fn identical_seeds_replay_identical_sequences() {
        let mut a = RandomStream::new(7, -0.5, 0.5).unwrap();
        let mut b = RandomStream::new(7, -0.5, 0.5).unwrap();

        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
        assert_eq!(a.draws(), 100);
    }

    #[test]
    fn draws_stay_inside_bounds() {
        let mut stream = RandomStream::new(0, -0.5, 0.5).unwrap();

        for _ in 0..1000 {
            let v = stream.draw();
            assert!((-0.5..0.5).contains(&v));
        }
    }

    #[test]
    fn degenerate_stream_bounds_are_rejected() {
        assert!(RandomStream::new(0, 0.5, 0.5).is_err());
        assert!(RandomStream::new(0, 1.0, -1.0).is_err());
    }

    #[test]
    fn grid_shape_follows_density() {
        // Density 10 over a unit square gives a 10x10 grid
        let sheet = Sheet::new("Retina", &SheetConfig::default()).unwrap();

        assert_eq!(sheet.rows(), 10);
        assert_eq!(sheet.cols(), 10);
        assert_eq!(sheet.units(), 100);
        assert!((sheet.spacing() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn cell_centers_lie_inside_bounds() {
        let sheet = Sheet::new("Retina", &SheetConfig::default()).unwrap();

        for index in 0..sheet.units() {
            let (x, y) = sheet.coordinates(index);
            assert!(x > sheet.bounds().x_lo && x < sheet.bounds().x_hi);
            assert!(y > sheet.bounds().y_lo && y < sheet.bounds().y_hi);
        }

        // Index 0 is the top-left cell center
        let (x0, y0) = sheet.coordinates(0);
        assert!((x0 - (-0.45)).abs() < 1e-6);
        assert!((y0 - 0.45).abs() < 1e-6);
    }

    #[test]
    fn nonpositive_density_is_rejected() {
        let mut config = SheetConfig::default();
        config.density = 0.0;

        let err = Sheet::new("Retina", &config).unwrap_err();
        assert!(matches!(err, SomError::Config(_)));
    }

    #[test]
    fn nonpositive_scale_is_rejected() {
        let config = PatternConfig {
            scale: 0.0,
            input_seed: 0,
        };

        let bounds = SheetConfig::default().bounds;
        let err = GaussianPattern::new(&config, &bounds).unwrap_err();
        assert!(matches!(err, SomError::Config(_)));
    }

    #[test]
    fn pattern_generation_is_reproducible() {
        let config = SheetConfig::default();
        let pattern_config = PatternConfig::default();

        let mut sheet_a = Sheet::new("Retina", &config).unwrap();
        let mut sheet_b = Sheet::new("Retina", &config).unwrap();
        let mut gen_a = GaussianPattern::new(&pattern_config, &config.bounds).unwrap();
        let mut gen_b = GaussianPattern::new(&pattern_config, &config.bounds).unwrap();

        for _ in 0..5 {
            gen_a.generate(&mut sheet_a);
            gen_b.generate(&mut sheet_b);
            assert_eq!(sheet_a.activation(), sheet_b.activation());
        }
    }

    #[test]
    fn pattern_peaks_at_the_drawn_center() {
        let config = SheetConfig::default();
        let mut sheet = Sheet::new("Retina", &config).unwrap();
        let mut generator =
            GaussianPattern::new(&PatternConfig::default(), &config.bounds).unwrap();

        generator.generate(&mut sheet);
        let (cx, cy) = generator.last_center().unwrap();

        // The strongest cell must be the one nearest the drawn center
        let mut peak = 0;
        for index in 1..sheet.units() {
            if sheet.activation()[index] > sheet.activation()[peak] {
                peak = index;
            }
        }
        let (px, py) = sheet.coordinates(peak);
        let distance = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
        assert!(distance <= sheet.spacing());

        // And a blob of scale 0.1 keeps the peak cell strongly activated
        assert!(sheet.activation()[peak] > 0.7);
    }

    #[test]
    fn generate_advances_each_stream_once() {
        let config = SheetConfig::default();
        let mut sheet = Sheet::new("Retina", &config).unwrap();
        let mut generator =
            GaussianPattern::new(&PatternConfig::default(), &config.bounds).unwrap();

        generator.generate(&mut sheet);
        let first = generator.last_center().unwrap();
        generator.generate(&mut sheet);
        let second = generator.last_center().unwrap();

        // Distinct draws on consecutive steps
        assert_ne!(first, second);
    }
}
