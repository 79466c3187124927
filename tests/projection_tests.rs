#[cfg(test)]
mod tests {
    use cortimap::projection::ProjectionConfig;
    use cortimap::{
        winning_unit, EuclideanResponse, HebbianRule, KernelMax, KernelShape, LearningRule,
        OutputFunction, Projection, ResponseFunction, SomError, TimeVaryingScalar,
    };
    use nalgebra::{DMatrix, DVector};
    use rstest::rstest;

    // Unit tests for the connection field and its strategy set

    fn column_norms(weights: &DMatrix<f32>) -> Vec<f32> {
        (0..weights.ncols()).map(|j| weights.column(j).norm()).collect()
    }

    #[test]
    fn initial_columns_hold_the_target_norm() {
        let config = ProjectionConfig::default();
        let projection = Projection::new(9, 4, &config).unwrap();

        for norm in column_norms(projection.weights()) {
            assert!((norm - config.target_norm).abs() < 1e-6);
        }
    }

    #[test]
    fn initialization_is_reproducible() {
        let config = ProjectionConfig::default();
        let a = Projection::new(16, 9, &config).unwrap();
        let b = Projection::new(16, 9, &config).unwrap();

        assert_eq!(a.weights(), b.weights());
    }

    #[test]
    fn closer_weight_vectors_respond_higher() {
        // Column 0 equals the input, column 1 is orthogonal to it
        let weights = DMatrix::from_column_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let input = DVector::from_column_slice(&[1.0, 0.0]);

        let response = EuclideanResponse.respond(&weights, &input);

        assert!((response[0] - 0.0).abs() < 1e-6);
        assert!(response[1] < response[0]);
        assert_eq!(winning_unit(&response), Some(0));
    }

    #[rstest]
    #[case(KernelShape::TopHat)]
    #[case(KernelShape::Gaussian)]
    fn the_winner_always_receives_full_weight(#[case] shape: KernelShape) {
        let radius = TimeVaryingScalar::new(1.0, 200.0, Some(0.5 / 40.0)).unwrap();
        let output = KernelMax::new(2, 3, 0.1, radius, shape).unwrap();
        let response = DVector::from_column_slice(&[-0.3, -0.1, -0.9, -0.4, -0.2, -0.6]);

        // Early (wide) and late (floored) radii alike keep the winner at 1.0
        for &t in &[0.0, 10.0, 1_000.0, 1.0e9] {
            let kernel = output.apply(&response, t);
            assert_eq!(kernel[1], 1.0);
        }
    }

    #[test]
    fn ties_resolve_to_the_lowest_index() {
        let response = DVector::from_column_slice(&[0.3, 0.9, 0.9, 0.1]);

        for _ in 0..10 {
            assert_eq!(winning_unit(&response), Some(1));
        }

        // The kernel agrees with the raw winner under a winner-only radius
        let radius = TimeVaryingScalar::new(0.01, 200.0, Some(0.01)).unwrap();
        let output = KernelMax::new(1, 4, 1.0, radius, KernelShape::TopHat).unwrap();
        let kernel = output.apply(&response, 0.0);
        assert_eq!(kernel[1], 1.0);
        assert_eq!(kernel[2], 0.0);
    }

    #[test]
    fn top_hat_kernel_cuts_off_at_the_radius() {
        // One row of five units, unit spacing; radius stays near 1.5 at t=0
        let radius = TimeVaryingScalar::new(1.5, 1.0e9, None).unwrap();
        let output = KernelMax::new(1, 5, 1.0, radius, KernelShape::TopHat).unwrap();
        let response = DVector::from_column_slice(&[0.9, 0.1, 0.2, 0.3, 0.0]);

        let kernel = output.apply(&response, 0.0);

        assert_eq!(kernel[0], 1.0); // winner
        assert_eq!(kernel[1], 1.0); // distance 1.0 <= 1.5
        assert_eq!(kernel[2], 0.0); // distance 2.0 > 1.5
        assert_eq!(kernel[3], 0.0);
        assert_eq!(kernel[4], 0.0);
    }

    #[test]
    fn gaussian_kernel_falls_off_and_vanishes_beyond_three_radii() {
        let radius = TimeVaryingScalar::new(0.5, 1.0e9, None).unwrap();
        let output = KernelMax::new(1, 5, 1.0, radius, KernelShape::Gaussian).unwrap();
        let response = DVector::from_column_slice(&[0.9, 0.1, 0.2, 0.3, 0.0]);

        let kernel = output.apply(&response, 0.0);

        assert_eq!(kernel[0], 1.0);
        // Distance 1.0 at radius 0.5: exp(-0.5 * 4) = exp(-2)
        assert!((kernel[1] - (-2.0f32).exp()).abs() < 1e-5);
        // Distance 2.0 exceeds 3 * 0.5, so the tail is cut to zero
        assert_eq!(kernel[2], 0.0);
    }

    #[test]
    fn hebbian_update_preserves_column_norms() {
        let config = ProjectionConfig::default();
        let mut projection_weights = Projection::new(9, 4, &config).unwrap().weights().clone();
        let rule = HebbianRule::new(config.target_norm);

        let input = DVector::from_column_slice(&[0.0, 0.1, 0.4, 0.9, 1.0, 0.9, 0.4, 0.1, 0.0]);
        let kernel = DVector::from_column_slice(&[1.0, 0.5, 0.0, 0.0]);
        let response = DVector::zeros(4);

        rule.update(&mut projection_weights, &input, &kernel, 0.42, &response)
            .unwrap();

        for norm in column_norms(&projection_weights) {
            assert!((norm - config.target_norm).abs() < 1e-6);
        }
    }

    #[test]
    fn hebbian_update_pulls_active_columns_toward_the_input() {
        let mut weights = DMatrix::from_column_slice(2, 2, &[1.0, 0.0, 1.0, 0.0]);
        let input = DVector::from_column_slice(&[0.0, 1.0]);
        let kernel = DVector::from_column_slice(&[1.0, 0.0]);
        let response = DVector::zeros(2);

        HebbianRule::new(1.0)
            .update(&mut weights, &input, &kernel, 0.5, &response)
            .unwrap();

        // Active column rotated toward the input and renormalized
        assert!(weights[(1, 0)] > 0.0);
        assert!((weights.column(0).norm() - 1.0).abs() < 1e-6);
        // Gated-out column only renormalized, and it was already unit norm
        assert!((weights[(0, 1)] - 1.0).abs() < 1e-6);
        assert!((weights[(1, 1)] - 0.0).abs() < 1e-6);
    }

    #[test]
    fn zero_norm_column_is_a_degenerate_state() {
        let mut weights = DMatrix::zeros(3, 2);
        let input = DVector::from_column_slice(&[0.0, 0.0, 0.0]);
        let kernel = DVector::from_column_slice(&[0.0, 0.0]);
        let response = DVector::zeros(2);

        let err = HebbianRule::new(1.0)
            .update(&mut weights, &input, &kernel, 0.1, &response)
            .unwrap_err();
        assert!(matches!(err, SomError::DegenerateState(_)));
    }

    #[test]
    fn invalid_projection_parameters_are_rejected() {
        let mut config = ProjectionConfig::default();
        config.alpha_0 = 0.0;
        assert!(matches!(
            Projection::new(4, 4, &config).unwrap_err(),
            SomError::Config(_)
        ));

        let mut config = ProjectionConfig::default();
        config.radius_0 = -1.0;
        assert!(config.validate().is_err());

        let config = ProjectionConfig::default();
        assert!(matches!(
            Projection::new(0, 4, &config).unwrap_err(),
            SomError::Config(_)
        ));
    }
}
