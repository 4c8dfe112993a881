mod tests {
    use led_geometry::{LinearShape, Point, PointShape, Projection, ProjectionError, Shape};
    use rand::{SeedableRng, rngs::SmallRng};

    /// A rough ring of 12 points
    const RING: [Point; 12] = [
        Point::new(1.0, 0.0),
        Point::new(0.87, 0.5),
        Point::new(0.5, 0.87),
        Point::new(0.0, 1.0),
        Point::new(-0.5, 0.87),
        Point::new(-0.87, 0.5),
        Point::new(-1.0, 0.0),
        Point::new(-0.87, -0.5),
        Point::new(-0.5, -0.87),
        Point::new(0.0, -1.0),
        Point::new(0.5, -0.87),
        Point::new(0.87, -0.5),
    ];

    fn assert_in_range<const N: usize>(projection: &Projection<N>, shape: &impl Shape) {
        assert_eq!(projection.len(), shape.n_points());
        for &bucket in projection.as_slice() {
            assert!(bucket < projection.resolution(), "bucket {}", bucket);
        }
    }

    #[test]
    fn test_every_policy_stays_in_range() {
        let linear = LinearShape::new(20);
        let ring = PointShape::new(&RING);
        let mut rng = SmallRng::seed_from_u64(42);

        for resolution in [1u8, 3, 8, 12] {
            for _ in 0..10 {
                assert_in_range(
                    &Projection::<32>::radial_random(&ring, resolution, &mut rng).unwrap(),
                    &ring,
                );
                assert_in_range(
                    &Projection::<32>::parallel_random(&ring, resolution, &mut rng).unwrap(),
                    &ring,
                );
                assert_in_range(
                    &Projection::<32>::radial_random(&linear, resolution, &mut rng).unwrap(),
                    &linear,
                );
                assert_in_range(
                    &Projection::<32>::parallel_random(&linear, resolution, &mut rng).unwrap(),
                    &linear,
                );
            }
            assert_in_range(
                &Projection::<32>::radial(&ring, resolution, Point::new(3.0, -2.0)).unwrap(),
                &ring,
            );
            assert_in_range(
                &Projection::<32>::parallel(&ring, resolution, Point::new(0.3, 0.9)).unwrap(),
                &ring,
            );
            assert_in_range(
                &Projection::<32>::intrinsic(&ring, resolution).unwrap(),
                &ring,
            );
            assert_in_range(
                &Projection::<32>::intrinsic(&linear, resolution).unwrap(),
                &linear,
            );
        }
    }

    #[test]
    fn test_radial_grows_with_distance() {
        let shape = LinearShape::new(20);
        let projection = Projection::<32>::radial(&shape, 8, Point::new(-1.0, 0.0)).unwrap();
        let table = projection.as_slice();

        assert_eq!(table[0], 0);
        assert_eq!(table[19], 7);
        assert!(table.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_radial_from_center_is_symmetric() {
        let shape = PointShape::new(&RING);
        let projection = Projection::<32>::radial(&shape, 4, Point::new(0.0, 0.0)).unwrap();
        // Every ring point is about as far from the center
        let first = projection.bucket(0);
        assert!(projection.as_slice().iter().all(|&b| usize::from(b).abs_diff(first) <= 1));
    }

    #[test]
    fn test_parallel_follows_direction() {
        let shape = LinearShape::new(10);

        let forward = Projection::<16>::parallel(&shape, 5, Point::new(2.0, 0.0)).unwrap();
        assert_eq!(forward.bucket(0), 0);
        assert_eq!(forward.bucket(9), 4);

        let backward = Projection::<16>::parallel(&shape, 5, Point::new(-1.0, 0.0)).unwrap();
        assert_eq!(backward.bucket(0), 4);
        assert_eq!(backward.bucket(9), 0);
    }

    #[test]
    fn test_parallel_zero_direction_collapses() {
        let shape = PointShape::new(&RING);
        let projection = Projection::<16>::parallel(&shape, 6, Point::new(0.0, 0.0)).unwrap();
        assert!(projection.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_intrinsic_follows_index() {
        let shape = LinearShape::new(20);
        let projection = Projection::<20>::intrinsic(&shape, 8).unwrap();
        assert_eq!(
            projection.as_slice(),
            &[0, 0, 0, 1, 1, 2, 2, 2, 3, 3, 4, 4, 4, 5, 5, 6, 6, 6, 7, 7]
        );
    }

    #[test]
    fn test_invalid_parameters() {
        let shape = LinearShape::new(20);

        assert_eq!(
            Projection::<32>::intrinsic(&shape, 0).err(),
            Some(ProjectionError::ZeroResolution)
        );
        assert_eq!(
            Projection::<32>::radial(&shape, 21, Point::new(0.0, 0.0)).err(),
            Some(ProjectionError::ResolutionExceedsPoints {
                resolution: 21,
                n_points: 20
            })
        );
        assert_eq!(
            Projection::<8>::intrinsic(&shape, 4).err(),
            Some(ProjectionError::TooManyPoints {
                n_points: 20,
                capacity: 8
            })
        );
    }
}
