use approx::assert_relative_eq;

use crate::geo::Route;
use crate::motion::FlightPath;
use crate::motion::error::MotionError;

const DELHI_MUMBAI: Route = Route {
    from: [77.1, 28.6],
    to: [72.87, 19.07],
};

#[test]
fn endpoints_are_exact() {
    let path = FlightPath::new(&DELHI_MUMBAI, 5).expect("Could not build path");

    let origin = path.position(0).unwrap();
    let destination = path.position(4).unwrap();

    assert_relative_eq!(origin.x(), 77.1, epsilon = 1e-9);
    assert_relative_eq!(origin.y(), 28.6, epsilon = 1e-9);
    assert_relative_eq!(destination.x(), 72.87, epsilon = 1e-9);
    assert_relative_eq!(destination.y(), 19.07, epsilon = 1e-9);
}

#[test]
fn interior_points_are_linearly_spaced() {
    let path = FlightPath::new(&DELHI_MUMBAI, 5).expect("Could not build path");

    for step in 1..4_usize {
        let fraction = step as f64 / 4.0;
        let point = path.position(step).unwrap();

        assert_relative_eq!(point.x(), 77.1 + fraction * (72.87 - 77.1), epsilon = 1e-9);
        assert_relative_eq!(point.y(), 28.6 + fraction * (19.07 - 28.6), epsilon = 1e-9);
    }
}

#[test]
fn high_resolution_final_point_reaches_destination() {
    let path = FlightPath::new(&DELHI_MUMBAI, 100).expect("Could not build path");
    let last = path.position(99).unwrap();

    assert_relative_eq!(last.x(), 72.87, epsilon = 1e-6);
    assert_relative_eq!(last.y(), 19.07, epsilon = 1e-6);
}

#[test]
fn out_of_range_frame_fails_loudly() {
    let path = FlightPath::new(&DELHI_MUMBAI, 5).expect("Could not build path");

    match path.position(5) {
        Err(MotionError::FrameOutOfRange { frame, resolution }) => {
            assert_eq!(frame, 5);
            assert_eq!(resolution, 5);
        }
        other => panic!("Expected a range failure, got {other:?}"),
    }
}

#[test]
fn rejects_degenerate_resolution() {
    for resolution in [0, 1] {
        assert!(matches!(
            FlightPath::new(&DELHI_MUMBAI, resolution),
            Err(MotionError::InsufficientResolution(_))
        ));
    }
}

#[test]
fn pinned_route_holds_position() {
    let pinned = Route::new([77.59, 12.97], [77.59, 12.97]);
    let path = FlightPath::new(&pinned, 10).expect("Could not build path");

    for frame in 0..10 {
        assert_eq!(path.position(frame).unwrap(), pinned.origin());
    }
}
