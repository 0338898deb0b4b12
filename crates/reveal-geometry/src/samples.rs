//! Bundled sample paths.

use reveal_math::{dvec2, Rgba, Size2};

use crate::path::CurvePath;

/// Six-stop gradient that goes with [`hello_path`].
pub fn hello_colors() -> Vec<Rgba> {
    vec![
        Rgba::from_rgb8(21, 123, 147),
        Rgba::from_rgb8(253, 211, 93),
        Rgba::from_rgb8(244, 83, 67),
        Rgba::from_rgb8(149, 117, 179),
        Rgba::from_rgb8(108, 153, 223),
        Rgba::from_rgb8(127, 182, 221),
    ]
}

/// Handwritten "hello" in one continuous stroke, 1032x322 design box, stroke width 120.
pub fn hello_path() -> CurvePath {
    let mut shape = CurvePath::new(Size2::new(1032.0, 322.0), 120.0);

    // h
    shape
        .move_to(dvec2(1.0, 303.38))
        .add_curve(dvec2(109.8, 227.73), dvec2(28.31, 287.4), dvec2(88.3, 249.9));
    shape
        .move_to(dvec2(146.8, 183.76))
        .add_curve(dvec2(210.23, 48.3), dvec2(164.86, 164.55), dvec2(202.46, 117.58))
        .add_curve(dvec2(142.83, 32.47), dvec2(216.39, -6.67), dvec2(160.85, -16.06))
        .add_curve(dvec2(112.88, 253.68), dvec2(128.3, 71.61), dvec2(121.25, 194.9));
    shape
        .move_to(dvec2(99.23, 319.65))
        .add_curve(dvec2(142.39, 188.59), dvec2(104.37, 285.49), dvec2(118.61, 216.74))
        .add_curve(dvec2(225.64, 201.35), dvec2(168.53, 157.66), dvec2(219.46, 150.09))
        .add_curve(dvec2(229.61, 310.85), dvec2(230.05, 237.85), dvec2(205.38, 292.38))
        .add_curve(dvec2(340.17, 296.34), dvec2(253.83, 329.32), dvec2(314.62, 313.49));

    // e
    shape
        .add_curve(dvec2(415.49, 214.74), dvec2(369.24, 280.83), dvec2(404.09, 254.76))
        .normalize_last_connection()
        .add_curve(dvec2(340.17, 178.48), dvec2(430.19, 163.12), dvec2(373.15, 140.67))
        .normalize_last_connection()
        .add_curve(dvec2(345.45, 293.74), dvec2(315.06, 207.26), dvec2(310.21, 267.15));
    shape
        .add_curve(dvec2(508.43, 270.39), dvec2(359.55, 316.13), dvec2(438.66, 343.57))
        .normalize_last_connection();

    // first l
    shape
        .add_curve(dvec2(596.96, 124.82), dvec2(540.44, 232.43), dvec2(582.87, 175.14))
        .add_curve(dvec2(594.32, 6.08), dvec2(614.58, 61.94), dvec2(618.11, 17.52))
        .normalize_last_connection()
        .add_curve(dvec2(520.76, 101.27), dvec2(567.89, -6.62), dvec2(535.3, 28.71))
        .add_curve(dvec2(508.43, 218.06), dvec2(510.52, 152.39), dvec2(508.43, 179.36));
    shape
        .add_curve(dvec2(573.62, 320.97), dvec2(507.69, 252.36), dvec2(517.24, 319.56))
        .add_curve(dvec2(705.76, 231.25), dvec2(639.25, 322.61), dvec2(685.35, 261.6))
        .normalize_last_connection();

    // second l
    shape
        .add_curve(dvec2(767.43, 91.4), dvec2(724.7, 201.79), dvec2(754.8, 141.69))
        .add_curve(dvec2(754.21, 6.52), dvec2(781.96, 33.54), dvec2(774.22, 13.38))
        .normalize_last_connection()
        .add_curve(dvec2(687.26, 91.4), dvec2(729.11, -2.08), dvec2(700.92, 32.03))
        .add_curve(dvec2(677.57, 262.92), dvec2(674.8, 145.6), dvec2(661.72, 217.18));
    shape
        .add_curve(dvec2(739.24, 320.53), dvec2(674.93, 273.67), dvec2(703.5, 319.05))
        .normalize_last_connection()
        .add_curve(dvec2(841.43, 220.26), dvec2(786.37, 322.48), dvec2(819.85, 286.67))
        .normalize_last_connection();

    // o
    shape
        .add_curve(dvec2(905.3, 160.01), dvec2(848.04, 196.95), dvec2(867.95, 160.01))
        .add_curve(dvec2(967.4, 235.65), dvec2(951.81, 317.63), dvec2(966.82, 208.5))
        .normalize_last_connection();
    shape
        .add_curve(dvec2(896.49, 320.09), dvec2(830.86, 267.31), dvec2(951.81, 317.63))
        .normalize_last_connection()
        .add_curve(dvec2(841.43, 220.26), dvec2(786.37, 322.48), dvec2(829.0, 266.0))
        .normalize_last_connection();
    shape
        .add_curve(dvec2(905.3, 160.01), dvec2(848.04, 196.95), dvec2(867.95, 160.01))
        .add_curve(dvec2(981.94, 181.56), dvec2(951.99, 160.01), dvec2(948.46, 182.44))
        .add_curve(dvec2(1037.0, 153.41), dvec2(1008.72, 180.85), dvec2(1029.81, 162.5));

    shape
}
