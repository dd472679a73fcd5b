//! Student's t critical values, for confidence interval estimation on
//! simulation outputs.

use num_traits::Float;

// One-tailed significance levels covered by the table
const ALPHAS: [f64; 6] = [0.1, 0.05, 0.025, 0.01, 0.005, 0.001];

// Critical values for 1 through 30 degrees of freedom
const T_TABLE: [[f64; 6]; 30] = [
    [3.078, 6.314, 12.706, 31.821, 63.657, 318.313],
    [1.886, 2.920, 4.303, 6.965, 9.925, 22.327],
    [1.638, 2.353, 3.182, 4.541, 5.841, 10.215],
    [1.533, 2.132, 2.776, 3.747, 4.604, 7.173],
    [1.476, 2.015, 2.571, 3.365, 4.032, 5.893],
    [1.440, 1.943, 2.447, 3.143, 3.707, 5.208],
    [1.415, 1.895, 2.365, 2.998, 3.499, 4.785],
    [1.397, 1.860, 2.306, 2.896, 3.355, 4.501],
    [1.383, 1.833, 2.262, 2.821, 3.250, 4.297],
    [1.372, 1.812, 2.228, 2.764, 3.169, 4.144],
    [1.363, 1.796, 2.201, 2.718, 3.106, 4.025],
    [1.356, 1.782, 2.179, 2.681, 3.055, 3.930],
    [1.350, 1.771, 2.160, 2.650, 3.012, 3.852],
    [1.345, 1.761, 2.145, 2.624, 2.977, 3.787],
    [1.341, 1.753, 2.131, 2.602, 2.947, 3.733],
    [1.337, 1.746, 2.120, 2.583, 2.921, 3.686],
    [1.333, 1.740, 2.110, 2.567, 2.898, 3.646],
    [1.330, 1.734, 2.101, 2.552, 2.878, 3.610],
    [1.328, 1.729, 2.093, 2.539, 2.861, 3.579],
    [1.325, 1.725, 2.086, 2.528, 2.845, 3.552],
    [1.323, 1.721, 2.080, 2.518, 2.831, 3.527],
    [1.321, 1.717, 2.074, 2.508, 2.819, 3.505],
    [1.319, 1.714, 2.069, 2.500, 2.807, 3.485],
    [1.318, 1.711, 2.064, 2.492, 2.797, 3.467],
    [1.316, 1.708, 2.060, 2.485, 2.787, 3.450],
    [1.315, 1.706, 2.056, 2.479, 2.779, 3.435],
    [1.314, 1.703, 2.052, 2.473, 2.771, 3.421],
    [1.313, 1.701, 2.048, 2.467, 2.763, 3.408],
    [1.311, 1.699, 2.045, 2.462, 2.756, 3.396],
    [1.310, 1.697, 2.042, 2.457, 2.750, 3.385],
];

// Limiting standard normal values, used beyond 30 degrees of freedom
const Z_ROW: [f64; 6] = [1.282, 1.645, 1.960, 2.326, 2.576, 3.090];

/// The t score corresponding to a one-tailed significance level and a
/// degrees-of-freedom count.  The nearest tabulated significance level is
/// used, degrees of freedom beyond the table use the standard normal
/// limit, and a degenerate zero-degrees-of-freedom request is clamped to
/// the most conservative tabulated row.
pub fn t_score<T: Float>(alpha: T, degrees_of_freedom: usize) -> T
where
    f64: Into<T>,
{
    let column = ALPHAS
        .iter()
        .enumerate()
        .fold(
            (0, T::infinity()),
            |(closest_index, closest_distance), (index, level)| {
                let distance = (alpha - (*level).into()).abs();
                if distance < closest_distance {
                    (index, distance)
                } else {
                    (closest_index, closest_distance)
                }
            },
        )
        .0;
    let critical_values = match degrees_of_freedom {
        0 => &T_TABLE[0],
        1..=30 => &T_TABLE[degrees_of_freedom - 1],
        _ => &Z_ROW,
    };
    critical_values[column].into()
}
