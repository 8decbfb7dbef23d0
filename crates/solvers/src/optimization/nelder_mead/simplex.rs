/// Default relative perturbation used to build the initial simplex.
const STEP: f64 = 0.05;

/// Coordinates smaller than this get an absolute perturbation instead,
/// so a zero coordinate cannot collapse the simplex onto the start point.
const NEAR_ZERO: f64 = 1.0e-22;

/// Absolute perturbation for near-zero coordinates.
const NEAR_ZERO_STEP: f64 = 0.000_25;

/// The search geometry: `N + 1` vertices with an index-aligned value table.
///
/// The simplex is owned exclusively by the engine. After every sort the value
/// table is ascending, so index `0` is the best vertex and index `N` the
/// worst, and the centroid is the mean of all vertices except the worst.
/// During a gather pass the value table is only partially populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Simplex<const N: usize> {
    vertices: Vec<[f64; N]>,
    values: Vec<f64>,
    centroid: [f64; N],
}

impl<const N: usize> Simplex<N> {
    /// Builds the axis-aligned initial simplex around a starting point.
    ///
    /// Vertex `i` (for `i < N`) is the starting point with coordinate `i`
    /// perturbed; vertex `N` is the starting point itself. Keeping the
    /// unmodified start in the last slot means the caller's first supplied
    /// objective value (the one it evaluates before the first `advance`
    /// call) completes that slot without a fresh evaluation request.
    pub(super) fn around(start: [f64; N]) -> Self {
        let mut vertices = vec![start; N + 1];
        for (i, vertex) in vertices.iter_mut().take(N).enumerate() {
            vertex[i] += if start[i].abs() < NEAR_ZERO {
                NEAR_ZERO_STEP
            } else {
                STEP
            };
        }
        Self::from_vertices(vertices)
    }

    /// Wraps caller-supplied vertices; the engine validates the row count.
    pub(super) fn from_vertices(vertices: Vec<[f64; N]>) -> Self {
        debug_assert_eq!(vertices.len(), N + 1);
        let values = vec![0.0; N + 1];
        let mut simplex = Self {
            vertices,
            values,
            centroid: [0.0; N],
        };
        simplex.update_centroid();
        simplex
    }

    /// Returns the vertices, ordered by ascending value after each sort.
    #[must_use]
    pub fn vertices(&self) -> &[[f64; N]] {
        &self.vertices
    }

    /// Returns the value table, index-aligned with [`Simplex::vertices`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the centroid of all vertices except the current worst.
    #[must_use]
    pub fn centroid(&self) -> [f64; N] {
        self.centroid
    }

    pub(super) fn vertex(&self, index: usize) -> [f64; N] {
        self.vertices[index]
    }

    pub(super) fn worst(&self) -> [f64; N] {
        self.vertices[N]
    }

    pub(super) fn worst_value(&self) -> f64 {
        self.values[N]
    }

    pub(super) fn set_value(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    pub(super) fn replace_worst(&mut self, vertex: [f64; N], value: f64) {
        self.vertices[N] = vertex;
        self.values[N] = value;
    }

    /// Jointly reorders vertices and values by ascending value, then
    /// recomputes the centroid.
    ///
    /// The sort is stable so equal values keep their relative order, which
    /// keeps optimization trajectories reproducible.
    pub(super) fn sort(&mut self) {
        let mut order: Vec<usize> = (0..=N).collect();
        order.sort_by(|&a, &b| self.values[a].total_cmp(&self.values[b]));
        self.vertices = order.iter().map(|&i| self.vertices[i]).collect();
        self.values = order.iter().map(|&i| self.values[i]).collect();
        self.update_centroid();
    }

    /// Moves every vertex except the best toward the best by `delta`, then
    /// flips both sequences in place.
    ///
    /// After the flip the untouched best vertex and its still-valid value sit
    /// in the *last* slot — the same "last slot already known" shape a fresh
    /// simplex has, so the gather protocol can repopulate the remaining
    /// values without re-evaluating the best vertex.
    pub(super) fn shrink_toward_best(&mut self, delta: f64) {
        let best = self.vertices[0];
        for vertex in self.vertices.iter_mut().skip(1) {
            *vertex = point_along(&best, vertex, delta);
        }
        self.vertices.reverse();
        self.values.reverse();
    }

    fn update_centroid(&mut self) {
        let mut centroid = [0.0; N];
        for vertex in &self.vertices[..N] {
            for (sum, coordinate) in centroid.iter_mut().zip(vertex) {
                *sum += coordinate;
            }
        }
        for sum in &mut centroid {
            *sum /= N as f64;
        }
        self.centroid = centroid;
    }
}

/// Returns `origin + scale * (target - origin)`.
///
/// All four Nelder–Mead moves are instances of this line: reflection uses a
/// negative scale away from the worst vertex, expansion and contraction use
/// positive scales toward a candidate, and shrink pulls vertices toward the
/// best.
pub(super) fn point_along<const N: usize>(
    origin: &[f64; N],
    target: &[f64; N],
    scale: f64,
) -> [f64; N] {
    let mut point = [0.0; N];
    for i in 0..N {
        point[i] = origin[i] + scale * (target[i] - origin[i]);
    }
    point
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn around_perturbs_one_coordinate_per_vertex() {
        let simplex = Simplex::around([1.0, 2.0, 0.0]);

        let vertices = simplex.vertices();
        assert_eq!(vertices.len(), 4);
        assert_relative_eq!(vertices[0][0], 1.05);
        assert_relative_eq!(vertices[0][1], 2.0);
        assert_relative_eq!(vertices[1][1], 2.05);
        // Zero coordinate gets the absolute step
        assert_relative_eq!(vertices[2][2], 0.000_25);
        assert_eq!(vertices[3], [1.0, 2.0, 0.0]);
    }

    #[test]
    fn sort_orders_jointly_and_recomputes_centroid() {
        let mut simplex = Simplex::from_vertices(vec![
            [3.0, 0.0],
            [1.0, 0.0],
            [2.0, 0.0],
        ]);
        simplex.set_value(0, 3.0);
        simplex.set_value(1, 1.0);
        simplex.set_value(2, 2.0);

        simplex.sort();

        assert_eq!(simplex.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(simplex.vertices()[0], [1.0, 0.0]);
        assert_eq!(simplex.vertices()[2], [3.0, 0.0]);
        assert_relative_eq!(simplex.centroid()[0], 1.5);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut simplex = Simplex::from_vertices(vec![
            [1.0, 0.0],
            [2.0, 0.0],
            [3.0, 0.0],
        ]);
        simplex.set_value(0, 5.0);
        simplex.set_value(1, 5.0);
        simplex.set_value(2, 1.0);

        simplex.sort();

        assert_eq!(simplex.vertices()[0], [3.0, 0.0]);
        // The tied vertices keep their relative order
        assert_eq!(simplex.vertices()[1], [1.0, 0.0]);
        assert_eq!(simplex.vertices()[2], [2.0, 0.0]);
    }

    #[test]
    fn sort_is_idempotent_when_already_sorted() {
        let mut simplex = Simplex::from_vertices(vec![
            [1.0, 1.0],
            [2.0, 2.0],
            [3.0, 3.0],
        ]);
        simplex.set_value(0, 1.0);
        simplex.set_value(1, 2.0);
        simplex.set_value(2, 3.0);

        simplex.sort();
        let once = simplex.clone();
        simplex.sort();

        assert_eq!(simplex, once);
    }

    #[test]
    fn shrink_halves_distances_and_flips() {
        let mut simplex = Simplex::from_vertices(vec![
            [0.0, 0.0],
            [2.0, 0.0],
            [0.0, 4.0],
        ]);
        simplex.set_value(0, 1.0);
        simplex.set_value(1, 2.0);
        simplex.set_value(2, 3.0);

        simplex.shrink_toward_best(0.5);

        // Flipped: the untouched best vertex and value end up last
        assert_eq!(simplex.vertices()[2], [0.0, 0.0]);
        assert_relative_eq!(simplex.values()[2], 1.0);
        // Every other vertex halved its distance to the best
        assert_eq!(simplex.vertices()[0], [0.0, 2.0]);
        assert_eq!(simplex.vertices()[1], [1.0, 0.0]);
    }

    #[test]
    fn point_along_matches_hand_computation() {
        let reflected = point_along(&[1.0, 1.0], &[3.0, 5.0], -1.0);
        assert_relative_eq!(reflected[0], -1.0);
        assert_relative_eq!(reflected[1], -3.0);

        let contracted = point_along(&[0.0, 0.0], &[2.0, 2.0], 0.5);
        assert_relative_eq!(contracted[0], 1.0);
        assert_relative_eq!(contracted[1], 1.0);
    }
}
