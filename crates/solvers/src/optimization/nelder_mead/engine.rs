use super::{Config, Error, Phase, Simplex, simplex::point_along};

/// The resumable Nelder–Mead engine.
///
/// `NelderMead` inverts the usual control flow: instead of calling the
/// objective, it publishes one trial point at a time and waits for the caller
/// to supply its value. The protocol is strictly half-duplex:
///
/// 1. Construct the engine. It immediately publishes its first trial point —
///    the *last* simplex vertex (the starting point for [`NelderMead::new`]).
/// 2. Evaluate the objective at [`NelderMead::trial`].
/// 3. Call [`NelderMead::advance`] with that value; it returns the next point
///    to evaluate. Repeat from step 2 for as long as desired.
///
/// Termination is the caller's decision; the engine always has a next
/// request. The current [`Phase`], [`Simplex`], and centroid are observable
/// between calls for introspection or visualization.
///
/// The engine is a plain owned value with no shared state, so independent
/// optimization runs can coexist freely; it is single-threaded and performs
/// no I/O.
#[derive(Debug, Clone)]
pub struct NelderMead<const N: usize> {
    config: Config,
    simplex: Simplex<N>,
    phase: Phase<N>,
    trial: [f64; N],
}

impl<const N: usize> NelderMead<N> {
    /// Creates an engine whose initial simplex is an axis-aligned
    /// perturbation of `start`, with `start` itself as the last vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if `N == 0` or a coordinate is non-finite.
    pub fn new(start: [f64; N], config: Config) -> Result<Self, Error> {
        if N == 0 {
            return Err(Error::NoDimensions);
        }
        validate_coordinates(&start)?;

        Ok(Self::from_simplex(Simplex::around(start), config))
    }

    /// Creates an engine from caller-supplied vertices.
    ///
    /// The protocol is unchanged: the first value supplied to
    /// [`NelderMead::advance`] must be the objective at the *last* vertex,
    /// which is also what [`NelderMead::trial`] publishes after construction.
    ///
    /// # Errors
    ///
    /// Returns an error if `N == 0`, the vertex count is not `N + 1`, or a
    /// coordinate is non-finite.
    pub fn with_simplex(vertices: Vec<[f64; N]>, config: Config) -> Result<Self, Error> {
        if N == 0 {
            return Err(Error::NoDimensions);
        }
        if vertices.len() != N + 1 {
            return Err(Error::VertexCount {
                expected: N + 1,
                found: vertices.len(),
            });
        }
        for vertex in &vertices {
            validate_coordinates(vertex)?;
        }

        Ok(Self::from_simplex(Simplex::from_vertices(vertices), config))
    }

    fn from_simplex(simplex: Simplex<N>, config: Config) -> Self {
        let trial = simplex.vertex(N);
        Self {
            config,
            simplex,
            phase: Phase::Gather { calls: 0 },
            trial,
        }
    }

    /// Returns the point the engine wants evaluated next.
    #[must_use]
    pub fn trial(&self) -> [f64; N] {
        self.trial
    }

    /// Returns the engine's current protocol phase.
    #[must_use]
    pub fn phase(&self) -> Phase<N> {
        self.phase
    }

    /// Returns the current simplex for introspection.
    #[must_use]
    pub fn simplex(&self) -> &Simplex<N> {
        &self.simplex
    }

    /// Supplies the objective value at the current trial point and returns
    /// the next point to evaluate.
    ///
    /// The value is taken at face value: non-finite or wildly wrong values
    /// are not detected here, they simply steer the search like any other
    /// observation.
    pub fn advance(&mut self, value: f64) -> [f64; N] {
        match self.phase {
            Phase::Gather { calls } => self.gather(calls, value),
            Phase::Reflection { reflected } => self.resolve_reflection(reflected, value),
            Phase::Expansion {
                reflected,
                reflected_value,
                expanded,
            } => self.resolve_expansion(reflected, reflected_value, expanded, value),
            Phase::Contraction { contracted } => self.resolve_contraction(contracted, value),
        }
        self.trial
    }

    /// One step of the value-gathering protocol.
    ///
    /// Call 0 completes the last slot (the vertex the caller evaluated on its
    /// own); call `k` completes slot `k - 1`, the vertex requested on the
    /// previous call. Call `N` finishes the table, sorts, and rolls straight
    /// into the first reflection so the caller never sees an empty request.
    fn gather(&mut self, calls: usize, value: f64) {
        if calls == 0 {
            self.simplex.set_value(N, value);
        } else {
            self.simplex.set_value(calls - 1, value);
        }

        if calls < N {
            self.trial = self.simplex.vertex(calls);
            self.phase = Phase::Gather { calls: calls + 1 };
        } else {
            self.simplex.sort();
            self.reflect();
        }
    }

    /// Publishes the reflection of the worst vertex through the centroid.
    fn reflect(&mut self) {
        let centroid = self.simplex.centroid();
        let reflected = point_along(&centroid, &self.simplex.worst(), -self.config.alpha());
        self.trial = reflected;
        self.phase = Phase::Reflection { reflected };
    }

    fn resolve_reflection(&mut self, reflected: [f64; N], value: f64) {
        let best = self.simplex.values()[0];
        let second_worst = self.simplex.values()[N - 1];

        if value < second_worst && value >= best {
            // Plain improvement over the worst: keep it and reflect again.
            self.accept(reflected, value);
        } else if value < best {
            let centroid = self.simplex.centroid();
            let expanded = point_along(&centroid, &reflected, self.config.gamma());
            self.trial = expanded;
            self.phase = Phase::Expansion {
                reflected,
                reflected_value: value,
                expanded,
            };
        } else {
            // Contract inside when the reflection is no better than the
            // current worst, outside when it is.
            let centroid = self.simplex.centroid();
            let contracted = if value >= self.simplex.worst_value() {
                point_along(&centroid, &self.simplex.worst(), self.config.beta())
            } else {
                point_along(&centroid, &reflected, self.config.beta())
            };
            self.trial = contracted;
            self.phase = Phase::Contraction { contracted };
        }
    }

    fn resolve_expansion(
        &mut self,
        reflected: [f64; N],
        reflected_value: f64,
        expanded: [f64; N],
        value: f64,
    ) {
        if value < reflected_value {
            self.accept(expanded, value);
        } else {
            self.accept(reflected, reflected_value);
        }
    }

    fn resolve_contraction(&mut self, contracted: [f64; N], value: f64) {
        if value < self.simplex.worst_value() || !self.config.shrink() {
            self.accept(contracted, value);
        } else {
            // Contraction failed: pull everything toward the best vertex and
            // regather. The flip inside `shrink_toward_best` parks the known
            // best value in the last slot, so the gather pass starts at call
            // 1 and only the N moved vertices get re-evaluated.
            self.simplex.shrink_toward_best(self.config.delta());
            self.trial = self.simplex.vertex(0);
            self.phase = Phase::Gather { calls: 1 };
        }
    }

    /// Installs a candidate as the new worst vertex, re-sorts, and issues the
    /// next reflection.
    fn accept(&mut self, vertex: [f64; N], value: f64) {
        self.simplex.replace_worst(vertex, value);
        self.simplex.sort();
        self.reflect();
    }
}

fn validate_coordinates<const N: usize>(vertex: &[f64; N]) -> Result<(), Error> {
    for &value in vertex {
        if !value.is_finite() {
            return Err(Error::NonFiniteCoordinate { value });
        }
    }
    Ok(())
}
