use serde::{Deserialize, Serialize};

/// Constants of the three-stage flow model children -> workers -> retirees,
/// shared read-only by every evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CwrParams {
    // Rates (per unit time)
    pub b: f64,     // inflow/birth rate into the children stage
    pub beta: f64,  // children -> workers
    pub gamma: f64, // workers -> retirees

    // Baseline mortality carried over from the source model. The closed
    // forms below never reference it; kept as dead configuration so the
    // parameter set round-trips unchanged rather than silently dropping it.
    pub mu: f64,

    // Initial stage populations at t = 0
    pub x0: f64,
    pub y0: f64,
    pub z0: f64,
}

impl CwrParams {
    /// The fixed instance this program plots.
    pub fn baseline() -> Self {
        Self {
            b: 0.01270,
            beta: 1.0 / 22.0,
            gamma: 1.0 / 43.0,
            mu: 0.00799,
            x0: 1_000_000.0,
            y0: 1_000_000.0,
            z0: 1_000_000.0,
        }
    }

    /// The closed forms require distinct nonzero rate constants; equal or
    /// zero rates are the repeated-eigenvalue case of the underlying ODE
    /// system and must fail loudly instead of evaluating to garbage.
    pub fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.b.is_finite(), "b must be finite");
        anyhow::ensure!(self.mu.is_finite(), "mu must be finite");
        anyhow::ensure!(
            self.beta.is_finite() && self.beta != 0.0,
            "beta must be finite and nonzero"
        );
        anyhow::ensure!(
            self.gamma.is_finite() && self.gamma != 0.0,
            "gamma must be finite and nonzero"
        );
        anyhow::ensure!(
            self.beta != self.gamma,
            "beta and gamma must be distinct (repeated eigenvalue)"
        );
        anyhow::ensure!(
            self.x0.is_finite() && self.y0.is_finite() && self.z0.is_finite(),
            "initial populations must be finite"
        );
        Ok(())
    }
}

/// One evaluation of the model: the three stage populations at time t.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CwrPoint {
    pub t: f64,
    pub children: f64,
    pub workers: f64,
    pub retirees: f64,
}

/// Sampled trajectories; the three value vectors are indexed identically
/// to `t`.
#[derive(Debug, Clone, Default)]
pub struct CwrSeries {
    pub t: Vec<f64>,
    pub children: Vec<f64>,
    pub workers: Vec<f64>,
    pub retirees: Vec<f64>,
}

impl CwrSeries {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

pub struct CwrModel {
    pub params: CwrParams,
}

impl CwrModel {
    pub fn new(params: CwrParams) -> anyhow::Result<Self> {
        params.check()?;
        Ok(Self { params })
    }

    /// C(t): children stage population.
    pub fn children(&self, t: f64) -> f64 {
        let p = &self.params;
        (p.b + (-p.beta * t).exp() * (-p.b + p.beta * p.x0)) / p.beta
    }

    /// W(t): workers stage population.
    pub fn workers(&self, t: f64) -> f64 {
        let p = &self.params;
        let q = p.b * p.beta - p.gamma * p.beta * p.x0 + p.y0 * p.gamma * p.gamma
            - p.y0 * p.gamma * p.beta;
        (p.b * (p.gamma * t).exp() / p.gamma
            + (-p.b + p.beta * p.x0) * ((p.gamma - p.beta) * t).exp() / (p.gamma - p.beta)
            - q / (p.gamma * (p.beta - p.gamma)))
            * (-p.gamma * t).exp()
    }

    /// R(t): retirees stage population, assembled from the five terms of
    /// the partial-fraction expansion of the analytic solution.
    pub fn retirees(&self, t: f64) -> f64 {
        let p = &self.params;
        let d = p.beta - p.gamma;
        let k = p.gamma / d;
        let j = p.beta / d;
        let q = p.b * p.beta - p.gamma * p.beta * p.x0 + p.y0 * p.gamma * p.gamma
            - p.y0 * p.gamma * p.beta;

        let t1 = (-p.b * t + (-p.beta * t).exp() * (-p.b + p.beta * p.x0) / p.beta) * k;
        let t2 = -((-p.gamma * t).exp() * q / (p.gamma * d)) * k;
        let t3 = (p.b * t
            + (p.b * p.beta - p.gamma * p.beta * p.x0 - p.y0 * p.gamma * p.beta
                - p.z0 * p.gamma * p.beta
                + p.gamma * p.b)
                / (p.gamma * p.beta))
            * k;
        let t4 = ((-p.gamma * t).exp() * q / (p.gamma * d) + p.b * t) * j;
        let t5 = ((-p.b * p.beta
            + p.gamma * p.beta * p.x0
            + p.y0 * p.gamma * p.beta
            + p.z0 * p.gamma * p.beta
            - p.gamma * p.b)
            / (p.gamma * p.beta)
            - p.b * t)
            * j;

        t1 + t2 + t3 + t4 + t5
    }

    pub fn eval(&self, t: f64) -> CwrPoint {
        CwrPoint {
            t,
            children: self.children(t),
            workers: self.workers(t),
            retirees: self.retirees(t),
        }
    }

    /// Evaluate the model at every grid point, collecting parallel series.
    pub fn sample(&self, times: &[f64]) -> CwrSeries {
        let mut series = CwrSeries {
            t: Vec::with_capacity(times.len()),
            children: Vec::with_capacity(times.len()),
            workers: Vec::with_capacity(times.len()),
            retirees: Vec::with_capacity(times.len()),
        };
        for &t in times {
            let pt = self.eval(t);
            series.t.push(pt.t);
            series.children.push(pt.children);
            series.workers.push(pt.workers);
            series.retirees.push(pt.retirees);
        }
        series
    }
}
