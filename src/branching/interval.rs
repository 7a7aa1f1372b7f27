use tracing::{debug, trace};

use crate::{
    branching::{
        brancher::{Brancher, CommitResult},
        choice::BranchChoice,
        variables::VariableSet,
    },
    error::{BranchError, Result},
};

/// A brancher that forces the mandatory parts of interval-placed rectangles.
///
/// Each variable is the start coordinate of a rectangle and carries a fixed
/// extent (its width or height). Whatever value the variable eventually
/// takes, the rectangle is guaranteed to cover `[max, min + weight)`: its
/// *mandatory part*. The brancher repeatedly splits the first variable whose
/// mandatory part is still shorter than `fraction * weight`, so that
/// propagation can exploit the forced overlap early in the search.
///
/// A variable is left alone once it is assigned or once
/// `(min + weight) - max >= fraction * weight` holds; both conditions are
/// stable under further narrowing, which is what makes the forward-only
/// scan cursor sound.
#[derive(Debug, Clone)]
pub struct IntervalBrancher {
    /// One extent per variable, owned by the brancher.
    weights: Vec<i64>,
    /// Fraction of the extent that must be forced, in (0, 1].
    fraction: f64,
    /// First index that may still require branching. A cache, not part of
    /// the contract: resetting it to 0 would only cost a rescan.
    cursor: usize,
}

impl IntervalBrancher {
    /// Posts an interval brancher over `vars`.
    ///
    /// `weights` are copied in and must pair up with the variables
    /// one-to-one; `fraction` must lie in `(0, 1]`. Violating either is a
    /// configuration error reported at posting time.
    pub fn new(vars: &VariableSet, weights: Vec<i64>, fraction: f64) -> Result<Self> {
        if weights.len() != vars.len() {
            return Err(BranchError::WeightCountMismatch {
                variables: vars.len(),
                weights: weights.len(),
            }
            .into());
        }
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(BranchError::FractionOutOfRange(fraction).into());
        }
        debug!(
            variables = vars.len(),
            fraction, "posting interval brancher"
        );
        Ok(Self {
            weights,
            fraction,
            cursor: 0,
        })
    }

    /// Whether the variable's forced overlap already meets the fraction.
    fn mandatory_part_met(&self, vars: &VariableSet, index: usize) -> bool {
        let domain = vars.domain(index);
        let (Some(min), Some(max)) = (domain.min(), domain.max()) else {
            // An empty domain has nothing left to branch on.
            return true;
        };
        let weight = self.weights[index];
        ((min + weight) - max) as f64 >= self.fraction * weight as f64
    }
}

impl Brancher for IntervalBrancher {
    fn has_alternatives(&mut self, vars: &VariableSet) -> bool {
        for index in self.cursor..vars.len() {
            let domain = vars.domain(index);
            if !domain.is_assigned() && !self.mandatory_part_met(vars, index) {
                self.cursor = index;
                trace!(index, "mandatory part below fraction");
                return true;
            }
        }
        false
    }

    fn select_branch(&self, vars: &VariableSet) -> Result<BranchChoice> {
        let index = self.cursor;
        let domain = vars.domain(index);
        let weight = self.weights[index];
        let min = domain
            .min()
            .ok_or(BranchError::EmptyDomain { variable: index })?;

        // The split point is the largest remaining value that still
        // satisfies the mandatory-fraction test. The satisfying values form
        // a prefix of the (ascending) domain, and `min` itself always
        // qualifies because the fraction is at most 1, so a non-empty
        // domain cannot fail to produce a split point.
        let mut split_point = min;
        for value in domain.iter() {
            if (((min + weight) - value) as f64) < self.fraction * weight as f64 {
                break;
            }
            split_point = value;
        }

        trace!(index, split_point, "selected split");
        Ok(BranchChoice::new(index, split_point))
    }

    fn commit(
        &self,
        vars: &mut VariableSet,
        choice: &BranchChoice,
        alternative: u32,
    ) -> CommitResult {
        let domain = vars.domain(choice.variable);
        let narrowed = if alternative == 0 {
            domain.restrict_le(choice.split_point)
        } else {
            domain.restrict_gt(choice.split_point)
        };

        if narrowed.is_empty() {
            trace!(
                variable = choice.variable,
                alternative,
                "narrowing failed"
            );
            return CommitResult::Failed;
        }

        vars.set_domain(choice.variable, narrowed);
        CommitResult::Accepted
    }

    fn clone_brancher(&self) -> Box<dyn Brancher> {
        Box::new(self.clone())
    }
}
