use crate::{
    branching::{choice::BranchChoice, variables::VariableSet},
    error::Result,
};

/// Outcome of committing one alternative of a [`BranchChoice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitResult {
    /// The narrowing was consistent; the search descends into this branch.
    Accepted,
    /// The narrowing would have emptied the domain. This prunes the branch
    /// and the engine backtracks; it is a normal part of search, not an
    /// error.
    Failed,
}

/// A trait for branching strategies that drive a search engine's
/// branch-and-bound loop.
///
/// The engine calls the three lifecycle methods in a fixed order at each
/// decision point: [`has_alternatives`] to ask whether this brancher still
/// has work, [`select_branch`] to obtain a two-way split, and [`commit`]
/// once per explored alternative (on independently cloned variable stores).
/// A brancher never narrows a domain outside of `commit`.
///
/// Engines that explore in parallel clone the whole search state,
/// brancher included; [`clone_brancher`] must therefore produce a copy
/// whose internal state is fully independent of the original.
///
/// [`has_alternatives`]: Brancher::has_alternatives
/// [`select_branch`]: Brancher::select_branch
/// [`commit`]: Brancher::commit
/// [`clone_brancher`]: Brancher::clone_brancher
pub trait Brancher: std::fmt::Debug {
    /// Reports whether any variable still requires branching.
    ///
    /// Implementations may cache scan progress in internal state, which is
    /// why this takes `&mut self`; they must not alter any domain.
    fn has_alternatives(&mut self, vars: &VariableSet) -> bool;

    /// Produces the next branching decision.
    ///
    /// Only valid after [`has_alternatives`] returned `true` for the same
    /// search state.
    ///
    /// [`has_alternatives`]: Brancher::has_alternatives
    fn select_branch(&self, vars: &VariableSet) -> Result<BranchChoice>;

    /// Applies one alternative of a previously produced choice to `vars`.
    ///
    /// Alternative `0` narrows the chosen variable to `<= split_point`; any
    /// other alternative narrows it to `> split_point`. On
    /// [`CommitResult::Failed`] the store is left untouched.
    fn commit(
        &self,
        vars: &mut VariableSet,
        choice: &BranchChoice,
        alternative: u32,
    ) -> CommitResult;

    /// Returns an independent copy of this brancher for a cloned search
    /// state.
    fn clone_brancher(&self) -> Box<dyn Brancher>;
}

impl Clone for Box<dyn Brancher> {
    fn clone(&self) -> Self {
        self.clone_brancher()
    }
}
