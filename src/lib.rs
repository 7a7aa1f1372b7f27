//! Obligo is a search-branching strategy for constraint-programming solvers
//! that forces the *mandatory parts* of interval-placed rectangles.
//!
//! When a rectangle of width `w` starts somewhere in `[min, max]`, the cells
//! in `[max, min + w)` are covered no matter which start is eventually
//! chosen. Splitting a coordinate's domain so that this forced overlap
//! reaches a configured fraction of `w` gives the hosting solver's
//! propagation something to work with long before the coordinate is fully
//! assigned. The idea comes from packing models, but the brancher only ever
//! talks to domains through a narrow capability interface, so it plugs into
//! any engine that can answer bound queries and apply `<=`/`>` narrowings.
//!
//! # Core Concepts
//!
//! - **[`DomainRepresentation`]**: a trait the hosting engine's variable
//!   domains implement: query bounds and remaining values, request a
//!   narrowed copy. The crate ships [`OrdSetDomain`], a persistent
//!   ordered-set implementation with cheap structural-sharing clones.
//! - **[`Brancher`]**: the lifecycle capability a search engine drives:
//!   `has_alternatives` → `select_branch` → `commit`, plus cloning for
//!   duplicated search states and choice archiving for checkpoint/replay.
//! - **[`IntervalBrancher`]**: the mandatory-part strategy itself.
//!
//! # Example: Forcing Half of a Width-10 Rectangle
//!
//! Two rectangles of width 10 may start anywhere in `[0, 10]`. With a
//! mandatory fraction of one half, the brancher splits the first coordinate
//! at 5: the left branch pins the rectangle to `[0, 5]` (forcing cells
//! 5..10), the right branch to `[6, 10]`.
//!
//! ```
//! use obligo::branching::{
//!     brancher::{Brancher, CommitResult},
//!     interval::IntervalBrancher,
//!     variables::{Domain, OrdSetDomain, VariableSet},
//! };
//!
//! let vars: VariableSet = (0..2)
//!     .map(|_| Box::new(OrdSetDomain::from_bounds(0, 10)) as Domain)
//!     .collect();
//!
//! let mut brancher = IntervalBrancher::new(&vars, vec![10, 10], 0.5)?;
//! assert!(brancher.has_alternatives(&vars));
//!
//! let choice = brancher.select_branch(&vars)?;
//! assert_eq!(choice.variable, 0);
//! assert_eq!(choice.split_point, 5);
//!
//! // The engine explores each alternative on its own clone of the state.
//! let mut left = vars.clone();
//! assert_eq!(brancher.commit(&mut left, &choice, 0), CommitResult::Accepted);
//! assert_eq!(left.domain(0).max(), Some(5));
//!
//! let mut right = vars.clone();
//! assert_eq!(brancher.commit(&mut right, &choice, 1), CommitResult::Accepted);
//! assert_eq!(right.domain(0).min(), Some(6));
//! # Ok::<(), obligo::error::Error>(())
//! ```
//!
//! [`DomainRepresentation`]: branching::variables::DomainRepresentation
//! [`OrdSetDomain`]: branching::variables::OrdSetDomain
//! [`Brancher`]: branching::brancher::Brancher
//! [`IntervalBrancher`]: branching::interval::IntervalBrancher
pub mod branching;
pub mod error;
