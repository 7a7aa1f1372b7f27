use im::{OrdSet, Vector};

/// Index of a decision variable within a [`VariableSet`].
pub type VariableIndex = usize;

pub type Domain = Box<dyn DomainRepresentation>;

/// A trait for different ways to represent an integer variable's domain.
///
/// Branchers treat domains as an opaque capability: they may query bounds,
/// assignment status and the remaining values, and they may request a
/// narrowed copy. Propagation is the hosting engine's business; nothing in
/// this crate ever widens a domain.
pub trait DomainRepresentation: std::fmt::Debug {
    /// Returns the number of values remaining in the domain.
    fn len(&self) -> usize;

    /// Returns `true` if the domain contains no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the domain has been narrowed to a single value.
    fn is_assigned(&self) -> bool {
        self.len() == 1
    }

    /// The smallest remaining value, or `None` for an empty domain.
    fn min(&self) -> Option<i64>;

    /// The largest remaining value, or `None` for an empty domain.
    fn max(&self) -> Option<i64>;

    /// Returns `true` if `value` is still in the domain.
    fn contains(&self, value: i64) -> bool;

    /// Returns an iterator over the remaining values in ascending order.
    ///
    /// Domains may be sparse after propagation, so algorithms that need the
    /// actual value set must use this rather than the `[min, max]` bounds.
    fn iter(&self) -> Box<dyn Iterator<Item = i64> + '_>;

    /// Returns a new domain containing only the values `<= bound`.
    fn restrict_le(&self, bound: i64) -> Domain;

    /// Returns a new domain containing only the values `> bound`.
    fn restrict_gt(&self, bound: i64) -> Domain;

    /// Returns a boxed clone of the domain.
    fn clone_box(&self) -> Domain;
}

impl Clone for Box<dyn DomainRepresentation> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A [`DomainRepresentation`] that uses an `im::OrdSet` to store values.
///
/// The persistent set makes cloning cheap (structural sharing), which
/// matters because search engines clone whole variable stores on every
/// branching decision.
#[derive(Clone, Debug)]
pub struct OrdSetDomain(pub OrdSet<i64>);

impl OrdSetDomain {
    /// Creates a new `OrdSetDomain` from an ordered set.
    pub fn new(values: OrdSet<i64>) -> Self {
        Self(values)
    }

    /// Creates a domain holding every value in `[min, max]`.
    pub fn from_bounds(min: i64, max: i64) -> Self {
        Self((min..=max).collect())
    }
}

impl DomainRepresentation for OrdSetDomain {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn min(&self) -> Option<i64> {
        self.0.get_min().copied()
    }

    fn max(&self) -> Option<i64> {
        self.0.get_max().copied()
    }

    fn contains(&self, value: i64) -> bool {
        self.0.contains(&value)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        Box::new(self.0.iter().copied())
    }

    fn restrict_le(&self, bound: i64) -> Domain {
        let new_set = self.0.iter().copied().filter(|v| *v <= bound).collect();
        Box::new(Self(new_set))
    }

    fn restrict_gt(&self, bound: i64) -> Domain {
        let new_set = self.0.iter().copied().filter(|v| *v > bound).collect();
        Box::new(Self(new_set))
    }

    fn clone_box(&self) -> Domain {
        Box::new(self.clone())
    }
}

/// The ordered sequence of decision variables a brancher works over.
///
/// A `VariableSet` holds one domain per variable. Because it uses a
/// persistent vector, it can be cloned cheaply when the search engine
/// duplicates a search state; the clones share storage until one of them
/// is narrowed.
#[derive(Clone, Debug, Default)]
pub struct VariableSet {
    domains: Vector<Domain>,
}

impl VariableSet {
    pub fn new(domains: Vector<Domain>) -> Self {
        Self { domains }
    }

    /// Returns the number of variables in the set.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Returns the current domain of the variable at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn domain(&self, index: VariableIndex) -> &Domain {
        &self.domains[index]
    }

    /// Replaces the domain of the variable at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_domain(&mut self, index: VariableIndex, domain: Domain) {
        self.domains.set(index, domain);
    }
}

impl FromIterator<Domain> for VariableSet {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self {
            domains: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sparse(values: &[i64]) -> OrdSetDomain {
        OrdSetDomain::new(values.iter().copied().collect())
    }

    #[test]
    fn bounds_of_a_sparse_domain() {
        let domain = sparse(&[2, 5, 9]);
        assert_eq!(domain.min(), Some(2));
        assert_eq!(domain.max(), Some(9));
        assert_eq!(domain.len(), 3);
        assert!(!domain.is_assigned());
        assert!(domain.contains(5));
        assert!(!domain.contains(4));
    }

    #[test]
    fn restrict_le_and_gt_partition_the_domain() {
        let domain = sparse(&[0, 3, 7, 9]);
        let le = domain.restrict_le(5);
        let gt = domain.restrict_gt(5);

        assert_eq!(le.iter().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(gt.iter().collect::<Vec<_>>(), vec![7, 9]);
        assert_eq!(le.len() + gt.len(), domain.len());
    }

    #[test]
    fn restrict_can_empty_a_domain() {
        let domain = sparse(&[6, 7, 8]);
        let le = domain.restrict_le(5);
        assert!(le.is_empty());
        assert_eq!(le.min(), None);
        assert_eq!(le.max(), None);
    }

    #[test]
    fn from_bounds_is_a_dense_interval() {
        let domain = OrdSetDomain::from_bounds(3, 6);
        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn cloned_sets_narrow_independently() {
        let original: VariableSet = vec![
            Box::new(OrdSetDomain::from_bounds(0, 10)) as Domain,
            Box::new(OrdSetDomain::from_bounds(0, 10)) as Domain,
        ]
        .into_iter()
        .collect();

        let mut narrowed = original.clone();
        narrowed.set_domain(0, original.domain(0).restrict_le(4));

        assert_eq!(narrowed.domain(0).max(), Some(4));
        assert_eq!(original.domain(0).max(), Some(10));
    }
}
