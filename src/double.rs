use std::fmt;
use std::sync::Arc;

use cyclotomic::{Cyclotomic, CyclotomicField};
use group::Group;
use num_bigint::BigInt;
use num_rational::BigRational;
use rustc_hash::FxHashMap;

use crate::s_matrix::SMatrixBuilder;
use crate::simple::SimpleObject;
use crate::DoubleError;

/// The Drinfeld double of a finite group.
///
/// Construction enumerates the simple objects, computes the whole S-matrix exactly and determines
/// the dual of every object. After that a `Double` is immutable; fusion coefficients are computed
/// on demand by [`Double::n_ijk`].
///
/// ```
/// use double::Double;
/// use group::PermutationGroup;
///
/// let d = Double::new(PermutationGroup::symmetric(3).unwrap()).unwrap();
/// assert_eq!(d.len(), 8);
/// assert_eq!(d.s0().label(), "s0");
/// assert_eq!(d.n_ijk(1, 1, 0).unwrap(), 1);
/// ```
pub struct Double<G: Group> {
    group: Arc<G>,
    field: Arc<CyclotomicField>,
    basis: Vec<SimpleObject<G>>,
    labels: FxHashMap<String, usize>,
    s: Vec<Vec<Cyclotomic>>,
    /// `1 / S(0, r)`.
    unit_row_inverse: Vec<Cyclotomic>,
    duals: Vec<usize>,
}

impl<G: Group> Double<G> {
    /// Builds the double, labelling the simple objects `s0`, `s1`, ...
    pub fn new(group: G) -> Result<Self, DoubleError> {
        Self::with_prefix(group, "s")
    }

    /// Builds the double, labelling the simple objects `{prefix}0`, `{prefix}1`, ...
    #[tracing::instrument(skip(group), fields(group = group.description(), order = group.order()))]
    pub fn with_prefix(group: G, prefix: &str) -> Result<Self, DoubleError> {
        let group = Arc::new(group);
        let field = CyclotomicField::new(group.exponent());

        let mut basis = Vec::new();
        for (class, g) in group.conjugacy_class_representatives().into_iter().enumerate() {
            let centralizer = Arc::new(group.centralizer(&g)?);
            for chi in centralizer.irreducible_characters()? {
                let index = basis.len();
                basis.push(SimpleObject::new(
                    g.clone(),
                    class,
                    Arc::clone(&centralizer),
                    chi,
                    format!("{prefix}{index}"),
                    index,
                ));
            }
        }
        tracing::info!(simple_objects = basis.len(), "enumerated simple objects");

        let labels = basis
            .iter()
            .map(|object| (object.label().to_string(), object.index()))
            .collect();

        let s = SMatrixBuilder::new(&*group, &basis, &field)?.build();
        let unit_row_inverse = s[0]
            .iter()
            .map(Cyclotomic::inverse)
            .collect::<Result<Vec<_>, _>>()?;

        let mut double = Self {
            group,
            field,
            basis,
            labels,
            s,
            unit_row_inverse,
            duals: Vec::new(),
        };
        double.duals = double.compute_duals()?;
        Ok(double)
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    /// The field `Q(ζ_e)`, for the exponent `e` of the group, containing all S-matrix entries.
    pub fn field(&self) -> &Arc<CyclotomicField> {
        &self.field
    }

    /// The simple objects. The unit object comes first.
    pub fn basis(&self) -> &[SimpleObject<G>] {
        &self.basis
    }

    /// The number of simple objects.
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }

    /// The unit object.
    pub fn s0(&self) -> &SimpleObject<G> {
        &self.basis[0]
    }

    /// Looks a simple object up by its label.
    pub fn object(&self, label: &str) -> Option<&SimpleObject<G>> {
        self.labels.get(label).map(|&i| &self.basis[i])
    }

    /// The entry `S(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is at least [`Double::len`].
    pub fn s(&self, i: usize, j: usize) -> &Cyclotomic {
        &self.s[i][j]
    }

    pub fn s_matrix(&self) -> &[Vec<Cyclotomic>] {
        &self.s
    }

    pub(crate) fn unit_row_inverse(&self, r: usize) -> &Cyclotomic {
        &self.unit_row_inverse[r]
    }

    /// The dual object of `i`, i.e. the unique `j` with `N(i, j, 0) = 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is at least [`Double::len`].
    pub fn dual(&self, i: usize) -> usize {
        self.duals[i]
    }

    /// The topological twist `χ(g) / χ(1)` of the object `(g, χ)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is at least [`Double::len`].
    pub fn twist(&self, i: usize) -> Result<Cyclotomic, DoubleError> {
        let object = &self.basis[i];
        let chi = object.character();
        let value = chi.value(object.rep()).ok_or_else(|| {
            group::GroupError::NotAnElement(object.rep().to_string())
        })?;
        let degree = BigRational::new(BigInt::from(1), BigInt::from(chi.degree()));
        Ok(value.embed(&self.field)?.scale(&degree))
    }

    /// The quantum dimension `S(0, i) / S(0, 0)`. This is the size of the class of the
    /// representative times the degree of the character. Panics if `i` is out of range.
    pub fn dimension(&self, i: usize) -> u64 {
        let object = &self.basis[i];
        let class_size = self.group.order() / object.centralizer().order();
        class_size as u64 * object.character().degree() as u64
    }

    pub fn p_plus(&self) -> usize {
        self.group.order()
    }

    pub fn p_minus(&self) -> usize {
        self.group.order()
    }
}

impl<G: Group> fmt::Display for Double<G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Double of {}", self.group.description())
    }
}

impl<G: Group> fmt::Debug for Double<G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Double")
            .field("group", &self.group.description())
            .field("basis", &self.basis)
            .finish()
    }
}
