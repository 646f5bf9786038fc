//! # Sparse data
//!
//! Constraints and objectives only mention a few variables each, so they are stored as sparse
//! tuples of an index and a value.
use itertools::Itertools;
use num_traits::Zero;

/// An index together with its (nonzero) value.
pub type SparseTuple<F> = (usize, F);

/// A collection of sparse tuples.
pub type SparseTupleVec<F> = Vec<SparseTuple<F>>;

/// Sort tuples by index, add up values that share an index and drop the resulting zeros.
///
/// # Arguments
///
/// * `tuples`: Tuples in any order, possibly with duplicate indices.
///
/// # Return value
///
/// Tuples with strictly increasing indices and only nonzero values.
pub fn normalize<F: Zero>(mut tuples: SparseTupleVec<F>) -> SparseTupleVec<F> {
    tuples.sort_by_key(|&(i, _)| i);

    tuples.into_iter()
        .coalesce(|(i, x), (j, y)| if i == j {
            Ok((i, x + y))
        } else {
            Err(((i, x), (j, y)))
        })
        .filter(|(_, value)| !value.is_zero())
        .collect()
}
