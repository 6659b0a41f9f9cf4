//! Subset and Cartesian-product enumeration.

/// Returns every way of choosing `k` elements from `elems`.
///
/// Uses the include/exclude recursion on the final element: the subsets
/// that omit it, followed by the subsets of the remaining elements of size
/// `k - 1` with it appended. Produces exactly `C(n, k)` subsets, each once,
/// with elements kept in their input order. When `elems.len() < k` there
/// are no subsets.
///
/// # Examples
///
/// ```
/// use u_grades::search::combinations;
///
/// let c = combinations(&[1, 2, 3], 2);
/// assert_eq!(c, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// assert_eq!(combinations(&[1, 2], 0), vec![Vec::<i32>::new()]);
/// assert!(combinations(&[1, 2], 3).is_empty());
/// ```
pub fn combinations<T: Clone>(elems: &[T], k: usize) -> Vec<Vec<T>> {
    if elems.len() < k {
        return Vec::new();
    }
    if k == 0 {
        return vec![Vec::new()];
    }

    let (last, rest) = match elems.split_last() {
        Some(split) => split,
        None => return Vec::new(),
    };

    let without_last = combinations(rest, k);
    let with_last = combinations(rest, k - 1);

    let mut out = Vec::with_capacity(without_last.len() + with_last.len());
    out.extend(without_last);
    out.extend(with_last.into_iter().map(|mut combo| {
        combo.push(last.clone());
        combo
    }));
    out
}

/// Number of `k`-subsets of an `n`-set, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: usize = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1) here.
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    Some(acc)
}

/// Size of the Cartesian product of components with the given lengths,
/// or `None` on overflow.
pub fn product_len<I: IntoIterator<Item = usize>>(lens: I) -> Option<usize> {
    lens.into_iter().try_fold(1usize, |acc, n| acc.checked_mul(n))
}

/// Returns the Cartesian product of `components`.
///
/// Tuples are produced in mixed-radix counter order with the rightmost
/// component varying fastest. The result has exactly `Π nᵢ` tuples; an
/// empty component makes the product empty, and an empty component list
/// yields a single empty tuple.
///
/// # Examples
///
/// ```
/// use u_grades::search::cross_product;
///
/// let p = cross_product(&[vec!['a', 'b'], vec!['x', 'y', 'z']]);
/// assert_eq!(p.len(), 6);
/// assert_eq!(p[0], vec!['a', 'x']);
/// assert_eq!(p[1], vec!['a', 'y']);
/// assert_eq!(p[3], vec!['b', 'x']);
/// ```
pub fn cross_product<T: Clone>(components: &[Vec<T>]) -> Vec<Vec<T>> {
    if components.iter().any(Vec::is_empty) {
        return Vec::new();
    }

    let total = product_len(components.iter().map(Vec::len)).unwrap_or(usize::MAX);
    let mut out = Vec::with_capacity(total.min(1 << 16));
    let mut indices = vec![0usize; components.len()];

    loop {
        out.push(
            components
                .iter()
                .zip(&indices)
                .map(|(component, &i)| component[i].clone())
                .collect(),
        );

        // Increment from the right, carrying leftwards.
        let mut pos = components.len();
        loop {
            if pos == 0 {
                return out;
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < components[pos].len() {
                break;
            }
            indices[pos] = 0;
        }
    }
}
