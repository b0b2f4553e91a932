/// Exchanges the values behind two mutable references.
///
/// ```
/// let (mut a, mut b) = (1, 2);
/// seqlist::swap(&mut a, &mut b);
/// assert_eq!((a, b), (2, 1));
/// ```
pub fn swap<U>(lhs: &mut U, rhs: &mut U) {
    core::mem::swap(lhs, rhs);
}
