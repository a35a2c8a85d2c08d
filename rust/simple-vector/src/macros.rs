/// Creates a [`SimpleVector`](crate::SimpleVector) from a literal sequence,
/// with size and capacity equal to the number of elements.
///
/// - `simple_vector![a, b, c]` moves the listed values in order.
/// - `simple_vector![value; n]` holds `n` clones of `value`.
///
/// ```
/// use simple_vector::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
///
/// let w = simple_vector!["x"; 2];
/// assert_eq!(w, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::from_value($n, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($value),+])
    };
}
