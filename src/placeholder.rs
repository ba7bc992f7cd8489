/// Builds a list of numbered placeholders: `prefix1,prefix2,...,prefixN`.
///
/// Returns an empty string when `count` is zero.
///
/// ```rust
/// # use composite_literal::make_placeholder;
/// assert_eq!(make_placeholder(":p", 3), ":p1,:p2,:p3");
/// ```
pub fn make_placeholder(prefix: &str, count: usize) -> String {
    (1..=count)
        .map(|index| format!("{prefix}{index}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds positional SQL parameters, `$1,$2,...,$N`.
///
/// ```rust
/// # use composite_literal::make_sql_placeholder;
/// assert_eq!(make_sql_placeholder(3), "$1,$2,$3");
/// ```
pub fn make_sql_placeholder(count: usize) -> String {
    make_placeholder("$", count)
}
