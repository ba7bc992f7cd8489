use std::{ borrow::Cow, fmt::Display };

/// A value that can be written as one field of a composite literal.
///
/// Implemented for strings, characters, booleans, the primitive numeric
/// types, byte sequences and `Option`s of these. Any other [`Display`] type
/// can be passed through the [`Displayed`] wrapper.
pub trait CompositeField {
    /// The unescaped text of the field.
    fn to_field(&self) -> Cow<'_, str>;
}

impl CompositeField for str {
    fn to_field(&self) -> Cow<'_, str> { Cow::Borrowed(self) }
}

impl CompositeField for String {
    fn to_field(&self) -> Cow<'_, str> { Cow::Borrowed(self) }
}

impl CompositeField for Cow<'_, str> {
    fn to_field(&self) -> Cow<'_, str> { Cow::Borrowed(self) }
}

macro_rules! impl_display_field {
    ($($t:ty),* $(,)?) => {
        $(
            impl CompositeField for $t {
                fn to_field(&self) -> Cow<'_, str> { Cow::Owned(self.to_string()) }
            }
        )*
    };
}

impl_display_field!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

/// Byte sequences are written in the `bytea` hex form, `\x` followed by
/// lowercase hex digits.
impl CompositeField for [u8] {
    fn to_field(&self) -> Cow<'_, str> {
        Cow::Owned(format!("\\x{}", hex::encode(self)))
    }
}

impl CompositeField for Vec<u8> {
    fn to_field(&self) -> Cow<'_, str> { self.as_slice().to_field() }
}

impl<const N: usize> CompositeField for [u8; N] {
    fn to_field(&self) -> Cow<'_, str> { self.as_slice().to_field() }
}

/// `None` is written as an empty field.
impl<T: CompositeField> CompositeField for Option<T> {
    fn to_field(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.to_field(),
            None => Cow::Borrowed(""),
        }
    }
}

impl<T: CompositeField + ?Sized> CompositeField for &T {
    fn to_field(&self) -> Cow<'_, str> { (**self).to_field() }
}

/// Writes any [`Display`] value as a composite field.
///
/// ```rust
/// # use composite_literal::{ to_composite_string, Displayed };
/// let addr: std::net::Ipv4Addr = "10.0.0.1".parse().unwrap();
/// assert_eq!(to_composite_string([Displayed(addr)]), "(10.0.0.1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<T: Display> CompositeField for Displayed<T> {
    fn to_field(&self) -> Cow<'_, str> { Cow::Owned(self.0.to_string()) }
}

/// Composes a composite literal from a sequence of fields.
///
/// Each field is backslash-escaped with [`escape_field`]; the quoted form is
/// never produced. Composing cannot fail.
///
/// # Example
///
/// ```rust
/// # use composite_literal::to_composite_string;
/// let literal = to_composite_string(["a,b", "c(d)", "e\"f"]);
/// assert_eq!(literal, r#"(a\,b,c\(d\),e\"f)"#);
/// ```
///
/// Fields of different types can be mixed through trait objects:
///
/// ```rust
/// # use composite_literal::{ to_composite_string, CompositeField };
/// let fields: [&dyn CompositeField; 3] = [&"id", &42, &Some(1.5)];
/// assert_eq!(to_composite_string(fields), "(id,42,1.5)");
/// ```
pub fn to_composite_string<I>(fields: I) -> String
where
    I: IntoIterator,
    I::Item: CompositeField,
{
    let mut result = String::from("(");
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            result.push(',');
        }
        push_escaped(&mut result, &field.to_field());
    }
    result.push(')');
    result
}

/// Escapes the characters that are structural in an unquoted field.
///
/// `\`, `,`, `(`, `)` and `"` are each prefixed with a backslash.
///
/// ```rust
/// # use composite_literal::escape_field;
/// assert_eq!(escape_field(r"a\b,(c)"), r"a\\b\,\(c\)");
/// ```
pub fn escape_field(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    push_escaped(&mut result, field);
    result
}

fn push_escaped(result: &mut String, field: &str) {
    for ch in field.chars() {
        if matches!(ch, '\\' | ',' | '(' | ')' | '"') {
            result.push('\\');
        }
        result.push(ch);
    }
}
