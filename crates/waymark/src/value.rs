// File: src/value.rs
// Purpose: Input sum types accepted by the evaluator predicates

use std::borrow::Cow;
use std::slice;

/// One value or an ordered sequence of values.
///
/// Every predicate that accepts "one or many" needles takes
/// `impl Into<OneOrMany<..>>`, so call sites can pass a scalar, an array,
/// a slice or a `Vec` interchangeably. The same type stores multi-valued
/// query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View the contained value(s) as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Number of contained values.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<'a> From<&'a str> for OneOrMany<&'a str> {
    fn from(value: &'a str) -> Self {
        OneOrMany::One(value)
    }
}

impl<'a> From<Vec<&'a str>> for OneOrMany<&'a str> {
    fn from(values: Vec<&'a str>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<'a> From<&'a [&'a str]> for OneOrMany<&'a str> {
    fn from(values: &'a [&'a str]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for OneOrMany<&'a str> {
    fn from(values: [&'a str; N]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for OneOrMany<&'a str> {
    fn from(values: &'a [&'a str; N]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// A route-name probe: a concrete name, or the marker for unnamed routes.
///
/// Routes registered without a name have no name to compare against;
/// `RouteName::Unnamed` matches exactly those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName<'a> {
    Named(&'a str),
    Unnamed,
}

impl RouteName<'_> {
    /// True when this probe matches the given (optional) route name.
    pub fn matches(&self, name: Option<&str>) -> bool {
        match (self, name) {
            (RouteName::Named(probe), Some(name)) => *probe == name,
            (RouteName::Unnamed, None) => true,
            _ => false,
        }
    }
}

impl<'a> From<&'a str> for RouteName<'a> {
    fn from(name: &'a str) -> Self {
        RouteName::Named(name)
    }
}

impl<'a> From<RouteName<'a>> for OneOrMany<RouteName<'a>> {
    fn from(name: RouteName<'a>) -> Self {
        OneOrMany::One(name)
    }
}

impl<'a> From<&'a str> for OneOrMany<RouteName<'a>> {
    fn from(name: &'a str) -> Self {
        OneOrMany::One(RouteName::Named(name))
    }
}

impl<'a, const N: usize> From<[RouteName<'a>; N]> for OneOrMany<RouteName<'a>> {
    fn from(names: [RouteName<'a>; N]) -> Self {
        OneOrMany::Many(names.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for OneOrMany<RouteName<'a>> {
    fn from(names: [&'a str; N]) -> Self {
        OneOrMany::Many(names.iter().map(|name| RouteName::Named(name)).collect())
    }
}

impl<'a> From<Vec<RouteName<'a>>> for OneOrMany<RouteName<'a>> {
    fn from(names: Vec<RouteName<'a>>) -> Self {
        OneOrMany::Many(names)
    }
}

impl<'a> From<Vec<&'a str>> for OneOrMany<RouteName<'a>> {
    fn from(names: Vec<&'a str>) -> Self {
        OneOrMany::Many(names.into_iter().map(RouteName::Named).collect())
    }
}

/// An expected value for route-parameter and query comparisons.
///
/// Bound parameters and query values are strings; numbers and booleans
/// convert through their canonical string form, so `2`, `"2"` and `2.0`
/// all compare equal to a stored `"2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe<'a>(Cow<'a, str>);

impl Probe<'_> {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for Probe<'a> {
    fn from(value: &'a str) -> Self {
        Probe(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for Probe<'a> {
    fn from(value: String) -> Self {
        Probe(Cow::Owned(value))
    }
}

impl<'a> From<bool> for Probe<'a> {
    fn from(value: bool) -> Self {
        Probe(Cow::Owned(value.to_string()))
    }
}

impl<'a> From<f64> for Probe<'a> {
    fn from(value: f64) -> Self {
        // Format number nicely (remove .0 for integers)
        if value.fract() == 0.0 {
            Probe(Cow::Owned(format!("{}", value as i64)))
        } else {
            Probe(Cow::Owned(value.to_string()))
        }
    }
}

macro_rules! probe_from_int {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<$ty> for Probe<'a> {
                fn from(value: $ty) -> Self {
                    Probe(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

probe_from_int!(i32, i64, u32, u64, usize);

/// What to compare a query parameter against.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryProbe<'a> {
    /// Match as long as the key is present, whatever its value.
    Any,
    /// Match when the stored value, or any element of a stored list,
    /// equals this value.
    Value(Probe<'a>),
}

impl<'a> From<&'a str> for QueryProbe<'a> {
    fn from(value: &'a str) -> Self {
        QueryProbe::Value(value.into())
    }
}

impl<'a> From<String> for QueryProbe<'a> {
    fn from(value: String) -> Self {
        QueryProbe::Value(value.into())
    }
}

impl<'a> From<bool> for QueryProbe<'a> {
    /// `false` is the presence sentinel: `check_query("id", false)` is
    /// true whenever `id` appears in the query string, whatever its
    /// value. `true` compares against the literal string `"true"`.
    fn from(value: bool) -> Self {
        if value {
            QueryProbe::Value(true.into())
        } else {
            QueryProbe::Any
        }
    }
}

impl<'a> From<f64> for QueryProbe<'a> {
    fn from(value: f64) -> Self {
        QueryProbe::Value(value.into())
    }
}

macro_rules! query_probe_from_int {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<$ty> for QueryProbe<'a> {
                fn from(value: $ty) -> Self {
                    QueryProbe::Value(value.into())
                }
            }
        )*
    };
}

query_probe_from_int!(i32, i64, u32, u64, usize);
