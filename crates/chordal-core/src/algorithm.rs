//! Uniform "configure, then run" interface for graph algorithms.
//!
//! An algorithm is a plain configuration value implementing [`Algorithm`].
//! It declares which of its fields are shown when it is displayed through
//! [`Algorithm::params`]; anything not listed (verbosity flags, for example)
//! never appears. [`AlgorithmDisplay`] renders the list as
//! `Name(field=value, other='text')`.

use std::borrow::Cow;
use std::fmt;

/// A displayed configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Count(usize),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Count(c) => write!(f, "{c}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::Count(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One `name=value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: &'static str,
    pub value: ParamValue,
}

impl Param {
    #[must_use]
    pub fn new(name: &'static str, value: impl Into<ParamValue>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A configured graph algorithm.
pub trait Algorithm {
    type Input;
    type Output;

    /// Type-like name used as the display prefix.
    fn name(&self) -> Cow<'static, str>;

    /// Configuration fields to display, in order. Empty by default.
    fn params(&self) -> Vec<Param> {
        Vec::new()
    }

    /// Run on one input. Every call is independent; no state is kept.
    fn run(&self, input: &Self::Input) -> Self::Output;

    /// Display adapter for this algorithm.
    fn display(&self) -> AlgorithmDisplay<'_, Self>
    where
        Self: Sized,
    {
        AlgorithmDisplay(self)
    }
}

/// Render `name(a=1, b='x')`.
#[must_use]
pub fn display_params(name: &str, params: &[Param]) -> String {
    let body = params
        .iter()
        .map(|p| format!("{}={}", p.name, p.value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{name}({body})")
}

/// [`fmt::Display`] for any [`Algorithm`].
pub struct AlgorithmDisplay<'a, A>(pub &'a A);

impl<A: Algorithm> fmt::Display for AlgorithmDisplay<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_params(&self.0.name(), &self.0.params()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler {
        label: String,
        factor: i64,
        verbose: bool,
    }

    impl Algorithm for Doubler {
        type Input = Vec<i64>;
        type Output = Vec<i64>;

        fn name(&self) -> Cow<'static, str> {
            Cow::Borrowed("Doubler")
        }

        fn params(&self) -> Vec<Param> {
            vec![
                Param::new("label", self.label.as_str()),
                Param::new("factor", self.factor),
            ]
        }

        fn run(&self, input: &Self::Input) -> Self::Output {
            let _ = self.verbose;
            input.iter().map(|x| x * self.factor).collect()
        }
    }

    struct Bare;

    impl Algorithm for Bare {
        type Input = ();
        type Output = ();

        fn name(&self) -> Cow<'static, str> {
            Cow::Borrowed("Bare")
        }

        fn run(&self, _input: &()) {}
    }

    #[test]
    fn strings_are_quoted_and_undeclared_fields_hidden() {
        let algo = Doubler {
            label: "x".to_string(),
            factor: 2,
            verbose: true,
        };
        assert_eq!(algo.display().to_string(), "Doubler(label='x', factor=2)");
        assert_eq!(algo.run(&vec![1, 2]), vec![2, 4]);
    }

    #[test]
    fn no_params_renders_empty_parens() {
        assert_eq!(Bare.display().to_string(), "Bare()");
    }

    #[test]
    fn value_formatting() {
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::from(7_usize).to_string(), "7");
        assert_eq!(
            display_params("F", &[Param::new("s", String::from("a b"))]),
            "F(s='a b')"
        );
    }
}
