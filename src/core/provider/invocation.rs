//! Provider command arguments.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::constants::REDACTED;

#[derive(Clone)]
enum Arg {
    Plain(String),
    Sensitive(Zeroizing<String>),
}

impl Arg {
    fn as_str(&self) -> &str {
        match self {
            Arg::Plain(s) => s.as_str(),
            Arg::Sensitive(s) => s.as_str(),
        }
    }
}

/// Ordered argument list for one provider command.
///
/// Arguments added with [`Invocation::sensitive`] are passed to the process
/// unchanged but shown as `[redacted]` by `Display` and `Debug`, which is
/// what logs and error messages use.
#[derive(Clone, Default)]
pub struct Invocation {
    args: Vec<Arg>,
}

impl Invocation {
    /// Start an invocation from plain arguments.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(|a| Arg::Plain(a.into())).collect(),
        }
    }

    /// Append a plain argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Arg::Plain(arg.into()));
        self
    }

    /// Append an argument that must never be displayed.
    pub fn sensitive(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Arg::Sensitive(Zeroizing::new(arg.into())));
        self
    }

    /// Raw arguments, as passed to the process.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(Arg::as_str)
    }

    /// Raw arguments, collected.
    pub fn to_vec(&self) -> Vec<String> {
        self.args().map(str::to_string).collect()
    }

    /// Whether the argument list starts with `prefix`.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        self.args.len() >= prefix.len()
            && self.args.iter().zip(prefix).all(|(a, p)| a.as_str() == *p)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match arg {
                Arg::Plain(s) => f.write_str(s)?,
                Arg::Sensitive(_) => f.write_str(REDACTED)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invocation({})", self)
    }
}
