use std::error::Error;
use std::fmt::{Display, Formatter};

/// Aggregates many errors of the same kind into one, so that e.g. a
/// configuration can report every invalid field at once instead of
/// stopping at the first.
#[derive(Debug)]
pub struct MultiError<T>(pub Vec<T>);

impl<T: Display> Display for MultiError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for e in &self.0 {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}

impl<T: Error> Error for MultiError<T> {}

#[cfg(test)]
mod tests {
    use super::MultiError;

    #[test]
    fn displays_one_error_per_line() {
        let e = MultiError(vec!["too big", "too small"]);
        assert_eq!(format!("{}", e), "too big\ntoo small\n");
    }
}
