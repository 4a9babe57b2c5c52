/// Input width does not match what a fitted component expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    pub component: &'static str,
    pub expected: usize,
    pub actual: usize,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} expects {} features, got {}",
            self.component, self.expected, self.actual
        )
    }
}

impl std::error::Error for ShapeError {}

pub(crate) fn expect_width(
    component: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ShapeError> {
    match expected == actual {
        true => Ok(()),
        false => Err(ShapeError {
            component,
            expected,
            actual,
        }),
    }
}
