//! Up-front operand shape checks shared by the kernels.

use crate::error::KernelError;

pub(crate) fn same<const N: usize>(
    kernel: &'static str,
    what: &str,
    lhs: [usize; N],
    rhs: [usize; N],
) -> Result<(), KernelError> {
    if lhs == rhs {
        return Ok(());
    }
    Err(KernelError::ShapeMismatch {
        kernel,
        reason: format!("{what}: {lhs:?} vs {rhs:?}"),
    })
}

pub(crate) fn square(kernel: &'static str, what: &str, shape: [usize; 2]) -> Result<(), KernelError> {
    if shape[0] == shape[1] {
        return Ok(());
    }
    Err(KernelError::ShapeMismatch {
        kernel,
        reason: format!("{what} must be square, got {shape:?}"),
    })
}

pub(crate) fn inner(
    kernel: &'static str,
    what: &str,
    lhs: usize,
    rhs: usize,
) -> Result<(), KernelError> {
    if lhs == rhs {
        return Ok(());
    }
    Err(KernelError::ShapeMismatch {
        kernel,
        reason: format!("{what}: {lhs} vs {rhs}"),
    })
}
