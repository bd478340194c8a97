//! Traced and native experiment runs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use weft_arena::{Arena, Region};
use weft_core::{Coords, MemoryModel, Scalar, HARDWARE_BIT_SCATTER};
use weft_kernels::{
    cholesky, crout, himeno, jacobi2d, mm_ijk, mm_ikj, mmt_ijk, mmt_ikj, stride2d, KernelError,
};
use weft_layout::{Permutation, ShuffleArray};

use crate::config::ExperimentConfig;
use crate::error::ExperimentError;
use crate::init;
use crate::pattern::{Pattern, Precision};
use crate::storage::{Heap, Storage};

/// Outcome of a native run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Pattern executed.
    pub pattern: Pattern,
    /// Precision executed at.
    pub precision: Precision,
    /// Operand extents derived from the permutation.
    pub extents: Coords,
    /// Sum of the output operand(s) in row-major coordinate order
    /// (`L` plus `U` for Crout; the walk's sum for Stride2D).
    pub checksum: f64,
}

fn check_dimensions(pattern: Pattern, permutation: &Permutation) -> Result<(), ExperimentError> {
    if permutation.ndim() != pattern.ndim() {
        return Err(ExperimentError::UnsupportedDimensions {
            pattern,
            expected: pattern.ndim(),
            got: permutation.ndim(),
        });
    }
    Ok(())
}

/// Run `pattern` under `permutation` with every operand in one arena over
/// `model`, and return the arena's regions in operand order.
///
/// Operands are not initialised: `model` receives the kernel's accesses
/// and nothing else. Himeno lays out its three vector fields before its
/// three scalar fields.
pub fn run_traced<M>(
    pattern: Pattern,
    permutation: &Permutation,
    model: &M,
    config: &ExperimentConfig,
) -> Result<Vec<Region>, ExperimentError>
where
    M: MemoryModel + ?Sized,
{
    config.validate()?;
    check_dimensions(pattern, permutation)?;
    tracing::debug!(
        %pattern,
        precision = %config.precision,
        scalar_size = config.precision.scalar_size(),
        vector_size = config.precision.vector_size(),
        %permutation,
        alignment = config.arena.alignment,
        hardware_bit_scatter = HARDWARE_BIT_SCATTER,
        "traced run starting"
    );

    let mut arena = Arena::new(model, config.arena)?;
    match config.precision {
        Precision::Single => {
            execute::<f32, _, _>(pattern, permutation, &mut arena, config, &mut Traced)?
        }
        Precision::Double => {
            execute::<f64, _, _>(pattern, permutation, &mut arena, config, &mut Traced)?
        }
    }

    let regions = arena.regions().to_vec();
    tracing::debug!(%pattern, regions = regions.len(), "traced run finished");
    Ok(regions)
}

/// Run `pattern` under `permutation` over real buffers filled from
/// `config.seed`.
///
/// Inputs are drawn in coordinate order, so two runs that differ only in
/// permutation compute on identical values and report identical
/// checksums. Cholesky and Crout get a symmetric diagonally dominant
/// input.
pub fn run_native(
    pattern: Pattern,
    permutation: &Permutation,
    config: &ExperimentConfig,
) -> Result<RunSummary, ExperimentError> {
    config.validate()?;
    check_dimensions(pattern, permutation)?;
    tracing::debug!(
        %pattern,
        precision = %config.precision,
        %permutation,
        seed = config.seed,
        "native run starting"
    );

    let mut native = Native(ChaCha8Rng::seed_from_u64(config.seed));
    let checksum = match config.precision {
        Precision::Single => {
            execute::<f32, _, _>(pattern, permutation, &mut Heap, config, &mut native)?
        }
        Precision::Double => {
            execute::<f64, _, _>(pattern, permutation, &mut Heap, config, &mut native)?
        }
    };

    tracing::debug!(%pattern, checksum, "native run finished");
    Ok(RunSummary {
        pattern,
        precision: config.precision,
        extents: permutation.extents(),
        checksum,
    })
}

/// How operands are prepared and what a run reports.
trait Mode {
    type Output;

    /// Source for operand initialisation, if operands are initialised.
    fn rng(&mut self) -> Option<&mut ChaCha8Rng>;

    /// Produce the run's result from a deferred checksum.
    fn finish<F: FnOnce() -> f64>(&self, checksum: F) -> Self::Output;
}

/// Uninitialised operands, no checksum.
struct Traced;

impl Mode for Traced {
    type Output = ();

    fn rng(&mut self) -> Option<&mut ChaCha8Rng> {
        None
    }

    fn finish<F: FnOnce() -> f64>(&self, _checksum: F) {}
}

/// Seeded operands and a checksum of the output.
struct Native(ChaCha8Rng);

impl Mode for Native {
    type Output = f64;

    fn rng(&mut self) -> Option<&mut ChaCha8Rng> {
        Some(&mut self.0)
    }

    fn finish<F: FnOnce() -> f64>(&self, checksum: F) -> f64 {
        checksum()
    }
}

type Mat<T, S> = ShuffleArray<<S as Storage<T>>::Scalars, 2>;
type Field<T, S> = ShuffleArray<<S as Storage<T>>::Scalars, 3>;
type VecField<T, S> = ShuffleArray<<S as Storage<T>>::Vectors, 3>;
type Product<T, S> = fn(&Mat<T, S>, &Mat<T, S>, &mut Mat<T, S>) -> Result<(), KernelError>;

fn matrix<T: Scalar, S: Storage<T>>(
    storage: &mut S,
    permutation: &Permutation,
) -> Result<Mat<T, S>, ExperimentError> {
    Ok(ShuffleArray::new(
        storage.scalars(permutation.volume())?,
        permutation,
    )?)
}

fn field<T: Scalar, S: Storage<T>>(
    storage: &mut S,
    permutation: &Permutation,
) -> Result<Field<T, S>, ExperimentError> {
    Ok(ShuffleArray::new(
        storage.scalars(permutation.volume())?,
        permutation,
    )?)
}

fn vector_field<T: Scalar, S: Storage<T>>(
    storage: &mut S,
    permutation: &Permutation,
) -> Result<VecField<T, S>, ExperimentError> {
    Ok(ShuffleArray::new(
        storage.vectors(permutation.volume())?,
        permutation,
    )?)
}

fn product<T: Scalar, S: Storage<T>, R: Mode>(
    storage: &mut S,
    permutation: &Permutation,
    mode: &mut R,
    kernel: Product<T, S>,
) -> Result<R::Output, ExperimentError> {
    let mut a = matrix(storage, permutation)?;
    let mut b = matrix(storage, permutation)?;
    let mut c = matrix(storage, permutation)?;
    if let Some(rng) = mode.rng() {
        init::uniform::<T, _, 2>(&mut a, rng);
        init::uniform::<T, _, 2>(&mut b, rng);
    }
    kernel(&a, &b, &mut c)?;
    Ok(mode.finish(|| init::checksum::<T, _, 2>(&c)))
}

/// Build the operands for `pattern` in `storage`, initialise them if
/// `mode` supplies an rng, run the kernel, and let `mode` turn the output
/// into its result.
fn execute<T: Scalar, S: Storage<T>, R: Mode>(
    pattern: Pattern,
    permutation: &Permutation,
    storage: &mut S,
    config: &ExperimentConfig,
    mode: &mut R,
) -> Result<R::Output, ExperimentError> {
    match pattern {
        Pattern::MMijk => product(storage, permutation, mode, mm_ijk::<T, _, _, _>),
        Pattern::MMikj => product(storage, permutation, mode, mm_ikj::<T, _, _, _>),
        Pattern::MMTijk => product(storage, permutation, mode, mmt_ijk::<T, _, _, _>),
        Pattern::MMTikj => product(storage, permutation, mode, mmt_ikj::<T, _, _, _>),
        Pattern::Jacobi2D => {
            let mut a = matrix(storage, permutation)?;
            let mut b = matrix(storage, permutation)?;
            if let Some(rng) = mode.rng() {
                init::uniform::<T, _, 2>(&mut a, rng);
            }
            jacobi2d(&mut a, &mut b)?;
            Ok(mode.finish(|| init::checksum::<T, _, 2>(&b)))
        }
        Pattern::Cholesky => {
            let mut a = matrix(storage, permutation)?;
            let mut l = matrix(storage, permutation)?;
            if let Some(rng) = mode.rng() {
                init::diagonally_dominant(&mut a, rng);
            }
            cholesky(&a, &mut l)?;
            Ok(mode.finish(|| init::checksum::<T, _, 2>(&l)))
        }
        Pattern::Crout => {
            let mut a = matrix(storage, permutation)?;
            let mut l = matrix(storage, permutation)?;
            let mut u = matrix(storage, permutation)?;
            if let Some(rng) = mode.rng() {
                init::diagonally_dominant(&mut a, rng);
            }
            crout(&a, &mut l, &mut u)?;
            Ok(mode.finish(|| {
                init::checksum::<T, _, 2>(&l) + init::checksum::<T, _, 2>(&u)
            }))
        }
        Pattern::Himeno => {
            let mut a = vector_field(storage, permutation)?;
            let mut b = vector_field(storage, permutation)?;
            let mut c = vector_field(storage, permutation)?;
            let mut p = field(storage, permutation)?;
            let mut w1 = field(storage, permutation)?;
            let mut w2 = field(storage, permutation)?;
            if let Some(rng) = mode.rng() {
                init::uniform_vectors::<T, _, 3>(&mut a, rng);
                init::uniform_vectors::<T, _, 3>(&mut b, rng);
                init::uniform_vectors::<T, _, 3>(&mut c, rng);
                init::uniform::<T, _, 3>(&mut p, rng);
                init::uniform::<T, _, 3>(&mut w1, rng);
            }
            himeno(&a, &b, &c, &p, &w1, &mut w2)?;
            Ok(mode.finish(|| init::checksum::<T, _, 3>(&w2)))
        }
        Pattern::Stride2D => {
            let mut a = matrix(storage, permutation)?;
            if let Some(rng) = mode.rng() {
                init::uniform::<T, _, 2>(&mut a, rng);
            }
            let stride = config.stride;
            let count = stride.resolved_count(permutation.volume());
            let sum = stride2d(&a, stride.dx, stride.dy, count)?;
            Ok(mode.finish(|| sum.as_f64()))
        }
    }
}
