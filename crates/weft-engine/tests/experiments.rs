//! End-to-end experiment runs over both storage kinds.

use proptest::prelude::*;
use weft_arena::ArenaConfig;
use weft_engine::{
    run_native, run_traced, ExperimentConfig, ExperimentError, Pattern, Precision, StrideConfig,
};
use weft_layout::Permutation;
use weft_test_utils::{Access, CountingModel, RecordingModel};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn layouts(ndim: usize) -> Vec<Permutation> {
    if ndim == 3 {
        vec![
            Permutation::row_major(&[2, 2, 2]).unwrap(),
            Permutation::column_major(&[2, 2, 2]).unwrap(),
            Permutation::morton(2, 3).unwrap(),
        ]
    } else {
        vec![
            Permutation::row_major(&[3, 3]).unwrap(),
            Permutation::column_major(&[3, 3]).unwrap(),
            Permutation::morton(3, 2).unwrap(),
            Permutation::blocked(&[3, 3], 1).unwrap(),
        ]
    }
}

#[test]
fn native_checksums_do_not_depend_on_layout() {
    init_logging();
    let config = ExperimentConfig {
        seed: 42,
        ..ExperimentConfig::default()
    };
    for pattern in Pattern::ALL {
        let sums: Vec<f64> = layouts(pattern.ndim())
            .iter()
            .map(|p| run_native(pattern, p, &config).unwrap().checksum)
            .collect();
        assert!(sums[0].is_finite(), "{pattern}");
        assert!(sums.iter().all(|&s| s == sums[0]), "{pattern}: {sums:?}");
    }
}

#[test]
fn seed_changes_the_inputs() {
    let p = Permutation::morton(2, 2).unwrap();
    let a = run_native(Pattern::MMikj, &p, &ExperimentConfig { seed: 1, ..Default::default() });
    let b = run_native(Pattern::MMikj, &p, &ExperimentConfig { seed: 2, ..Default::default() });
    assert_ne!(a.unwrap().checksum, b.unwrap().checksum);
}

#[test]
fn single_and_double_precision_agree_approximately() {
    let p = Permutation::row_major(&[3, 3]).unwrap();
    let single = run_native(
        Pattern::Cholesky,
        &p,
        &ExperimentConfig::with_precision(Precision::Single),
    )
    .unwrap();
    let double = run_native(Pattern::Cholesky, &p, &ExperimentConfig::default()).unwrap();
    assert_eq!(single.precision, Precision::Single);
    assert!((single.checksum - double.checksum).abs() < 1e-3);
}

#[test]
fn traced_matmul_trace_starts_with_c_a_b_c() {
    init_logging();
    let model = RecordingModel::new();
    let config = ExperimentConfig {
        arena: ArenaConfig::with_alignment(64),
        ..ExperimentConfig::default()
    };
    let p = Permutation::row_major(&[1, 1]).unwrap();
    let regions = run_traced(Pattern::MMijk, &p, &model, &config).unwrap();
    let bases: Vec<u64> = regions.iter().map(|r| r.base).collect();
    assert_eq!(bases, vec![0, 64, 128]);
    assert_eq!(
        model.accesses()[..4],
        [
            Access::load(128, 8),
            Access::load(0, 8),
            Access::load(64, 8),
            Access::store(128, 8),
        ]
    );
    // 2x2x2 multiply-adds, four accesses each.
    assert_eq!(model.len(), 32);
}

#[test]
fn traced_matmul_access_counts() {
    let model = CountingModel::new();
    let p = Permutation::morton(2, 2).unwrap();
    run_traced(Pattern::MMikj, &p, &model, &ExperimentConfig::default()).unwrap();
    assert_eq!(model.loads(), 3 * 64);
    assert_eq!(model.stores(), 64);
    assert_eq!(model.bytes(), 4 * 64 * 8);
}

#[test]
fn traced_himeno_lays_out_vectors_before_scalars() {
    let model = CountingModel::new();
    let config = ExperimentConfig::with_precision(Precision::Single);
    let p = Permutation::morton(2, 3).unwrap();
    let regions = run_traced(Pattern::Himeno, &p, &model, &config).unwrap();
    let sizes: Vec<usize> = regions.iter().map(|r| r.element_size).collect();
    assert_eq!(sizes, vec![12, 12, 12, 4, 4, 4]);
    let align = ArenaConfig::DEFAULT_ALIGNMENT;
    for (k, r) in regions.iter().enumerate() {
        assert_eq!(r.base, k as u64 * align);
        assert_eq!(r.count, 64);
    }
    // Interior of a 4x4x4 grid: 8 points, each 3 vector loads, 20 P
    // loads, one W1 load, and one W2 store.
    assert_eq!(model.stores(), 8);
    assert_eq!(model.loads(), 8 * (3 + 20 + 1));
}

#[test]
fn traced_stride_walk_is_load_only() {
    let model = CountingModel::new();
    let config = ExperimentConfig {
        stride: StrideConfig {
            dx: 1,
            dy: 2,
            count: Some(10),
        },
        ..ExperimentConfig::default()
    };
    let p = Permutation::row_major(&[2, 2]).unwrap();
    run_traced(Pattern::Stride2D, &p, &model, &config).unwrap();
    assert_eq!((model.loads(), model.stores()), (10, 0));
}

#[test]
fn invalid_configuration_is_rejected_eagerly() {
    let model = CountingModel::new();
    let config = ExperimentConfig {
        arena: ArenaConfig::with_alignment(0),
        ..ExperimentConfig::default()
    };
    let p = Permutation::row_major(&[2, 2]).unwrap();
    assert!(matches!(
        run_traced(Pattern::Jacobi2D, &p, &model, &config),
        Err(ExperimentError::Arena(_))
    ));
    assert_eq!(model.total(), 0);
}

#[test]
fn patterns_parse_from_host_strings() {
    let pattern: Pattern = "Crout".parse().unwrap();
    let permutation: Permutation = "1,0,1,0".parse().unwrap();
    let summary = run_native(pattern, &permutation, &ExperimentConfig::default()).unwrap();
    assert_eq!(summary.extents.as_slice(), &[4, 4]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn any_bit_arrangement_matches_row_major(
        tags in Just(vec![0usize, 0, 0, 1, 1, 1]).prop_shuffle(),
    ) {
        let p = Permutation::new(&tags, 2).unwrap();
        let reference = run_native(
            Pattern::MMijk,
            &Permutation::row_major(&[3, 3]).unwrap(),
            &ExperimentConfig::default(),
        )
        .unwrap();
        let shuffled = run_native(Pattern::MMijk, &p, &ExperimentConfig::default()).unwrap();
        prop_assert_eq!(shuffled.checksum, reference.checksum);
    }
}
