use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use burnside::perm::{Permutation, PermutationGroup};
use burnside::ring::{BurnsideRing, ClassRing, PolynomialMolecularDecomposition};
use burnside::utils::k_subsets;

fn bench_class_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("Classes");

    for n in [3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| BurnsideRing::new(PermutationGroup::symmetric(n)).basis().len());
        });
    }
    group.finish();
}

fn bench_multiplication_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("MultiplicationTable");

    for n in [3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let ring = BurnsideRing::new(PermutationGroup::symmetric(n));
            b.iter(|| ring.multiplication_table());
        });
    }
    group.finish();
}

fn bench_construct_from_action(c: &mut Criterion) {
    let mut group = c.benchmark_group("Action");

    // S4 on its 2-subsets
    group.bench_function("S4_pairs", |b| {
        let ring = BurnsideRing::new(PermutationGroup::symmetric(4));
        let pairs = k_subsets(4, 2);
        b.iter(|| {
            ring.construct_from_action(
                |g, s: &Vec<usize>| {
                    let mut image: Vec<usize> = s.iter().map(|&i| g.apply(i)).collect();
                    image.sort_unstable();
                    image
                },
                &pairs,
            )
            .unwrap()
        });
    });

    // S4 on itself by conjugation
    group.bench_function("S4_conjugation", |b| {
        let ring = BurnsideRing::new(PermutationGroup::symmetric(4));
        let elements = PermutationGroup::symmetric(4).elements().to_vec();
        b.iter(|| {
            ring.construct_from_action(|g, p: &Permutation| p.conjugate_by(g), &elements)
                .unwrap()
        });
    });
    group.finish();
}

fn bench_species_product(c: &mut Criterion) {
    c.bench_function("Species_E2_times_C3", |b| {
        let pmd = PolynomialMolecularDecomposition::new();
        let e2 = pmd.basis_element(&PermutationGroup::symmetric(2)).unwrap();
        let c3 = pmd.basis_element(&PermutationGroup::cyclic(3)).unwrap();
        b.iter(|| &e2 * &c3);
    });
}

fn bench_table_of_marks(c: &mut Criterion) {
    c.bench_function("TableOfMarks_S4", |b| {
        let ring = BurnsideRing::new(PermutationGroup::symmetric(4));
        b.iter(|| ring.table_of_marks());
    });
}

criterion_group!(
    benches,
    bench_class_enumeration,
    bench_multiplication_table,
    bench_construct_from_action,
    bench_species_product,
    bench_table_of_marks
);
criterion_main!(benches);
