use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use burnside::perm::{GroupBackend, NaiveBackend, Permutation, PermutationGroup};

fn bench_composition(c: &mut Criterion) {
    let p = Permutation::cycle(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let q = Permutation::from_cycles(&[&[1, 3], &[2, 5, 7]]).unwrap();

    c.bench_function("compose", |b| b.iter(|| black_box(&p) * black_box(&q)));
    c.bench_function("inverse", |b| b.iter(|| black_box(&p).inverse()));
    c.bench_function("conjugate_by", |b| b.iter(|| black_box(&q).conjugate_by(&p)));
}

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("Elements");

    for n in [4, 5, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| PermutationGroup::symmetric(n).elements().len());
        });
    }
    group.finish();
}

fn bench_conjugacy(c: &mut Criterion) {
    let backend = NaiveBackend;
    let s5 = PermutationGroup::symmetric(5);
    let a = PermutationGroup::from_generators(vec![Permutation::cycle(&[1, 2, 3]).unwrap()]);
    let b = PermutationGroup::from_generators(vec![Permutation::cycle(&[3, 4, 5]).unwrap()]);
    let _ = s5.elements();

    c.bench_function("is_conjugate_S5", |bench| {
        bench.iter(|| backend.is_conjugate(&s5, &a, &b));
    });
}

criterion_group!(benches, bench_composition, bench_enumeration, bench_conjugacy);
criterion_main!(benches);
