//! Ring Axiom Conformance Tests
//!
//! Property-based tests checking the ring axioms and the mark homomorphism
//! on small Burnside rings and on the species ring.

use burnside::prelude::*;
use num_bigint::BigInt;
use proptest::prelude::*;

thread_local! {
    static S3: BurnsideRing = BurnsideRing::new(PermutationGroup::symmetric(3));
    static S4: BurnsideRing = BurnsideRing::new(PermutationGroup::symmetric(4));
    static PMD: PolynomialMolecularDecomposition = PolynomialMolecularDecomposition::new();
}

/// S4 has 11 conjugacy classes of subgroups.
fn s4_index() -> impl Strategy<Value = usize> {
    0usize..11
}

/// A random element of B(S3) with small coefficients.
fn s3_element() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-3i64..=3, 4)
}

fn combine(ring: &BurnsideRing, coeffs: &[i64]) -> BurnsideElement {
    ring.basis()
        .iter()
        .zip(coeffs)
        .fold(ring.zero(), |acc, (b, c)| acc + b.scale(&BigInt::from(*c)))
}

/// Marks of `x`: the row of the table of marks, extended linearly.
fn marks(ring: &BurnsideRing, x: &BurnsideElement) -> Vec<BigInt> {
    let table = ring.table_of_marks();
    let basis = ring.basis();
    let mut out = vec![BigInt::from(0); basis.len()];
    for (class, coeff) in x.terms() {
        let i = basis
            .iter()
            .position(|b| b.support()[0] == class)
            .expect("class is in the basis");
        for (j, m) in out.iter_mut().enumerate() {
            *m += &coeff * BigInt::from(table[[i, j]]);
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_multiplicative_identity(i in s4_index()) {
        S4.with(|ring| {
            let b = &ring.basis()[i];
            assert_eq!(&ring.one() * b, *b);
            assert_eq!(b * &ring.one(), *b);
        });
    }

    #[test]
    fn test_commutativity(i in s4_index(), j in s4_index()) {
        S4.with(|ring| {
            let basis = ring.basis();
            assert_eq!(&basis[i] * &basis[j], &basis[j] * &basis[i]);
        });
    }

    #[test]
    fn test_associativity(a in s3_element(), b in s3_element(), c in s3_element()) {
        S3.with(|ring| {
            let (a, b, c) = (combine(ring, &a), combine(ring, &b), combine(ring, &c));
            assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        });
    }

    #[test]
    fn test_distributivity(a in s3_element(), b in s3_element(), c in s3_element()) {
        S3.with(|ring| {
            let (a, b, c) = (combine(ring, &a), combine(ring, &b), combine(ring, &c));
            assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        });
    }

    #[test]
    fn test_additive_inverse(a in s3_element()) {
        S3.with(|ring| {
            let a = combine(ring, &a);
            assert!((&a - &a).is_zero());
            assert_eq!(&a + &ring.zero(), a);
        });
    }

    #[test]
    fn test_marks_are_multiplicative(i in s4_index(), j in s4_index()) {
        S4.with(|ring| {
            let basis = ring.basis();
            let product = &basis[i] * &basis[j];
            let expected: Vec<BigInt> = marks(ring, &basis[i])
                .iter()
                .zip(marks(ring, &basis[j]))
                .map(|(x, y)| x * y)
                .collect();
            assert_eq!(marks(ring, &product), expected);
        });
    }

    #[test]
    fn test_normalization_is_idempotent(i in s4_index()) {
        S4.with(|ring| {
            let class = ring.basis()[i].support()[0].clone();
            let again = ring.indices().class_of(class.representative()).unwrap();
            assert_eq!(class, again);
            assert_eq!(class.to_string(), again.to_string());
        });
    }

    #[test]
    fn test_species_grading(n in 0usize..4, m in 0usize..4, i in 0usize..11, j in 0usize..11) {
        PMD.with(|pmd| {
            let left = pmd.basis_of_degree(n);
            let right = pmd.basis_of_degree(m);
            let (x, y) = (&left[i % left.len()], &right[j % right.len()]);
            let product = x * y;
            assert_eq!(pmd.homogeneous_degree(&product), Some(n + m));
            assert_eq!(product, y * x);
        });
    }
}

#[test]
fn test_bucket_profile_of_s4() {
    S4.with(|ring| {
        assert_eq!(ring.basis().len(), 11);
        assert_eq!(
            ring.indices().bucket_sizes(),
            vec![(1, 1), (2, 2), (3, 1), (4, 3), (6, 1), (8, 1), (12, 1), (24, 1)]
        );
    });
}

#[test]
fn test_naming_propagates_to_conjugates() {
    let ring = BurnsideRing::new(PermutationGroup::symmetric(3));
    let c2 = PermutationGroup::from_generators(vec![Permutation::cycle(&[1, 2]).unwrap()]);
    let c2_other = PermutationGroup::from_generators(vec![Permutation::cycle(&[1, 3]).unwrap()]);
    ring.indices().set_name(&c2, "C2").unwrap();
    assert_eq!(ring.indices().get_name(&c2_other).unwrap(), Some("C2".to_string()));
    assert_eq!(ring.basis_element(&c2_other).unwrap().to_string(), "B[C2]");
}
