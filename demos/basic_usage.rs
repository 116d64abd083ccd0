//! Basic usage example for the burnside library.
//!
//! This example builds the Burnside ring of S4, decomposes a few natural
//! actions into transitive pieces and multiplies them.

use burnside::prelude::*;

fn main() -> Result<()> {
    println!("Burnside Library - Basic Usage Example\n");

    let s4 = PermutationGroup::symmetric(4);
    let ring = BurnsideRing::new(s4.clone());
    println!("{ring}");
    println!("  Basis size: {}", ring.basis().len());
    println!();

    // Name a few classes so elements print readably.
    let classes = ring.indices();
    classes.set_name(&PermutationGroup::trivial(4), "e")?;
    classes.set_name(&PermutationGroup::alternating(4), "A4")?;
    let v4 = PermutationGroup::from_generators(vec![
        Permutation::from_cycles(&[&[1, 2], &[3, 4]])?,
        Permutation::from_cycles(&[&[1, 3], &[2, 4]])?,
    ]);
    classes.set_name(&v4, "V4")?;

    // S4 acting on {1, 2, 3, 4}
    let points = ring.construct_from_action(|g, p: &usize| g.apply(*p), &[1, 2, 3, 4])?;
    println!("Points:        {points}");

    // S4 acting on the 2-subsets of {1, 2, 3, 4}
    let pairs = k_subsets(4, 2);
    let subsets = ring.construct_from_action(
        |g, s: &Vec<usize>| {
            let mut image: Vec<usize> = s.iter().map(|&i| g.apply(i)).collect();
            image.sort_unstable();
            image
        },
        &pairs,
    )?;
    println!("2-subsets:     {subsets}");
    println!("2-subsets^2:   {}", &subsets * &subsets);

    // S4 acting on itself by conjugation: one term per centralizer class
    let elements = s4.elements().to_vec();
    let conjugation =
        ring.construct_from_action(|g, p: &Permutation| p.conjugate_by(g), &elements)?;
    println!("Conjugation:   {conjugation}");
    println!();

    println!("Table of marks:");
    println!("{}", ring.table_of_marks());
    println!();

    // Molecular species: X * E2 is the species of <(1,2)> acting on 3 points
    let pmd = PolynomialMolecularDecomposition::new();
    pmd.set_name(&PermutationGroup::symmetric(1), "X")?;
    pmd.set_name(&PermutationGroup::symmetric(2), "E2")?;
    let x = pmd.basis_element(&PermutationGroup::symmetric(1))?;
    let e2 = pmd.basis_element(&PermutationGroup::symmetric(2))?;
    println!("{pmd}");
    println!("  X * E2       = {}", &x * &e2);
    println!("  (X + E2)^2   = {}", (&x + &e2).pow(2));

    println!("\n{}", ParallelConfig::global());
    Ok(())
}
