//! Small combinatorial and number-theoretic helpers.
//!
//! These back the permutation layer (orders of permutations and symmetric
//! groups), the prime-field coefficient ring, and the construction of finite
//! action domains such as the k-subsets of `{1, ..., n}`.

mod primality;

pub use primality::is_prime;

/// Compute binomial coefficient C(n, k) = n! / (k! * (n-k)!)
///
/// Returns `None` if the result would overflow `u64`.
///
/// # Examples
///
/// ```
/// use burnside::utils::binomial;
///
/// assert_eq!(binomial(4, 2), Some(6));
/// assert_eq!(binomial(6, 2), Some(15));
/// assert_eq!(binomial(3, 5), Some(0)); // k > n
/// ```
#[must_use]
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }

    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // Exact at every step: the partial product is C(n, i + 1).
        result = result.checked_mul(n - i)?;
        result /= i + 1;
    }

    Some(result)
}

/// Compute n!, or `None` on overflow.
///
/// ```
/// use burnside::utils::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(4), Some(24));
/// assert_eq!(factorial(21), None);
/// ```
#[must_use]
pub fn factorial(n: u64) -> Option<u64> {
    (1..=n).try_fold(1u64, u64::checked_mul)
}

/// Greatest common divisor.
#[must_use]
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple; `lcm(0, x) == 0`.
#[must_use]
pub fn lcm(a: usize, b: usize) -> usize {
    if a == 0 || b == 0 {
        0
    } else {
        a / gcd(a, b) * b
    }
}

/// Compute `base^exp mod modulus` by binary exponentiation.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// ```
/// use burnside::utils::mod_pow;
///
/// assert_eq!(mod_pow(3, 5, 7), 5);
/// ```
#[must_use]
pub fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");
    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    result
}

/// All k-element subsets of `{1, ..., n}` in lexicographic order.
///
/// This is the usual domain for the action of `S_n` on k-subsets.
///
/// ```
/// use burnside::utils::k_subsets;
///
/// let subsets = k_subsets(4, 2);
/// assert_eq!(subsets.len(), 6);
/// assert_eq!(subsets[0], vec![1, 2]);
/// assert_eq!(subsets[5], vec![3, 4]);
/// ```
#[must_use]
pub fn k_subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return Vec::new();
    }
    let capacity = binomial(n as u64, k as u64).map_or(0, |c| c as usize);
    let mut out = Vec::with_capacity(capacity);
    let mut current: Vec<usize> = (1..=k).collect();

    loop {
        out.push(current.clone());

        // Rightmost position that can still advance.
        let Some(i) = (0..k).rev().find(|&i| current[i] < n - k + i + 1) else {
            break;
        };
        current[i] += 1;
        for j in (i + 1)..k {
            current[j] = current[j - 1] + 1;
        }
    }

    out
}
