//! Primality testing for coefficient field orders.

/// Test if a number is prime.
///
/// Trial division by 2, 3 and then numbers of the form 6k ± 1. Field orders
/// used as Burnside ring coefficients are small, so this is never a hot path.
///
/// # Examples
///
/// ```
/// use burnside::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(7));
/// assert!(!is_prime(9));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let n = u64::from(n);
    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<u32> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_composites() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(7919 * 3));
        assert!(is_prime(7919));
        assert!(is_prime(65_521));
    }
}
