//! Integer helpers backing the exact number model.

use rug::Integer;

/// Trial division gives up on divisors beyond this value. Whatever cofactor is left at that point
/// is kept as a single (possibly composite) factor.
pub const TRIAL_DIVISION_LIMIT: u32 = 1 << 20;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Splits `n` into its prime factors, in ascending order, with repetition.
///
/// - Zero factorizes to the single factor `0`.
/// - Negative numbers start with the factor `-1`, followed by the factors of `|n|`.
/// - One factorizes to nothing.
///
/// The product of the returned factors is always `n`, even when trial division stops at
/// [`TRIAL_DIVISION_LIMIT`] before the remaining cofactor is proven prime.
pub fn factorize(n: &Integer) -> Vec<Integer> {
    if *n == 0 {
        return vec![int(0)];
    }

    let mut factors = Vec::new();
    if *n < 0 {
        factors.push(int(-1));
    }

    let mut rest = n.clone().abs();
    let mut divisor: u32 = 2;
    while rest > 1 {
        if divisor > TRIAL_DIVISION_LIMIT || rest < u64::from(divisor) * u64::from(divisor) {
            factors.push(rest);
            return factors;
        }

        if rest.is_divisible_u(divisor) {
            rest.div_exact_u_mut(divisor);
            factors.push(int(divisor));
        } else {
            divisor += if divisor == 2 { 1 } else { 2 };
        }
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor_list(n: i64) -> Vec<i64> {
        factorize(&int(n))
            .into_iter()
            .map(|f| f.to_i64().unwrap())
            .collect()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(factor_list(0), vec![0]);
        assert_eq!(factor_list(1), Vec::<i64>::new());
        assert_eq!(factor_list(2), vec![2]);
        assert_eq!(factor_list(12), vec![2, 2, 3]);
        assert_eq!(factor_list(2500), vec![2, 2, 5, 5, 5, 5]);
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(factor_list(-1), vec![-1]);
        assert_eq!(factor_list(-18), vec![-1, 2, 3, 3]);
    }

    #[test]
    fn prime_cofactor() {
        assert_eq!(factor_list(97), vec![97]);
        assert_eq!(factor_list(2 * 1_000_003), vec![2, 1_000_003]);
    }

    #[test]
    fn product_is_preserved_past_limit() {
        // product of two primes larger than the trial division limit
        let big = int(1_000_000_007u64) * int(998_244_353u64);
        let factors = factorize(&big);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0], big);
    }
}
