use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    u128_from_u256(env, &result)
}

/// Multiply and divide with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    let result = mul_div(env, a, b, denominator);

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let remainder = product.rem_euclid(&U256::from_u128(env, denominator));

    if remainder > U256::from_u32(env, 0) {
        result + 1
    } else {
        result
    }
}

/// Integer square root (rounds down), Babylonian method
pub fn sqrt(env: &Env, y: &U256) -> U256 {
    let zero = U256::from_u32(env, 0);
    let three = U256::from_u32(env, 3);

    if *y > three {
        let two = U256::from_u32(env, 2);
        let mut z = y.clone();
        let mut x = y.div(&two).add(&U256::from_u32(env, 1));
        while x < z {
            z = x.clone();
            x = y.div(&x).add(&x).div(&two);
        }
        z
    } else if *y != zero {
        U256::from_u32(env, 1)
    } else {
        zero
    }
}

/// Convert U256 to u128, panics if overflow
pub fn u128_from_u256(env: &Env, value: &U256) -> u128 {
    let max_u128 = U256::from_u128(env, u128::MAX);
    if *value > max_u128 {
        panic!("U256 overflow when converting to u128");
    }
    value.to_u128().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use decay_types::{ONE, ONE_SQUARED};
    use soroban_sdk::Env;

    // === mul_div tests ===

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_token_units() {
        let env = Env::default();
        // 1 WETH against 270 DAI: 1e18 * 270e18 / 2e18 = 135e18
        assert_eq!(mul_div(&env, ONE, 270 * ONE, 2 * ONE), 135 * ONE);
    }

    #[test]
    fn test_mul_div_phantom_overflow() {
        let env = Env::default();
        // 1e30 * 1e30 overflows u128, the quotient does not
        let big = 1_000_000_000_000 * ONE;
        assert_eq!(mul_div(&env, big, big, big), big);
        assert_eq!(mul_div(&env, u128::MAX, u128::MAX, u128::MAX), u128::MAX);
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 1, 1, 2), 0);
        assert_eq!(mul_div(&env, 5, 1, 3), 1);
        // 1e18 * 3e15 / 1e18 stays exact
        assert_eq!(mul_div(&env, ONE, 3_000_000_000_000_000, ONE), 3_000_000_000_000_000);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        mul_div(&env, 10, 20, 0);
    }

    #[test]
    #[should_panic(expected = "U256 overflow when converting to u128")]
    fn test_mul_div_result_overflow() {
        let env = Env::default();
        mul_div(&env, u128::MAX, 2, 1);
    }

    // === mul_div_rounding_up tests ===

    #[test]
    fn test_mul_div_rounding_up_exact() {
        let env = Env::default();
        assert_eq!(mul_div_rounding_up(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_rounding_up_with_remainder() {
        let env = Env::default();
        assert_eq!(mul_div_rounding_up(&env, 10, 3, 7), 5);
        assert_eq!(mul_div_rounding_up(&env, 1, 1, 3), 1);

        let down = mul_div(&env, 7, 11, 13);
        let up = mul_div_rounding_up(&env, 7, 11, 13);
        assert_eq!((down, up), (5, 6));
    }

    // === sqrt tests ===

    #[test]
    fn test_sqrt_small_values() {
        let env = Env::default();
        let cases: [(u32, u32); 8] = [(0, 0), (1, 1), (2, 1), (3, 1), (4, 2), (15, 3), (16, 4), (17, 4)];
        for (input, expected) in cases {
            assert_eq!(
                sqrt(&env, &U256::from_u32(&env, input)),
                U256::from_u32(&env, expected)
            );
        }
    }

    #[test]
    fn test_sqrt_fixed_point() {
        let env = Env::default();
        let one_sq = U256::from_u128(&env, ONE_SQUARED);
        assert_eq!(sqrt(&env, &one_sq), U256::from_u128(&env, ONE));

        // sqrt(2) in 1e18 fixed point
        let two = U256::from_u128(&env, 2 * ONE_SQUARED);
        assert_eq!(sqrt(&env, &two), U256::from_u128(&env, 1_414_213_562_373_095_048));

        let four_plus = U256::from_u128(&env, 4 * ONE_SQUARED + 1);
        assert_eq!(sqrt(&env, &four_plus), U256::from_u128(&env, 2 * ONE));
    }

    #[test]
    fn test_sqrt_max_value() {
        let env = Env::default();
        let max = U256::from_parts(&env, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(sqrt(&env, &max), U256::from_u128(&env, u128::MAX));
    }
}
