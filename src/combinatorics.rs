use crate::word::BitWord;

/// `C(n, k)` by the multiplicative formula, independent of [`crate::BinomialTable`].
///
/// Returns `None` if the result overflows a `u128`.
pub fn n_choose_k(n: u32, k: u32) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut result: u128 = 1;
    for i in 1..=k {
        // result * factor / i is exact; dividing first keeps the product small.
        let factor = n - (k - i);
        let common = gcd(factor, i);
        result = (result / (i / common)).checked_mul(factor / common)?;
    }
    Some(result)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Positions of the set bits of `bits`, lowest first.
pub fn set_positions<W: BitWord>(bits: W) -> Vec<u32> {
    (0..W::BITS).filter(|&index| bits.bit(index)).collect()
}

/// Bit-vector with exactly the given positions set.
pub fn from_positions<W: BitWord>(positions: impl IntoIterator<Item = u32>) -> W {
    positions
        .into_iter()
        .fold(W::ZERO, |bits, index| bits.with_bit(index))
}
