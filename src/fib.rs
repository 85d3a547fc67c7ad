use log::debug;

use crate::Error;

/// The largest `n` whose Fibonacci number fits in a `u64` - F(94) overflows
pub const MAX_N: u32 = 93;

/// Builds the full tabulation vector `F(0)..=F(n)`, bottom up. Indices 0 and 1
/// hold the base cases; every later entry is the sum of its two predecessors.
pub fn table(n: u32) -> Result<Vec<u64>, Error> {
    if n > MAX_N {
        return Err(Error::InputTooLarge(i64::from(n), MAX_N));
    }

    let n = n as usize;
    let mut fib = vec![0u64; n + 1];
    if n > 0 {
        fib[1] = 1;
    }
    for i in 2..=n {
        fib[i] = fib[i - 1] + fib[i - 2];
    }

    debug!("tabulated {} entries", fib.len());
    Ok(fib)
}

/// Computes the n-th Fibonacci number by bottom-up tabulation
#[inline]
pub fn compute(n: u32) -> Result<u64, Error> {
    // Panic safety: the table is always n + 1 entries long
    Ok(table(n)?[n as usize])
}
