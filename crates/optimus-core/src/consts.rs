/// Bit width of the historical domain, `2^31 - 1`.
pub const DEFAULT_DOMAIN_BITS: u32 = 31;
/// The smallest domain holding an odd prime below its bound, `5 < 2^3 - 1`.
pub const MIN_DOMAIN_BITS: u32 = 3;
/// Keeps the modulus and the Bezout coefficients of the inverse computation inside `i64`.
pub const MAX_DOMAIN_BITS: u32 = 62;

/// Miller-Rabin rounds, the false positive probability is bounded by `4^-20`.
pub const DEFAULT_ROUNDS: u32 = 20;

/// Largest candidate the primality oracle accepts, it requires a signed representation.
pub const MAX_VERIFIABLE: u64 = i64::MAX as u64;
