use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG for one simulated game.
///
/// - Derives the per-game seed as `seed ^ game_id` spread by SplitMix64 so
///   neighbouring ids do not produce neighbouring seeds.
/// - Uses PCG 64-bit (`rand_pcg::Pcg64`) for reproducible sequences.
#[inline]
pub fn rng_for_game(seed: u64, game_id: u64) -> Pcg64 {
    Pcg64::seed_from_u64(splitmix64(seed ^ game_id))
}

/// Generator for a whole process, seeded once from OS entropy.
#[inline]
pub fn process_rng() -> Pcg64 {
    Pcg64::from_entropy()
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
