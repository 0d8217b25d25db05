//! Damage-die expressions such as `"1d6"` or `"4d6"`.

use rand::Rng;

/// Parses an `NdM` expression into `(count, sides)`.
///
/// Returns `None` when either side is missing, non-numeric, or zero.
pub fn parse_dice(expr: &str) -> Option<(u32, u32)> {
    let (count, sides) = expr.trim().split_once(['d', 'D'])?;
    let count: u32 = count.trim().parse().ok()?;
    let sides: u32 = sides.trim().parse().ok()?;
    if count == 0 || sides == 0 {
        return None;
    }
    Some((count, sides))
}

/// Rolls an `NdM` expression. Malformed or empty expressions roll a flat 1.
pub fn roll_dice<R: Rng>(expr: &str, rng: &mut R) -> i32 {
    match parse_dice(expr) {
        Some((count, sides)) => (0..count)
            .map(|_| rng.gen_range(1..=sides) as i32)
            .sum(),
        None => 1,
    }
}
