use crate::error::Error;

/// The coin denominations found around the monument, keyed by color.
const COINS: [(u16, &str); 5] = [
    (2, "red"),
    (3, "corroded"),
    (5, "shiny"),
    (7, "concave"),
    (9, "blue"),
];

/// The value the monument equation must reach.
const TARGET: i64 = 399;

/// Find the coin order `(a, b, c, d, e)` satisfying the monument equation
/// `a + b * c^2 + d^3 - e = 399`.
pub fn arrangement() -> Result<[(u16, &'static str); 5], Error> {
    let mut coins = COINS;
    permute(&mut coins, 0).ok_or_else(|| {
        Error::NoSolution("no coin arrangement satisfies the monument equation".to_string())
    })
}

/// Walk every permutation of `coins` below `depth`, returning the first one
/// that satisfies the equation.
fn permute(
    coins: &mut [(u16, &'static str); 5],
    depth: usize,
) -> Option<[(u16, &'static str); 5]> {
    if depth == coins.len() {
        return satisfies(*coins).then_some(*coins);
    }

    for position in depth..coins.len() {
        coins.swap(depth, position);
        if let Some(found) = permute(coins, depth + 1) {
            return Some(found);
        }
        coins.swap(depth, position);
    }

    None
}

fn satisfies(coins: [(u16, &'static str); 5]) -> bool {
    let [a, b, c, d, e] = coins.map(|(value, _)| i64::from(value));
    a + b * c.pow(2) + d.pow(3) - e == TARGET
}
