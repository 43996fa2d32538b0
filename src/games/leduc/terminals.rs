//! Exhaustive list of terminal action lines.
//!
//! This walks action strings directly without going through [`Betting`],
//! so it can be used to check the rules engine against a second derivation.
//!
//! [`Betting`]: crate::games::leduc::betting::Betting

/// Every terminal action line for a betting structure, in DFS order.
///
/// `max_raises` counts raises over the whole hand. `open_fold` allows a fold
/// as the first action of a round.
pub fn terminal_histories(max_raises: u32, rounds: u32, open_fold: bool) -> Vec<String> {
    let mut out = Vec::new();
    if rounds == 0 {
        return out;
    }
    let mut line = String::new();
    walk(&mut line, max_raises, rounds, open_fold, 0, &mut out);
    out
}

fn walk(
    line: &mut String,
    raises_left: u32,
    rounds_left: u32,
    open_fold: bool,
    opened: usize,
    out: &mut Vec<String>,
) {
    for symbol in ['c', 'r', 'f'] {
        match symbol {
            'f' if opened == 0 && !open_fold => continue,
            'r' if raises_left == 0 => continue,
            _ => {}
        }
        line.push(symbol);
        match symbol {
            'f' => out.push(line.clone()),
            'r' => walk(line, raises_left - 1, rounds_left, open_fold, opened + 1, out),
            // A call that follows any action closes the round.
            _ if opened > 0 && rounds_left == 1 => out.push(line.clone()),
            _ if opened > 0 => walk(line, raises_left, rounds_left - 1, open_fold, 0, out),
            _ => walk(line, raises_left, rounds_left, open_fold, 1, out),
        }
        line.pop();
    }
}
