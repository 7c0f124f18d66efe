//! Prioritized roster entries ("priority fields") for one allocation run.
//!
//! List order *is* priority order. Entries are constructed fresh per run from
//! the roster collaborator and reordered only through [`move_requester`]; the
//! engine treats the list as read-only.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One prioritized target for distribution.
///
/// `label` is the display/allocation name stamped onto claimed articles;
/// `value` is the requested article count for this run (`0` = skip).
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Requester {
    pub id: String,
    pub label: String,
    pub value: u32,
}

impl Requester {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: u32) -> Self {
        Self { id: id.into(), label: label.into(), value }
    }
}

/// Move the entry at `from` so it lands at index `to`, shifting the rest.
///
/// Out-of-range indices (either side) leave the list untouched; the caller's
/// drag handle can emit stale indices during rapid reorders.
pub fn move_requester(list: &mut Vec<Requester>, from: usize, to: usize) {
    if from >= list.len() || to >= list.len() || from == to {
        return;
    }
    let entry = list.remove(from);
    list.insert(to, entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Requester> {
        vec![
            Requester::new("r1", "Alice", 1),
            Requester::new("r2", "Bob", 2),
            Requester::new("r3", "Cara", 3),
        ]
    }

    #[test]
    fn move_down_shifts_between() {
        let mut r = roster();
        move_requester(&mut r, 0, 2);
        let labels: Vec<&str> = r.iter().map(|x| x.label.as_str()).collect();
        assert_eq!(labels, ["Bob", "Cara", "Alice"]);
    }

    #[test]
    fn move_up_shifts_between() {
        let mut r = roster();
        move_requester(&mut r, 2, 0);
        let labels: Vec<&str> = r.iter().map(|x| x.label.as_str()).collect();
        assert_eq!(labels, ["Cara", "Alice", "Bob"]);
    }

    #[test]
    fn out_of_range_is_noop() {
        let mut r = roster();
        move_requester(&mut r, 5, 0);
        move_requester(&mut r, 0, 5);
        assert_eq!(r, roster());
    }
}
