//! Fixed-size sets of polynomial roots.

use crate::scalar::Scalar;

/// Sentinel used by `RootSet::to_sentinel_array` for missing roots.
pub const NO_ROOT_SENTINEL: f32 = -1.0;

/// The real roots of a polynomial of degree three or less.
///
/// A root set always has three slots. Once sorted, the present roots come first in
/// ascending order and the empty slots are at the end.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RootSet<S> {
    slots: [Option<S>; 3],
}

impl<S: Scalar> RootSet<S> {
    /// A root set without any root.
    pub fn empty() -> Self {
        RootSet { slots: [None; 3] }
    }

    /// Creates a root set from its slots, as is (no filtering, no sorting).
    pub fn from_slots(slots: [Option<S>; 3]) -> Self {
        RootSet { slots }
    }

    #[inline]
    pub fn slots(&self) -> &[Option<S>; 3] {
        &self.slots
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<S> {
        self.slots.get(idx).copied().flatten()
    }

    /// Iterates over the present roots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.slots.iter().filter_map(|root| *root)
    }

    /// Number of present roots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|root| root.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Removes the roots that are not in `[0, 1]`.
    ///
    /// NaN is not in `[0, 1]`.
    pub fn retain_unit_interval(&mut self) {
        for slot in &mut self.slots {
            if let Some(t) = *slot {
                if !(t >= S::ZERO && t <= S::ONE) {
                    *slot = None;
                }
            }
        }
    }

    /// Sorts the present roots in ascending order and moves empty slots to the end.
    pub fn sort(&mut self) {
        loop {
            let mut flip = false;
            for i in 0..self.slots.len() - 1 {
                let swap = match (self.slots[i], self.slots[i + 1]) {
                    (Some(current), Some(next)) => current > next,
                    (None, Some(_)) => true,
                    _ => false,
                };
                if swap {
                    self.slots.swap(i, i + 1);
                    flip = true;
                }
            }

            if !flip {
                break;
            }
        }
    }

    /// Returns the roots with missing slots replaced by `-1`.
    pub fn to_sentinel_array(&self) -> [S; 3] {
        let sentinel = S::value(NO_ROOT_SENTINEL);
        [
            self.slots[0].unwrap_or(sentinel),
            self.slots[1].unwrap_or(sentinel),
            self.slots[2].unwrap_or(sentinel),
        ]
    }
}

impl<S: Scalar> Default for RootSet<S> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
fn sentinel_sort(a: &mut [f64; 3]) {
    // Reference ordering on the sentinel encoding.
    loop {
        let mut flip = false;
        for i in 0..a.len() - 1 {
            if (a[i + 1] >= 0.0 && a[i] > a[i + 1]) || (a[i] < 0.0 && a[i + 1] >= 0.0) {
                a.swap(i, i + 1);
                flip = true;
            }
        }
        if !flip {
            break;
        }
    }
}

#[cfg(test)]
fn from_sentinels(a: [f64; 3]) -> RootSet<f64> {
    let slot = |v: f64| if v < 0.0 { None } else { Some(v) };
    RootSet::from_slots([slot(a[0]), slot(a[1]), slot(a[2])])
}

#[test]
fn sort_moves_empty_slots_to_the_end() {
    let mut roots = RootSet::from_slots([None, Some(0.75), Some(0.25)]);
    roots.sort();
    assert_eq!(roots.slots(), &[Some(0.25), Some(0.75), None]);

    let mut roots = RootSet::from_slots([None, None, Some(0.5)]);
    roots.sort();
    assert_eq!(roots.slots(), &[Some(0.5), None, None]);

    let mut roots = RootSet::from_slots([Some(1.0), Some(0.5), Some(0.0)]);
    roots.sort();
    assert_eq!(roots.slots(), &[Some(0.0), Some(0.5), Some(1.0)]);
}

#[test]
fn sort_matches_sentinel_ordering() {
    let values = [-1.0, 0.0, 0.2, 0.5, 1.0];
    for &a in &values {
        for &b in &values {
            for &c in &values {
                let mut expected = [a, b, c];
                sentinel_sort(&mut expected);

                let mut roots = from_sentinels([a, b, c]);
                roots.sort();

                assert_eq!(roots.to_sentinel_array(), expected, "input {:?}", [a, b, c]);
            }
        }
    }
}

#[test]
fn retain_unit_interval() {
    let mut roots = RootSet::from_slots([Some(-0.1), Some(f64::NAN), Some(1.0)]);
    roots.retain_unit_interval();
    assert_eq!(roots.slots(), &[None, None, Some(1.0)]);
    assert_eq!(roots.len(), 1);

    let mut roots = RootSet::from_slots([Some(1.0000001), Some(0.0), None]);
    roots.retain_unit_interval();
    assert_eq!(roots.slots(), &[None, Some(0.0), None]);
}

#[test]
fn accessors() {
    let roots = RootSet::from_slots([Some(0.25), None, Some(0.5)]);
    assert_eq!(roots.get(0), Some(0.25));
    assert_eq!(roots.get(1), None);
    assert_eq!(roots.get(3), None);
    assert_eq!(roots.len(), 2);
    assert!(!roots.is_empty());
    assert!(RootSet::<f32>::empty().is_empty());
    assert_eq!(roots.to_sentinel_array(), [0.25, -1.0, 0.5]);
}
