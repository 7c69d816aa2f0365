use super::HAND_CARDS;

/// Iterator over every ascending 5-index subset of `0..n`, in lexicographic order.
///
/// Yields C(n,5) items; nothing when `n < 5`.
pub struct Combinations {
    n: usize,
    indices: [usize; HAND_CARDS],
    done: bool,
}

impl Combinations {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < HAND_CARDS }
    }

    fn total(&self) -> usize {
        binomial(self.n, HAND_CARDS)
    }
}

impl Iterator for Combinations {
    type Item = [usize; HAND_CARDS];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Bump the rightmost index that still has room, then pack the rest after it.
        let mut i = HAND_CARDS - 1;
        loop {
            if self.indices[i] < self.n - (HAND_CARDS - i) {
                self.indices[i] += 1;
                for j in (i + 1)..HAND_CARDS {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(self.total()))
        }
    }
}

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
