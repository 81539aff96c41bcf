/// Iterator over all 5-element index combinations of `0..n`, in
/// lexicographic order. `n` is the number of cards available to choose the
/// best hand from (5, 6 or 7 in Hold'em: hole cards plus however much of
/// the board has been dealt).
pub struct FiveOfN {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl FiveOfN {
    /// Create an iterator over C(n, 5) combinations. Yields nothing if n < 5.
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for FiveOfN {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Advance to the next combination: bump the rightmost index that
        // still has room, then reset everything to its right.
        let mut i = 4;
        loop {
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
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
            // C(5,5)=1, C(6,5)=6, C(7,5)=21
            let total = match self.n {
                5 => 1,
                6 => 6,
                7 => 21,
                _ => return (1, None),
            };
            (1, Some(total))
        }
    }
}
