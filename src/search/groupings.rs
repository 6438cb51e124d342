/// Iterator over every contiguous partition of an n-digit sequence.
///
/// Each of the n−1 inter-digit boundaries either is or is not a cut point, giving
/// exactly 2^(n−1) groupings, yielded in bitmask-increasing order as byte ranges
/// into the original string. Lazy and restartable: a fresh instance always starts
/// from the single-group partition.
#[derive(Debug, Clone)]
pub struct Groupings {
    len: usize,
    mask: u64,
    done: bool,
}

impl Groupings {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            mask: 0,
            done: len == 0,
        }
    }
}

impl Iterator for Groupings {
    type Item = Vec<(usize, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut groups = Vec::new();
        let mut prev = 0;
        for boundary in 0..self.len - 1 {
            if self.mask & (1 << boundary) != 0 {
                groups.push((prev, boundary + 1));
                prev = boundary + 1;
            }
        }
        groups.push((prev, self.len));

        self.mask += 1;
        if self.mask >= 1 << (self.len - 1) {
            self.done = true;
        }

        Some(groups)
    }
}
