/// The search alphabet, in the order slot values 0..4 map to symbols.
///
/// `%` is deliberately absent: the checker accepts it in candidate solutions, but
/// the search never proposes it.
pub const SEARCH_OPS: [char; 5] = ['+', '-', '*', '/', '^'];

/// Iterator over all 5^m operator assignments for m operator slots.
///
/// Each assignment is an m-digit base-5 numeral over [`SEARCH_OPS`], yielded in
/// numeral-increasing order with the most significant slot first.
#[derive(Debug, Clone)]
pub struct OpAssignments {
    slots: usize,
    current: u64,
    total: u64,
}

impl OpAssignments {
    pub fn new(slots: usize) -> Self {
        Self {
            slots,
            current: 0,
            total: 5u64.pow(slots as u32),
        }
    }
}

impl Iterator for OpAssignments {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.total {
            return None;
        }

        let mut ops = Vec::with_capacity(self.slots);
        let mut numeral = self.current;
        for _ in 0..self.slots {
            ops.push(SEARCH_OPS[(numeral % 5) as usize]);
            numeral /= 5;
        }
        ops.reverse();

        self.current += 1;
        Some(ops)
    }
}
