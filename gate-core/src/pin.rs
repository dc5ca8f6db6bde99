//! Four-cell PIN capture shared by the barrier and the guest PIN generator.

/// Number of single-character cells in a PIN.
pub const PIN_LENGTH: usize = 4;

/// How much of the PIN has been entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFill {
    Empty,
    PartiallyFilled,
    Filled,
}

/// Ordered PIN cells, each holding at most one character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinPad {
    cells: [Option<char>; PIN_LENGTH],
}

impl PinPad {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; PIN_LENGTH],
        }
    }

    /// Store keyboard input for `index`, keeping only its first character.
    ///
    /// Returns the cell that should receive focus next, if any. Out-of-range
    /// indices are ignored.
    pub fn input(&mut self, index: usize, raw: &str) -> Option<usize> {
        let cell = self.cells.get_mut(index)?;
        *cell = raw.chars().next();
        (cell.is_some() && index + 1 < PIN_LENGTH).then_some(index + 1)
    }

    /// Backspace on an empty cell moves focus back one cell.
    ///
    /// Never touches the content of any cell.
    #[must_use]
    pub fn backspace(&self, index: usize) -> Option<usize> {
        let empty = self.cells.get(index).is_some_and(Option::is_none);
        (empty && index > 0).then(|| index - 1)
    }

    /// Clear every cell; focus returns to the first one.
    pub fn reset(&mut self) -> usize {
        self.cells = [None; PIN_LENGTH];
        0
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Cell contents as strings, empty for unset cells.
    #[must_use]
    pub fn values(&self) -> [String; PIN_LENGTH] {
        self.cells
            .map(|cell| cell.map(String::from).unwrap_or_default())
    }

    #[must_use]
    pub fn fill(&self) -> PinFill {
        match self.cells.iter().filter(|c| c.is_some()).count() {
            0 => PinFill::Empty,
            PIN_LENGTH => PinFill::Filled,
            _ => PinFill::PartiallyFilled,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fill() == PinFill::Filled
    }

    /// The cells joined in order, available only once every cell is set.
    #[must_use]
    pub fn assemble(&self) -> Option<String> {
        self.cells.iter().copied().collect()
    }
}
