/// Why a candidate input was passed over during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Used,
    NotVisible,
    Disabled,
    ReadFailed,
    NotEmpty,
    FillFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMethod {
    /// Value set in one step.
    Direct,
    /// Click, select-all, then type.
    Typed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    NoLabelMatch,
    NoEligibleInput,
    FillFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Filled { index: usize, method: FillMethod },
    NotFound(Miss),
}

/// Result of one resolver call, with the per-input skip trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub outcome: Outcome,
    /// Ordinal of the matched label, label resolver only.
    pub label: Option<usize>,
    pub skipped: Vec<(usize, SkipReason)>,
}

impl Resolution {
    pub(crate) fn miss(miss: Miss) -> Self {
        Self {
            outcome: Outcome::NotFound(miss),
            label: None,
            skipped: Vec::new(),
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self.outcome, Outcome::Filled { .. })
    }

    pub fn filled_index(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Filled { index, .. } => Some(index),
            Outcome::NotFound(_) => None,
        }
    }

    pub fn skip_reason(&self, index: usize) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, reason)| *reason)
    }
}
