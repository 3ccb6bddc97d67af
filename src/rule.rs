use crate::catalog::StateId;

/// Comparison a rule applies to the live-neighbor count.
///
/// `AtLeast` and `AtMost` are written `]` and `[` in definition files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    Greater,
    Less,
    AtLeast,
    AtMost,
}

impl Comparison {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Equal),
            '>' => Some(Self::Greater),
            '<' => Some(Self::Less),
            ']' => Some(Self::AtLeast),
            '[' => Some(Self::AtMost),
            _ => None,
        }
    }

    pub fn matches(self, count: isize, threshold: isize) -> bool {
        match self {
            Self::Equal => count == threshold,
            Self::Greater => count > threshold,
            Self::Less => count < threshold,
            Self::AtLeast => count >= threshold,
            Self::AtMost => count <= threshold,
        }
    }
}

/// One transition rule: when the live-neighbor count satisfies the comparison,
/// the cell becomes `result`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub comparison: Comparison,
    pub threshold: isize,
    pub result: StateId,
}

/// Evaluates a state's rule list against a live-neighbor count.
///
/// Every rule is consulted in order; when several match, the last one wins.
/// No match means the cell keeps its current state.
pub fn outcome(rules: &[Rule], live: isize) -> Option<StateId> {
    rules
        .iter()
        .filter(|r| r.comparison.matches(live, r.threshold))
        .last()
        .map(|r| r.result)
}
