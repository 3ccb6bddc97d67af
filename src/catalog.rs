use std::collections::HashMap;

use crate::{
    error::{DefinitionError, UnknownState},
    rule::Rule,
};

/// An RGBA color, one byte per channel.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Parses exactly eight hex digits, `RRGGBBAA`.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 8 {
            return None;
        }
        let n = u32::from_str_radix(s, 16).ok()?;
        Some(Self {
            r: (n >> 24) as u8,
            g: (n >> 16) as u8,
            b: (n >> 8) as u8,
            a: n as u8,
        })
    }

    /// Painting a fully transparent state erases the cell.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Interned handle for a state in its catalog. Ids are only minted by the
/// catalog that owns the states, so a stored id always resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) usize);

/// A named cell state: its color and its ordered transition rules.
#[derive(Clone, Debug, PartialEq)]
pub struct StateDef {
    pub name: String,
    pub color: Rgba,
    /// Whether cells in this state count toward neighbors' live counts.
    pub counts_as_live: bool,
    pub rules: Vec<Rule>,
}

/// The immutable set of states an automaton knows, in definition order.
///
/// Enumeration order is the insertion order, so external pickers see the same
/// list every run. One state is designated the default: absent grid
/// coordinates implicitly hold it, and its rules govern cell birth.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    states: Vec<StateDef>,
    index: HashMap<String, StateId>,
    default_state: StateId,
}

impl Catalog {
    /// Builds a catalog from states in order. Fails on duplicate names or if
    /// the designated default state is missing.
    pub fn new(states: Vec<StateDef>, default: &str) -> Result<Self, DefinitionError> {
        let mut index = HashMap::new();
        for (i, state) in states.iter().enumerate() {
            if index.insert(state.name.clone(), StateId(i)).is_some() {
                return Err(DefinitionError::DuplicateState(state.name.clone()));
            }
        }
        let default_state = *index
            .get(default)
            .ok_or_else(|| DefinitionError::MissingDefault(default.to_string()))?;
        Ok(Self {
            states,
            index,
            default_state,
        })
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|s| s.name.as_str())
    }

    pub fn state(&self, StateId(i): StateId) -> &StateDef {
        &self.states[i]
    }

    pub fn id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Result<StateId, UnknownState> {
        self.id(name).ok_or_else(|| UnknownState(name.to_string()))
    }

    pub fn default_state(&self) -> StateId {
        self.default_state
    }
}
