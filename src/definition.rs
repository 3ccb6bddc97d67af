use std::{collections::HashMap, fs, path::Path, str::FromStr};

use itertools::Itertools;
use log::info;

use crate::{
    catalog::{Catalog, Rgba, StateDef, StateId},
    engine::Neighborhood,
    error::DefinitionError,
    rule::{Comparison, Rule},
};

/// Name of the designated default state. Absent coordinates hold it and its
/// rules govern birth; every definition must declare it.
pub const DEFAULT_STATE: &str = "Dead";

/// Name of the state that counts toward live-neighbor totals. The parser sets
/// the per-state live flag from this name.
pub const LIVE_STATE: &str = "Alive";

/// A parsed rule-definition file.
///
/// Line-oriented format: a header of three whitespace-separated tokens (a
/// label, the neighborhood code, the radius), then per non-blank line either a
/// state (`<name> <RRGGBBAA>`) or a rule for the most recent state
/// (`- <placeholder> <op> <threshold> <result>`).
///
/// ```text
/// neighborhood 0 1
///
/// Dead 00000000
/// - n = 3 Alive
///
/// Alive ffffffff
/// - n < 2 Dead
/// - n > 3 Dead
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Definition {
    pub neighborhood: Neighborhood,
    /// Recorded from the header; the neighbor scan is fixed at radius 1.
    pub radius: u32,
    pub catalog: Catalog,
}

impl Definition {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        fs::read_to_string(path)?.parse()
    }
}

struct RawRule {
    comparison: Comparison,
    threshold: isize,
    result: String,
    line: usize,
}

struct RawState {
    name: String,
    color: Rgba,
    rules: Vec<RawRule>,
}

impl FromStr for Definition {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |line: usize, content: &str| DefinitionError::MalformedLine {
            line,
            content: content.to_string(),
        };
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let (line, header) = lines.next().ok_or_else(|| malformed(1, ""))?;
        let (_label, code, radius) = header
            .split_whitespace()
            .next_tuple()
            .ok_or_else(|| malformed(line, header))?;
        let code: u32 = code.parse().map_err(|_| malformed(line, header))?;
        let neighborhood = Neighborhood::from_code(code).ok_or_else(|| malformed(line, header))?;
        let radius: u32 = radius.parse().map_err(|_| malformed(line, header))?;

        let mut states: Vec<RawState> = vec![];
        for (line, text) in lines {
            let mut tokens = text.split_whitespace();
            let first = tokens.next().ok_or_else(|| malformed(line, text))?;
            if first == "-" {
                let state = states
                    .last_mut()
                    .ok_or(DefinitionError::RuleBeforeState { line })?;
                let (_placeholder, op, threshold, result) = tokens
                    .next_tuple()
                    .ok_or_else(|| malformed(line, text))?;
                let op = op
                    .chars()
                    .exactly_one()
                    .map_err(|_| malformed(line, text))?;
                let comparison = Comparison::from_char(op)
                    .ok_or(DefinitionError::UnknownOperator { line, op })?;
                let threshold = threshold.parse().map_err(|_| malformed(line, text))?;
                state.rules.push(RawRule {
                    comparison,
                    threshold,
                    result: result.to_string(),
                    line,
                });
            } else {
                let color = tokens.next().ok_or_else(|| malformed(line, text))?;
                let color = Rgba::from_hex(color).ok_or_else(|| malformed(line, text))?;
                states.push(RawState {
                    name: first.to_string(),
                    color,
                    rules: vec![],
                });
            }
        }

        // Rule results may refer forward, so resolve them only once every
        // state is known.
        let ids: HashMap<&str, StateId> = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.as_str(), StateId(i)))
            .collect();
        let states = states
            .iter()
            .map(|s| {
                let rules = s
                    .rules
                    .iter()
                    .map(|r| {
                        let result =
                            *ids.get(r.result.as_str())
                                .ok_or_else(|| DefinitionError::UnknownState {
                                    line: r.line,
                                    name: r.result.clone(),
                                })?;
                        Ok(Rule {
                            comparison: r.comparison,
                            threshold: r.threshold,
                            result,
                        })
                    })
                    .collect::<Result<_, DefinitionError>>()?;
                Ok(StateDef {
                    name: s.name.clone(),
                    color: s.color,
                    counts_as_live: s.name == LIVE_STATE,
                    rules,
                })
            })
            .collect::<Result<_, DefinitionError>>()?;

        let catalog = Catalog::new(states, DEFAULT_STATE)?;
        info!(
            "loaded {} states, {:?} neighborhood, radius {radius}",
            catalog.len(),
            neighborhood
        );
        Ok(Self {
            neighborhood,
            radius,
            catalog,
        })
    }
}
