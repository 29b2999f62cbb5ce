use crate::domain::model::SynergyEntry;
use crate::domain::ports::SynergyParser;
use crate::utils::error::{RecsError, Result};

pub const DEFAULT_NAME_LINE: usize = 3;
pub const DEFAULT_SYNERGY_LINE: usize = 5;

/// Reads a card element whose rendered text puts the card name and the
/// synergy percentage on fixed line offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffsetLayout {
    pub name_line: usize,
    pub synergy_line: usize,
}

impl Default for FixedOffsetLayout {
    fn default() -> Self {
        Self {
            name_line: DEFAULT_NAME_LINE,
            synergy_line: DEFAULT_SYNERGY_LINE,
        }
    }
}

impl FixedOffsetLayout {
    pub fn new(name_line: usize, synergy_line: usize) -> Self {
        Self {
            name_line,
            synergy_line,
        }
    }
}

impl SynergyParser for FixedOffsetLayout {
    fn parse(&self, block: &str) -> Result<SynergyEntry> {
        let lines: Vec<&str> = block.split('\n').map(|l| l.trim_end_matches('\r')).collect();

        let line_at = |index: usize, what: &str| {
            lines.get(index).copied().ok_or_else(|| {
                RecsError::parse(format!(
                    "expected {} on line {} but the block has {} line(s): {:?}",
                    what,
                    index,
                    lines.len(),
                    block
                ))
            })
        };

        let name = line_at(self.name_line, "card name")?;
        let synergy_text = line_at(self.synergy_line, "synergy")?;

        let (number, _) = synergy_text.split_once('%').ok_or_else(|| {
            RecsError::parse(format!("synergy line {:?} has no '%'", synergy_text))
        })?;
        let synergy = number.trim().parse::<i32>().map_err(|e| {
            RecsError::parse(format!("synergy {:?} is not an integer: {}", number, e))
        })?;

        Ok(SynergyEntry::new(name, synergy))
    }
}
