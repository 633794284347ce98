use std::fmt;

use log::trace;

use crate::error::RowError;

type N = i64;
type Sum = i128;

pub const COLUMNS: usize = 6;
pub type Row = [N; COLUMNS];

/// Report label for each column, in log order.
pub const LABELS: [&str; COLUMNS] = [
    "atomic_t",
    "atomic_long_t",
    "atomic64_t",
    "refcount_t",
    "kref",
    "misc",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub sums: [Sum; COLUMNS],
}

impl Totals {
    // on overflow self is untouched and the 1-based column is returned
    #[inline]
    pub fn insert(&mut self, row: &Row) -> Result<(), usize> {
        let mut next = self.sums;
        for (i, (sum, v)) in next.iter_mut().zip(row).enumerate() {
            *sum = sum.checked_add(Sum::from(*v)).ok_or(i + 1)?;
        }
        self.sums = next;
        Ok(())
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (label, sum) in LABELS.iter().zip(self.sums) {
            writeln!(f, "{label}: {sum}")?;
        }
        writeln!(f)
    }
}

pub fn parse_row(line_no: usize, line: &str) -> Result<Row, RowError> {
    let fields = line.split(',').collect::<Vec<_>>();
    if fields.len() != COLUMNS {
        return Err(RowError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let mut row = Row::default();
    for (i, (slot, field)) in row.iter_mut().zip(fields).enumerate() {
        *slot = field
            .trim()
            .parse()
            .map_err(|source| RowError::InvalidInteger {
                line: line_no,
                column: i + 1,
                field: field.to_string(),
                source,
            })?;
    }
    Ok(row)
}

pub fn process_chunk(chunk: &str, totals: &mut Totals) -> Result<usize, RowError> {
    let mut rows = 0;
    for (i, line) in chunk.split('\n').enumerate() {
        let line_no = i + 1;
        if line.is_empty() {
            trace!("skipping empty line {line_no}");
            continue;
        }
        let row = parse_row(line_no, line)?;
        totals
            .insert(&row)
            .map_err(|column| RowError::Overflow {
                line: line_no,
                column,
            })?;
        rows += 1;
    }
    Ok(rows)
}
