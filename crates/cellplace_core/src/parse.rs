//! Textual placement description reader.
//!
//! The format is whitespace-separated unsigned integers, one record per line,
//! blank lines ignored:
//!
//! ```text
//! <cells> <nets> <rows> <columns>
//! <k> <cell_1> ... <cell_k>        one line per net
//! ```
//!
//! Every problem is reported with the input name and 1-based line number.

use crate::error::ParseError;
use std::path::Path;

/// One net line: the cells it connects and where it was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetSpec {
    /// 1-based line the net was read from.
    pub line: u32,
    /// Connected cell ids, in declaration order.
    pub cells: Vec<u32>,
}

/// A parsed, validated placement problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// Input name used in error messages.
    pub name: String,
    /// Number of real cells.
    pub cells: u32,
    /// Grid rows (`ny`).
    pub rows: u32,
    /// Grid columns (`nx`).
    pub cols: u32,
    /// 1-based line of the header.
    pub header_line: u32,
    /// Nets in declaration order.
    pub nets: Vec<NetSpec>,
}

impl Description {
    /// Builds a description in memory, numbering lines as if it had been
    /// written out: the header on line 1 and net `i` on line `i + 2`.
    pub fn new(cells: u32, rows: u32, cols: u32, nets: Vec<Vec<u32>>) -> Self {
        let nets = nets
            .into_iter()
            .zip(2u32..)
            .map(|(cells, line)| NetSpec { line, cells })
            .collect();
        Self {
            name: "<memory>".to_string(),
            cells,
            rows,
            cols,
            header_line: 1,
            nets,
        }
    }

    /// Total grid sites, `rows * cols`.
    pub fn sites(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Checks grid capacity and every net's cell ids.
    pub fn validate(&self) -> Result<(), ParseError> {
        check_capacity(&self.name, self.header_line, self.cells, self.rows, self.cols)?;
        for net in &self.nets {
            check_net(&self.name, net.line, self.cells, &net.cells)?;
        }
        Ok(())
    }
}

/// Reads and parses a description file.
pub fn load_description(path: &Path) -> Result<Description, ParseError> {
    let name = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        file: name.clone(),
        source,
    })?;
    parse_description(&content, &name)
}

/// Parses a description from text. `name` labels error messages.
pub fn parse_description(content: &str, name: &str) -> Result<Description, ParseError> {
    #[derive(Clone, Copy)]
    enum State {
        Header,
        Nets { expected: u32 },
        Trailer,
    }

    let mut state = State::Header;
    let mut description = Description {
        name: name.to_string(),
        cells: 0,
        rows: 0,
        cols: 0,
        header_line: 0,
        nets: Vec::new(),
    };

    for (line_no, text) in (1u32..).zip(content.lines()) {
        let values = tokenize(text, name, line_no)?;
        if values.is_empty() {
            continue;
        }

        match state {
            State::Header => {
                let [cells, nets, rows, cols] = values[..] else {
                    return Err(ParseError::BadHeader {
                        file: name.to_string(),
                        line: line_no,
                        found: values.len(),
                    });
                };
                check_capacity(name, line_no, cells, rows, cols)?;
                description.cells = cells;
                description.rows = rows;
                description.cols = cols;
                description.header_line = line_no;
                state = if nets == 0 {
                    State::Trailer
                } else {
                    State::Nets { expected: nets }
                };
            }
            State::Nets { expected } => {
                let declared = values[0];
                let ids = &values[1..];
                if ids.len() != declared as usize {
                    return Err(ParseError::CountMismatch {
                        file: name.to_string(),
                        line: line_no,
                        declared,
                        found: ids.len(),
                    });
                }
                check_net(name, line_no, description.cells, ids)?;
                description.nets.push(NetSpec {
                    line: line_no,
                    cells: ids.to_vec(),
                });
                if description.nets.len() == expected as usize {
                    state = State::Trailer;
                }
            }
            State::Trailer => {
                return Err(ParseError::ExtraLine {
                    file: name.to_string(),
                    line: line_no,
                });
            }
        }
    }

    match state {
        State::Header => Err(ParseError::Empty {
            file: name.to_string(),
        }),
        State::Nets { expected } => Err(ParseError::MissingNets {
            file: name.to_string(),
            expected,
            found: description.nets.len() as u32,
        }),
        State::Trailer => Ok(description),
    }
}

/// Splits a line into unsigned integers.
fn tokenize(text: &str, name: &str, line: u32) -> Result<Vec<u32>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|_| ParseError::InvalidToken {
                file: name.to_string(),
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

fn check_capacity(name: &str, line: u32, cells: u32, rows: u32, cols: u32) -> Result<(), ParseError> {
    let sites = u64::from(rows) * u64::from(cols);
    // Sites are addressed by u32 ids.
    if u64::from(cells) > sites || sites > u64::from(u32::MAX) {
        return Err(ParseError::Capacity {
            file: name.to_string(),
            line,
            sites,
            cells,
        });
    }
    Ok(())
}

fn check_net(name: &str, line: u32, cells: u32, ids: &[u32]) -> Result<(), ParseError> {
    if ids.is_empty() {
        return Err(ParseError::EmptyNet {
            file: name.to_string(),
            line,
        });
    }
    if let Some(&cell) = ids.iter().find(|&&id| id >= cells) {
        return Err(ParseError::CellOutOfRange {
            file: name.to_string(),
            line,
            cell,
            cells,
        });
    }
    Ok(())
}
