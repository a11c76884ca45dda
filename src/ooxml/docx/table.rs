//! Tables (`<w:tbl>`).
//!
//! Only the direct structure is read: rows of the table, cells of each row and
//! paragraphs of each cell. A table nested inside a cell is skipped.
use crate::common::xml;
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;

/// Widest span Word allows for a cell; larger `w:gridSpan` values are clamped.
pub const MAX_GRID_SPAN: u32 = 63;

/// Vertical merge state of a cell (`w:vMerge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VMergeState {
    /// First cell of a vertically merged range
    Restart,
    /// Covered by the cell above
    Continue,
}

/// A table cell (`<w:tc>`).
#[derive(Debug, Clone)]
pub struct Cell<'a> {
    paragraphs: Vec<Paragraph<'a>>,
    grid_span: u32,
    v_merge: Option<VMergeState>,
}

impl<'a> Cell<'a> {
    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph<'a>] {
        &self.paragraphs
    }

    /// Number of grid columns the cell spans (at least 1).
    #[inline]
    pub fn grid_span(&self) -> u32 {
        self.grid_span
    }

    #[inline]
    pub fn v_merge(&self) -> Option<VMergeState> {
        self.v_merge
    }
}

/// A table row (`<w:tr>`).
#[derive(Debug, Clone, Default)]
pub struct Row<'a> {
    cells: SmallVec<[Cell<'a>; 8]>,
}

impl<'a> Row<'a> {
    /// The `w:tc` elements of the row, as written.
    #[inline]
    pub fn cells(&self) -> &[Cell<'a>] {
        &self.cells
    }
}

/// A table (`<w:tbl>`).
#[derive(Debug, Clone, Default)]
pub struct Table<'a> {
    rows: Vec<Row<'a>>,
}

impl<'a> Table<'a> {
    /// Parse a table from the XML of its `<w:tbl>` element.
    pub fn parse(xml: &'a [u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);

        let mut rows = Vec::new();
        let mut row: Option<Row<'a>> = None;
        let mut cell: Option<Cell<'a>> = None;
        let mut in_tc_pr = false;
        // Levels: tbl = 1, tr = 2, tc = 3, tcPr and p = 4, tcPr children = 5
        let mut depth = 0usize;

        loop {
            let start = reader.buffer_position() as usize;
            let event = reader.read_event().map_err(|e| OoxmlError::Xml(e.to_string()))?;
            match event {
                Event::Start(e) => {
                    depth += 1;
                    match (depth, e.local_name().as_ref()) {
                        (2, b"tr") => row = Some(Row::default()),
                        (3, b"tc") if row.is_some() => cell = Some(Cell::new()),
                        (4, b"tcPr") if cell.is_some() => in_tc_pr = true,
                        (4, b"p") if cell.is_some() => {
                            reader
                                .read_to_end(e.name())
                                .map_err(|err| OoxmlError::Xml(err.to_string()))?;
                            depth -= 1;
                            let end = reader.buffer_position() as usize;
                            if let Some(cell) = cell.as_mut() {
                                cell.paragraphs.push(Paragraph::parse(&xml[start..end])?);
                            }
                        },
                        (5, _) if in_tc_pr => {
                            if let Some(cell) = cell.as_mut() {
                                cell.apply_property(&e);
                            }
                        },
                        _ => {},
                    }
                },
                Event::Empty(e) => match (depth + 1, e.local_name().as_ref()) {
                    (2, b"tr") => rows.push(Row::default()),
                    (3, b"tc") => {
                        if let Some(row) = row.as_mut() {
                            row.cells.push(Cell::new());
                        }
                    },
                    (4, b"p") => {
                        if let Some(cell) = cell.as_mut() {
                            let end = reader.buffer_position() as usize;
                            cell.paragraphs.push(Paragraph::parse(&xml[start..end])?);
                        }
                    },
                    (5, _) if in_tc_pr => {
                        if let Some(cell) = cell.as_mut() {
                            cell.apply_property(&e);
                        }
                    },
                    _ => {},
                },
                Event::End(e) => {
                    match (depth, e.local_name().as_ref()) {
                        (2, b"tr") => rows.extend(row.take()),
                        (3, b"tc") => {
                            if let (Some(row), Some(cell)) = (row.as_mut(), cell.take()) {
                                row.cells.push(cell);
                            }
                        },
                        (4, b"tcPr") => in_tc_pr = false,
                        _ => {},
                    }
                    depth = depth.saturating_sub(1);
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(Self { rows })
    }

    /// Rows in document order.
    #[inline]
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// Cells of each row laid out on the table grid.
    ///
    /// A cell spanning `n` grid columns appears `n` times. A cell continuing
    /// a vertical merge is replaced by the cell above it in the same grid
    /// column, or kept as itself when the row above has no such column.
    pub fn grid_rows(&self) -> Vec<SmallVec<[&Cell<'a>; 8]>> {
        // (row, cell) source of every grid column, per row
        let mut grid: Vec<SmallVec<[(usize, usize); 8]>> = Vec::with_capacity(self.rows.len());

        for (r, row) in self.rows.iter().enumerate() {
            let mut columns: SmallVec<[(usize, usize); 8]> = SmallVec::new();
            for (c, cell) in row.cells.iter().enumerate() {
                let source = match cell.v_merge {
                    Some(VMergeState::Continue) => r
                        .checked_sub(1)
                        .and_then(|above| grid[above].get(columns.len()))
                        .copied()
                        .unwrap_or((r, c)),
                    _ => (r, c),
                };
                for _ in 0..cell.grid_span.max(1) {
                    columns.push(source);
                }
            }
            grid.push(columns);
        }

        grid.iter()
            .map(|columns| {
                columns
                    .iter()
                    .map(|&(r, c)| &self.rows[r].cells[c])
                    .collect()
            })
            .collect()
    }
}

impl<'a> Cell<'a> {
    fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            grid_span: 1,
            v_merge: None,
        }
    }

    fn apply_property(&mut self, e: &quick_xml::events::BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"gridSpan" => {
                let span = xml::val(e)
                    .and_then(|v| atoi_simd::parse_skipped::<u32>(v.trim().as_bytes()).ok())
                    .filter(|&span| span > 0)
                    .unwrap_or(1);
                if span > MAX_GRID_SPAN {
                    log::debug!("gridSpan {} clamped to {}", span, MAX_GRID_SPAN);
                }
                self.grid_span = span.min(MAX_GRID_SPAN);
            },
            b"vMerge" => {
                self.v_merge = match xml::val(e).as_deref() {
                    Some("restart") => Some(VMergeState::Restart),
                    _ => Some(VMergeState::Continue),
                };
            },
            _ => {},
        }
    }
}
