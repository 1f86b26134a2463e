#![forbid(unsafe_code)]

//! Named-area grid solving.
//!
//! A [`GridTemplate`] is parsed from row strings of whitespace-separated
//! area tokens, CSS `grid-template-areas` style:
//!
//! ```
//! use cadre_layout::{Constraint, Grid, GridTemplate, Rect};
//!
//! let template = GridTemplate::parse(&[
//!     "header header",
//!     "nav    main",
//!     "footer footer",
//! ]).unwrap();
//!
//! let layout = Grid::new(template)
//!     .row_constraints([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)])
//!     .resolve(Rect::from_size(80, 24));
//!
//! assert_eq!(layout.rect("header").unwrap().height, 1);
//! ```
//!
//! Templates are validated at construction time: every row must have the
//! same number of tokens, and every named area's cells must form one
//! contiguous rectangle of tracks. `.` marks an empty cell and produces no
//! output entry. Malformed templates are a [`GridError`], never a silent
//! truncation.

use std::collections::HashMap;

use cadre_core::geometry::Rect;

use crate::{Axis, Constraint, split};

/// Error raised while building a [`GridTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The template has no rows (or a first row with no tokens).
    EmptyTemplate,
    /// A row's token count differs from the first row's.
    RaggedTemplate {
        /// Zero-based row index of the offending row.
        row: usize,
        /// Token count established by the first row.
        expected: usize,
        /// Token count actually found.
        found: usize,
    },
    /// A named area's cells do not form a contiguous rectangle.
    NonRectangularArea {
        /// The offending area name.
        name: String,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::EmptyTemplate => write!(f, "grid template has no cells"),
            GridError::RaggedTemplate {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid template row {row} has {found} columns, expected {expected}"
            ),
            GridError::NonRectangularArea { name } => {
                write!(f, "grid area {name:?} does not form a rectangle")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A named area's span of grid tracks (inclusive indices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridArea {
    name: String,
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
}

impl GridArea {
    /// The area's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First and last row track covered (inclusive).
    #[must_use]
    pub fn rows(&self) -> (usize, usize) {
        (self.row_start, self.row_end)
    }

    /// First and last column track covered (inclusive).
    #[must_use]
    pub fn columns(&self) -> (usize, usize) {
        (self.col_start, self.col_end)
    }
}

/// A validated named-area template.
///
/// Represented as per-name track bounds rather than a graph of cell
/// objects; rectangularity validation is a cardinality check (occupied cell
/// count must equal the bounding box area).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    rows: usize,
    columns: usize,
    areas: Vec<GridArea>,
}

impl GridTemplate {
    /// Parse a template from row strings of whitespace-separated tokens.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] for an empty template, a ragged row, or an
    /// area whose cells are not one contiguous rectangle.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        // name -> (min_row, max_row, min_col, max_col, occupied cell count),
        // in first-appearance order so output iteration is deterministic.
        let mut bounds: Vec<(String, [usize; 4], usize)> = Vec::new();
        let mut columns = 0;

        for (r, row) in rows.iter().enumerate() {
            let tokens: Vec<&str> = row.as_ref().split_whitespace().collect();
            if r == 0 {
                columns = tokens.len();
                if columns == 0 {
                    return Err(GridError::EmptyTemplate);
                }
            } else if tokens.len() != columns {
                return Err(GridError::RaggedTemplate {
                    row: r,
                    expected: columns,
                    found: tokens.len(),
                });
            }

            for (c, token) in tokens.iter().enumerate() {
                if *token == "." {
                    continue;
                }
                match bounds.iter_mut().find(|(name, _, _)| name == token) {
                    Some((_, b, count)) => {
                        b[0] = b[0].min(r);
                        b[1] = b[1].max(r);
                        b[2] = b[2].min(c);
                        b[3] = b[3].max(c);
                        *count += 1;
                    }
                    None => bounds.push((token.to_string(), [r, r, c, c], 1)),
                }
            }
        }

        if rows.is_empty() {
            return Err(GridError::EmptyTemplate);
        }

        let mut areas = Vec::with_capacity(bounds.len());
        for (name, [row_start, row_end, col_start, col_end], count) in bounds {
            let extent = (row_end - row_start + 1) * (col_end - col_start + 1);
            if count != extent {
                return Err(GridError::NonRectangularArea { name });
            }
            areas.push(GridArea {
                name,
                row_start,
                row_end,
                col_start,
                col_end,
            });
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            areas,
        })
    }

    /// Number of row tracks.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of column tracks.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All named areas, in first-appearance order.
    #[must_use]
    pub fn areas(&self) -> &[GridArea] {
        &self.areas
    }

    /// Look up a named area.
    #[must_use]
    pub fn area(&self, name: &str) -> Option<&GridArea> {
        self.areas.iter().find(|a| a.name == name)
    }
}

/// A 2D layout container over a [`GridTemplate`].
///
/// Column and row tracks are resolved by two independent 1D solver calls;
/// each named area then spans from its first covered track's origin to its
/// last covered track's far edge, so internal gutters belong to the
/// spanning area.
#[derive(Debug, Clone)]
pub struct Grid {
    template: GridTemplate,
    row_constraints: Vec<Constraint>,
    column_constraints: Vec<Constraint>,
    row_gutter: u16,
    column_gutter: u16,
}

impl Grid {
    /// Create a grid over a validated template.
    ///
    /// Tracks default to `Fill(1)` until constraints are supplied.
    pub fn new(template: GridTemplate) -> Self {
        Self {
            template,
            row_constraints: Vec::new(),
            column_constraints: Vec::new(),
            row_gutter: 0,
            column_gutter: 0,
        }
    }

    /// Set the row track constraints.
    ///
    /// When fewer constraints than row tracks are supplied, the last one is
    /// repeated for the remaining tracks.
    pub fn row_constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.row_constraints = constraints.into_iter().collect();
        self
    }

    /// Set the column track constraints (cycled like row constraints).
    pub fn column_constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.column_constraints = constraints.into_iter().collect();
        self
    }

    /// Set the gap between row tracks.
    pub fn row_gutter(mut self, gutter: u16) -> Self {
        self.row_gutter = gutter;
        self
    }

    /// Set the gap between column tracks.
    pub fn column_gutter(mut self, gutter: u16) -> Self {
        self.column_gutter = gutter;
        self
    }

    /// The template this grid resolves.
    #[must_use]
    pub fn template(&self) -> &GridTemplate {
        &self.template
    }

    /// Resolve every named area to a rectangle within `area`.
    pub fn resolve(&self, area: Rect) -> GridLayout {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_resolve",
            rows = self.template.rows(),
            columns = self.template.columns(),
            areas = self.template.areas().len(),
            w = area.width,
            h = area.height
        )
        .entered();

        let column_tracks = split(
            area,
            Axis::Horizontal,
            &track_constraints(&self.column_constraints, self.template.columns),
            self.column_gutter,
        );
        let row_tracks = split(
            area,
            Axis::Vertical,
            &track_constraints(&self.row_constraints, self.template.rows),
            self.row_gutter,
        );

        let mut rects = HashMap::with_capacity(self.template.areas().len());
        for a in self.template.areas() {
            let x = column_tracks[a.col_start].x;
            let y = row_tracks[a.row_start].y;
            let right = column_tracks[a.col_end].right();
            let bottom = row_tracks[a.row_end].bottom();
            rects.insert(
                a.name.clone(),
                Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y)),
            );
        }
        GridLayout { rects }
    }
}

/// Effective per-track constraints: default `Fill(1)`, last entry cycled.
fn track_constraints(supplied: &[Constraint], tracks: usize) -> Vec<Constraint> {
    match supplied.last() {
        None => vec![Constraint::Fill(1); tracks],
        Some(&last) => supplied
            .iter()
            .copied()
            .chain(std::iter::repeat(last))
            .take(tracks)
            .collect(),
    }
}

/// Resolved area rectangles, keyed by area name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLayout {
    rects: HashMap<String, Rect>,
}

impl GridLayout {
    /// Rectangle of a named area, `None` for unknown names.
    #[must_use]
    pub fn rect(&self, name: &str) -> Option<Rect> {
        self.rects.get(name).copied()
    }

    /// Iterate over `(name, rect)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rect)> + '_ {
        self.rects.iter().map(|(name, &rect)| (name.as_str(), rect))
    }

    /// Number of named areas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// True when the template had no named areas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
