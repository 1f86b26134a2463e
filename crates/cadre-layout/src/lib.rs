#![forbid(unsafe_code)]

//! Constraint-based layout solvers.
//!
//! This crate turns an abstract size specification into concrete rectangular
//! regions of the terminal screen:
//!
//! - [`Layout`] - 1D constraint splitting along an [`Axis`] (rows or columns)
//! - [`Constraint`] - size constraints (Length, Percentage, Ratio, Min, Max, Fill)
//! - [`Flex`] - redistribution of space no constraint consumed
//! - [`grid`] - 2D named-area grid solving
//! - [`dock`], [`stack`], [`flow`] - composite containers built on the solver
//!
//! The solver is a pure function family: identical inputs always produce
//! identical output, and every distribution step uses largest-remainder
//! rounding (see [`distribute`]) so segment sizes partition the input extent
//! exactly, with no cumulative drift on resize.
//!
//! ```
//! use cadre_layout::{Constraint, Layout, Rect};
//!
//! let rects = Layout::horizontal()
//!     .constraints([Constraint::Length(20), Constraint::Fill(1)])
//!     .split(Rect::from_size(80, 24));
//!
//! assert_eq!(rects[0].width, 20);
//! assert_eq!(rects[1].width, 60);
//! ```

pub mod dock;
pub mod flow;
pub mod grid;
pub mod stack;

pub use cadre_core::geometry::{Rect, Sides, Size};
pub use dock::{Dock, DockLayout};
pub use flow::Flow;
pub use grid::{Grid, GridArea, GridError, GridLayout, GridTemplate};
pub use stack::{Anchor, Stack};

/// The axis along which an area is partitioned.
///
/// The orthogonal dimension is copied unchanged to every output segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Top to bottom: heights are solved, widths are copied.
    #[default]
    Vertical,
    /// Left to right: widths are solved, heights are copied.
    Horizontal,
}

impl Axis {
    /// The extent of a rect along this axis.
    #[inline]
    pub const fn extent_of(self, rect: Rect) -> u16 {
        match self {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        }
    }

    /// The origin coordinate of a rect along this axis.
    #[inline]
    pub const fn origin_of(self, rect: Rect) -> u16 {
        match self {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        }
    }

    /// The far edge (exclusive) of a rect along this axis.
    #[inline]
    pub const fn end_of(self, rect: Rect) -> u16 {
        match self {
            Axis::Horizontal => rect.right(),
            Axis::Vertical => rect.bottom(),
        }
    }
}

/// A constraint on the size of one layout segment.
///
/// Constraints are solved in three deterministic passes (desired size,
/// leftover/deficit distribution, placement). Under overflow, segments
/// shrink in a strict priority order: `Fill` collapses first, then `Max`,
/// then `Percentage`/`Ratio`, then `Min`, and `Length` only as a last
/// resort. Rigid pins resist shrinking most; elastic fills least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Exactly this many cells, a hard pin.
    Length(u16),
    /// A percentage (0-100, clamped) of the available extent.
    Percentage(u16),
    /// A `numerator / denominator` share of the available extent.
    Ratio(u32, u32),
    /// At least this many cells; grows into leftover space when no
    /// [`Fill`](Constraint::Fill) is present.
    Min(u16),
    /// At most this many cells; shrinks before percentages under overflow.
    Max(u16),
    /// Consume leftover space proportional to the weight (treated as >= 1).
    Fill(u16),
}

/// How leftover space is redistributed when no constraint consumed it.
///
/// This pass only moves segments; it never changes their sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flex {
    /// Segments stay packed at the start (left/top).
    #[default]
    Start,
    /// Segments are pushed to the end (right/bottom).
    End,
    /// Segments are centered; an odd cell trails.
    Center,
    /// Leftover is split into equal gaps between segments.
    SpaceBetween,
    /// Half-size gaps at the edges, full gaps between segments.
    SpaceAround,
    /// Equal gaps between segments and at both edges.
    SpaceEvenly,
}

/// A 1D layout container.
///
/// Builder-style configuration over [`split`]: an axis, an ordered list of
/// constraints, an outer margin, a gap between adjacent segments, and a
/// [`Flex`] policy for unconsumed space.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    axis: Axis,
    constraints: Vec<Constraint>,
    margin: Sides,
    spacing: u16,
    flex: Flex,
}

impl Layout {
    /// Create a new vertical layout.
    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            ..Default::default()
        }
    }

    /// Create a new horizontal layout.
    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            ..Default::default()
        }
    }

    /// Set the axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the constraints.
    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Set the outer margin.
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Set the gap between adjacent segments.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the flex policy for unconsumed space.
    pub fn flex(mut self, flex: Flex) -> Self {
        self.flex = flex;
        self
    }

    /// Number of constraints (and thus output rects from [`split`](Self::split)).
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Split the given area into one rect per constraint.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_split",
            axis = ?self.axis,
            constraints = self.constraints.len(),
            w = area.width,
            h = area.height
        )
        .entered();

        let inner = area.inner(self.margin);
        let rects = split(inner, self.axis, &self.constraints, self.spacing);
        if self.flex == Flex::Start {
            rects
        } else {
            align(&rects, self.axis, self.axis.extent_of(inner), self.flex)
        }
    }
}

/// Split `area` along `axis` into one rect per constraint, in order.
///
/// Segments are separated by `spacing` cells (never before the first or
/// after the last). The output partitions the extent exactly whenever the
/// constraints can consume it; any remainder is left trailing for [`align`].
pub fn split(area: Rect, axis: Axis, constraints: &[Constraint], spacing: u16) -> Vec<Rect> {
    let n = constraints.len();
    if n == 0 {
        return Vec::new();
    }

    let extent = axis.extent_of(area);
    let total_gap = ((n as u64 - 1) * spacing as u64).min(u16::MAX as u64) as u16;
    let available = extent.saturating_sub(total_gap);
    let sizes = solve(constraints, available);

    let mut rects = Vec::with_capacity(n);
    let mut offset = axis.origin_of(area);
    for &size in &sizes {
        let rect = match axis {
            Axis::Horizontal => Rect::new(offset, area.y, size, area.height),
            Axis::Vertical => Rect::new(area.x, offset, area.width, size),
        };
        rects.push(rect);
        offset = offset.saturating_add(size).saturating_add(spacing);
    }
    rects
}

/// Re-place an already-split sequence of rects according to a [`Flex`] policy.
///
/// `leftover` is the difference between `area_extent` and the span from the
/// first rect's origin to the last rect's far edge. Segments are shifted,
/// never resized; gap splits use [`distribute`] so positions are exact.
pub fn align(rects: &[Rect], axis: Axis, area_extent: u16, flex: Flex) -> Vec<Rect> {
    let n = rects.len();
    if n == 0 {
        return Vec::new();
    }

    let span = axis
        .end_of(rects[n - 1])
        .saturating_sub(axis.origin_of(rects[0]));
    let leftover = area_extent.saturating_sub(span);
    let (lead, gaps) = flex_offsets(flex, leftover, n);

    let mut out = Vec::with_capacity(n);
    let mut shift = lead;
    for (i, &rect) in rects.iter().enumerate() {
        let moved = match axis {
            Axis::Horizontal => Rect::new(rect.x.saturating_add(shift), rect.y, rect.width, rect.height),
            Axis::Vertical => Rect::new(rect.x, rect.y.saturating_add(shift), rect.width, rect.height),
        };
        out.push(moved);
        if let Some(&gap) = gaps.get(i) {
            shift = shift.saturating_add(gap);
        }
    }
    out
}

/// Leading offset plus per-gap extras (`len == n - 1`) for a flex policy.
fn flex_offsets(flex: Flex, leftover: u16, n: usize) -> (u16, Vec<u16>) {
    if leftover == 0 {
        return (0, Vec::new());
    }
    match flex {
        Flex::Start => (0, Vec::new()),
        Flex::End => (leftover, Vec::new()),
        Flex::Center => (leftover / 2, Vec::new()),
        Flex::SpaceBetween => {
            if n < 2 {
                (0, Vec::new())
            } else {
                (0, distribute(leftover, &vec![1; n - 1]))
            }
        }
        Flex::SpaceAround => {
            // 2n units total: one at each edge, two per internal gap.
            let mut weights = vec![2u64; n + 1];
            weights[0] = 1;
            weights[n] = 1;
            let gaps = distribute(leftover, &weights);
            (gaps[0], gaps[1..n].to_vec())
        }
        Flex::SpaceEvenly => {
            let gaps = distribute(leftover, &vec![1; n + 1]);
            (gaps[0], gaps[1..n].to_vec())
        }
    }
}

/// Solve constraint sizes against an available extent.
///
/// Pass 1 computes desired sizes, pass 2 distributes leftover (growth) or
/// deficit (staged shrink). Placement is the caller's job.
fn solve(constraints: &[Constraint], available: u16) -> Vec<u16> {
    // A lone non-Length constraint consumes the whole extent, whatever its kind.
    if constraints.len() == 1 && !matches!(constraints[0], Constraint::Length(_)) {
        return vec![available];
    }

    let mut sizes: Vec<u16> = constraints
        .iter()
        .map(|&c| desired_size(c, available))
        .collect();

    let desired_total: u64 = sizes.iter().map(|&s| s as u64).sum();
    let available = available as u64;

    if desired_total < available {
        grow(constraints, &mut sizes, (available - desired_total) as u16);
    } else if desired_total > available {
        shrink(constraints, &mut sizes, desired_total - available);
    }

    sizes
}

/// Pass 1: the size each constraint asks for before any redistribution.
fn desired_size(constraint: Constraint, available: u16) -> u16 {
    match constraint {
        Constraint::Length(n) => n,
        Constraint::Percentage(p) => round_share(available, p.min(100) as u64, 100),
        Constraint::Ratio(num, den) => round_share(available, num as u64, den.max(1) as u64),
        Constraint::Min(n) => n,
        Constraint::Max(n) => n,
        Constraint::Fill(_) => 0,
    }
}

/// `round(available * num / den)` with half-up rounding, clamped to `u16`.
fn round_share(available: u16, num: u64, den: u64) -> u16 {
    let scaled = (available as u64 * num * 2 + den) / (den * 2);
    scaled.min(u16::MAX as u64) as u16
}

/// Pass 2a: hand positive leftover to the constraints that can grow.
///
/// `Fill` weights take it all; failing that, `Min` constraints share it
/// equally. With neither present the leftover stays for the flex pass.
fn grow(constraints: &[Constraint], sizes: &mut [u16], leftover: u16) {
    let fills: Vec<(usize, u64)> = constraints
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| match c {
            Constraint::Fill(w) => Some((i, w.max(1) as u64)),
            _ => None,
        })
        .collect();

    if !fills.is_empty() {
        let weights: Vec<u64> = fills.iter().map(|&(_, w)| w).collect();
        let shares = distribute(leftover, &weights);
        for (&(i, _), &share) in fills.iter().zip(&shares) {
            sizes[i] = sizes[i].saturating_add(share);
        }
        return;
    }

    let mins: Vec<usize> = constraints
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| matches!(c, Constraint::Min(_)).then_some(i))
        .collect();

    if !mins.is_empty() {
        let shares = distribute(leftover, &vec![1; mins.len()]);
        for (&i, &share) in mins.iter().zip(&shares) {
            sizes[i] = sizes[i].saturating_add(share);
        }
    }
}

/// Pass 2b: absorb a deficit in strict stage order.
///
/// `Fill` is already at zero, so the stages are `Max`, then
/// `Percentage`/`Ratio`, then `Min`, then `Length`, each shrinking
/// proportionally to its current sizes until the deficit is gone.
fn shrink(constraints: &[Constraint], sizes: &mut [u16], mut deficit: u64) {
    let stages: [fn(Constraint) -> bool; 4] = [
        |c| matches!(c, Constraint::Max(_)),
        |c| matches!(c, Constraint::Percentage(_) | Constraint::Ratio(_, _)),
        |c| matches!(c, Constraint::Min(_)),
        |c| matches!(c, Constraint::Length(_)),
    ];

    for stage in stages {
        if deficit == 0 {
            return;
        }
        let indices: Vec<usize> = constraints
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| stage(c).then_some(i))
            .collect();
        if indices.is_empty() {
            continue;
        }

        let weights: Vec<u64> = indices.iter().map(|&i| sizes[i] as u64).collect();
        let pool: u64 = weights.iter().sum();
        if pool == 0 {
            continue;
        }

        let absorb = pool.min(deficit);
        // Once a stage absorbs the rest of the deficit, all earlier stages
        // are at zero, so `pool - absorb` can never exceed the extent.
        let keep = (pool - absorb).min(u16::MAX as u64) as u16;
        let shares = distribute(keep, &weights);
        for (&i, &share) in indices.iter().zip(&shares) {
            sizes[i] = share;
        }
        deficit -= absorb;
    }
}

/// Split `total` into one integer share per weight, summing to `total` exactly.
///
/// Largest-remainder rounding: each share is floored, then the leftover
/// whole units go to the shares with the largest fractional remainder, ties
/// broken toward the lower index. Zero weights receive nothing unless every
/// weight is zero, in which case all shares are zero.
///
/// Every distribution step in this crate (fill growth, staged shrink, flex
/// gaps, grid tracks) goes through this one helper, which is what makes the
/// exact-partition invariant hold by construction.
pub fn distribute(total: u16, weights: &[u64]) -> Vec<u16> {
    let n = weights.len();
    if n == 0 {
        return Vec::new();
    }
    let weight_sum: u128 = weights.iter().map(|&w| w as u128).sum();
    if weight_sum == 0 || total == 0 {
        return vec![0; n];
    }

    let mut shares = vec![0u16; n];
    let mut remainders: Vec<(usize, u128)> = Vec::with_capacity(n);
    let mut assigned: u128 = 0;
    for (i, &w) in weights.iter().enumerate() {
        let exact = total as u128 * w as u128;
        shares[i] = (exact / weight_sum) as u16;
        assigned += exact / weight_sum;
        remainders.push((i, exact % weight_sum));
    }

    let extra = (total as u128 - assigned) as usize;
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for &(i, _) in remainders.iter().take(extra) {
        shares[i] += 1;
    }
    shares
}
