//! Property-based invariant tests for the constraint solver.
//!
//! Invariants verified for arbitrary inputs:
//!
//! 1. One output rect per constraint, in input order.
//! 2. Allocated sizes never exceed the available extent.
//! 3. With any `Fill` present, sizes partition the extent exactly.
//! 4. Fill shares are within one cell of their exact proportion.
//! 5. Solving is deterministic (identical inputs, identical output).
//! 6. Flex policies move segments but never resize them.
//! 7. Grid tracks tile the grid rectangle exactly.

use cadre_layout::{Axis, Constraint, Flex, Grid, GridTemplate, Layout, Rect, align, split};
use proptest::prelude::*;

fn constraint_strategy() -> impl Strategy<Value = Constraint> {
    prop_oneof![
        (0u16..=200).prop_map(Constraint::Length),
        (0u16..=150).prop_map(Constraint::Percentage),
        ((0u32..=10), (0u32..=10)).prop_map(|(a, b)| Constraint::Ratio(a, b)),
        (0u16..=100).prop_map(Constraint::Min),
        (0u16..=100).prop_map(Constraint::Max),
        (0u16..=5).prop_map(Constraint::Fill),
    ]
}

fn constraints_strategy() -> impl Strategy<Value = Vec<Constraint>> {
    proptest::collection::vec(constraint_strategy(), 0..12)
}

fn extent_along(axis: Axis, rects: &[Rect]) -> u32 {
    rects.iter().map(|r| axis.extent_of(*r) as u32).sum()
}

proptest! {
    #[test]
    fn one_rect_per_constraint_in_order(
        constraints in constraints_strategy(),
        extent in 0u16..=500,
        spacing in 0u16..=5,
    ) {
        let area = Rect::from_size(extent, 3);
        let rects = split(area, Axis::Horizontal, &constraints, spacing);
        prop_assert_eq!(rects.len(), constraints.len());
        for pair in rects.windows(2) {
            prop_assert!(pair[0].right() <= pair[1].x, "segments out of order or overlapping");
        }
        for r in &rects {
            prop_assert_eq!(r.y, area.y);
            prop_assert_eq!(r.height, area.height);
        }
    }

    #[test]
    fn sizes_never_exceed_available(
        constraints in constraints_strategy(),
        extent in 0u16..=500,
        spacing in 0u16..=5,
    ) {
        let rects = split(Rect::from_size(extent, 1), Axis::Horizontal, &constraints, spacing);
        let gaps = spacing as u32 * constraints.len().saturating_sub(1) as u32;
        let available = (extent as u32).saturating_sub(gaps);
        prop_assert!(extent_along(Axis::Horizontal, &rects) <= available);
    }

    #[test]
    fn fill_makes_the_partition_exact(
        mut constraints in constraints_strategy(),
        extent in 0u16..=500,
        spacing in 0u16..=5,
        weight in 1u16..=4,
    ) {
        constraints.push(Constraint::Fill(weight));
        let rects = split(Rect::from_size(extent, 1), Axis::Horizontal, &constraints, spacing);
        let gaps = spacing as u32 * (constraints.len() as u32 - 1);
        let available = (extent as u32).saturating_sub(gaps);
        prop_assert_eq!(extent_along(Axis::Horizontal, &rects), available);
    }

    #[test]
    fn fill_shares_are_proportional_within_one_cell(
        a in 1u16..=9,
        b in 1u16..=9,
        extent in 0u16..=1000,
    ) {
        let rects = split(
            Rect::from_size(extent, 1),
            Axis::Horizontal,
            &[Constraint::Fill(a), Constraint::Fill(b)],
            0,
        );
        let exact = extent as f64 * a as f64 / (a + b) as f64;
        prop_assert!((rects[0].width as f64 - exact).abs() < 1.0);
        prop_assert_eq!(rects[0].width as u32 + rects[1].width as u32, extent as u32);
    }

    #[test]
    fn split_is_deterministic(
        constraints in constraints_strategy(),
        extent in 0u16..=500,
        spacing in 0u16..=5,
    ) {
        let area = Rect::from_size(extent, 2);
        let first = split(area, Axis::Vertical, &constraints, spacing);
        let second = split(area, Axis::Vertical, &constraints, spacing);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn flex_moves_but_never_resizes(
        constraints in constraints_strategy(),
        extent in 0u16..=500,
        flex_pick in 0usize..6,
    ) {
        let flex = [
            Flex::Start,
            Flex::End,
            Flex::Center,
            Flex::SpaceBetween,
            Flex::SpaceAround,
            Flex::SpaceEvenly,
        ][flex_pick];
        let area = Rect::from_size(extent, 1);
        let packed = split(area, Axis::Horizontal, &constraints, 0);
        let aligned = align(&packed, Axis::Horizontal, extent, flex);
        prop_assert_eq!(packed.len(), aligned.len());
        for (p, a) in packed.iter().zip(&aligned) {
            prop_assert_eq!(p.width, a.width);
            prop_assert_eq!(p.height, a.height);
            prop_assert!(a.x >= p.x, "flex moved a segment backwards");
        }
        if let Some(last) = aligned.last() {
            prop_assert!(last.right() as u32 <= extent as u32);
        }
    }

    #[test]
    fn layout_builder_matches_free_split(
        constraints in constraints_strategy(),
        extent in 0u16..=500,
        spacing in 0u16..=5,
    ) {
        let area = Rect::from_size(extent, 4);
        let via_builder = Layout::horizontal()
            .constraints(constraints.clone())
            .spacing(spacing)
            .split(area);
        let via_fn = split(area, Axis::Horizontal, &constraints, spacing);
        prop_assert_eq!(via_builder, via_fn);
    }

    #[test]
    fn grid_fill_tracks_tile_exactly(
        columns in 1usize..=6,
        rows in 1usize..=6,
        width in 0u16..=300,
        height in 0u16..=100,
    ) {
        // One area per cell, so the areas must tile the whole rect.
        let template_rows: Vec<String> = (0..rows)
            .map(|r| {
                (0..columns)
                    .map(|c| format!("c{r}x{c}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        let template = GridTemplate::parse(&template_rows).unwrap();
        let layout = Grid::new(template).resolve(Rect::from_size(width, height));

        let covered: u32 = (0..rows)
            .flat_map(|r| (0..columns).map(move |c| (r, c)))
            .map(|(r, c)| layout.rect(&format!("c{r}x{c}")).unwrap().area())
            .sum();
        prop_assert_eq!(covered, width as u32 * height as u32);
    }
}
