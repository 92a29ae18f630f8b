//! Convenience-pattern expansion and the geometry it produces: fill with
//! insets, centering, and fixed sizing, including the relation mirroring
//! on far edges for inequality insets.

use anchorkit::{
    Constant, Constrain, ConstraintHandle, ConvenienceAnchors, EdgeInsets, LayoutAnchor, Offset,
    Rect, Size, Space,
};
use pretty_assertions::assert_eq;

const EPSILON: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_inside_equal_expands_in_edge_order_with_negated_far_constants() {
    let space = Space::new();
    let parent = space.region("parent");

    let anchors = ConvenienceAnchors::Inside {
        of: &parent,
        insets: Constant::Equal(EdgeInsets::new(10.0, 5.0, 10.0, 5.0)),
    }
    .expand();

    assert_eq!(anchors.len(), 4);
    assert!(
        matches!(&anchors[0], LayoutAnchor::Leading(_, Constant::Equal(v)) if *v == 5.0),
        "leading carries the left inset"
    );
    assert!(
        matches!(&anchors[1], LayoutAnchor::Top(_, Constant::Equal(v)) if *v == 10.0),
        "top carries the top inset"
    );
    assert!(
        matches!(&anchors[2], LayoutAnchor::Trailing(_, Constant::Equal(v)) if *v == -5.0),
        "trailing negates the right inset"
    );
    assert!(
        matches!(&anchors[3], LayoutAnchor::Bottom(_, Constant::Equal(v)) if *v == -10.0),
        "bottom negates the bottom inset"
    );
}

#[test]
fn test_inside_at_most_insets_mirror_on_far_edges() {
    let space = Space::new();
    let parent = space.region("parent");

    let anchors = ConvenienceAnchors::Inside {
        of: &parent,
        insets: Constant::LessOrEqual(EdgeInsets::new(10.0, 5.0, 10.0, 5.0)),
    }
    .expand();

    assert!(matches!(
        &anchors[0],
        LayoutAnchor::Leading(_, Constant::LessOrEqual(v)) if *v == 5.0
    ));
    assert!(matches!(
        &anchors[1],
        LayoutAnchor::Top(_, Constant::LessOrEqual(v)) if *v == 10.0
    ));
    assert!(matches!(
        &anchors[2],
        LayoutAnchor::Trailing(_, Constant::GreaterOrEqual(v)) if *v == -5.0
    ));
    assert!(matches!(
        &anchors[3],
        LayoutAnchor::Bottom(_, Constant::GreaterOrEqual(v)) if *v == -10.0
    ));
}

#[test]
fn test_inside_at_least_insets_mirror_on_far_edges() {
    let space = Space::new();
    let parent = space.region("parent");

    let anchors = ConvenienceAnchors::Inside {
        of: &parent,
        insets: Constant::GreaterOrEqual(EdgeInsets::uniform(4.0)),
    }
    .expand();

    assert!(matches!(
        &anchors[0],
        LayoutAnchor::Leading(_, Constant::GreaterOrEqual(v)) if *v == 4.0
    ));
    assert!(matches!(
        &anchors[2],
        LayoutAnchor::Trailing(_, Constant::LessOrEqual(v)) if *v == -4.0
    ));
}

#[test]
fn test_zero_inset_fill_reproduces_the_parent_frame() {
    let space = Space::new();
    let parent = space.region_with_frame("parent", Rect::new(10.0, 20.0, 300.0, 200.0));
    let child = space.region("child");

    child.constrain_with(ConvenienceAnchors::Inside {
        of: &parent,
        insets: Constant::Equal(EdgeInsets::default()),
    });

    space.layout();
    let frame = child.frame();
    assert_close(frame.x, 10.0, "x");
    assert_close(frame.y, 20.0, "y");
    assert_close(frame.width, 300.0, "width");
    assert_close(frame.height, 200.0, "height");
}

#[test]
fn test_inside_insets_produce_the_inset_frame() {
    let space = Space::new();
    let parent = space.region_with_frame("parent", Rect::new(10.0, 20.0, 300.0, 200.0));
    let child = space.region("child");

    child.constrain_with(ConvenienceAnchors::Inside {
        of: &parent,
        insets: Constant::Equal(EdgeInsets::new(10.0, 5.0, 10.0, 5.0)),
    });

    space.layout();
    let frame = child.frame();
    assert_close(frame.x, 15.0, "x");
    assert_close(frame.y, 30.0, "y");
    assert_close(frame.width, 290.0, "width");
    assert_close(frame.height, 180.0, "height");
}

#[test]
fn test_centered_expands_to_both_centers() {
    let space = Space::new();
    let parent = space.region("parent");

    let anchors = ConvenienceAnchors::Centered {
        of: &parent,
        offset: Constant::Equal(Offset::new(3.0, -4.0)),
    }
    .expand();

    assert_eq!(anchors.len(), 2);
    assert!(matches!(
        &anchors[0],
        LayoutAnchor::CenterX(_, Constant::Equal(v)) if *v == 3.0
    ));
    assert!(matches!(
        &anchors[1],
        LayoutAnchor::CenterY(_, Constant::Equal(v)) if *v == -4.0
    ));
}

#[test]
fn test_centered_geometry_with_offset() {
    let space = Space::new();
    let parent = space.region_with_frame("parent", Rect::new(10.0, 20.0, 300.0, 200.0));
    let child = space.region("child");

    child.constrain_with(ConvenienceAnchors::<anchorkit::Region>::Sized(Constant::Equal(Size::new(
        100.0, 40.0,
    ))));
    child.constrain_with(ConvenienceAnchors::Centered {
        of: &parent,
        offset: Constant::Equal(Offset::new(3.0, -4.0)),
    });

    space.layout();
    let frame = child.frame();
    assert_close(frame.x, 113.0, "x: center 163 minus half of 100");
    assert_close(frame.y, 96.0, "y: center 116 minus half of 40");
    assert_close(frame.width, 100.0, "width");
    assert_close(frame.height, 40.0, "height");
}

#[test]
fn test_sized_expands_to_targetless_constants() {
    let anchors: Vec<anchorkit::AnchorOf<anchorkit::Region>> =
        ConvenienceAnchors::<anchorkit::Region>::Sized(Constant::Equal(Size::new(100.0, 40.0)))
            .expand();

    assert_eq!(anchors.len(), 2);
    assert!(matches!(
        &anchors[0],
        LayoutAnchor::WidthConstant(Constant::Equal(v)) if *v == 100.0
    ));
    assert!(matches!(
        &anchors[1],
        LayoutAnchor::HeightConstant(Constant::Equal(v)) if *v == 40.0
    ));
}

#[test]
fn test_sized_relation_passes_through() {
    let anchors: Vec<anchorkit::AnchorOf<anchorkit::Region>> =
        ConvenienceAnchors::<anchorkit::Region>::Sized(Constant::LessOrEqual(Size::new(
            100.0, 40.0,
        )))
        .expand();

    assert!(matches!(
        &anchors[0],
        LayoutAnchor::WidthConstant(Constant::LessOrEqual(v)) if *v == 100.0
    ));
    assert!(matches!(
        &anchors[1],
        LayoutAnchor::HeightConstant(Constant::LessOrEqual(v)) if *v == 40.0
    ));
}

#[test]
fn test_constrain_with_activates_in_expansion_order() {
    let space = Space::new();
    let parent = space.region_with_frame("parent", Rect::new(0.0, 0.0, 100.0, 100.0));
    let child = space.region("child");

    let constraints = child.constrain_with(ConvenienceAnchors::Inside {
        of: &parent,
        insets: Constant::Equal(EdgeInsets::default()),
    });

    assert_eq!(constraints.len(), 4);
    for constraint in &constraints {
        assert!(constraint.is_active());
    }
    assert!(constraints[0].description().contains("leading"));
    assert!(constraints[1].description().contains("top"));
    assert!(constraints[2].description().contains("trailing"));
    assert!(constraints[3].description().contains("bottom"));
}

#[test]
fn test_expansion_is_repeatable() {
    let space = Space::new();
    let parent = space.region("parent");

    let pattern = ConvenienceAnchors::Inside {
        of: &parent,
        insets: Constant::Equal(EdgeInsets::uniform(8.0)),
    };

    let first = pattern.expand();
    let second = pattern.expand();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        match (a, b) {
            (LayoutAnchor::Leading(_, x), LayoutAnchor::Leading(_, y)) => assert_eq!(x, y),
            (LayoutAnchor::Top(_, x), LayoutAnchor::Top(_, y)) => assert_eq!(x, y),
            (LayoutAnchor::Trailing(_, x), LayoutAnchor::Trailing(_, y)) => assert_eq!(x, y),
            (LayoutAnchor::Bottom(_, x), LayoutAnchor::Bottom(_, y)) => assert_eq!(x, y),
            _ => panic!("expansion produced different kinds across calls"),
        }
    }
}
