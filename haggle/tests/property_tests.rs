//! Properties every negotiation must satisfy, checked over a grid of proposals.

use haggle::{
    Axis, Behavior, ContentMode, FrameSpec, IdealOverride, IntrinsicLeaf, LayoutError, LayoutNode,
    LeafSizing, Negotiator, NegotiatorConfig, ProposedSize, Size,
};

fn proposals() -> Vec<ProposedSize> {
    let dims = [
        Some(0.0),
        Some(1.0),
        Some(10.0),
        Some(37.5),
        Some(75.0),
        Some(150.0),
        Some(375.0),
        Some(1000.0),
        None,
    ];
    dims.iter()
        .flat_map(|&w| dims.iter().map(move |&h| ProposedSize::new(w, h)))
        .collect()
}

fn fillers(count: usize) -> Vec<LayoutNode> {
    (0..count).map(|_| LayoutNode::shape()).collect()
}

fn fit_leaf(width: f32, height: f32) -> LayoutNode {
    LayoutNode::leaf(IntrinsicLeaf::new(
        Size::new(width, height),
        LeafSizing::Fit,
        LeafSizing::Fit,
    ))
}

/// Trees built only from nodes that never report more than they are proposed.
fn well_behaved_trees() -> Vec<LayoutNode> {
    vec![
        LayoutNode::hstack(vec![
            fit_leaf(50.0, 30.0),
            LayoutNode::shape(),
            LayoutNode::spacer().layout_priority(1),
        ]),
        LayoutNode::vstack(vec![
            LayoutNode::zstack(vec![LayoutNode::shape(), fit_leaf(200.0, 10.0)]),
            LayoutNode::hstack(vec![LayoutNode::shape(), LayoutNode::shape()])
                .frame(FrameSpec::new().max_width(120.0)),
        ]),
        LayoutNode::vstack(vec![
            LayoutNode::image(Size::new(20.0, 20.0))
                .resizable()
                .frame(FrameSpec::new().max_width(150.0).max_height(150.0)),
        ]),
        LayoutNode::shape().ideal(IdealOverride::new().ideal_width(500.0).ideal_height(500.0)),
        LayoutNode::shape().aspect_ratio(Some(1.5), ContentMode::Fit),
        fit_leaf(80.0, 80.0).offset(-10.0, 400.0),
        fit_leaf(80.0, 80.0).position(10.0, 10.0),
        LayoutNode::hstack(fillers(3)),
        LayoutNode::vstack(fillers(7)),
        LayoutNode::hstack(vec![
            LayoutNode::vstack(fillers(3)),
            LayoutNode::spacer(),
            LayoutNode::hstack(fillers(6)).layout_priority(2),
            fit_leaf(30.0, 30.0),
        ]),
    ]
}

/// Trees whose placement arithmetic is exact for every proposal in the grid.
fn nested_trees() -> Vec<LayoutNode> {
    vec![
        LayoutNode::hstack(vec![fit_leaf(50.0, 30.0), LayoutNode::shape()]),
        LayoutNode::vstack(fillers(4)).frame(FrameSpec::new().max_width(120.0)),
        LayoutNode::shape().padding(16.0),
        fit_leaf(20.0, 20.0)
            .frame(FrameSpec::fixed(40.0, 40.0).alignment(haggle::Alignment::BOTTOM_TRAILING))
            .padding(4.0),
        LayoutNode::zstack(vec![LayoutNode::shape(), fit_leaf(30.0, 10.0)]),
    ]
}

/// Trees containing nodes allowed to overflow their proposal.
fn overflowing_trees() -> Vec<LayoutNode> {
    vec![
        LayoutNode::path(Size::new(130.0, 300.0)),
        LayoutNode::image(Size::new(20.0, 20.0)).padding(16.0),
        LayoutNode::vstack(vec![
            LayoutNode::image(Size::new(20.0, 20.0))
                .frame(FrameSpec::new().min_width(150.0).min_height(150.0)),
            LayoutNode::text(600.0, 20.0).fixed_size(),
        ]),
        LayoutNode::shape().aspect_ratio(Some(0.5), ContentMode::Fill),
        LayoutNode::hstack(vec![LayoutNode::spacer(), LayoutNode::spacer()]).frame_size(150.0, 150.0),
    ]
}

#[test]
fn test_reports_are_never_negative() {
    for tree in well_behaved_trees().iter().chain(overflowing_trees().iter()) {
        for proposal in proposals() {
            let snapshot = haggle::layout(tree, proposal).unwrap();
            for node in snapshot.iter() {
                let size = node.size();
                assert!(
                    size.width >= 0.0 && size.height >= 0.0,
                    "{} reported {size} for {proposal}",
                    node.kind
                );
            }
        }
    }
}

#[test]
fn test_reports_stay_within_proposal() {
    for tree in well_behaved_trees() {
        for proposal in proposals() {
            let snapshot = haggle::layout(&tree, proposal).unwrap();
            for node in snapshot.iter() {
                for axis in [Axis::Horizontal, Axis::Vertical] {
                    let Some(proposed) = node.proposal.get(axis) else {
                        continue;
                    };
                    let reported = node.size().get(axis);
                    assert!(
                        reported <= proposed,
                        "{} reported {reported} {axis} but was proposed {proposed}",
                        node.kind
                    );
                }
            }
            assert!(snapshot.warnings().is_empty(), "{:?}", snapshot.warnings());
        }
    }
}

#[test]
fn test_children_placed_inside_parents() {
    for tree in nested_trees() {
        for proposal in proposals() {
            let snapshot = haggle::layout(&tree, proposal).unwrap();
            for node in snapshot.iter() {
                let Some(parent) = node.parent.and_then(|p| snapshot.get(p)) else {
                    continue;
                };
                assert!(
                    parent.rect.contains_rect(&node.rect),
                    "{} {:?} escapes {} {:?} for {proposal}",
                    node.kind,
                    node.rect,
                    parent.kind,
                    parent.rect
                );
            }
        }
    }
}

#[test]
fn test_negotiation_is_idempotent() {
    for tree in well_behaved_trees().iter().chain(overflowing_trees().iter()) {
        for proposal in proposals() {
            let first = haggle::layout(tree, proposal).unwrap();
            let second = haggle::layout(tree, proposal).unwrap();
            assert_eq!(first.nodes(), second.nodes());
            assert_eq!(
                haggle::negotiate(tree, proposal).unwrap(),
                first.root().unwrap().size()
            );
        }
    }
}

#[test]
fn test_fixed_frame_always_reports_its_size() {
    let children = well_behaved_trees().into_iter().chain(overflowing_trees());
    for child in children {
        let framed = child.frame(FrameSpec::fixed(150.0, 150.0));
        for proposal in proposals() {
            assert_eq!(
                haggle::negotiate(&framed, proposal).unwrap(),
                Size::new(150.0, 150.0)
            );
        }
    }
}

#[test]
fn test_invalid_proposals_fail() {
    let tree = LayoutNode::shape();
    for (proposal, axis) in [
        (ProposedSize::new(Some(-1.0), Some(10.0)), Axis::Horizontal),
        (ProposedSize::new(None, Some(-0.5)), Axis::Vertical),
        (ProposedSize::new(Some(f32::NAN), None), Axis::Horizontal),
    ] {
        match haggle::negotiate(&tree, proposal) {
            Err(LayoutError::InvalidProposal { axis: found, .. }) => assert_eq!(found, axis),
            other => panic!("expected InvalidProposal for {proposal}, got {other:?}"),
        }
    }
}

#[test]
fn test_infinite_proposal_means_unconstrained() {
    let tree = LayoutNode::shape();
    let infinite = ProposedSize::new(Some(f32::INFINITY), Some(f32::INFINITY));
    assert_eq!(infinite, ProposedSize::UNSPECIFIED);
    assert_eq!(haggle::negotiate(&tree, infinite).unwrap(), Size::new(10.0, 10.0));
}

#[test]
fn test_structural_errors() {
    let frame = LayoutNode::new(Behavior::FixedFrame(FrameSpec::fixed(10.0, 10.0)), vec![]);
    assert!(matches!(
        haggle::negotiate(&frame, ProposedSize::UNSPECIFIED),
        Err(LayoutError::MissingChild { node: "FixedFrame" })
    ));

    let leaf = LayoutNode::new(
        Behavior::IntrinsicLeaf(IntrinsicLeaf::shape()),
        vec![LayoutNode::shape()],
    );
    assert!(matches!(
        haggle::negotiate(&leaf, ProposedSize::UNSPECIFIED),
        Err(LayoutError::UnexpectedChildren { .. })
    ));

    // A violation deep in the tree aborts the whole pass.
    let nested = LayoutNode::vstack(vec![
        LayoutNode::shape(),
        LayoutNode::hstack(vec![LayoutNode::shape().frame(FrameSpec::new().min_width(f32::INFINITY))]),
    ]);
    assert!(matches!(
        haggle::layout(&nested, ProposedSize::fixed(100.0, 100.0)),
        Err(LayoutError::InvalidConstraint { node: "FixedFrame", .. })
    ));
}

#[test]
fn test_configured_negotiator() {
    let config = NegotiatorConfig::from_json(
        r#"{ "fill_fallback": 0.0, "default_spacing": 8.0, "collect_warnings": false }"#,
    )
    .unwrap();
    let negotiator = Negotiator::new(config).unwrap();

    let row = LayoutNode::hstack(vec![LayoutNode::shape(), LayoutNode::shape(), LayoutNode::shape()]);
    let snapshot = negotiator.layout(&row, ProposedSize::fixed(316.0, 20.0)).unwrap();
    let xs: Vec<f32> = snapshot.children_of(0).map(|n| n.rect.x).collect();
    assert_eq!(xs, vec![0.0, 108.0, 216.0]);

    assert_eq!(
        negotiator.negotiate(&LayoutNode::spacer(), ProposedSize::UNSPECIFIED).unwrap(),
        Size::ZERO
    );

    let overflow = LayoutNode::path(Size::new(500.0, 500.0));
    let snapshot = negotiator.layout(&overflow, ProposedSize::fixed(10.0, 10.0)).unwrap();
    assert!(snapshot.warnings().is_empty());
}
