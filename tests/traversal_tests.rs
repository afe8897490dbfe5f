//! Traversal engine tests
//!
//! Tests for:
//! - Pre-order visit sequence over the canonical humanoid
//! - Parent-before-descendant ordering
//! - Sibling independence (siblings compose with the parent frame)
//! - Transform stack drain and high-water mark
//! - Recursive vs iterative walk equivalence
//! - Base-transform premultiplication and full world chains

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Affine3A, Mat4, Vec3};
use marionette::{
    DrawContext, DrawList, Figure, PartId, PartNode, Pose, Proportions, RenderCallback,
    TransformStack,
};

// ============================================================================
// Helpers
// ============================================================================

const EPSILON: f32 = 1e-4;

fn affine_approx(a: Affine3A, b: Affine3A) -> bool {
    let ma = Mat4::from(a).to_cols_array();
    let mb = Mat4::from(b).to_cols_array();
    ma.iter().zip(mb).all(|(x, y)| (x - y).abs() < EPSILON)
}

type VisitLog = Rc<RefCell<Vec<(PartId, Affine3A)>>>;

fn recorder(part: PartId, log: &VisitLog) -> RenderCallback {
    let log = Rc::clone(log);
    Rc::new(move |world: Affine3A, _ctx: &mut dyn DrawContext| {
        log.borrow_mut().push((part, world));
    })
}

/// The canonical humanoid with recording callbacks instead of cuboids.
fn recording_figure() -> (Figure, VisitLog) {
    let log: VisitLog = Rc::new(RefCell::new(Vec::new()));
    let figure = Figure::with_callbacks(Proportions::default(), &Pose::rest(), |part| {
        recorder(part, &log)
    });
    (figure, log)
}

fn visited_parts(log: &VisitLog) -> Vec<PartId> {
    log.borrow().iter().map(|(part, _)| *part).collect()
}

// ============================================================================
// Visit Order
// ============================================================================

#[test]
fn traversal_visits_each_part_once_in_preorder() {
    let (figure, log) = recording_figure();
    figure.render(Affine3A::IDENTITY, &mut DrawList::new());

    let expected = vec![
        PartId::Torso,
        PartId::Head,
        PartId::LeftUpperArm,
        PartId::LeftLowerArm,
        PartId::RightUpperArm,
        PartId::RightLowerArm,
        PartId::LeftUpperLeg,
        PartId::LeftLowerLeg,
        PartId::RightUpperLeg,
        PartId::RightLowerLeg,
    ];
    assert_eq!(
        visited_parts(&log),
        expected,
        "each part should be visited exactly once, child subtree before next sibling"
    );
}

#[test]
fn parents_are_visited_before_their_descendants() {
    let (figure, log) = recording_figure();
    figure.render(Affine3A::IDENTITY, &mut DrawList::new());

    let order = visited_parts(&log);
    let position = |part: PartId| {
        order
            .iter()
            .position(|&p| p == part)
            .unwrap_or_else(|| panic!("{part:?} was never visited"))
    };

    // Tree edges of the humanoid (parent, child).
    let edges = [
        (PartId::Torso, PartId::Head),
        (PartId::Torso, PartId::LeftUpperArm),
        (PartId::Torso, PartId::RightUpperArm),
        (PartId::Torso, PartId::LeftUpperLeg),
        (PartId::Torso, PartId::RightUpperLeg),
        (PartId::LeftUpperArm, PartId::LeftLowerArm),
        (PartId::RightUpperArm, PartId::RightLowerArm),
        (PartId::LeftUpperLeg, PartId::LeftLowerLeg),
        (PartId::RightUpperLeg, PartId::RightLowerLeg),
    ];
    for (parent, child) in edges {
        assert!(
            position(parent) < position(child),
            "{parent:?} must be visited before {child:?}"
        );
    }
}

#[test]
fn traversal_from_a_leaf_visits_only_that_part() {
    let (figure, log) = recording_figure();
    let mut stack = TransformStack::new();

    // LeftLowerArm has no child and no sibling.
    figure.traverse(
        PartId::LeftLowerArm,
        Affine3A::IDENTITY,
        &mut stack,
        &mut DrawList::new(),
    );

    assert_eq!(visited_parts(&log), vec![PartId::LeftLowerArm]);
    assert!(stack.is_empty());
}

// ============================================================================
// Sibling Independence
// ============================================================================

#[test]
fn siblings_compose_with_the_parent_frame_not_each_other() {
    // Hand-wired four-slot tree: parent with two siblings, the first of
    // which rotates and carries a nested child.
    let log: VisitLog = Rc::new(RefCell::new(Vec::new()));
    let mut figure = Figure::with_callbacks(Proportions::default(), &Pose::rest(), |part| {
        recorder(part, &log)
    });

    let parent = PartId::Torso;
    let first = PartId::Head;
    let nested = PartId::LeftUpperArm;
    let second = PartId::RightUpperArm;

    let parent_local = Affine3A::from_translation(Vec3::new(5.0, 0.0, 0.0));
    let first_local = Affine3A::from_rotation_y(90f32.to_radians());
    let nested_local = Affine3A::from_translation(Vec3::new(0.0, 1.0, 0.0));
    let second_local = Affine3A::from_translation(Vec3::new(0.0, 0.0, 3.0));

    figure.set_node(
        parent,
        PartNode::new(parent_local, recorder(parent, &log), None, Some(first)),
    );
    figure.set_node(
        first,
        PartNode::new(
            first_local,
            recorder(first, &log),
            Some(second),
            Some(nested),
        ),
    );
    figure.set_node(
        nested,
        PartNode::new(nested_local, recorder(nested, &log), None, None),
    );
    figure.set_node(
        second,
        PartNode::new(second_local, recorder(second, &log), None, None),
    );

    let mut stack = TransformStack::new();
    figure.traverse(parent, Affine3A::IDENTITY, &mut stack, &mut DrawList::new());
    assert!(stack.is_empty());

    let recorded = log.borrow();
    let world_of = |part: PartId| {
        recorded
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, world)| *world)
            .unwrap_or_else(|| panic!("{part:?} was never visited"))
    };

    // The nested child composes with the first sibling's frame.
    assert!(
        affine_approx(world_of(nested), parent_local * first_local * nested_local),
        "nested child should inherit its parent's rotation"
    );
    // The second sibling composes with the shared parent frame only; the
    // first sibling's rotation and subtree leave no trace in it.
    assert!(
        affine_approx(world_of(second), parent_local * second_local),
        "sibling world must be parent-world * sibling-local"
    );
}

// ============================================================================
// Transform Stack Discipline
// ============================================================================

#[test]
fn stack_drains_and_peaks_at_tree_depth() {
    let (figure, _log) = recording_figure();
    let mut stack = TransformStack::new();

    figure.traverse(
        Figure::ROOT,
        Affine3A::IDENTITY,
        &mut stack,
        &mut DrawList::new(),
    );

    assert!(
        stack.is_empty(),
        "stack must be empty after a complete traversal"
    );
    // Torso at depth 1, upper limbs at depth 2, lower limbs at depth 3.
    assert_eq!(stack.max_depth(), 3, "humanoid is three levels deep");
}

// ============================================================================
// Walk Equivalence and World Chains
// ============================================================================

#[test]
fn traversal_recursive_matches_iterative() {
    let (figure, log) = recording_figure();
    let base = Affine3A::from_translation(Vec3::new(0.0, 0.0, -25.0))
        * Affine3A::from_rotation_y(30f32.to_radians());

    figure.render(base, &mut DrawList::new());
    let recursive: Vec<(PartId, Affine3A)> = log.borrow().clone();
    log.borrow_mut().clear();

    figure.traverse_iterative(Figure::ROOT, base, &mut DrawList::new());
    let iterative: Vec<(PartId, Affine3A)> = log.borrow().clone();

    assert_eq!(recursive.len(), iterative.len());
    for ((part_r, world_r), (part_i, world_i)) in recursive.iter().zip(&iterative) {
        assert_eq!(part_r, part_i, "visit order must match");
        assert!(
            affine_approx(*world_r, *world_i),
            "world transform mismatch for {part_r:?}"
        );
    }
}

#[test]
fn base_transform_premultiplies_every_world() {
    let (figure, log) = recording_figure();

    figure.render(Affine3A::IDENTITY, &mut DrawList::new());
    let at_identity: Vec<(PartId, Affine3A)> = log.borrow().clone();
    log.borrow_mut().clear();

    let base = Affine3A::from_rotation_x(-20f32.to_radians())
        * Affine3A::from_translation(Vec3::new(1.0, 2.0, 3.0));
    figure.render(base, &mut DrawList::new());
    let at_base: Vec<(PartId, Affine3A)> = log.borrow().clone();

    for ((part, world_id), (_, world_base)) in at_identity.iter().zip(&at_base) {
        assert!(
            affine_approx(base * *world_id, *world_base),
            "base must premultiply the world of {part:?}"
        );
    }
}

#[test]
fn world_transforms_match_hand_composed_chains() {
    let (figure, log) = recording_figure();
    figure.render(Affine3A::IDENTITY, &mut DrawList::new());

    let recorded = log.borrow();
    let world_of = |part: PartId| {
        recorded
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, world)| *world)
            .unwrap_or_else(|| panic!("{part:?} was never visited"))
    };
    let local = |part: PartId| figure.node(part).local;

    // Chains through the tree parents, independent of visit order.
    assert!(affine_approx(world_of(PartId::Torso), local(PartId::Torso)));
    assert!(affine_approx(
        world_of(PartId::Head),
        local(PartId::Torso) * local(PartId::Head)
    ));
    assert!(affine_approx(
        world_of(PartId::LeftLowerArm),
        local(PartId::Torso) * local(PartId::LeftUpperArm) * local(PartId::LeftLowerArm)
    ));
    assert!(affine_approx(
        world_of(PartId::RightLowerLeg),
        local(PartId::Torso) * local(PartId::RightUpperLeg) * local(PartId::RightLowerLeg)
    ));
}
