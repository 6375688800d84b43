//! Integration tests for relation placement and collision resolution

use glam::{IVec2, Vec3};
use scene_geometry::command::{CommandExecutor, CommandRecord};
use scene_geometry::core::GeometryConfig;
use scene_geometry::room::{CanvasBounds, GridSegment, RoomSpatialQuery, RoomTopologyExtractor};
use scene_geometry::spatial::{
    bounding_box, BoundingBox, CollisionFilter, CollisionResolver, Dimensions, PlacementTarget,
    SpatialPlacementResolver, SpatialRelation,
};
use scene_geometry::SceneObjectRef;

const EPS: f32 = 1e-5;

fn placed_box(target: &PlacementTarget, position: Vec3, scale: Option<Vec3>) -> BoundingBox {
    let dims = match scale {
        Some(s) => target.base_dimensions().scaled(s),
        None => target.world_dimensions(),
    };
    BoundingBox::from_center(position, dims)
}

#[test]
fn test_cube_sphere_on_top_scenario() {
    let reference = SceneObjectRef::new("ref", "cube", Vec3::ZERO);
    let scene = vec![reference.clone()];
    let mut resolver = SpatialPlacementResolver::with_seed(42);

    let result = resolver.resolve(
        &PlacementTarget::new("sphere"),
        &reference,
        Some(SpatialRelation::OnTopOf),
        &scene,
    );

    assert_eq!(result.position, Vec3::new(0.0, 2.0, 0.0));
    assert!(result.match_dimensions);
}

#[test]
fn test_beside_scenario() {
    let reference = SceneObjectRef::new("ref", "cube", Vec3::new(3.0, 0.0, 0.0));
    let mut resolver = SpatialPlacementResolver::with_seed(42);

    for object_type in ["chair", "table", "tree", "spaceship"] {
        let target = PlacementTarget::new(object_type);
        let half_width = target.world_dimensions().width / 2.0;
        let result = resolver.resolve(&target, &reference, Some(SpatialRelation::Beside), &[]);

        assert!((result.position.x - (4.0 + half_width)).abs() < EPS);
        assert_eq!(result.position.y, 0.0);
        assert_eq!(result.position.z, 0.0);

        let placed = placed_box(&target, result.position, result.scale);
        assert!((placed.min.x - bounding_box(&reference).max.x).abs() < EPS);
    }
}

#[test]
fn test_above_keeps_fixed_gap() {
    let reference = SceneObjectRef::new("ref", "table", Vec3::new(1.0, 0.4, 1.0));
    let mut resolver = SpatialPlacementResolver::with_seed(42);
    let target = PlacementTarget::new("lamp");

    let result = resolver.resolve(&target, &reference, Some(SpatialRelation::Above), &[]);
    let placed = placed_box(&target, result.position, result.scale);

    assert!((placed.min.y - (bounding_box(&reference).max.y + 0.2)).abs() < EPS);
}

#[test]
fn test_roof_on_house_basic_keeps_height() {
    let house = SceneObjectRef::new("house", "house-basic", Vec3::ZERO);
    let mut resolver = SpatialPlacementResolver::with_seed(42);

    for scale in [Vec3::ONE, Vec3::splat(3.0), Vec3::new(0.5, 7.0, 2.0)] {
        let result = resolver.resolve(
            &PlacementTarget::new("house-roof").with_scale(scale),
            &house,
            Some(SpatialRelation::OnTopOf),
            &[],
        );
        assert!(result.match_dimensions);
        assert_eq!(result.scale.map(|s| s.y), Some(1.0));
    }
}

#[test]
fn test_collision_identity_without_overlap() {
    let scene = vec![
        SceneObjectRef::new("a", "cube", Vec3::ZERO),
        SceneObjectRef::new("b", "tree", Vec3::new(10.0, 2.5, 0.0)),
        SceneObjectRef::new("ground", "ground", Vec3::new(0.0, -1.05, 0.0)),
    ];
    let resolver = CollisionResolver::new();
    let candidate = Vec3::new(-5.0, 0.0, 4.0);

    let position = resolver.resolve(
        candidate,
        Dimensions::new(2.0, 2.0, 2.0),
        &scene,
        CollisionFilter::new(),
    );

    assert_eq!(position, candidate);
}

#[test]
fn test_nested_cubes_separated() {
    let obstacle = SceneObjectRef::new("obstacle", "cube", Vec3::new(1.0, 1.0, 1.0));
    let scene = vec![obstacle.clone()];
    let resolver = CollisionResolver::new();
    let dims = Dimensions::new(2.0, 2.0, 2.0);

    let position = resolver.resolve(obstacle.position, dims, &scene, CollisionFilter::new());

    let moved = BoundingBox::from_center(position, dims);
    assert!(!moved.overlaps(&bounding_box(&obstacle)));
}

#[test]
fn test_create_inside_sketched_room() {
    let segments = vec![
        GridSegment::wall(IVec2::new(1, 1), IVec2::new(6, 1)).unwrap(),
        GridSegment::wall(IVec2::new(6, 1), IVec2::new(6, 5)).unwrap(),
        GridSegment::wall(IVec2::new(6, 5), IVec2::new(1, 5)).unwrap(),
        GridSegment::wall(IVec2::new(1, 5), IVec2::new(1, 1)).unwrap(),
    ];
    let rooms = RoomTopologyExtractor::new()
        .extract(&segments, 20.0, CanvasBounds::new(8, 8))
        .unwrap();
    let room = rooms.into_iter().next().unwrap();

    let config = GeometryConfig::default();
    let room_object = SceneObjectRef::new("room_1", "room", Vec3::new(0.0, 1.0, 0.0))
        .with_room(room.clone());
    let scene = vec![room_object.clone()];

    let mut executor = CommandExecutor::with_config(config.clone(), 11);
    let record = CommandRecord::create("chair", SpatialRelation::Inside, "room_1");
    let outcome = executor.execute(&record, &scene).unwrap();

    let query = RoomSpatialQuery::new(&room, room_object.position, &config);
    assert!(query.contains_world_point(outcome.position));
    // Chair stands on the floor
    let chair_half_height = 0.5;
    assert!((outcome.position.y - (query.floor_y() + chair_half_height)).abs() < EPS);
    assert!(!outcome.match_dimensions);
}

#[test]
fn test_outcome_serializes_for_scene_layer() {
    let scene = vec![SceneObjectRef::new("base", "cube", Vec3::ZERO)];
    let record = CommandRecord::create("sphere", SpatialRelation::OnTopOf, "base");
    let mut executor = CommandExecutor::with_config(GeometryConfig::default(), 1);

    let outcome = executor.execute(&record, &scene).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["contactType"], "direct");
    assert_eq!(json["matchDimensions"], true);
    assert_eq!(json["position"], serde_json::json!([0.0, 2.0, 0.0]));
}
