use super::*;
use std::collections::HashSet;

#[test]
fn test_equality_uses_position_and_index() {
    let a = Vertex::new(Vec2::new(1.0, 2.0), 0);
    let b = Vertex::new(Vec2::new(1.0, 2.0), 0);
    let c = Vertex::new(Vec2::new(1.0, 2.0), 5);
    let d = Vertex::new(Vec2::new(1.0, 3.0), 0);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn test_coincident_vertices_are_distinct_in_sets() {
    let mut set = HashSet::new();
    set.insert(Vertex::new(Vec2::new(210.0, 150.0), 2));
    set.insert(Vertex::new(Vec2::new(210.0, 150.0), 8));
    set.insert(Vertex::new(Vec2::new(210.0, 150.0), 2));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_coincides_with_ignores_index() {
    let a = Vertex::new(Vec2::new(4.0, 4.0), 1);
    let b = Vertex::new(Vec2::new(4.0, 4.0), 9);
    assert!(a.coincides_with(&b));
    assert!(!a.coincides_with(&Vertex::new(Vec2::new(4.0, 4.5), 1)));
}

#[test]
fn test_display() {
    let v = Vertex::new(Vec2::new(1.5, -2.0), 3);
    assert_eq!(v.to_string(), "(1.5, -2) #3");
}
