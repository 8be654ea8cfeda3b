#[cfg(test)]
mod tests {
    use crate::enums::*;
    use crate::errors::SceneError;
    use crate::events::SimEvent;
    use crate::types::{BodyId, TickClock, Vec2};

    /// Verify the public enums round-trip through serde_json.
    #[test]
    fn test_role_serde() {
        let variants = vec![
            Role::Fighter,
            Role::Ship,
            Role::Tower,
            Role::Planet,
            Role::Wall,
            Role::Meteor,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_behavior_kind_serde() {
        let variants = vec![
            BehaviorKind::Pursue,
            BehaviorKind::FleeAndCenter,
            BehaviorKind::Wander,
            BehaviorKind::Spin,
            BehaviorKind::Sentry,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BehaviorKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_tower_phase_serde() {
        let variants = vec![TowerPhase::Idle, TowerPhase::Firing, TowerPhase::Charging];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TowerPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_shape_serde() {
        let variants = vec![
            Shape::Circle { radius: 50.0 },
            Shape::Rectangle {
                width: 10.0,
                height: 20.0,
            },
        ];
        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: Shape = serde_json::from_str(&json).unwrap();
            assert_eq!(*v, back);
        }
    }

    /// Verify SimEvent round-trips through serde (tagged union).
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::ShipLockedFighter {
                ship: BodyId(1),
                fighter: BodyId(2),
            },
            SimEvent::FighterDestroyed {
                fighter: BodyId(2),
                tower: BodyId(3),
            },
            SimEvent::TowerPhaseChanged {
                tower: BodyId(3),
                phase: TowerPhase::Firing,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Tower phase boolean views are mutually exclusive.
    #[test]
    fn test_tower_phase_views() {
        assert!(!TowerPhase::Idle.is_firing());
        assert!(!TowerPhase::Idle.is_charging());
        assert!(TowerPhase::Firing.is_firing());
        assert!(!TowerPhase::Firing.is_charging());
        assert!(!TowerPhase::Charging.is_firing());
        assert!(TowerPhase::Charging.is_charging());
    }

    // ---- Geometry ----

    #[test]
    fn test_vec2_length_and_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((b.length() - 5.0).abs() < 1e-12);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert!(((b - a).length_squared() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(10.0, 0.0).normalized_or_zero();
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
    }

    #[test]
    fn test_vec2_normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized_or_zero(), Vec2::ZERO);
    }

    #[test]
    fn test_shape_area_and_bounding_radius() {
        let circle = Shape::Circle { radius: 2.0 };
        assert!((circle.area() - std::f64::consts::PI * 4.0).abs() < 1e-12);
        assert!((circle.bounding_radius() - 2.0).abs() < 1e-12);

        let rect = Shape::Rectangle {
            width: 6.0,
            height: 8.0,
        };
        assert!((rect.area() - 48.0).abs() < 1e-12);
        assert!((rect.bounding_radius() - 5.0).abs() < 1e-12);
    }

    // ---- Clock ----

    #[test]
    fn test_tick_clock_accumulates() {
        let mut clock = TickClock::default();
        assert_eq!(clock.tick, 0);

        clock.begin_tick(1.0 / 60.0);
        clock.begin_tick(1.0 / 60.0);
        assert_eq!(clock.tick, 2);
        assert!((clock.dt_secs - 1.0 / 60.0).abs() < 1e-12);
        assert!((clock.elapsed_secs - 2.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_tick_clock_clamps_negative_delta() {
        let mut clock = TickClock::default();
        clock.begin_tick(-0.5);
        assert_eq!(clock.dt_secs, 0.0);
        assert_eq!(clock.elapsed_secs, 0.0);
        assert_eq!(clock.tick, 1);
    }

    // ---- Errors ----

    #[test]
    fn test_scene_error_messages() {
        let err = SceneError::TowerBaseNotCircular { planet: BodyId(7) };
        assert!(err.to_string().contains("#7"));
        let err = SceneError::DuplicateBody(BodyId(3));
        assert!(err.to_string().contains("already registered"));
    }
}
