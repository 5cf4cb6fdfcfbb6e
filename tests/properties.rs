//! Property tests for the collision and movement invariants

use glam::Vec2;
use proptest::prelude::*;

use reinforced_breakout::consts::SIM_DT;
use reinforced_breakout::sim::{Aabb, Ball, Circle, Paddle, Shape, intersects};
use reinforced_breakout::{PaddleAction, SimConfig, World};

fn coord() -> impl Strategy<Value = f32> {
    -100.0f32..100.0
}

fn circle() -> impl Strategy<Value = Circle> {
    (coord(), coord(), 0.1f32..50.0).prop_map(|(x, y, r)| Circle::new(Vec2::new(x, y), r))
}

fn aabb() -> impl Strategy<Value = Aabb> {
    (coord(), coord(), coord(), coord())
        .prop_map(|(x0, y0, x1, y1)| Aabb::new(Vec2::new(x0, y0), Vec2::new(x1, y1)))
}

fn action() -> impl Strategy<Value = PaddleAction> {
    prop::sample::select(PaddleAction::ALL.to_vec())
}

proptest! {
    #[test]
    fn intersects_is_commutative(c in circle(), b in aabb()) {
        let c = Shape::from(c);
        let b = Shape::from(b);
        prop_assert_eq!(intersects(&c, &b), intersects(&b, &c));
    }

    #[test]
    fn circle_circle_is_commutative(a in circle(), b in circle()) {
        let a = Shape::from(a);
        let b = Shape::from(b);
        prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
    }

    #[test]
    fn circle_centered_in_box_always_hits(b in aabb(), r in 0.1f32..50.0) {
        let c = Circle::new(b.center(), r);
        prop_assert!(intersects(&c.into(), &b.into()));
    }

    #[test]
    fn bounce_conserves_speed(
        vx in -1000.0f32..1000.0,
        vy in -1000.0f32..1000.0,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let normal = Vec2::from_angle(angle);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(vx, vy), 8.0);
        let before = ball.speed();
        ball.bounce(normal);
        let after = ball.speed();
        prop_assert!((after - before).abs() <= 1e-3 * before.max(1.0));
    }

    #[test]
    fn paddle_stays_in_arena(deltas in prop::collection::vec(-1.0e4f32..1.0e4, 1..64)) {
        let arena_width = 800.0;
        let mut paddle = Paddle::new(Vec2::new(400.0, 592.0), Vec2::new(50.0, 16.0));
        for delta in deltas {
            paddle.move_by(delta, arena_width);
            let aabb = paddle.aabb();
            prop_assert!(aabb.min.x >= 0.0);
            prop_assert!(aabb.max.x <= arena_width);
        }
    }

    #[test]
    fn bricks_never_come_back(actions in prop::collection::vec(action(), 1..400)) {
        let mut world = World::new(SimConfig::default()).unwrap();
        let mut alive = world.bricks_alive();
        for action in actions {
            let snapshot = world.step(SIM_DT, action).unwrap();
            let now = snapshot.bricks_alive();
            prop_assert!(now <= alive && alive - now <= 1);
            let paddle = snapshot.paddle.aabb;
            prop_assert!(paddle.min.x >= 0.0 && paddle.max.x <= 800.0);
            alive = now;
        }
    }
}
