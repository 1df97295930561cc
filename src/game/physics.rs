use quicksilver::geom::{Circle, Shape, Vector};

use crate::game::model::{Coin, Wall};

pub fn overlaps(a_pos: Vector, a_radius: f32, b_pos: Vector, b_radius: f32) -> bool {
    Circle::new(a_pos, a_radius).overlaps(&Circle::new(b_pos, b_radius))
}

/// Reflects a coin off whichever wall it has reached.
pub fn bounce(coin: &mut Coin, walls: &[Wall]) {
    let top = coin.pos.y - coin.radius;
    let bottom = coin.pos.y + coin.radius;
    for wall in walls {
        if coin.velocity.y < 0f32 && top <= wall.pos_y && coin.pos.y > wall.pos_y {
            coin.pos.y = wall.pos_y + coin.radius;
            coin.velocity.y = -coin.velocity.y;
        } else if coin.velocity.y > 0f32 && bottom >= wall.pos_y && coin.pos.y < wall.pos_y {
            coin.pos.y = wall.pos_y - coin.radius;
            coin.velocity.y = -coin.velocity.y;
        }
    }
}

/// Camera x for this frame: centred on the fighter while inside the follow
/// window, otherwise left where it was.
pub fn follow(camera_x: f32, fighter_x: f32, screen_width: f32, follow_screens: f32) -> f32 {
    if fighter_x > screen_width / 2f32 && fighter_x < screen_width * follow_screens {
        fighter_x
    } else {
        camera_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coin(y: f32, vy: f32) -> Coin {
        Coin { pos: Vector::new(100f32, y), velocity: Vector::new(0f32, vy), radius: 10f32, removed: false }
    }

    #[test]
    fn rising_coin_turns_at_upper_wall() {
        let walls = [Wall { pos_y: -20f32 }, Wall { pos_y: 334f32 }];
        let mut c = coin(-12f32, -2f32);
        bounce(&mut c, &walls);
        assert_eq!(c.pos.y, -10f32);
        assert_eq!(c.velocity.y, 2f32);
    }

    #[test]
    fn falling_coin_turns_at_lower_wall() {
        let walls = [Wall { pos_y: -20f32 }, Wall { pos_y: 334f32 }];
        let mut c = coin(326f32, 2f32);
        bounce(&mut c, &walls);
        assert_eq!(c.pos.y, 324f32);
        assert_eq!(c.velocity.y, -2f32);
    }

    #[test]
    fn coin_between_walls_keeps_course() {
        let walls = [Wall { pos_y: -20f32 }, Wall { pos_y: 334f32 }];
        let mut c = coin(100f32, -2f32);
        bounce(&mut c, &walls);
        assert_eq!(c, coin(100f32, -2f32));
    }

    #[rstest]
    #[case(80f32, 512f32)]
    #[case(600f32, 600f32)]
    #[case(4096f32, 512f32)]
    fn camera_follows_inside_window(#[case] fighter_x: f32, #[case] expected: f32) {
        assert_eq!(follow(512f32, fighter_x, 1024f32, 4f32), expected);
    }

    #[test]
    fn circles_touching_apart() {
        assert!(overlaps(Vector::new(0, 0), 5f32, Vector::new(8, 0), 5f32));
        assert!(!overlaps(Vector::new(0, 0), 5f32, Vector::new(11, 0), 5f32));
    }
}
