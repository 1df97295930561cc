use quicksilver::geom::Vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameRules;
use crate::game::model::{Coin, Fighter, Monster, Wall};

/// Entities of a freshly laid out level.
pub struct Level {
    pub fighter: Fighter,
    pub coins: Vec<Coin>,
    pub monsters: Vec<Monster>,
    pub walls: Vec<Wall>,
    pub camera_x: f32,
}

impl Level {
    pub fn new(rules: &GameRules, seed: &str) -> Level {
        let mut rng: StdRng = SeedableRng::from_seed(seed_bytes(seed));
        let fighter = Fighter::new(
            Vector::new(rules.fighter_start_x, rules.ground_y()),
            rules.launch_dy,
            rules.fighter_radius,
        );
        Level {
            fighter,
            coins: place_coins(rules),
            monsters: place_monsters(rules, &mut rng),
            walls: vec![Wall { pos_y: -20f32 }, Wall { pos_y: rules.screen_height / 2f32 }],
            camera_x: rules.screen_width / 2f32,
        }
    }
}

fn seed_bytes(seed: &str) -> [u8; 32] {
    let mut seed_array = [0u8; 32];
    seed.as_bytes().iter()
        .take(32)
        .enumerate()
        .for_each(|(index, byte)| {
            seed_array[index] = *byte;
        });
    seed_array
}

fn place_coins(rules: &GameRules) -> Vec<Coin> {
    let width = rules.screen_width;
    let coin = |x: f32, y: f32, velocity: Vector| Coin {
        pos: Vector::new(x, y),
        velocity,
        radius: rules.coin_radius,
        removed: false,
    };
    let mut coins = Vec::new();

    // stacks of three
    for i in 1..=3 {
        for j in 3..=5 {
            coins.push(coin(width * i as f32, j as f32 * 50f32, Vector::ZERO));
        }
    }

    // stacks of two, the last one without the shift
    for i in 1..=4 {
        let x = if i < 4 { width * i as f32 + 400f32 } else { width * i as f32 };
        for j in 3..=4 {
            coins.push(coin(x, j as f32 * 55f32, Vector::ZERO));
        }
    }

    // bouncing between the walls
    for i in 1..=3 {
        let x = if i < 3 { width * i as f32 + 750f32 } else { width * i as f32 + 720f32 };
        coins.push(coin(x, i as f32 * 25f32, Vector::new(0f32, -rules.coin_speed)));
    }
    coins
}

fn place_monsters(rules: &GameRules, rng: &mut impl Rng) -> Vec<Monster> {
    (1..=3)
        .map(|i| {
            let spread = rng.gen_range(rules.monster_spread_min, rules.monster_spread_max);
            Monster {
                pos: Vector::new(rules.screen_width * i as f32 * spread, rules.ground_y() + 45f32),
                velocity: Vector::new(rules.monster_dx, 0f32),
                radius: rules.monster_radius,
                removed: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lays_out_twenty_coins() {
        let level = Level::new(&GameRules::default(), "test");
        assert_eq!(level.coins.len(), 20);
        assert_eq!(level.coins.iter().filter(|coin| coin.velocity.y != 0f32).count(), 3);
        assert_eq!(level.coins[0].pos, Vector::new(1024f32, 150f32));
        assert_eq!(level.coins[15].pos, Vector::new(4096f32, 165f32));
        assert_eq!(level.coins[19].pos, Vector::new(3792f32, 75f32));
    }

    #[test]
    fn monsters_spread_within_range() {
        let rules = GameRules::default();
        let level = Level::new(&rules, "test");
        assert_eq!(level.monsters.len(), 3);
        for (index, monster) in level.monsters.iter().enumerate() {
            let base = rules.screen_width * (index + 1) as f32;
            assert!(monster.pos.x >= base * 3f32 && monster.pos.x < base * 3.5f32);
            assert_eq!(monster.pos.y, rules.ground_y() + 45f32);
            assert_eq!(monster.velocity, Vector::new(-5f32, 0f32));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let rules = GameRules::default();
        let first = Level::new(&rules, "seed");
        let second = Level::new(&rules, "seed");
        assert_eq!(first.monsters, second.monsters);
    }

    #[test]
    fn fighter_starts_on_the_ground() {
        let rules = GameRules::default();
        let level = Level::new(&rules, "seed");
        assert_eq!(level.fighter.pos, Vector::new(80f32, rules.ground_y()));
        assert!(!level.fighter.is_jumping);
        assert_eq!(level.fighter.dy, rules.launch_dy);
        assert_eq!(level.camera_x, 512f32);
        assert_eq!(level.walls, vec![Wall { pos_y: -20f32 }, Wall { pos_y: 334f32 }]);
    }
}
