use std::collections::HashMap;

use quicksilver::{
    combinators::join_all,
    graphics::{Animation, Image},
    Future,
};

use crate::game::model::Pose;

const FRAME_DELAY: u32 = 3;

/// Still images for the backdrop, props and ground.
pub struct Scenery {
    pub background: Image,
    pub bush: Image,
    pub cactus: Image,
    pub skeleton: Image,
    pub crate_box: Image,
    pub mushroom: Image,
    pub ground_left: Image,
    pub ground_middle: Image,
}

impl Scenery {
    pub fn load() -> impl Future<Item = Scenery, Error = quicksilver::Error> {
        Image::load("images/background.png")
            .join5(
                Image::load("images/bush.png"),
                Image::load("images/cactus.png"),
                Image::load("images/skeleton.png"),
                Image::load("images/crate.png"),
            )
            .join(
                Image::load("images/mushroom.png").join3(
                    Image::load("images/ground-left.png"),
                    Image::load("images/ground-middle.png"),
                ),
            )
            .map(|((background, bush, cactus, skeleton, crate_box), (mushroom, ground_left, ground_middle))| {
                Scenery { background, bush, cactus, skeleton, crate_box, mushroom, ground_left, ground_middle }
            })
    }
}

/// Frame sequences for everything that moves.
pub struct Animations {
    pub fighter: HashMap<Pose, Animation>,
    pub coin: Animation,
    pub monster: Animation,
}

impl Animations {
    pub fn load() -> impl Future<Item = Animations, Error = quicksilver::Error> {
        load_animation("images/fighter/Idle", 10)
            .join5(
                load_animation("images/fighter/Walk", 10),
                load_animation("images/fighter/Jump", 10),
                load_animation("images/coin/coin", 16),
                load_animation("images/monster/monster", 19),
            )
            .map(|(idle, walk, jump, coin, monster)| {
                let mut fighter = HashMap::new();
                fighter.insert(Pose::Idling, idle);
                fighter.insert(Pose::Walking, walk);
                fighter.insert(Pose::Jumping, jump);
                Animations { fighter, coin, monster }
            })
    }

    pub fn tick(&mut self, pose: Pose) {
        if let Some(animation) = self.fighter.get_mut(&pose) {
            animation.tick();
        }
        self.coin.tick();
        self.monster.tick();
    }
}

/// Loads `<prefix>-1.png` up to `<prefix>-<frames>.png` as one animation.
fn load_animation(prefix: &str, frames: usize) -> impl Future<Item = Animation, Error = quicksilver::Error> {
    let frames: Vec<_> = (1..=frames)
        .map(|frame| Image::load(frame_path(prefix, frame)))
        .collect();
    join_all(frames)
        .map(|images| Animation::new(images, FRAME_DELAY))
}

fn frame_path(prefix: &str, frame: usize) -> String {
    format!("{}-{}.png", prefix, frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_paths_count_from_one() {
        assert_eq!(frame_path("images/fighter/Walk", 1), "images/fighter/Walk-1.png");
        assert_eq!(frame_path("images/monster/monster", 19), "images/monster/monster-19.png");
    }
}
