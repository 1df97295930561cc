use quicksilver::{
    geom::{Rectangle, Shape, Vector},
    graphics::{Background::Img, Color, Image, View},
    lifecycle::{Asset, Window},
    Result,
};

use crate::config::GameRules;
use crate::game::controller::GameState;
use crate::gui::assets::{Animations, Scenery};

const FIGHTER_SCALE: f32 = 0.25;
const COIN_SCALE: f32 = 0.4;
const MONSTER_SCALE: f32 = 0.35;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropKind {
    Skeleton,
    Bush,
    Crate,
    Mushroom,
    Cactus,
}

/// A decoration placed in world space by its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prop {
    pub kind: PropKind,
    pub pos: Vector,
    pub size: Option<Vector>,
}

/// Decorations along the desert floor.
pub fn props(rules: &GameRules) -> Vec<Prop> {
    let width = rules.screen_width;
    let ground = rules.ground_y();
    let prop = |kind, x: f32, y: f32, size: Option<(f32, f32)>| Prop {
        kind,
        pos: Vector::new(x, y),
        size: size.map(|(w, h)| Vector::new(w, h)),
    };
    let mut props = Vec::new();
    for i in 1..10 {
        let i = i as f32;
        let cubed = width * 0.4f32 * i * i * i;
        props.push(prop(PropKind::Skeleton, cubed, ground + 45f32, None));
        props.push(prop(PropKind::Bush, width * 0.8f32 * i + 100f32, ground, None));
        props.push(prop(PropKind::Crate, cubed + 120f32, ground + 15f32, Some((60f32, 60f32))));
        props.push(prop(PropKind::Mushroom, width * 1.6f32 + 10f32, ground + 55f32, Some((20f32, 20f32))));
        props.push(prop(PropKind::Cactus, width * 1.6f32 * i, ground - 35f32, None));
        props.push(prop(PropKind::Mushroom, width * 1.6f32 + 75f32, ground + 55f32, Some((20f32, 20f32))));
    }
    props
}

/// Left edges of the middle ground tiles, enough for twenty screens.
pub fn ground_tiles(rules: &GameRules, tile_width: f32) -> Vec<f32> {
    if tile_width <= 0f32 {
        return Vec::new();
    }
    let count = (20f32 * rules.screen_width / tile_width).ceil() as usize;
    (1..count).map(|i| tile_width * i as f32 + 10f32).collect()
}

pub fn camera_area(camera_x: f32, rules: &GameRules) -> Rectangle {
    Rectangle::new(
        (camera_x - rules.screen_width / 2f32, 0f32),
        (rules.screen_width, rules.screen_height),
    )
}

/// Draws the level and every entity still in play.
pub struct GameWindow {
    scenery: Asset<Scenery>,
    animations: Asset<Animations>,
}

impl GameWindow {
    pub fn new() -> GameWindow {
        GameWindow {
            scenery: Asset::new(Scenery::load()),
            animations: Asset::new(Animations::load()),
        }
    }

    pub fn draw(&mut self, window: &mut Window, game: &GameState) -> Result<()> {
        let rules = game.rules();
        let area = camera_area(game.camera_x(), rules);
        window.set_view(View::new(area));
        window.clear(Color::BLACK)?;

        self.scenery.execute(|scenery| {
            window.draw(&area, Img(&scenery.background));
            for prop in props(rules) {
                let image = match prop.kind {
                    PropKind::Skeleton => &scenery.skeleton,
                    PropKind::Bush => &scenery.bush,
                    PropKind::Crate => &scenery.crate_box,
                    PropKind::Mushroom => &scenery.mushroom,
                    PropKind::Cactus => &scenery.cactus,
                };
                let size = prop.size.unwrap_or_else(|| image.area().size());
                window.draw(&Rectangle::new(prop.pos, size), Img(image));
            }

            let ground_top = rules.ground_y() + 75f32;
            draw_at(window, &scenery.ground_left, Vector::new(10f32, ground_top));
            for x in ground_tiles(rules, scenery.ground_middle.area().width()) {
                draw_at(window, &scenery.ground_middle, Vector::new(x, ground_top));
            }
            Ok(())
        })?;

        self.animations.execute(|animations| {
            // removed entities are no longer drawn
            if game.has_ended() {
                return Ok(());
            }
            let fighter = game.fighter();
            animations.tick(fighter.pose);
            for coin in game.coins() {
                draw_centered(window, animations.coin.current_frame(), coin.pos, COIN_SCALE);
            }
            for monster in game.monsters() {
                draw_centered(window, animations.monster.current_frame(), monster.pos, MONSTER_SCALE);
            }
            if let Some(animation) = animations.fighter.get(&fighter.pose) {
                draw_centered(window, animation.current_frame(), fighter.pos, FIGHTER_SCALE);
            }
            Ok(())
        })
    }
}

fn draw_at(window: &mut Window, image: &Image, pos: Vector) {
    window.draw(&image.area().translate(pos), Img(image));
}

fn draw_centered(window: &mut Window, image: &Image, center: Vector, scale: f32) {
    let area = Rectangle::new_sized(image.area().size() * scale).with_center(center);
    window.draw(&area, Img(image));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_follow_the_floor() {
        let rules = GameRules::default();
        let props = props(&rules);
        assert_eq!(props.len(), 54);
        assert_eq!(props[0], Prop { kind: PropKind::Skeleton, pos: Vector::new(409.6f32, 583f32), size: None });
        let crate_box = props[2];
        assert_eq!(crate_box.kind, PropKind::Crate);
        assert_eq!(crate_box.size, Some(Vector::new(60f32, 60f32)));
        assert_eq!(props.iter().filter(|prop| prop.kind == PropKind::Mushroom).count(), 18);
    }

    #[test]
    fn ground_covers_twenty_screens() {
        let rules = GameRules::default();
        let tiles = ground_tiles(&rules, 128f32);
        assert_eq!(tiles.len(), 159);
        assert_eq!(tiles[0], 138f32);
        assert!(ground_tiles(&rules, 0f32).is_empty());
    }

    #[test]
    fn camera_area_is_centred() {
        let rules = GameRules::default();
        let area = camera_area(600f32, &rules);
        assert_eq!(area.pos, Vector::new(88f32, 0f32));
        assert_eq!(area.size, Vector::new(1024f32, 668f32));
    }
}
