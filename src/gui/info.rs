use quicksilver::{
    geom::{Rectangle, Shape, Vector},
    graphics::{Background::Img, Color, Font, FontStyle, Image},
    lifecycle::{Asset, Window},
    Result,
};

use crate::game::controller::GameState;

const SCORE_SIZE: f32 = 22f32;
const TITLE_SIZE: f32 = 50f32;
const SCORE_LINE_SIZE: f32 = 30f32;

/// Left edge of the score display relative to the camera.
pub fn hud_left(camera_x: f32, screen_width: f32) -> f32 {
    camera_x - screen_width / 2.1f32
}

/// Score counter and the game over banner. Rendered text is cached until the
/// value it shows changes.
pub struct InfoWindow {
    font: Asset<Font>,
    coin_icon: Asset<Image>,
    score: Option<(u32, Image)>,
    banner: Option<(Image, Image)>,
}

impl InfoWindow {
    pub fn new() -> InfoWindow {
        InfoWindow {
            font: Asset::new(Font::load("fonts/font.ttf")),
            coin_icon: Asset::new(Image::load("images/coin/coin-1.png")),
            score: None,
            banner: None,
        }
    }

    pub fn draw(&mut self, window: &mut Window, game: &GameState) -> Result<()> {
        let rules = game.rules();
        let camera_x = game.camera_x();
        let left = hud_left(camera_x, rules.screen_width);

        self.coin_icon.execute(|icon| {
            window.draw(&Rectangle::new((left, 20f32), (35f32, 35f32)), Img(icon));
            Ok(())
        })?;

        let score = &mut self.score;
        let banner = &mut self.banner;
        self.font.execute(|font| {
            let points = game.score() * 1000;
            let stale = score.as_ref().map(|(shown, _)| *shown != points).unwrap_or(true);
            if stale {
                let image = font.render(&points.to_string(), &FontStyle::new(SCORE_SIZE, Color::RED))?;
                *score = Some((points, image));
            }
            if let Some((_, image)) = score.as_ref() {
                let pos = Vector::new(left + 45f32, 45f32 - SCORE_SIZE);
                window.draw(&image.area().translate(pos), Img(image));
            }

            let game_over = match game.game_over() {
                Some(game_over) => game_over,
                None => return Ok(()),
            };
            if banner.is_none() {
                let title = font.render(game_over.title(), &FontStyle::new(TITLE_SIZE, Color::RED))?;
                let line = font.render(&game_over.score_line(), &FontStyle::new(SCORE_LINE_SIZE, Color::RED))?;
                *banner = Some((title, line));
            }
            if let Some((title, line)) = banner.as_ref() {
                let middle = rules.screen_height / 2f32;
                window.draw(&title.area().with_center((camera_x, middle)), Img(title));
                window.draw(&line.area().with_center((camera_x, middle + 50f32)), Img(line));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_sits_near_the_left_edge() {
        let left = hud_left(512f32, 1024f32);
        assert!(left > 0f32 && left < 30f32);
    }
}
