mod audio;
mod config;
mod error;
mod game;
mod gui;
mod logging;
mod speech;

use std::path::Path;
use std::process;

use clap::Parser;
use quicksilver::{
    geom::Vector,
    input::{ButtonState, MouseButton},
    lifecycle::{run, Event, Settings as WindowSettings, State, Window},
    Result,
};
use crate::audio::SoundBoard;
use crate::config::{Args, Settings};
use crate::game::controller::GameState;
use crate::game::input::{self, InputEvent};
use crate::gui::{GameWindow, InfoWindow};
use crate::speech::SpeechSubscription;

const SOUND_DIR: &str = "static/sounds";

struct CoinRun {
    game: GameState,
    audio: Box<dyn SoundBoard>,
    speech: Option<SpeechSubscription>,
    game_window: GameWindow,
    info_window: InfoWindow,
}

impl State for CoinRun {
    fn new() -> Result<Self> {
        let settings = config::settings();

        let mut game = GameState::new(settings.rules.clone(), &settings.seed);
        let mut audio = audio::sound_board(settings.mute, Path::new(SOUND_DIR));
        game.start(audio.as_mut());

        let speech = if settings.speech_stdin {
            listen_on_stdin(settings.rules.speech_threshold)
        } else {
            None
        };

        let game_window = GameWindow::new();
        let info_window = InfoWindow::new();

        Ok(Self { game, audio, speech, game_window, info_window })
    }

    fn update(&mut self, window: &mut Window) -> Result<()> {
        if let Some(speech) = self.speech.as_mut() {
            for command in speech.poll() {
                self.game.handle(InputEvent::Speech(command), self.audio.as_mut());
            }
        }

        let keys = input::key_edges(window.keyboard());
        self.game.tick(&keys, self.audio.as_mut());
        Ok(())
    }

    fn event(&mut self, event: &Event, _window: &mut Window) -> Result<()> {
        if let Event::MouseButton(MouseButton::Left, ButtonState::Pressed) = event {
            self.game.handle(InputEvent::TouchTap, self.audio.as_mut());
        }
        Ok(())
    }

    fn draw(&mut self, window: &mut Window) -> Result<()> {
        self.game_window.draw(window, &self.game)?;
        self.info_window.draw(window, &self.game)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_on_stdin(threshold: f32) -> Option<SpeechSubscription> {
    use std::io::{self, BufReader};
    use crate::speech::LineClassifier;

    log::info!("listening for voice commands on stdin");
    let classifier = LineClassifier::new(BufReader::new(io::stdin()));
    Some(SpeechSubscription::start(Box::new(classifier), threshold))
}

#[cfg(target_arch = "wasm32")]
fn listen_on_stdin(_threshold: f32) -> Option<SpeechSubscription> {
    log::warn!("voice commands from stdin are not available in the browser");
    None
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings = match Settings::from_args(&args) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{}", err);
            process::exit(1);
        }
    };
    let size = Vector::new(settings.rules.screen_width, settings.rules.screen_height);
    config::install(settings);

    let window_settings = WindowSettings {
        ..Default::default()
    };
    run::<CoinRun>("Coin Run", size, window_settings);
}
