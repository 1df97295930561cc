use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::error::AudioError;
use crate::game::model::Cue;

/// Sound playback the game relies on. Every operation is idempotent.
pub trait SoundBoard {
    fn play(&mut self, cue: Cue);
    fn play_looped(&mut self, cue: Cue);
    fn stop(&mut self, cue: Cue);
}

/// Used when there is no output device or the player asked for quiet.
pub struct Silence;

impl SoundBoard for Silence {
    fn play(&mut self, _cue: Cue) {}
    fn play_looped(&mut self, _cue: Cue) {}
    fn stop(&mut self, _cue: Cue) {}
}

/// rodio backed sound board with one sink per cue.
pub struct Jukebox {
    stream: OutputStream,
    clips: HashMap<Cue, Arc<[u8]>>,
    sinks: HashMap<Cue, Sink>,
    looping: HashSet<Cue>,
}

impl Jukebox {
    pub fn open(sound_dir: &Path) -> Result<Jukebox, AudioError> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        let mut clips = HashMap::new();
        for cue in Cue::ALL.iter() {
            match load_clip(&clip_path(sound_dir, *cue)) {
                Ok(bytes) => {
                    clips.insert(*cue, bytes);
                }
                Err(err) => log::warn!("{:?} stays silent: {}", cue, err),
            }
        }
        Ok(Jukebox { stream, clips, sinks: HashMap::new(), looping: HashSet::new() })
    }

    fn start(&mut self, cue: Cue, looped: bool) {
        self.stop(cue);
        let bytes = match self.clips.get(&cue) {
            Some(bytes) => bytes.clone(),
            None => return,
        };
        let source = match Decoder::new(Cursor::new(bytes)) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("failed to decode {:?}: {}", cue, err);
                return;
            }
        };
        let sink = Sink::connect_new(self.stream.mixer());
        if looped {
            sink.append(source.repeat_infinite());
            self.looping.insert(cue);
        } else {
            sink.append(source);
        }
        self.sinks.insert(cue, sink);
    }
}

impl SoundBoard for Jukebox {
    fn play(&mut self, cue: Cue) {
        self.start(cue, false);
    }

    fn play_looped(&mut self, cue: Cue) {
        let playing = self.sinks.get(&cue).map(|sink| !sink.empty()).unwrap_or(false);
        if needs_restart(playing, self.looping.contains(&cue)) {
            self.start(cue, true);
        }
    }

    fn stop(&mut self, cue: Cue) {
        if let Some(sink) = self.sinks.remove(&cue) {
            sink.stop();
        }
        self.looping.remove(&cue);
    }
}

/// A looped cue only restarts when it is not already looping.
fn needs_restart(playing: bool, looping: bool) -> bool {
    !(playing && looping)
}

fn clip_path(sound_dir: &Path, cue: Cue) -> PathBuf {
    let stem = cue.file_stem();
    sound_dir.join(stem).join(format!("{}.ogg", stem))
}

fn load_clip(path: &Path) -> Result<Arc<[u8]>, AudioError> {
    let bytes: Arc<[u8]> = fs::read(path)
        .map_err(|source| AudioError::Read { path: path.to_path_buf(), source })?
        .into();
    Decoder::new(Cursor::new(bytes.clone()))
        .map_err(|source| AudioError::Decode { path: path.to_path_buf(), source })?;
    Ok(bytes)
}

/// Picks the real backend unless muted, falling back to silence.
pub fn sound_board(mute: bool, sound_dir: &Path) -> Box<dyn SoundBoard> {
    if mute {
        log::info!("audio muted");
        return Box::new(Silence);
    }
    match Jukebox::open(sound_dir) {
        Ok(jukebox) => Box::new(jukebox),
        Err(err) => {
            log::warn!("running without sound: {}", err);
            Box::new(Silence)
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashSet;

    use super::SoundBoard;
    use crate::game::model::Cue;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Call {
        Play(Cue),
        Loop(Cue),
        Stop(Cue),
    }

    /// Keeps every call and which cues would currently be looping.
    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
        pub looping: HashSet<Cue>,
    }

    impl Recorder {
        pub fn clear(&mut self) {
            self.calls.clear();
        }

        pub fn saw(&self, call: Call) -> bool {
            self.calls.contains(&call)
        }
    }

    impl SoundBoard for Recorder {
        fn play(&mut self, cue: Cue) {
            self.calls.push(Call::Play(cue));
        }

        fn play_looped(&mut self, cue: Cue) {
            self.calls.push(Call::Loop(cue));
            self.looping.insert(cue);
        }

        fn stop(&mut self, cue: Cue) {
            self.calls.push(Call::Stop(cue));
            self.looping.remove(&cue);
        }
    }
}
