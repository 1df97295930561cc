use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

use crate::error::SpeechError;
use crate::game::input::{SpeechCommand, SpeechLabel};

/// One scored label out of a classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

pub type ClassifierResult = Result<Vec<Classification>, SpeechError>;

/// Something that keeps producing classification results until it runs out
/// or the receiving side goes away.
pub trait SpeechClassifier: Send + 'static {
    fn listen(self: Box<Self>, results: Sender<ClassifierResult>);
}

/// Long lived stream of voice commands fed by a classifier on its own thread.
pub struct SpeechSubscription {
    results: Receiver<ClassifierResult>,
    threshold: f32,
    connected: bool,
}

impl SpeechSubscription {
    pub fn start(classifier: Box<dyn SpeechClassifier>, threshold: f32) -> SpeechSubscription {
        let (sender, results) = channel();
        thread::spawn(move || classifier.listen(sender));
        SpeechSubscription { results, threshold, connected: true }
    }

    pub fn from_receiver(results: Receiver<ClassifierResult>, threshold: f32) -> SpeechSubscription {
        SpeechSubscription { results, threshold, connected: true }
    }

    /// Drains every result that arrived since the last call.
    pub fn poll(&mut self) -> Vec<SpeechCommand> {
        let mut commands = Vec::new();
        while self.connected {
            match self.results.try_recv() {
                Ok(result) => commands.extend(self.interpret(result)),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::info!("speech classifier stopped");
                    self.connected = false;
                }
            }
        }
        commands
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    fn interpret(&self, result: ClassifierResult) -> Option<SpeechCommand> {
        let results = match result {
            Ok(results) => results,
            Err(err) => {
                log::warn!("{}", err);
                return None;
            }
        };
        let top = results.into_iter()
            .filter(|candidate| candidate.confidence.is_finite())
            .max_by(|left, right| left.confidence.total_cmp(&right.confidence))?;
        if top.confidence < self.threshold {
            return None;
        }
        let label = SpeechLabel::parse(&top.label)?;
        Some(SpeechCommand { label, confidence: top.confidence })
    }
}

/// Treats each line of a reader as one classification: `label` or
/// `label confidence`.
pub struct LineClassifier<R> {
    reader: R,
}

impl<R: BufRead + Send + 'static> LineClassifier<R> {
    pub fn new(reader: R) -> LineClassifier<R> {
        LineClassifier { reader }
    }
}

impl<R: BufRead + Send + 'static> SpeechClassifier for LineClassifier<R> {
    fn listen(self: Box<Self>, results: Sender<ClassifierResult>) {
        let LineClassifier { reader } = *self;
        for line in reader.lines() {
            let result = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_line(&line),
                Err(err) => Err(SpeechError::Classifier(err.to_string())),
            };
            if results.send(result).is_err() {
                break;
            }
        }
    }
}

fn parse_line(line: &str) -> ClassifierResult {
    let mut parts = line.split_whitespace();
    let label = parts.next().ok_or_else(|| SpeechError::Malformed { line: line.to_string() })?;
    let confidence = match parts.next() {
        Some(value) => value.parse::<f32>().map_err(|_| SpeechError::Malformed { line: line.to_string() })?,
        None => 1f32,
    };
    if !(0f32..=1f32).contains(&confidence) || parts.next().is_some() {
        return Err(SpeechError::Malformed { line: line.to_string() });
    }
    Ok(vec![Classification { label: label.to_string(), confidence }])
}
