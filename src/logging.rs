use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter used when `RUST_LOG` is unset: dependencies only report warnings,
/// the game itself logs at info, or debug with `verbose`.
fn default_filter(verbose: bool) -> String {
    let game_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    format!("{},{}={}", LevelFilter::Warn, env!("CARGO_CRATE_NAME"), game_level)
}

pub fn init(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)));
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependencies_stay_at_warn() {
        assert_eq!(default_filter(false), "WARN,coinrun=INFO");
        assert_eq!(default_filter(true), "WARN,coinrun=DEBUG");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
