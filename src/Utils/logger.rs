use crate::Kinetics::kinetics_error::KineticsError;
use crate::settings::KineticsSettings;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// installs a terminal logger; fails if a logger is already set
pub fn init_logger(level: LevelFilter) -> Result<(), KineticsError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)?;
    Ok(())
}

/// installs the logger at the level given in `settings`, Info when none is set
pub fn init_logger_from_settings(settings: &KineticsSettings) -> Result<(), KineticsError> {
    let level = settings.log_level()?.unwrap_or(LevelFilter::Info);
    init_logger(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // one logger per process, the first call may already have been made elsewhere
        let _ = init_logger(LevelFilter::Warn);
        let second = init_logger(LevelFilter::Warn);
        assert!(matches!(second, Err(KineticsError::LoggerError(_))));
    }

    #[test]
    fn test_invalid_level_in_settings() {
        let settings = KineticsSettings {
            log_level: Some("verbose".to_string()),
            ..KineticsSettings::default()
        };
        assert!(matches!(
            init_logger_from_settings(&settings),
            Err(KineticsError::InvalidLogLevel(_))
        ));
    }
}
