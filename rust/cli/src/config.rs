use serde::{Deserialize, Serialize};
use std::fs;
use yacht_engine::rules::{FixedPoints, GameRules};

pub const CONFIG_ENV: &str = "YACHT_CONFIG";
pub const SEED_ENV: &str = "YACHT_SEED";
pub const DICE_ENV: &str = "YACHT_DICE";
pub const FACES_ENV: &str = "YACHT_FACES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub dice: usize,
    pub faces: u32,
    pub seed: Option<u64>,
    pub points: FixedPoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub dice: ValueSource,
    pub faces: ValueSource,
    pub seed: ValueSource,
    pub points: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            dice: ValueSource::Default,
            faces: ValueSource::Default,
            seed: ValueSource::Default,
            points: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let rules = GameRules::default();
        Self {
            dice: rules.dice,
            faces: rules.faces,
            seed: None,
            points: rules.points,
        }
    }
}

impl Config {
    pub fn rules(&self) -> GameRules {
        GameRules {
            dice: self.dice,
            faces: self.faces,
            points: self.points,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Layers defaults, the TOML file named by `YACHT_CONFIG`, then
/// `YACHT_SEED` / `YACHT_DICE` / `YACHT_FACES`. Empty variables are ignored.
pub fn resolve<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.dice {
            cfg.dice = v;
            sources.dice = ValueSource::File;
        }
        if let Some(v) = f.faces {
            cfg.faces = v;
            sources.faces = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.points {
            cfg.points = v;
            sources.points = ValueSource::File;
        }
    }

    if let Some(seed) = lookup(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(dice) = lookup(DICE_ENV)
        && !dice.is_empty()
    {
        cfg.dice = dice
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid dice".into()))?;
        sources.dice = ValueSource::Env;
    }
    if let Some(faces) = lookup(FACES_ENV)
        && !faces.is_empty()
    {
        cfg.faces = faces
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid faces".into()))?;
        sources.faces = ValueSource::Env;
    }

    cfg.rules()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    dice: Option<usize>,
    #[serde(default)]
    faces: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    points: Option<FixedPoints>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let r = resolve(env(&[])).unwrap();
        assert_eq!(r.config, Config::default());
        assert_eq!(r.config.rules(), GameRules::default());
        assert_eq!(r.sources.dice, ValueSource::Default);
        assert_eq!(r.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "dice = 6\nfaces = 6\nseed = 11\n\n[points]\nfull_house = 35\n"
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let r = resolve(env(&[(CONFIG_ENV, path.as_str()), (SEED_ENV, "99")])).unwrap();
        assert_eq!(r.config.dice, 6);
        assert_eq!(r.config.faces, 6);
        assert_eq!(r.config.seed, Some(99));
        assert_eq!(r.config.points.full_house, 35);
        assert_eq!(r.config.points.all_same, 50);
        assert_eq!(r.sources.dice, ValueSource::File);
        assert_eq!(r.sources.points, ValueSource::File);
        assert_eq!(r.sources.seed, ValueSource::Env);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            resolve(env(&[(SEED_ENV, "abc")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve(env(&[(DICE_ENV, "0")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve(env(&[(FACES_ENV, "-1")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn empty_values_are_ignored() {
        let r = resolve(env(&[(CONFIG_ENV, ""), (SEED_ENV, "")])).unwrap();
        assert_eq!(r.config.seed, None);
        assert_eq!(r.sources.seed, ValueSource::Default);
    }

    #[test]
    fn missing_or_broken_file_is_an_error() {
        assert!(matches!(
            resolve(env(&[(CONFIG_ENV, "/nonexistent/yacht.toml")])),
            Err(ConfigError::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dice = \"five\"").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert!(matches!(
            resolve(env(&[(CONFIG_ENV, path.as_str())])),
            Err(ConfigError::Parse(_))
        ));
    }
}
