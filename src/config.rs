use crate::consts;
use crate::geometry::Board;
use ratatui::style::Color;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Settings for the playfield & game speed
    pub(crate) game: GameConfig,

    /// Number of terminal columns used to draw each cell
    pub(crate) tile_width: u16,

    /// File to write log messages to
    pub(crate) log_file: Option<PathBuf>,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            game: GameConfig::default(),
            tile_width: consts::TILE_WIDTH,
            log_file: None,
        }
    }
}

/// Settings that shape the game itself
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameConfig {
    pub(crate) board: Board,
    pub(crate) tick_rate: NonZeroU32,
    pub(crate) colors: Colors,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            board: Board::new(consts::BOARD_WIDTH, consts::BOARD_HEIGHT)
                .expect("default board dimensions should be nonzero"),
            tick_rate: consts::TICK_RATE,
            colors: Colors::default(),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawConfig {
    log_file: Option<PathBuf>,
    board: RawBoardConfig,
    colors: RawColors,
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawBoardConfig {
    width: u16,
    height: u16,
    tile_width: u16,
    tick_rate: u32,
}

impl Default for RawBoardConfig {
    fn default() -> RawBoardConfig {
        RawBoardConfig {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
            tile_width: consts::TILE_WIDTH,
            tick_rate: consts::TICK_RATE.get(),
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfig;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfig> {
        let RawBoardConfig {
            width,
            height,
            tile_width,
            tick_rate,
        } = value.board;
        let board = Board::new(width, height).ok_or(InvalidConfig::EmptyBoard)?;
        if board.cell_count() < 2 {
            return Err(InvalidConfig::EmptyBoard);
        }
        if tile_width == 0 {
            return Err(InvalidConfig::TileWidth);
        }
        let tick_rate = NonZeroU32::new(tick_rate).ok_or(InvalidConfig::TickRate)?;
        Ok(Config {
            game: GameConfig {
                board,
                tick_rate,
                colors: Colors::try_from(value.colors)?,
            },
            tile_width,
            log_file: value.log_file,
        })
    }
}

/// The colors used to draw the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Colors {
    pub(crate) background: Color,
    pub(crate) border: Color,
    pub(crate) food: Color,
    pub(crate) snake: Color,
}

impl Default for Colors {
    fn default() -> Colors {
        Colors {
            background: consts::BACKGROUND_COLOR,
            border: consts::BORDER_COLOR,
            food: consts::FOOD_COLOR,
            snake: consts::SNAKE_COLOR,
        }
    }
}

/// Colors as written in the configuration file, e.g., `"black"` or
/// `"#5DD8E4"`.  Unset colors keep their defaults.
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawColors {
    background: Option<String>,
    border: Option<String>,
    food: Option<String>,
    snake: Option<String>,
}

impl TryFrom<RawColors> for Colors {
    type Error = InvalidConfig;

    fn try_from(value: RawColors) -> Result<Colors, InvalidConfig> {
        let defaults = Colors::default();
        Ok(Colors {
            background: parse_color(value.background, defaults.background)?,
            border: parse_color(value.border, defaults.border)?,
            food: parse_color(value.food, defaults.food)?,
            snake: parse_color(value.snake, defaults.snake)?,
        })
    }
}

fn parse_color(value: Option<String>, default: Color) -> Result<Color, InvalidConfig> {
    match value {
        Some(s) => Color::from_str(&s).map_err(|_| InvalidConfig::Color(s)),
        None => Ok(default),
    }
}

/// A configuration value that deserialized fine but makes no sense
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidConfig {
    #[error("board must be at least 1 cell wide & tall and have at least 2 cells")]
    EmptyBoard,
    #[error("tile-width must be at least 1")]
    TileWidth,
    #[error("tick-rate must be at least 1")]
    TickRate,
    #[error("invalid color: {0:?}")]
    Color(String),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
