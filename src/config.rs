//! Process-wide settings: the simulation tick rate and draw debugging.
//!
//! Values are plain data handed to constructors. Nothing here is read
//! implicitly by drawables.

const TICK_RATE_ENV: &str = "TILESPRITE_TICK_RATE";
const DEBUG_DRAW_ENV: &str = "TILESPRITE_DEBUG_DRAW";

/// Simulation ticks per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRate(f32);

impl TickRate {
    pub const DEFAULT: TickRate = TickRate(60.0);

    /// # Errors
    /// Returns an error unless `per_second` is finite and positive.
    pub fn new(per_second: f32) -> anyhow::Result<Self> {
        if !per_second.is_finite() || per_second <= 0.0 {
            anyhow::bail!("invalid tick rate: {}", per_second);
        }
        Ok(Self(per_second))
    }

    pub fn per_second(self) -> f32 {
        self.0
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub tick_rate: TickRate,
    /// Log every recorded draw command at debug level.
    pub debug_draw: bool,
}

impl Config {
    /// Reads `TILESPRITE_TICK_RATE` and `TILESPRITE_DEBUG_DRAW`, keeping the
    /// default for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(TICK_RATE_ENV) {
            match parse_tick_rate(&raw) {
                Some(rate) => config.tick_rate = rate,
                None => log::warn!("ignoring {}={:?}: not a positive number", TICK_RATE_ENV, raw),
            }
        }
        if let Ok(raw) = std::env::var(DEBUG_DRAW_ENV) {
            config.debug_draw = parse_flag(&raw);
        }
        config
    }
}

pub(crate) fn parse_tick_rate(raw: &str) -> Option<TickRate> {
    let v = raw.trim().parse::<f32>().ok()?;
    TickRate::new(v).ok()
}

pub(crate) fn parse_flag(raw: &str) -> bool {
    let v = raw.trim().to_ascii_lowercase();
    !matches!(v.as_str(), "" | "0" | "false" | "off" | "no")
}
