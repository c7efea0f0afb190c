//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory size, predictor history length).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Enums:** Processor variants and branch predictor types.
//!
//! Configuration is supplied as JSON (`Config::from_json`), built for a processor variant
//! (`Config::for_processor`), or taken from `Config::default()`. Pipeline width and
//! predictor follow from the processor unless the configuration overrides them.

use std::fmt;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Main memory size in 32-bit words (256 KiB).
    pub const MEMORY_WORDS: usize = crate::common::constants::DEFAULT_MEMORY_WORDS;

    /// Global history length of the gshare predictor.
    ///
    /// The branch history table has `2^HISTORY_BITS` counters.
    pub const HISTORY_BITS: usize = 8;

    /// Longest supported global history (64 Ki counters).
    pub const MAX_HISTORY_BITS: usize = crate::core::units::bru::gshare::MAX_HISTORY_BITS;

    /// Unknown instructions fault unless explicitly made permissive.
    pub const STRICT_DECODE: bool = true;
}

/// Processor variant to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Processor {
    /// One instruction per cycle, no pipelining.
    SingleCycle,
    /// Five-stage pipeline with static not-taken prediction.
    #[default]
    Pipelined,
    /// Five-stage pipeline with gshare prediction.
    Speculative,
    /// Dual-issue five-stage pipeline with gshare prediction.
    #[serde(alias = "io-superscalar")]
    Superscalar,
    /// Out-of-order core (not implemented).
    OutOfOrder,
    /// Out-of-order dual-issue core (not implemented).
    OooSuperscalar,
}

impl Processor {
    /// Every variant, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::SingleCycle,
        Self::Pipelined,
        Self::Speculative,
        Self::Superscalar,
        Self::OutOfOrder,
        Self::OooSuperscalar,
    ];

    /// The command-line name of the variant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SingleCycle => "single-cycle",
            Self::Pipelined => "pipelined",
            Self::Speculative => "speculative",
            Self::Superscalar => "superscalar",
            Self::OutOfOrder => "out-of-order",
            Self::OooSuperscalar => "ooo-superscalar",
        }
    }

    /// Returns `true` if the simulator has an engine for this variant.
    pub const fn is_implemented(self) -> bool {
        !matches!(self, Self::OutOfOrder | Self::OooSuperscalar)
    }

    /// Returns `true` for the variants run by the pipelined engine.
    pub const fn is_pipelined(self) -> bool {
        matches!(self, Self::Pipelined | Self::Speculative | Self::Superscalar)
    }

    /// Lanes per pipeline stage for this variant.
    pub const fn default_width(self) -> usize {
        match self {
            Self::Superscalar | Self::OooSuperscalar => 2,
            _ => 1,
        }
    }

    /// Branch predictor used by this variant.
    pub const fn default_predictor(self) -> BranchPredictor {
        match self {
            Self::SingleCycle | Self::Pipelined => BranchPredictor::Static,
            _ => BranchPredictor::GShare,
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Processor {
    type Err = SimError;

    /// Accepts the names from [`Processor::name`], plus `io-superscalar` for
    /// the in-order dual-issue core.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "io-superscalar" {
            return Ok(Self::Superscalar);
        }
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SimError::InvalidConfig(format!("unknown processor '{s}'")))
    }
}

/// Branch predictor algorithm types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BranchPredictor {
    /// Static Predictor
    ///
    /// Simple predictor that always predicts branches as not-taken.
    #[default]
    Static,

    /// GShare Predictor
    ///
    /// Global history XOR PC indexed two-bit counters.
    #[serde(alias = "Gshare", alias = "gshare")]
    GShare,
}

/// Root configuration structure containing all simulator settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Creates the default configuration for a processor variant.
    pub fn for_processor(processor: Processor) -> Self {
        let mut config = Self::default();
        config.general.processor = processor;
        config
    }

    /// Parses a JSON configuration and validates it.
    ///
    /// # Arguments
    ///
    /// * `json` - Configuration text; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Lanes per stage: the explicit override, or the processor's width.
    pub fn width(&self) -> usize {
        self.pipeline
            .width
            .unwrap_or_else(|| self.general.processor.default_width())
    }

    /// Predictor type: the explicit override, or the processor's predictor.
    pub fn branch_predictor(&self) -> BranchPredictor {
        self.pipeline
            .branch_predictor
            .unwrap_or_else(|| self.general.processor.default_predictor())
    }

    /// Checks that all values are in range.
    ///
    /// # Returns
    ///
    /// `SimError::InvalidConfig` describing the first offending value.
    pub fn validate(&self) -> Result<(), SimError> {
        let width = self.width();
        if !(1..=2).contains(&width) {
            return Err(SimError::InvalidConfig(format!(
                "pipeline width must be 1 or 2, got {width}"
            )));
        }
        let bits = self.pipeline.history_bits;
        if !(1..=defaults::MAX_HISTORY_BITS).contains(&bits) {
            return Err(SimError::InvalidConfig(format!(
                "history_bits must be in 1..={}, got {bits}",
                defaults::MAX_HISTORY_BITS
            )));
        }
        if self.memory.words == 0 {
            return Err(SimError::InvalidConfig("memory size must be nonzero".into()));
        }
        Ok(())
    }
}

/// General simulation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Processor variant to simulate.
    #[serde(default)]
    pub processor: Processor,
    /// Print the PC and registers after every cycle.
    #[serde(default)]
    pub trace_cycles: bool,
    /// Abort with `SimError::CycleLimit` after this many cycles.
    #[serde(default)]
    pub max_cycles: Option<u64>,
    /// Fault on unsupported instructions instead of executing them as no-ops.
    #[serde(default = "GeneralConfig::default_strict_decode")]
    pub strict_decode: bool,
}

impl GeneralConfig {
    /// Returns the default decode strictness.
    fn default_strict_decode() -> bool {
        defaults::STRICT_DECODE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            processor: Processor::default(),
            trace_cycles: false,
            max_cycles: None,
            strict_decode: defaults::STRICT_DECODE,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Memory size in 32-bit words.
    #[serde(default = "MemoryConfig::default_words")]
    pub words: usize,
}

impl MemoryConfig {
    /// Returns the default memory size in words.
    fn default_words() -> usize {
        defaults::MEMORY_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            words: defaults::MEMORY_WORDS,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Width override (lanes per stage); `None` follows the processor.
    #[serde(default)]
    pub width: Option<usize>,

    /// Predictor override; `None` follows the processor.
    #[serde(default)]
    pub branch_predictor: Option<BranchPredictor>,

    /// Global history length of the gshare predictor.
    #[serde(default = "PipelineConfig::default_history_bits")]
    pub history_bits: usize,
}

impl PipelineConfig {
    /// Returns the default global history length.
    fn default_history_bits() -> usize {
        defaults::HISTORY_BITS
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            width: None,
            branch_predictor: None,
            history_bits: defaults::HISTORY_BITS,
        }
    }
}
