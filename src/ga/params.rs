//! GA parameters and the `name value` parameter file
//!
//! ```text
//! # population and run length
//! popsize   40
//! ngen      500
//! pmut      0.02
//! pcross    0.8
//! elitism   1
//! seed      12345
//! ```
//! Long names (`population_size`, `number_of_generations`,
//! `mutation_probability`, `crossover_probability`) and the camel-case forms
//! (`populationSize`, `nGenerations`, `pMutation`, `pCrossover`) are accepted
//! as well.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub const DEFAULT_PARAM_FILE: &str = "gaparam.in";

pub const DEFAULT_POPULATION_SIZE: usize = 30;
pub const DEFAULT_GENERATIONS: usize = 250;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.01;
pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct GaParams {
    pub population_size: usize,
    pub generations: usize,
    /// Per-gene mutation rate handed to the mutator.
    pub p_mutation: f64,
    pub p_crossover: f64,
    /// Carry the best individual into the next generation.
    pub elitism: bool,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_GENERATIONS,
            p_mutation: DEFAULT_MUTATION_PROBABILITY,
            p_crossover: DEFAULT_CROSSOVER_PROBABILITY,
            elitism: true,
            seed: None,
        }
    }
}

fn invalid(line: usize, name: &str, value: &str) -> Error {
    Error::InvalidParameter(format!(
        "line {}: invalid value '{}' for {}",
        line, value, name
    ))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "gatrue" => Some(true),
        "0" | "false" | "no" | "gafalse" => Some(false),
        _ => None,
    }
}

impl GaParams {
    /// Applies one setting. Returns `Ok(false)` for an unknown name.
    pub fn set(&mut self, name: &str, value: &str) -> Result<bool> {
        self.set_at(0, name, value)
    }

    fn set_at(&mut self, line: usize, name: &str, value: &str) -> Result<bool> {
        match name {
            "population_size" | "popsize" | "populationSize" => {
                self.population_size = value.parse().map_err(|_| invalid(line, name, value))?;
            }
            "number_of_generations" | "ngen" | "nGenerations" => {
                self.generations = value.parse().map_err(|_| invalid(line, name, value))?;
            }
            "mutation_probability" | "pmut" | "pMutation" => {
                self.p_mutation = value.parse().map_err(|_| invalid(line, name, value))?;
            }
            "crossover_probability" | "pcross" | "pCrossover" => {
                self.p_crossover = value.parse().map_err(|_| invalid(line, name, value))?;
            }
            "elitism" | "el" => {
                self.elitism = parse_bool(value).ok_or_else(|| invalid(line, name, value))?;
            }
            "seed" | "random_seed" => {
                self.seed = Some(value.parse().map_err(|_| invalid(line, name, value))?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Parses a parameter file on top of the defaults.
    ///
    /// Returns the parameters and the names that were not recognized.
    pub fn from_text(text: &str) -> Result<(Self, Vec<String>)> {
        let mut params = Self::default();
        let mut unknown = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let name = fields.next().unwrap_or("");
            let value = fields.next().ok_or_else(|| {
                Error::InvalidParameter(format!("line {}: missing value for {}", idx + 1, name))
            })?;
            if !params.set_at(idx + 1, name, value)? {
                unknown.push(name.to_string());
            }
        }

        params.validate()?;
        Ok((params, unknown))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<(Self, Vec<String>)> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidParameter(
                "population size must be at least 1".to_string(),
            ));
        }
        for (name, p) in [
            ("mutation probability", self.p_mutation),
            ("crossover probability", self.p_crossover),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidParameter(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        Ok(())
    }
}
