//! Rank command implementation.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use travelord_core::{RankOptions, RankWeights, rank_points_along_bearing};

use crate::{ARG_END, ARG_INPUT, ARG_START, CliError, ENV_RANK_END, ENV_RANK_INPUT, ENV_RANK_START};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a JSON point set along the travel line between the \
                 start and end coordinates. Every option can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Rank a JSON point set along a travel line"
)]
#[ortho_config(prefix = "TRAVELORD")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of `{lat, lng}` points.
    #[arg(short = 'i', long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Start coordinate as `lat,lng` in decimal degrees.
    #[arg(short = 's', long = ARG_START, value_name = "lat,lng")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// End coordinate as `lat,lng` in decimal degrees.
    #[arg(short = 'e', long = ARG_END, value_name = "lat,lng")]
    #[serde(default)]
    pub(crate) end: Option<String>,
    /// Weight for the normalised distance-from-start signal.
    #[arg(long = "distance-weight", value_name = "value")]
    #[serde(default)]
    pub(crate) distance_weight: Option<f64>,
    /// Weight for the normalised bearing-deviation signal.
    #[arg(long = "bearing-weight", value_name = "value")]
    #[serde(default)]
    pub(crate) bearing_weight: Option<f64>,
    /// Bearing deviation threshold in degrees.
    #[arg(short = 't', long = "threshold", value_name = "degrees")]
    #[serde(default)]
    pub(crate) threshold: Option<f64>,
    /// Write pretty-printed JSON to this file instead of compact JSON on
    /// stdout.
    #[arg(short = 'o', long = "output", value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON point set.
    pub(crate) input: Utf8PathBuf,
    /// Start of the travel line.
    pub(crate) start: Coord<f64>,
    /// End of the travel line.
    pub(crate) end: Coord<f64>,
    /// Weights and threshold forwarded to the ranking pipeline.
    pub(crate) options: RankOptions,
    /// Optional output file for the ranked points.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if self.input.as_std_path().is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field: ARG_INPUT,
                path: self.input.clone(),
            })
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_RANK_INPUT,
        })?;
        let start = args.start.ok_or(CliError::MissingArgument {
            field: ARG_START,
            env: ENV_RANK_START,
        })?;
        let end = args.end.ok_or(CliError::MissingArgument {
            field: ARG_END,
            env: ENV_RANK_END,
        })?;

        let defaults = RankOptions::default();
        let options = RankOptions {
            weights: RankWeights {
                distance: args.distance_weight.unwrap_or(defaults.weights.distance),
                bearing: args.bearing_weight.unwrap_or(defaults.weights.bearing),
            },
            threshold: args.threshold.unwrap_or(defaults.threshold),
        };

        Ok(Self {
            input,
            start: parse_coordinate(ARG_START, &start)?,
            end: parse_coordinate(ARG_END, &end)?,
            options,
            output: args.output,
        })
    }
}

/// Parse a `lat,lng` flag value into a coordinate.
pub(crate) fn parse_coordinate(field: &'static str, raw: &str) -> Result<Coord<f64>, CliError> {
    let invalid = || CliError::InvalidCoordinate {
        field,
        value: raw.to_owned(),
    };
    let (lat, lng) = raw.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    Ok(Coord { x: lng, y: lat })
}

/// Wire format for a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct PointRecord {
    /// Latitude in decimal degrees.
    pub(crate) lat: f64,
    /// Longitude in decimal degrees.
    pub(crate) lng: f64,
}

impl From<PointRecord> for Coord<f64> {
    fn from(record: PointRecord) -> Self {
        Self {
            x: record.lng,
            y: record.lat,
        }
    }
}

impl From<Coord<f64>> for PointRecord {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    rank_with_config(&config, writer)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load, rank, and write the point set described by `config`.
pub(crate) fn rank_with_config(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let records = load_points(&config.input)?;
    let points: Vec<Coord<f64>> = records.iter().copied().map(Coord::from).collect();
    let ranked: Vec<PointRecord> =
        rank_points_along_bearing(config.start, config.end, &points, &config.options)
            .into_iter()
            .map(PointRecord::from)
            .collect();
    write_ranked(writer, config, records.len(), &ranked)
}

/// Loads a JSON array of `{lat, lng}` records from disk.
fn load_points(path: &Utf8Path) -> Result<Vec<PointRecord>, CliError> {
    let file = File::open(path.as_std_path()).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranked(
    writer: &mut dyn Write,
    config: &RankConfig,
    input_len: usize,
    ranked: &[PointRecord],
) -> Result<(), CliError> {
    if let Some(path) = &config.output {
        write_output_file(path, ranked)?;
        writeln!(writer, "data written to {path}").map_err(CliError::WriteOutput)?;
        writeln!(writer, "length was {input_len}, now is {}", ranked.len())
            .map_err(CliError::WriteOutput)?;
    } else {
        let payload = serde_json::to_string(ranked).map_err(CliError::SerialiseOutput)?;
        writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput)?;
        writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn write_output_file(path: &Utf8Path, ranked: &[PointRecord]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseOutput)?;
    let file = File::create(path.as_std_path()).map_err(|source| CliError::WriteOutputFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut file_writer = BufWriter::new(file);
    file_writer
        .write_all(payload.as_bytes())
        .and_then(|()| file_writer.write_all(b"\n"))
        .and_then(|()| file_writer.flush())
        .map_err(|source| CliError::WriteOutputFile {
            path: path.to_path_buf(),
            source,
        })
}
