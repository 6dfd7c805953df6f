/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use lazy_static::lazy_static;
use std::{fmt::Debug, fs::File, io::Write, path::PathBuf};
use anyhow::{anyhow,Result};
use structopt::StructOpt;
use strum::EnumString;
use chrono::{Duration,Utc};
use reqwest::Client;
use serde::Serialize;

use odin_opensky::{get_flights, get_states, load_config, BoundingBox, OpenSkyConfig};

#[derive(Debug,EnumString)]
#[strum(serialize_all="snake_case")]
enum OutputFormat { Rust, Ron, Json }

#[derive(StructOpt)]
#[structopt(about = "OpenSky Network data retriever tool")]
struct CliOpts {
    /// run verbose
    #[structopt(short,long)]
    verbose: bool,

    /// produce formatted output
    #[structopt(short,long)]
    pretty: bool,

    /// output format (rust,ron,json)
    #[structopt(short,long,default_value="rust")]
    format: OutputFormat,

    /// optional pathname of an OpenSkyConfig in RON format (anonymous access otherwise)
    #[structopt(short,long)]
    config: Option<PathBuf>,

    /// restrict query to given comma separated ICAO24 addresses
    #[structopt(short,long,use_delimiter=true)]
    icao24: Vec<String>,

    /// restrict query to bounding box given as lamin,lomin,lamax,lomax [deg]
    #[structopt(short,long,use_delimiter=true)]
    bbox: Vec<f64>,

    /// retrieve flight records of the last N hours instead of current state vectors
    #[structopt(long)]
    flights: Option<i64>,

    /// optional path where to store output
    #[structopt(short,long)]
    output: Option<PathBuf>,
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
}

#[tokio::main]
async fn main()->Result<()> {
    let config: OpenSkyConfig = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => OpenSkyConfig::default()
    };
    let client = Client::new();

    if let Some(hours) = ARGS.flights {
        let end = Utc::now();
        let begin = end - Duration::hours(hours);
        if ARGS.verbose { eprintln!("retrieving flights between {begin} and {end}") }

        let flights = get_flights( &client, &config, begin, end).await?;
        if ARGS.verbose { eprintln!("retrieved {} flight records", flights.len()) }
        produce_output( &flights)

    } else {
        let bbox = get_bbox( &ARGS.bbox)?;
        let response = get_states( &client, &config, None, &ARGS.icao24, bbox.as_ref()).await?;
        if ARGS.verbose { eprintln!("retrieved {} state vectors captured at {}", response.states.len(), response.time) }
        produce_output( &response)
    }
}

fn get_bbox (vs: &[f64])->Result<Option<BoundingBox>> {
    match vs.len() {
        0 => Ok(None),
        4 => Ok( Some( BoundingBox {
            min_latitude: vs[0], min_longitude: vs[1], max_latitude: vs[2], max_longitude: vs[3]
        })),
        n => Err( anyhow!("bounding box requires 4 values (lamin,lomin,lamax,lomax), got {n}"))
    }
}

fn produce_output<T> (data: &T)->Result<()> where T: Serialize + Debug {
    let out = match ARGS.format {
        OutputFormat::Json => {
            if ARGS.pretty { serde_json::to_string_pretty( data)? } else { serde_json::to_string( data)? }
        }
        OutputFormat::Ron => {
            if ARGS.pretty {
                ron::ser::to_string_pretty( data, ron::ser::PrettyConfig::default())?
            } else {
                ron::to_string( data)?
            }
        }
        OutputFormat::Rust => {
            if ARGS.pretty { format!("{data:#?}") } else { format!("{data:?}") }
        }
    };

    if let Some(path) = &ARGS.output {
        let mut file = File::create( path)?;
        file.write_all( out.as_bytes())?;
    } else {
        println!("{out}");
    }
    Ok(())
}
