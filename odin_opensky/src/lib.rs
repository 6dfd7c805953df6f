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

//! client library for the OpenSky Network REST service (https://opensky-network.org/api), which
//! provides live ADS-B/MLAT aircraft state vectors and flight records.
//!
//! All queries are plain authenticated HTTP GETs over a caller provided reqwest::Client. The
//! interesting part is the `states` module, which decodes the positionally encoded, loosely
//! typed state vector arrays of the server into typed `State` records

use std::path::Path;
use chrono::{DateTime,Utc};
use reqwest::{Client,Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub mod datetime;
pub use datetime::UnixTime;

pub mod states;
pub use states::{
    json_num_to_i64, json_num_array_to_i64_vec, parse_state, parse_states_response,
    PositionSource, RawStatesResponse, State, StatesResponse, STATE_FIELDS
};

pub mod errors;
pub use errors::{OdinOpenskyError, Result};

pub const DEFAULT_BASE_URI: &str = "https://opensky-network.org/api";

/* #region config ************************************************************************************/

/// note that credentials are optional - the server answers anonymous queries, just with lower
/// resolution and stricter rate limits
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct OpenSkyConfig {
    pub base_uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for OpenSkyConfig {
    fn default ()->Self {
        OpenSkyConfig { base_uri: DEFAULT_BASE_URI.to_string(), username: None, password: None }
    }
}

pub fn load_config<C> (path: impl AsRef<Path>)->Result<C> where C: for<'a> Deserialize<'a> {
    let data = std::fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())?)
}

/* #endregion config */

/* #region flights ***********************************************************************************/

/// a single flight of an aircraft, as reported by the `/flights` endpoints. Unlike state vectors
/// these are regular JSON objects and map directly onto the record
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct Flight {
    pub icao24: String,                                       // ICAO24 address of the transmitter (lowercase hex)
    pub first_seen: UnixTime,                                 // estimated departure time
    #[serde(default)]
    pub est_departure_airport: Option<String>,                // ICAO code, None if the airport could not be identified
    pub last_seen: UnixTime,                                  // estimated arrival time
    #[serde(default)]
    pub est_arrival_airport: Option<String>,                  // ICAO code, None if the airport could not be identified
    #[serde(default)]
    pub callsign: Option<String>,                             // None if no callsign has been received
    #[serde(default)]
    pub est_departure_airport_horiz_distance: Option<i64>,    // meters from last airborne position to departure airport
    #[serde(default)]
    pub est_departure_airport_vert_distance: Option<i64>,
    #[serde(default)]
    pub est_arrival_airport_horiz_distance: Option<i64>,
    #[serde(default)]
    pub est_arrival_airport_vert_distance: Option<i64>,
    #[serde(default)]
    pub departure_airport_candidates_count: i64,              // other possible departure airports in short distance
    #[serde(default)]
    pub arrival_airport_candidates_count: i64,
}

/* #endregion flights */

/* #region queries ***********************************************************************************/

/// bounding box of WGS-84 coordinates for area queries
#[derive(Deserialize,Serialize,Debug,Clone,Copy)]
pub struct BoundingBox {
    pub min_latitude: f64,   // lamin [deg]
    pub min_longitude: f64,  // lomin [deg]
    pub max_latitude: f64,   // lamax [deg]
    pub max_longitude: f64,  // lomax [deg]
}

// Response::json() would swallow the serde error detail we want to surface
async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        return Err( OdinOpenskyError::HttpError( format!("{}: {}", status.as_u16(), String::from_utf8_lossy( &bytes))));
    }
    serde_json::from_slice( &bytes).map_err( |e| OdinOpenskyError::JsonError( e.to_string()))
}

async fn get_json<T> (client: &Client, config: &OpenSkyConfig, path: &str, query: &[(&str,String)])->Result<T> where T: DeserializeOwned {
    let uri = format!("{}{}", config.base_uri, path);
    let mut request = client.get(uri).query(query);
    if let (Some(username),Some(password)) = (&config.username, &config.password) {
        request = request.basic_auth( username, Some(password));
    }
    from_json( request.send().await?).await
}

/// retrieve state vectors of all aircraft, optionally at the given time (server "now" otherwise),
/// filtered to the given ICAO24 addresses and/or the given bounding box
pub async fn get_states (client: &Client, config: &OpenSkyConfig,
                         at: Option<DateTime<Utc>>, icao24: &[String], bbox: Option<&BoundingBox>)->Result<StatesResponse> {
    let mut query: Vec<(&str,String)> = Vec::new();
    if let Some(time) = at {
        query.push( ("time", time.timestamp().to_string()));
    }
    if !icao24.is_empty() {
        query.push( ("icao24", icao24.join(",")));
    }
    if let Some(bbox) = bbox {
        query.push( ("lamin", bbox.min_latitude.to_string()));
        query.push( ("lomin", bbox.min_longitude.to_string()));
        query.push( ("lamax", bbox.max_latitude.to_string()));
        query.push( ("lomax", bbox.max_longitude.to_string()));
    }

    let raw: RawStatesResponse = get_json( client, config, "/states/all", &query).await?;
    parse_states_response( raw)
}

/// retrieve state vectors seen by the user's own receivers (no rate limits), optionally restricted
/// to a subset of receiver serial numbers. Requires configured credentials
pub async fn get_own_states (client: &Client, config: &OpenSkyConfig,
                             at: Option<DateTime<Utc>>, icao24: &[String], serials: &[i64])->Result<StatesResponse> {
    let mut query: Vec<(&str,String)> = Vec::new();
    if let Some(time) = at {
        query.push( ("time", time.timestamp().to_string()));
    }
    if !icao24.is_empty() {
        query.push( ("icao24", icao24.join(",")));
    }
    if !serials.is_empty() {
        let serials: Vec<String> = serials.iter().map( |s| s.to_string()).collect();
        query.push( ("serials", serials.join(",")));
    }

    let raw: RawStatesResponse = get_json( client, config, "/states/own", &query).await?;
    parse_states_response( raw)
}

/// retrieve all flights that departed and arrived within the [begin,end] interval.
/// Note the server answers 404 if there were no flights, which is reported as a HttpError
pub async fn get_flights (client: &Client, config: &OpenSkyConfig,
                          begin: DateTime<Utc>, end: DateTime<Utc>)->Result<Vec<Flight>> {
    let query = [
        ("begin", begin.timestamp().to_string()),
        ("end", end.timestamp().to_string()),
    ];
    get_json( client, config, "/flights/all", &query).await
}

/// retrieve flights of a single aircraft within the [begin,end] interval
pub async fn get_flights_by_aircraft (client: &Client, config: &OpenSkyConfig,
                                      icao24: &str, begin: DateTime<Utc>, end: DateTime<Utc>)->Result<Vec<Flight>> {
    let query = [
        ("icao24", icao24.to_string()),
        ("begin", begin.timestamp().to_string()),
        ("end", end.timestamp().to_string()),
    ];
    get_json( client, config, "/flights/aircraft", &query).await
}

/* #endregion queries */
