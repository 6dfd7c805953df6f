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

//! decoder for the OpenSky `/states` response format.
//!
//! The server does not report state vectors as JSON objects but as positional arrays of 17
//! loosely typed values in which any field past the first can be null. Decoding is asymmetric:
//! required fields and the validated-optional fields (time_position, sensors, squawk) fail hard
//! on a type mismatch whereas the kinematic optionals (position, altitudes, velocity, heading,
//! vertical rate) silently turn into None - the feed legitimately omits those and a producer
//! side placeholder must not reject the whole record

use serde::{Deserialize,Serialize,Serializer};
use serde_json::Value;

use crate::datetime::UnixTime;
use crate::errors::{shape_error, type_mismatch, OdinOpenskyError, Result};

/// number of values in a positional state vector record
pub const STATE_FIELDS: usize = 17;

/* #region position source ***************************************************************************/

/// origin of a state vector position.
///
/// The server reports this as an integer code. Codes outside the documented enumeration are
/// preserved as `Unknown` since the server does not reject them either - use `try_from` where
/// the closed 4-code enumeration is required
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PositionSource {
    AdsB,          // 0
    Asterix,       // 1
    Mlat,          // 2
    Flarm,         // 3
    Unknown(i64),
}

impl PositionSource {
    pub fn from_code (code: i64)->Self {
        match code {
            0 => PositionSource::AdsB,
            1 => PositionSource::Asterix,
            2 => PositionSource::Mlat,
            3 => PositionSource::Flarm,
            other => PositionSource::Unknown(other)
        }
    }

    pub fn code (&self)->i64 {
        match self {
            PositionSource::AdsB => 0,
            PositionSource::Asterix => 1,
            PositionSource::Mlat => 2,
            PositionSource::Flarm => 3,
            PositionSource::Unknown(code) => *code
        }
    }
}

impl TryFrom<i64> for PositionSource {
    type Error = OdinOpenskyError;

    fn try_from (code: i64)->Result<Self> {
        match PositionSource::from_code(code) {
            PositionSource::Unknown(code) => Err( type_mismatch!("not a known position source code: {code}")),
            ps => Ok(ps)
        }
    }
}

impl Serialize for PositionSource {
    fn serialize<S> (&self, serializer: S)->std::result::Result<S::Ok,S::Error> where S: Serializer {
        serializer.serialize_i64( self.code())
    }
}

/* #endregion position source */

/* #region state vectors *****************************************************************************/

/// transponder reported status of one aircraft at a point in time, decoded from a positional
/// state vector record.
///
/// Optional fields are None if the server sent null (or, for the kinematic optionals, a value
/// of unexpected type)
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct State {
    pub icao24: String,                   // ICAO24 address of the transmitter (lowercase hex)
    pub callsign: Option<String>,         // None if no callsign has been received
    pub origin_country: String,           // inferred from the ICAO24 address
    pub time_position: Option<UnixTime>,  // time of last position report, None if none was received within 15s
    pub last_contact: UnixTime,           // time of last received message from this transponder
    pub longitude: Option<f64>,           // WGS-84 degrees
    pub latitude: Option<f64>,            // WGS-84 degrees
    pub baro_altitude: Option<f64>,       // barometric altitude in meters
    pub on_ground: bool,                  // true if aircraft sends surface position reports
    pub velocity: Option<f64>,            // over ground in m/s
    pub heading: Option<f64>,             // decimal degrees, 0 is north
    pub vertical_rate: Option<f64>,       // m/s, incline positive
    pub sensors: Option<Vec<i64>>,        // serial numbers of receiving sensors, None unless sensor filtering was requested
    pub geo_altitude: Option<f64>,        // geometric altitude in meters
    pub squawk: Option<String>,           // transponder code
    pub spi: bool,                        // special purpose indicator
    pub position_source: PositionSource,
}

/// the undecoded `/states` response envelope: capture time plus positional records.
/// `states` is null (not an empty list) when no aircraft matched the query
#[derive(Deserialize,Debug)]
pub struct RawStatesResponse {
    pub time: i64,
    #[serde(default)]
    pub states: Option<Vec<Vec<Value>>>,
}

/// the decoded `/states` response
#[derive(Serialize,Debug,PartialEq)]
pub struct StatesResponse {
    pub time: UnixTime,
    pub states: Vec<State>,
}

/* #endregion state vectors */

/* #region coercions *********************************************************************************/

/// convert a generic JSON value into an i64, truncating towards zero. This accepts any numeric
/// literal since that is what the wire decoder produces for both integer and fractional numbers.
/// Every other value shape is a TypeMismatch carrying the offending value
pub fn json_num_to_i64 (v: &Value)->Result<i64> {
    match v.as_f64() {
        Some(f) => Ok( f as i64),
        None => Err( type_mismatch!("couldn't parse {v} as number"))
    }
}

/// convert a generic JSON value into a Vec<i64>, truncating each element towards zero. Anything
/// but an array of numeric literals is a TypeMismatch. Null has to be intercepted by the caller -
/// this is only invoked once a field is known to be present
pub fn json_num_array_to_i64_vec (v: &Value)->Result<Vec<i64>> {
    if let Value::Array(elems) = v {
        let mut a: Vec<i64> = Vec::with_capacity( elems.len());
        for e in elems {
            match e.as_f64() {
                Some(f) => a.push( f as i64),
                None => return Err( type_mismatch!("couldn't parse {v} as number array"))
            }
        }
        Ok(a)
    } else {
        Err( type_mismatch!("couldn't parse {v} as number array"))
    }
}

/* #endregion coercions */

/* #region state vector parsing **********************************************************************/

/// positional record layout as documented on https://openskynetwork.github.io/opensky-api/rest.html
///
/// fields:
///   0: icao24 (string, required)
///   1: callsign (string or null)
///   2: origin_country (string, required)
///   3: time_position (int or null - but a present value of wrong type is an error)
///   4: last_contact (int, required)
///   5: longitude (float or null)
///   6: latitude (float or null)
///   7: baro_altitude (float or null)
///   8: on_ground (bool, required)
///   9: velocity (float or null)
///  10: true_track / heading (float or null)
///  11: vertical_rate (float or null)
///  12: sensors (int array or null - present value of wrong shape is an error)
///  13: geo_altitude (float or null)
///  14: squawk (string or null - present value of wrong type is an error)
///  15: spi (bool, required)
///  16: position_source (int, required)
///
/// the index parameter is the position of this record within the response, used for error attribution.
/// There are no partial results - any hard error rejects the whole record
pub fn parse_state (fields: &[Value], index: usize)->Result<State> {
    if fields.len() < STATE_FIELDS {
        return Err( shape_error!("invalid state vector at position {}: got {} values, expected {}", index, fields.len(), STATE_FIELDS));
    }

    let icao24 = match &fields[0] {
        Value::String(s) => s.clone(),
        v => return Err( type_mismatch!("invalid icao24 value at position {index}: {v}"))
    };

    let callsign = match &fields[1] {
        Value::Null => None,
        Value::String(s) => Some( s.clone()),
        v => return Err( type_mismatch!("invalid callsign value at position {index}: {v}"))
    };

    let origin_country = match &fields[2] {
        Value::String(s) => s.clone(),
        v => return Err( type_mismatch!("invalid origin_country value at position {index}: {v}"))
    };

    let time_position = match &fields[3] {
        Value::Null => None,
        v => {
            let secs = json_num_to_i64(v).map_err( |e| type_mismatch!("invalid time_position value at position {index}: {e}"))?;
            Some( UnixTime::from_secs( secs))
        }
    };

    let last_contact = UnixTime::from_secs(
        json_num_to_i64( &fields[4]).map_err( |e| type_mismatch!("invalid last_contact value at position {index}: {e}"))?
    );

    // the kinematic optionals are permissive - a non-float value just means "no data"
    let longitude = fields[5].as_f64();
    let latitude = fields[6].as_f64();
    let baro_altitude = fields[7].as_f64();

    let on_ground = match &fields[8] {
        Value::Bool(b) => *b,
        v => return Err( type_mismatch!("invalid on_ground value at position {index}: {v}"))
    };

    let velocity = fields[9].as_f64();
    let heading = fields[10].as_f64();
    let vertical_rate = fields[11].as_f64();

    let sensors = match &fields[12] {
        Value::Null => None,
        v => Some( json_num_array_to_i64_vec(v).map_err( |e| type_mismatch!("invalid sensors value at position {index}: {e}"))?)
    };

    let geo_altitude = fields[13].as_f64();

    let squawk = match &fields[14] {
        Value::Null => None,
        Value::String(s) => Some( s.clone()),
        v => return Err( type_mismatch!("invalid squawk value at position {index}: {v}"))
    };

    let spi = match &fields[15] {
        Value::Bool(b) => *b,
        v => return Err( type_mismatch!("invalid spi value at position {index}: {v}"))
    };

    let position_source = PositionSource::from_code(
        json_num_to_i64( &fields[16]).map_err( |e| type_mismatch!("invalid position_source value at position {index}: {e}"))?
    );

    Ok( State {
        icao24,
        callsign,
        origin_country,
        time_position,
        last_contact,
        longitude,
        latitude,
        baro_altitude,
        on_ground,
        velocity,
        heading,
        vertical_rate,
        sensors,
        geo_altitude,
        squawk,
        spi,
        position_source,
    })
}

/// decode a whole `/states` envelope. Records are decoded in response order and the first failure
/// aborts the batch - the error refers to the offending record index and no partial state list is
/// returned. An empty or null record list is not an error
pub fn parse_states_response (raw: RawStatesResponse)->Result<StatesResponse> {
    let time = UnixTime::from_secs( raw.time);

    let mut states: Vec<State> = Vec::new();
    if let Some(raw_states) = &raw.states {
        states.reserve( raw_states.len());
        for (index,fields) in raw_states.iter().enumerate() {
            states.push( parse_state( fields, index)?);
        }
    }

    Ok( StatesResponse { time, states })
}

/* #endregion state vector parsing */
