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

use std::fmt;
use chrono::{DateTime,Utc};
use serde::{Deserialize,Deserializer,Serialize,Serializer};
use serde_json::Value;

use crate::errors::{format_error, OdinOpenskyError, Result};

/// point in time in whole seconds since the Unix epoch, which is how the OpenSky server reports
/// all timestamps.
///
/// On the wire this is either an integer literal or the JSON null, which decodes to the epoch-zero
/// sentinel. Note that a decoded null is indistinguishable from unix time zero - callers that need
/// "field absent" semantics have to track presence separately (see `State::time_position`)
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct UnixTime(i64);

impl UnixTime {
    pub fn from_secs (secs: i64)->Self { UnixTime(secs) }

    pub fn secs (&self)->i64 { self.0 }

    /// decode from a generic JSON value: integer literal or null. Anything else (string, float,
    /// object, array) is a FormatError
    pub fn from_json (v: &Value)->Result<UnixTime> {
        match v {
            Value::Null => Ok( UnixTime(0)),
            Value::Number(n) => {
                n.as_i64().map( UnixTime).ok_or_else( || format_error!("literal {n} is not an integer second count"))
            }
            other => Err( format_error!("literal {other} is not an integer second count"))
        }
    }
}

impl fmt::Display for UnixTime {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp( self.0, 0) {
            Some(date) => write!( f, "{date}"),
            None => write!( f, "UnixTime({})", self.0) // outside the chrono range
        }
    }
}

impl From<UnixTime> for DateTime<Utc> {
    fn from (t: UnixTime)->Self {
        DateTime::<Utc>::from_timestamp( t.0, 0).unwrap_or( DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl<Tz> From<DateTime<Tz>> for UnixTime where Tz: chrono::TimeZone {
    fn from (date: DateTime<Tz>)->Self { UnixTime( date.timestamp()) }
}

impl<'de> Deserialize<'de> for UnixTime {
    fn deserialize<D> (deserializer: D)->std::result::Result<Self,D::Error> where D: Deserializer<'de> {
        let secs = Option::<i64>::deserialize( deserializer)?; // null decodes to the epoch-zero sentinel
        Ok( UnixTime( secs.unwrap_or(0)))
    }
}

impl Serialize for UnixTime {
    fn serialize<S> (&self, serializer: S)->std::result::Result<S::Ok,S::Error> where S: Serializer {
        serializer.serialize_i64( self.0)
    }
}
