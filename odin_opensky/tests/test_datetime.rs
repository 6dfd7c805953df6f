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

use serde::Deserialize;
use serde_json::{json,Value};
use odin_opensky::{OdinOpenskyError, UnixTime};

#[derive(Deserialize,Debug)]
struct Wrapper {
    time: UnixTime
}

#[test]
fn test_deserialize () {
    let w: Wrapper = serde_json::from_str( r#"{"time":1624891429}"#).unwrap();
    assert_eq!( w.time, UnixTime::from_secs(1624891429));

    let w: Wrapper = serde_json::from_str( r#"{"time":-42}"#).unwrap();
    assert_eq!( w.time, UnixTime::from_secs(-42));

    // null decodes to the epoch-zero sentinel
    let w: Wrapper = serde_json::from_str( r#"{"time":null}"#).unwrap();
    assert_eq!( w.time, UnixTime::from_secs(0));

    assert!( serde_json::from_str::<Wrapper>( r#"{"time":"string"}"#).is_err());
    assert!( serde_json::from_str::<Wrapper>( r#"{"time":{}}"#).is_err());
    assert!( serde_json::from_str::<Wrapper>( r#"{"time":[1]}"#).is_err());
}

#[test]
fn test_serialize () {
    let json = serde_json::to_string( &UnixTime::from_secs(1624891429)).unwrap();
    assert_eq!( json, "1624891429");
}

#[test]
fn test_from_json () {
    assert_eq!( UnixTime::from_json( &json!(1624891429)).unwrap(), UnixTime::from_secs(1624891429));
    assert_eq!( UnixTime::from_json( &Value::Null).unwrap(), UnixTime::from_secs(0));

    assert!( matches!( UnixTime::from_json( &json!("foo")), Err(OdinOpenskyError::FormatError(_))));
    assert!( matches!( UnixTime::from_json( &json!(1.5)), Err(OdinOpenskyError::FormatError(_))));
    assert!( matches!( UnixTime::from_json( &json!({})), Err(OdinOpenskyError::FormatError(_))));
    assert!( matches!( UnixTime::from_json( &json!([1])), Err(OdinOpenskyError::FormatError(_))));
}

#[test]
fn test_ordering () {
    assert!( UnixTime::from_secs(100) < UnixTime::from_secs(200));
    assert_eq!( UnixTime::from_secs(100).secs(), 100);

    let date: chrono::DateTime<chrono::Utc> = UnixTime::from_secs(1624891429).into();
    assert_eq!( date.timestamp(), 1624891429);
    assert_eq!( UnixTime::from( date), UnixTime::from_secs(1624891429));
}
