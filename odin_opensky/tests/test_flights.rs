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

use odin_opensky::{Flight, UnixTime};

//--- test data (server response format of /flights/aircraft)

const FLIGHTS: &'static str = r#"[
    {"icao24":"a835af","firstSeen":1517227317,"estDepartureAirport":null,"lastSeen":1517230676,"estArrivalAirport":"KJAC","callsign":"N963DA  ","estDepartureAirportHorizDistance":null,"estDepartureAirportVertDistance":null,"estArrivalAirportHorizDistance":272,"estArrivalAirportVertDistance":175,"departureAirportCandidatesCount":0,"arrivalAirportCandidatesCount":3},
    {"icao24":"a835af","firstSeen":1517220123,"estDepartureAirport":"KSLC","lastSeen":1517226719,"estArrivalAirport":null,"callsign":null,"estDepartureAirportHorizDistance":1568,"estDepartureAirportVertDistance":53,"estArrivalAirportHorizDistance":null,"estArrivalAirportVertDistance":null,"departureAirportCandidatesCount":1,"arrivalAirportCandidatesCount":0}
]"#;

#[test]
fn test_deserialize_flights () {
    let flights: Vec<Flight> = serde_json::from_str( FLIGHTS).unwrap();
    assert_eq!( flights.len(), 2);

    let f = &flights[0];
    assert_eq!( f.icao24, "a835af");
    assert_eq!( f.first_seen, UnixTime::from_secs(1517227317));
    assert_eq!( f.est_departure_airport, None);
    assert_eq!( f.last_seen, UnixTime::from_secs(1517230676));
    assert_eq!( f.est_arrival_airport, Some( "KJAC".to_string()));
    assert_eq!( f.callsign, Some( "N963DA  ".to_string()));
    assert_eq!( f.est_departure_airport_horiz_distance, None);
    assert_eq!( f.est_arrival_airport_horiz_distance, Some(272));
    assert_eq!( f.est_arrival_airport_vert_distance, Some(175));
    assert_eq!( f.departure_airport_candidates_count, 0);
    assert_eq!( f.arrival_airport_candidates_count, 3);

    let f = &flights[1];
    assert_eq!( f.est_departure_airport, Some( "KSLC".to_string()));
    assert_eq!( f.est_arrival_airport, None);
    assert_eq!( f.callsign, None);
    assert_eq!( f.est_departure_airport_horiz_distance, Some(1568));
}

#[test]
fn test_serialize_flight_wire_names () {
    let flights: Vec<Flight> = serde_json::from_str( FLIGHTS).unwrap();
    let json = serde_json::to_string( &flights[0]).unwrap();

    // field names have to stay in server wire format
    assert!( json.contains( r#""estArrivalAirport":"KJAC""#));
    assert!( json.contains( r#""firstSeen":1517227317"#));
}
