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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,OdinOpenskyError>;

/// odin_opensky specific error type. The first three variants are the terminal decode errors
/// of the state vector parser - there is no retry or recovery inside this crate, the caller
/// decides whether to skip, log or abort
#[derive(Error,Debug)]
pub enum OdinOpenskyError {

    #[error("invalid state vector shape {0}")]
    ShapeError(String),

    #[error("type mismatch {0}")]
    TypeMismatch(String),

    #[error("malformed timestamp {0}")]
    FormatError(String),

    #[error("http error {0}")]
    HttpError(String),

    #[error("JSON error {0}")]
    JsonError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError(String),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

impl From<reqwest::Error> for OdinOpenskyError {
    fn from (e: reqwest::Error)->Self { OdinOpenskyError::HttpError( e.to_string()) }
}

impl From<ron::error::SpannedError> for OdinOpenskyError {
    fn from (e: ron::error::SpannedError)->Self { OdinOpenskyError::ConfigError( e.to_string()) }
}

macro_rules! shape_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinOpenskyError::ShapeError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use shape_error;

macro_rules! type_mismatch {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinOpenskyError::TypeMismatch( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use type_mismatch;

macro_rules! format_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinOpenskyError::FormatError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use format_error;

pub fn op_failed (msg: impl ToString)->OdinOpenskyError {
    OdinOpenskyError::OpFailedError( msg.to_string())
}
