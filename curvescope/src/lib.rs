#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod domain;
mod error;
mod named;
mod oracle;
mod plot;
mod point;
mod sample;

pub use crate::{
    domain::CurveDomain,
    error::{Coordinate, DomainFault, Error, Result},
    named::NamedCurve,
    oracle::CurveOracle,
    plot::{PlotPoint, PlotWindow},
    point::CurvePoint,
    sample::{PointSample, Points, SampleRange},
};
pub use modfield::{self, BigInt, BigUint};
