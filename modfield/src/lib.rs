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

mod error;
mod modulus;
mod primality;

pub use crate::{
    error::{Error, Result},
    modulus::{Legendre, PrimeModulus},
    primality::is_probable_prime,
};
pub use num_bigint::{self, BigInt, BigUint};
pub use num_traits;
