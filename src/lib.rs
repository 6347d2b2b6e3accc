#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(clippy::pedantic)]
#![allow(
    clippy::float_cmp,
    clippy::many_single_char_names,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::similar_names,
    clippy::wildcard_imports
)]

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
    sync::mpsc,
};

use anyhow::{anyhow, bail, ensure, Context, Result};
use nalgebra as na;
use serde::{Deserialize, Serialize};

#[macro_use]
extern crate log;

pub mod cfg;
pub mod containment;
pub mod coordinates;
pub mod editor;
pub mod math;
pub mod plane;
pub mod rebalance;
pub mod triangle;

pub use containment::*;
pub use coordinates::*;
pub use math::*;
pub use plane::*;
pub use rebalance::*;
pub use triangle::*;
