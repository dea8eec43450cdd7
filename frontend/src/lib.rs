#![deny(clippy::all)]
#![allow(non_snake_case)]

mod client;
mod components;
mod route;

pub use route::Route;
