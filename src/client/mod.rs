//! Front-end for the clinic API: a single controller that owns the page,
//! issues one request per user action and re-renders from the answer.

pub mod api;
pub mod controller;
pub mod document;
pub mod views;

pub use self::{
    api::{ClinicApi, HttpApi},
    controller::ViewController,
    document::{Document, Section},
};
