//! Core library for the rsvp-guests command line application.
//!
//! The library turns the wedding guest workbook into the guest list consumed
//! by the RSVP lookup. Sheet shapes are described in [`rsvp::guests::layout`],
//! cell parsing lives in [`rsvp::guests::extract`], identity merging in
//! [`rsvp::guests::dedup`], phonetic keys and identifiers in
//! [`rsvp::guests::enrich`], and file handling under [`rsvp::guests::io`] and
//! [`rsvp::guests::convert`].

pub mod rsvp;

pub use rsvp::guests::{
    GuestError, Result, convert, dedup, enrich, error, extract, io, layout, model, phonetic,
};
