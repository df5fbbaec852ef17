//! Typed payload models for Ecwid resources.
//!
//! Only the order write payload is modelled. Responses are returned as
//! [`HttpResponse`](crate::HttpResponse) and can be decoded into any
//! caller-defined type with [`HttpResponse::json`](crate::HttpResponse::json).
//!
//! Money and quantity fields are strings so that amounts keep the exact
//! decimal text the caller supplied. Order writes turn them into JSON numbers
//! before sending (see [`crate::normalize`]).

mod order;

pub use order::{Order, OrderItem, ShippingOption};
